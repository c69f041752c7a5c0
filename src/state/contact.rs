//! Contact form submission lifecycle.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use crate::net::contact::{ContactPayload, SubmitError};
use crate::util::contact_form::ContactForm;

pub const SENT_MESSAGE: &str = "Thanks for reaching out! I'll get back to you soon.";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Sending,
    Sent,
    Failed(String),
}

impl SubmitStatus {
    /// Text for the status line under the form, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Idle | Self::Sending => None,
            Self::Sent => Some(SENT_MESSAGE),
            Self::Failed(msg) => Some(msg),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactState {
    pub form: ContactForm,
    pub status: SubmitStatus,
}

impl ContactState {
    /// Validate and, when the form passes, move to `Sending` and hand back
    /// the payload to post. A submit while one is in flight is ignored.
    pub fn begin_submit(&mut self) -> Option<ContactPayload> {
        if self.is_sending() {
            return None;
        }
        match self.form.validate() {
            Ok(()) => {
                self.status = SubmitStatus::Sending;
                Some(ContactPayload::from_form(&self.form))
            }
            Err(err) => {
                self.status = SubmitStatus::Failed(err.to_string());
                None
            }
        }
    }

    pub fn finish(&mut self, result: Result<(), SubmitError>) {
        match result {
            Ok(()) => {
                self.form = ContactForm::default();
                self.status = SubmitStatus::Sent;
            }
            Err(err) => self.status = SubmitStatus::Failed(err.to_string()),
        }
    }

    #[must_use]
    pub fn is_sending(&self) -> bool {
        self.status == SubmitStatus::Sending
    }
}
