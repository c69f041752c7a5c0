//! Contact form relay submission.
//!
//! The relay is a third-party form service that accepts a JSON body and
//! forwards it by email. `_replyto` and `_subject` are relay directives for
//! the reply address and the notification subject line.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use serde::Serialize;

use crate::util::contact_form::ContactForm;

const RELAY_SUBJECT_PREFIX: &str = "Portfolio contact";

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    #[serde(rename = "_replyto")]
    pub reply_to: String,
    #[serde(rename = "_subject")]
    pub relay_subject: String,
}

impl ContactPayload {
    #[must_use]
    pub fn from_form(form: &ContactForm) -> Self {
        let form = form.trimmed();
        Self {
            reply_to: form.email.clone(),
            relay_subject: format!("{RELAY_SUBJECT_PREFIX}: {}", form.subject),
            name: form.name,
            email: form.email,
            subject: form.subject,
            message: form.message,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("The contact form is not available right now. Please email me directly.")]
    NotConfigured,
    #[error("Could not reach the mail service ({0}). Please try again.")]
    Network(String),
    #[error("The mail service rejected the message (status {0}). Please try again.")]
    Status(u16),
}

/// POST `payload` to the relay at `endpoint`.
///
/// # Errors
///
/// [`SubmitError::NotConfigured`] without an endpoint, otherwise a transport
/// failure or a non-success status.
pub async fn submit(endpoint: Option<&str>, payload: &ContactPayload) -> Result<(), SubmitError> {
    let Some(endpoint) = endpoint else {
        return Err(SubmitError::NotConfigured);
    };
    #[cfg(feature = "csr")]
    {
        let request = gloo_net::http::Request::post(endpoint)
            .header("Accept", "application/json")
            .json(payload)
            .map_err(|e| SubmitError::Network(e.to_string()))?;
        let resp = request.send().await.map_err(|e| SubmitError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(SubmitError::Status(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (endpoint, payload);
        Err(SubmitError::Network("not available outside the browser".to_owned()))
    }
}
