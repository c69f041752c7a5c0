//! Contact form fields and client-side validation.
//!
//! Rules run in a fixed order and the first failure wins, so the user always
//! sees one message about the earliest problem in the form.

#[cfg(test)]
#[path = "contact_form_test.rs"]
mod contact_form_test;

pub const MIN_MESSAGE_CHARS: usize = 10;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// First failing validation rule. `Display` is the message shown to the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
    #[error("Please enter your name.")]
    MissingName,
    #[error("Please enter your email address.")]
    MissingEmail,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Please enter a subject.")]
    MissingSubject,
    #[error("Please enter a message.")]
    MissingMessage,
    #[error("Message must be at least {} characters.", MIN_MESSAGE_CHARS)]
    MessageTooShort,
}

impl ContactForm {
    /// # Errors
    ///
    /// Returns the first rule the form breaks: name, email presence, email
    /// shape, subject, message presence, message length.
    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.trim().is_empty() {
            return Err(ContactError::MissingName);
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err(ContactError::MissingEmail);
        }
        if !is_valid_email(email) {
            return Err(ContactError::InvalidEmail);
        }
        if self.subject.trim().is_empty() {
            return Err(ContactError::MissingSubject);
        }
        let message = self.message.trim();
        if message.is_empty() {
            return Err(ContactError::MissingMessage);
        }
        if message.chars().count() < MIN_MESSAGE_CHARS {
            return Err(ContactError::MessageTooShort);
        }
        Ok(())
    }

    /// Copy with surrounding whitespace removed from every field.
    #[must_use]
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_owned(),
            email: self.email.trim().to_owned(),
            subject: self.subject.trim().to_owned(),
            message: self.message.trim().to_owned(),
        }
    }
}

/// `local@domain.tld` with no whitespace and a dot inside the domain.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}
