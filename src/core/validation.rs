//! Validation for the early-access sign-up email
//!
//! The check is deliberately shallow: the form only has to catch obvious typos
//! before showing the confirmation, nothing is ever sent anywhere.

/// Message shown to the visitor for any rejected address
pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address.";

/// Reasons an email address is rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EmailError {
    #[error("email address is empty")]
    Empty,
    #[error("email address has no '@'")]
    MissingAtSign,
}

impl EmailError {
    /// Text for the blocking alert
    pub fn user_message(&self) -> &'static str {
        INVALID_EMAIL_MESSAGE
    }
}

/// Accept any non-empty input containing an `@`.
///
/// Input is taken as typed: no trimming and no further syntax checks.
pub fn validate_email(email: &str) -> Result<(), EmailError> {
    if email.is_empty() {
        return Err(EmailError::Empty);
    }

    if !email.contains('@') {
        return Err(EmailError::MissingAtSign);
    }

    Ok(())
}
