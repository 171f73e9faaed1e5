//! Local state of the early-access sign-up form
//!
//! Submissions never leave the browser. An accepted address only flips the
//! confirmation flag, which is hidden again after [`CONFIRMATION_RESET`].

use std::time::Duration;

use super::validation::{EmailError, validate_email};

/// How long the "Submitted!" confirmation stays on the button
pub const CONFIRMATION_RESET: Duration = Duration::from_millis(3000);

/// Button text while idle
pub const SUBMIT_LABEL: &str = "Get Early Access";

/// Button text while the confirmation is shown
pub const SUBMITTED_LABEL: &str = "✓ Submitted!";

/// Why a submission was not accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] EmailError),
    /// The warning for an earlier rejection has not been dismissed yet
    #[error("invalid email warning is still open")]
    WarningOpen,
}

/// Sequence number of an accepted submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, derive_more::Display)]
#[display("#{_0}")]
pub struct SubmissionTicket(u64);

/// Email input, confirmation flag and pending warning
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    email: String,
    submitted: bool,
    ticket: SubmissionTicket,
    rejection: Option<EmailError>,
}

impl SignupForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// Rejection whose warning is currently shown
    pub fn rejection(&self) -> Option<EmailError> {
        self.rejection
    }

    /// Close the warning so the form accepts submissions again
    pub fn dismiss_rejection(&mut self) {
        self.rejection = None;
    }

    /// Replace the input on every keystroke
    pub fn set_email(&mut self, value: impl Into<String>) {
        self.email = value.into();
    }

    /// Validate and accept the current input.
    ///
    /// On success the input is cleared, the confirmation is shown and the
    /// returned ticket must be passed to [`Self::expire_confirmation`] once
    /// [`CONFIRMATION_RESET`] has elapsed. On failure the input and flag are
    /// untouched and the warning stays pending until dismissed; while it is
    /// pending every submission is refused.
    pub fn submit(&mut self) -> Result<SubmissionTicket, SubmitError> {
        if self.rejection.is_some() {
            return Err(SubmitError::WarningOpen);
        }

        if let Err(e) = validate_email(&self.email) {
            self.rejection = Some(e);
            return Err(e.into());
        }

        self.email.clear();
        self.submitted = true;
        self.ticket = SubmissionTicket(self.ticket.0 + 1);
        Ok(self.ticket)
    }

    /// Hide the confirmation if `ticket` belongs to the latest submission.
    ///
    /// Returns whether the flag changed.
    pub fn expire_confirmation(&mut self, ticket: SubmissionTicket) -> bool {
        if ticket != self.ticket || !self.submitted {
            return false;
        }
        self.submitted = false;
        true
    }

    pub fn button_label(&self) -> &'static str {
        if self.submitted {
            SUBMITTED_LABEL
        } else {
            SUBMIT_LABEL
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form_with(email: &str) -> SignupForm {
        let mut form = SignupForm::new();
        form.set_email(email);
        form
    }

    #[test]
    fn test_new_form_is_idle() {
        let form = SignupForm::new();
        assert_eq!(form.email(), "");
        assert!(!form.is_submitted());
        assert_eq!(form.button_label(), SUBMIT_LABEL);
    }

    #[test]
    fn test_set_email_tracks_keystrokes() {
        let mut form = SignupForm::new();
        form.set_email("u");
        form.set_email("us");
        form.set_email("use");
        assert_eq!(form.email(), "use");
    }

    #[test]
    fn test_invalid_submit_keeps_state() {
        let mut form = form_with("user.example.com");

        assert_eq!(
            form.submit(),
            Err(SubmitError::Invalid(EmailError::MissingAtSign))
        );
        assert!(!form.is_submitted());
        assert_eq!(form.email(), "user.example.com");
        assert_eq!(form.rejection(), Some(EmailError::MissingAtSign));
    }

    #[test]
    fn test_empty_submit_keeps_state() {
        let mut form = SignupForm::new();

        assert_eq!(form.submit(), Err(SubmitError::Invalid(EmailError::Empty)));
        assert!(!form.is_submitted());
        assert_eq!(form.email(), "");
    }

    #[test]
    fn test_valid_submit_clears_and_confirms() {
        let mut form = form_with("user@example.com");

        let ticket = form.submit().unwrap();

        assert_eq!(form.email(), "");
        assert!(form.is_submitted());
        assert_eq!(form.button_label(), SUBMITTED_LABEL);

        assert!(form.expire_confirmation(ticket));
        assert!(!form.is_submitted());
        assert_eq!(form.button_label(), SUBMIT_LABEL);
    }

    #[test]
    fn test_invalid_submit_after_confirmation_keeps_flag() {
        let mut form = form_with("user@example.com");
        form.submit().unwrap();

        form.set_email("nope");
        assert!(form.submit().is_err());

        assert!(form.is_submitted());
        assert_eq!(form.email(), "nope");
    }

    #[test]
    fn test_open_warning_blocks_corrected_address() {
        let mut form = form_with("user.example.com");
        assert!(form.submit().is_err());

        // Typing behind the open warning and pressing Enter again
        form.set_email("user@example.com");
        assert_eq!(form.submit(), Err(SubmitError::WarningOpen));
        assert!(!form.is_submitted());
        assert_eq!(form.email(), "user@example.com");
        assert_eq!(form.rejection(), Some(EmailError::MissingAtSign));

        form.dismiss_rejection();
        assert_eq!(form.rejection(), None);
        assert!(form.submit().is_ok());
        assert!(form.is_submitted());
        assert_eq!(form.email(), "");
    }

    #[test]
    fn test_valid_submit_leaves_no_warning() {
        let mut form = form_with("user@example.com");
        form.submit().unwrap();
        assert_eq!(form.rejection(), None);
    }

    #[test]
    fn test_stale_ticket_does_not_hide_newer_confirmation() {
        let mut form = form_with("first@example.com");
        let first = form.submit().unwrap();

        form.set_email("second@example.com");
        let second = form.submit().unwrap();
        assert!(second > first);

        assert!(!form.expire_confirmation(first));
        assert!(form.is_submitted());

        assert!(form.expire_confirmation(second));
        assert!(!form.is_submitted());
    }

    #[test]
    fn test_expire_twice_is_noop() {
        let mut form = form_with("user@example.com");
        let ticket = form.submit().unwrap();

        assert!(form.expire_confirmation(ticket));
        assert!(!form.expire_confirmation(ticket));
        assert!(!form.is_submitted());
    }

    #[test]
    fn test_ticket_display() {
        let mut form = form_with("user@example.com");
        let ticket = form.submit().unwrap();
        assert_eq!(ticket.to_string(), "#1");
    }

    #[test]
    fn test_reset_delay() {
        assert_eq!(CONFIRMATION_RESET.as_millis(), 3000);
    }
}
