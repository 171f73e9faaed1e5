//! Framework-independent state and content of the SafeOil landing page

#[cfg(feature = "ssr")]
pub mod config;
pub mod content;
pub mod reveal;
pub mod signup;
pub mod validation;

pub use reveal::{REVEAL_THRESHOLD, RevealPhase, RevealState};
pub use signup::{CONFIRMATION_RESET, SignupForm, SubmissionTicket, SubmitError};
pub use validation::{EmailError, validate_email};
