pub mod cards;
pub mod common;
pub mod icon;
pub mod pages;
pub mod reveal;
pub mod scroll;
pub mod signup;

pub use cards::{FeatureCard, StatCard, StepIndicator};
pub use icon::{Icon, icons};
pub use pages::{LandingPage, NotFoundPage};
pub use scroll::{ScrollError, scroll_to_id, scroll_to_section};
pub use signup::SignupSection;
