//! Reusable building blocks shared by pages

pub mod modal;

pub use modal::{AlertDialog, BaseModal};
