//! Terminal output formatting
//!
//! Colored line-mode printing for the non-interactive commands.

pub mod display;
pub mod formatters;

pub use display::{print_attempts, print_constraints, print_outcome, print_session};
