//! Constraint engine
//!
//! Derives a constraint set from the attempt log and filters the dictionary
//! with it. Everything here is pure and synchronous.

mod attempt_log;
mod constraints;
mod filter;
mod keyboard;

pub use attempt_log::{AttemptId, AttemptLog, AttemptSelector};
pub use constraints::{ConstraintSet, derive};
pub use filter::filter;
pub use keyboard::letter_states;
