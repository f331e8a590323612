//! Core domain types
//!
//! Words, feedback labels, recorded attempts and the in-progress draft.
//! Everything here is plain data with no I/O.

mod attempt;
mod draft;
mod feedback;
mod word;

pub use attempt::{Attempt, Refinements};
pub use draft::{Draft, DraftCell};
pub use feedback::{Feedback, Labels, PatternError, labels_for, parse_pattern, pattern_to_emoji};
pub use word::{WORD_LENGTH, Word, WordError};
