//! Error types for the helper library

use crate::core::{PatternError, WordError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HelperError {
    #[error("invalid word: {0}")]
    InvalidWord(#[from] WordError),

    #[error("invalid feedback: {0}")]
    InvalidPattern(#[from] PatternError),

    #[error("draft is incomplete: {filled} of 5 letters entered")]
    IncompleteDraft { filled: usize },

    #[error("no recorded attempt matches {0}")]
    UnknownAttempt(String),

    #[error("position {0} is out of range (expected 0-4)")]
    InvalidPosition(usize),

    #[error("{0}")]
    InvalidCommand(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, HelperError>;
