//! Runtime settings
//!
//! Built from the command line in `main`; `Default` matches the CLI defaults.

use crate::engine::{AttemptId, AttemptSelector};
use clap::ValueEnum;
use std::fmt;
use std::path::PathBuf;

/// Default location of the persisted state document
pub const DEFAULT_STATE_FILE: &str = "wordle_helper_state.json";

/// Default cap on the number of candidates printed
pub const DEFAULT_DISPLAY_LIMIT: usize = 100;

/// How refinements locate the attempt they belong to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum RefinementKeying {
    /// First attempt in the log with the same word text
    #[default]
    FirstWord,
    /// The exact attempt the refinement was entered on
    Attempt,
}

impl RefinementKeying {
    /// Selector for the attempt at `id` whose word is `word`
    #[must_use]
    pub const fn selector(self, word: &str, id: AttemptId) -> AttemptSelector<'_> {
        match self {
            Self::FirstWord => AttemptSelector::FirstWithWord(word),
            Self::Attempt => AttemptSelector::Id(id),
        }
    }
}

impl fmt::Display for RefinementKeying {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FirstWord => write!(f, "first-word"),
            Self::Attempt => write!(f, "attempt"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Dictionary document; `None` uses the embedded dictionary
    pub dictionary_path: Option<PathBuf>,
    pub state_path: PathBuf,
    pub refinement_keying: RefinementKeying,
    pub display_limit: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dictionary_path: None,
            state_path: PathBuf::from(DEFAULT_STATE_FILE),
            refinement_keying: RefinementKeying::default(),
            display_limit: DEFAULT_DISPLAY_LIMIT,
        }
    }
}
