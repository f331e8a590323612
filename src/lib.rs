//! Wordle Helper
//!
//! Narrows a dictionary of five-letter words from guesses and their colored
//! feedback. Attempts go into an append-only log, a constraint set is derived
//! from the whole log, and the dictionary is filtered against it.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_helper::core::{Attempt, Word, parse_pattern};
//! use wordle_helper::engine::{AttemptLog, filter};
//! use wordle_helper::wordlists::loader::words_from_slice;
//!
//! let dictionary = words_from_slice(&["слива", "сорок", "стенд", "сушка"]);
//!
//! let mut log = AttemptLog::new();
//! log.append(Attempt::new(Word::new("слива").unwrap(), parse_pattern("G----").unwrap()));
//!
//! let candidates = filter(&dictionary, &log.constraints());
//! let texts: Vec<&str> = candidates.iter().map(|w| w.text()).collect();
//! assert_eq!(texts, ["сорок", "стенд"]);
//! ```

// Core domain types
pub mod core;

// Constraint derivation and filtering
pub mod engine;

// Error types
pub mod error;

// Runtime settings
pub mod config;

// Dictionary source
pub mod wordlists;

// Persisted attempt log and draft
pub mod state;

// Orchestration over engine and persistence
pub mod session;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

pub use error::{HelperError, Result};
