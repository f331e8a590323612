//! Embedded default dictionary
//!
//! Russian five-letter nouns compiled into the binary.

use super::loader::parse_dictionary;
use crate::core::Word;
use log::error;

/// The embedded dictionary document
pub const DICTIONARY_JSON: &str = include_str!("../../data/dictionary.json");

/// Parse the embedded dictionary
#[must_use]
pub fn embedded_dictionary() -> Vec<Word> {
    parse_dictionary(DICTIONARY_JSON).unwrap_or_else(|e| {
        error!("embedded dictionary is malformed: {e}");
        Vec::new()
    })
}
