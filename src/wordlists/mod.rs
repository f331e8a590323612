//! Dictionary source
//!
//! Loads the candidate dictionary from a JSON document, or falls back to the
//! list embedded in the binary.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY_JSON, embedded_dictionary};
pub use loader::{build_dictionary, load_from_file, load_or_empty, parse_dictionary};

use crate::core::Word;
use std::path::Path;

/// Dictionary from `path`, or the embedded one when no path is given
#[must_use]
pub fn dictionary_for(path: Option<&Path>) -> Vec<Word> {
    path.map_or_else(embedded_dictionary, load_or_empty)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_dictionary_parses() {
        let words = embedded_dictionary();
        assert!(words.len() > 400);
    }

    #[test]
    fn embedded_entries_all_valid_and_unique() {
        let raw: Vec<String> = serde_json::from_str(DICTIONARY_JSON).unwrap();
        let words = embedded_dictionary();
        assert_eq!(raw.len(), words.len(), "document holds invalid or repeated words");
    }

    #[test]
    fn embedded_contains_common_words() {
        let words = embedded_dictionary();
        for expected in ["слива", "столб", "сушка"] {
            assert!(
                words.iter().any(|w| w.text() == expected),
                "missing '{expected}'"
            );
        }
    }

    #[test]
    fn no_path_uses_embedded() {
        assert_eq!(dictionary_for(None).len(), embedded_dictionary().len());
    }
}
