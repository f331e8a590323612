//! Dictionary loading utilities
//!
//! The dictionary document is a JSON array of words. Invalid entries are
//! skipped and duplicates are kept once, first occurrence wins.

use crate::core::Word;
use crate::error::Result;
use log::{debug, error, info};
use rustc_hash::FxHashSet;
use std::fs;
use std::path::Path;

/// Parse a dictionary document
///
/// # Errors
///
/// Returns an error if the document is not a JSON array of strings.
///
/// # Examples
/// ```
/// use wordle_helper::wordlists::loader::parse_dictionary;
///
/// let words = parse_dictionary(r#"["слива", "шкаф", "СТОЛБ", "слива"]"#).unwrap();
/// let texts: Vec<&str> = words.iter().map(|w| w.text()).collect();
/// assert_eq!(texts, ["слива", "столб"]);
/// ```
pub fn parse_dictionary(document: &str) -> Result<Vec<Word>> {
    let entries: Vec<String> = serde_json::from_str(document)?;
    Ok(words_from_slice(&entries))
}

/// Load a dictionary document from a file
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a JSON array of strings.
///
/// # Examples
/// ```no_run
/// use wordle_helper::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/dictionary.json").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let words = parse_dictionary(&content)?;
    info!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Load a dictionary, degrading to an empty one on any failure
#[must_use]
pub fn load_or_empty<P: AsRef<Path>>(path: P) -> Vec<Word> {
    let path = path.as_ref();
    match load_from_file(path) {
        Ok(words) => words,
        Err(e) => {
            error!("failed to load dictionary {}: {e}", path.display());
            Vec::new()
        }
    }
}

/// Convert raw entries to words, skipping invalid ones and duplicates
///
/// # Examples
/// ```
/// use wordle_helper::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["слива", "столб"]);
/// assert_eq!(words.len(), 2);
/// ```
#[must_use]
pub fn words_from_slice<S: AsRef<str>>(entries: &[S]) -> Vec<Word> {
    let mut seen: FxHashSet<String> = FxHashSet::default();
    let mut words = Vec::with_capacity(entries.len());

    for entry in entries {
        let entry = entry.as_ref();
        match Word::new(entry) {
            Ok(word) => {
                if seen.insert(word.text().to_string()) {
                    words.push(word);
                } else {
                    debug!("skipping duplicate dictionary entry '{entry}'");
                }
            }
            Err(e) => debug!("skipping dictionary entry '{entry}': {e}"),
        }
    }

    words
}

/// Normalize a plain word list (one word per line) into dictionary words
///
/// Blank lines are ignored. Lines are trimmed and lowercased; only valid
/// five-letter words survive, each once.
#[must_use]
pub fn build_dictionary(lines: &str) -> Vec<Word> {
    let entries: Vec<&str> = lines
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    words_from_slice(&entries)
}

/// Render words as a dictionary document
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_document(words: &[Word]) -> Result<String> {
    Ok(serde_json::to_string_pretty(words)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HelperError;

    fn texts(words: &[Word]) -> Vec<&str> {
        words.iter().map(Word::text).collect()
    }

    #[test]
    fn words_from_slice_converts_valid_words() {
        let words = words_from_slice(&["слива", "столб", "сушка"]);
        assert_eq!(texts(&words), ["слива", "столб", "сушка"]);
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let words = words_from_slice(&["слива", "шкаф", "сл1ва", "столб", "переплет"]);

        // Only the two well-formed five-letter words survive
        assert_eq!(texts(&words), ["слива", "столб"]);
    }

    #[test]
    fn words_from_slice_keeps_first_duplicate() {
        let words = words_from_slice(&["столб", "слива", "Столб"]);
        assert_eq!(texts(&words), ["столб", "слива"]);
    }

    #[test]
    fn parse_rejects_non_array() {
        assert!(matches!(
            parse_dictionary(r#"{"words": []}"#),
            Err(HelperError::Serde(_))
        ));
        assert!(parse_dictionary("not json").is_err());
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let path = std::env::temp_dir().join("wordle_helper_missing_dictionary.json");
        assert!(matches!(load_from_file(&path), Err(HelperError::Io(_))));
        assert!(load_or_empty(&path).is_empty());
    }

    #[test]
    fn load_from_written_file() {
        let path = std::env::temp_dir().join(format!(
            "wordle_helper_dictionary_{}.json",
            std::process::id()
        ));
        fs::write(&path, r#"["метро", "пенал", "метро"]"#).unwrap();

        let words = load_from_file(&path).unwrap();
        assert_eq!(texts(&words), ["метро", "пенал"]);

        fs::write(&path, "[1, 2").unwrap();
        assert!(load_or_empty(&path).is_empty());

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn build_dictionary_normalizes_lines() {
        let input = "  Слива\n\nстол\nСТОЛБ\nслива\nсуш-ка\n";
        let words = build_dictionary(input);
        assert_eq!(texts(&words), ["слива", "столб"]);

        let document = to_document(&words).unwrap();
        assert_eq!(texts(&parse_dictionary(&document).unwrap()), ["слива", "столб"]);
    }
}
