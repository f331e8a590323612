//! Five-letter word representation
//!
//! A Word stores a validated 5-letter word along with letter position indices.
//! Letters are compared by exact `char` equality, so any alphabet works.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Number of letters in every word handled by the helper
pub const WORD_LENGTH: usize = 5;

/// A 5-letter word with letter position tracking
///
/// Stores the lowercased letters and a map of letter positions for duplicate handling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Word {
    text: String,
    letters: [char; WORD_LENGTH],
    char_positions: FxHashMap<char, Vec<usize>>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must be exactly 5 letters, got {0}")]
    InvalidLength(usize),
    #[error("word must contain only letters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5 characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordle_helper::core::Word;
    ///
    /// let word = Word::new("СЛИВА").unwrap();
    /// assert_eq!(word.text(), "слива");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().trim().to_lowercase();

        let letters: Vec<char> = text.chars().collect();
        let letters: [char; WORD_LENGTH] = letters
            .try_into()
            .map_err(|rejected: Vec<char>| WordError::InvalidLength(rejected.len()))?;

        if !letters.iter().all(|c| c.is_alphabetic()) {
            return Err(WordError::InvalidCharacters);
        }

        let mut char_positions: FxHashMap<char, Vec<usize>> = FxHashMap::default();
        for (i, &ch) in letters.iter().enumerate() {
            char_positions.entry(ch).or_default().push(i);
        }

        Ok(Self {
            text,
            letters,
            char_positions,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the letters in position order
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[char; WORD_LENGTH] {
        &self.letters
    }

    /// Get the letter at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> char {
        self.letters[position]
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: char) -> bool {
        self.char_positions.contains_key(&letter)
    }

    /// Get all positions where a letter appears
    ///
    /// Returns an empty slice if the letter doesn't appear.
    #[inline]
    pub fn positions_of(&self, letter: char) -> &[usize] {
        self.char_positions
            .get(&letter)
            .map_or(&[], std::vec::Vec::as_slice)
    }

    /// Get the count of each letter in the word
    #[inline]
    pub(crate) fn char_counts(&self) -> FxHashMap<char, u8> {
        let mut counts = FxHashMap::default();
        for &ch in &self.letters {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

impl TryFrom<String> for Word {
    type Error = WordError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Word> for String {
    fn from(word: Word) -> Self {
        word.text
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.text(), "crane");
        assert_eq!(word.letters(), &['c', 'r', 'a', 'n', 'e']);
    }

    #[test]
    fn word_creation_cyrillic() {
        let word = Word::new("Сушка").unwrap();
        assert_eq!(word.text(), "сушка");
        assert_eq!(word.char_at(0), 'с');
        assert_eq!(word.char_at(4), 'а');
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("CRANE").unwrap();
        assert_eq!(word.text(), "crane");

        let word2 = Word::new("СтОлБ").unwrap();
        assert_eq!(word2.text(), "столб");
    }

    #[test]
    fn word_creation_invalid_length() {
        assert!(matches!(
            Word::new("too long"),
            Err(WordError::InvalidLength(8))
        ));
        assert!(matches!(
            Word::new("шкаф"),
            Err(WordError::InvalidLength(4))
        ));
        assert!(matches!(Word::new(""), Err(WordError::InvalidLength(0))));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("cran3"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("cr ne"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("cran!"), Err(WordError::InvalidCharacters));
    }

    #[test]
    fn word_surrounding_whitespace_trimmed() {
        let word = Word::new("  слива\n").unwrap();
        assert_eq!(word.text(), "слива");
    }

    #[test]
    fn word_has_letter() {
        let word = Word::new("столб").unwrap();
        assert!(word.has_letter('с'));
        assert!(word.has_letter('б'));
        assert!(!word.has_letter('а'));
    }

    #[test]
    fn word_positions_of_duplicates() {
        let word = Word::new("speed").unwrap();
        assert_eq!(word.positions_of('e'), &[2, 3]);
        assert_eq!(word.positions_of('s'), &[0]);
        assert_eq!(word.positions_of('z'), &[] as &[usize]);
    }

    #[test]
    fn word_char_counts() {
        let word = Word::new("сушка").unwrap();
        let counts = word.char_counts();
        assert_eq!(counts.len(), 5);
        assert!(counts.values().all(|&count| count == 1));

        let counts = Word::new("aaaaa").unwrap().char_counts();
        assert_eq!(counts.get(&'a'), Some(&5));
    }

    #[test]
    fn word_serde_as_plain_string() {
        let word = Word::new("слива").unwrap();
        let json = serde_json::to_string(&word).unwrap();
        assert_eq!(json, "\"слива\"");

        let back: Word = serde_json::from_str(&json).unwrap();
        assert_eq!(back, word);

        assert!(serde_json::from_str::<Word>("\"шкаф\"").is_err());
    }

    #[test]
    fn word_display() {
        let word = Word::new("crane").unwrap();
        assert_eq!(format!("{word}"), "crane");
    }
}
