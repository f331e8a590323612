//! Per-letter feedback labels
//!
//! Each position of a guess carries exactly one label:
//! - Absent: letter not in the solution (or no unaccounted occurrence left)
//! - Present: letter in the solution, but not at this position
//! - Correct: letter at exactly this position

use super::word::{WORD_LENGTH, Word};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Feedback label for one letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Feedback {
    Absent,
    Present,
    Correct,
}

/// Labels for a whole guess, in position order
pub type Labels = [Feedback; WORD_LENGTH];

/// Error returned when a feedback pattern cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("pattern must have exactly 5 symbols, got {0}")]
    InvalidLength(usize),
    #[error("unknown feedback symbol '{0}' (use G/Y/- or 🟩🟨⬜)")]
    InvalidSymbol(char),
}

impl Feedback {
    /// Next label in the on-screen cycle: absent → present → correct → absent
    #[must_use]
    pub const fn cycle(self) -> Self {
        match self {
            Self::Absent => Self::Present,
            Self::Present => Self::Correct,
            Self::Correct => Self::Absent,
        }
    }

    /// Parse a single feedback symbol
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for correct
    /// - 'Y'/'y'/🟨 for present
    /// - '-'/'_'/'.'/⬜/⬛ for absent
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | '.' | '⬜' | '⬛' => Some(Self::Absent),
            _ => None,
        }
    }

    /// Emoji square for this label
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Absent => '⬜',
            Self::Present => '🟨',
            Self::Correct => '🟩',
        }
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Absent => "absent",
            Self::Present => "present",
            Self::Correct => "correct",
        };
        f.write_str(name)
    }
}

/// Parse a pattern string like "G--Y-" or "🟩⬜⬜🟨⬜"
///
/// # Errors
/// Returns `PatternError` if the pattern does not hold exactly five known symbols.
///
/// # Examples
/// ```
/// use wordle_helper::core::{Feedback, parse_pattern};
///
/// let p1 = parse_pattern("GY-GY").unwrap();
/// let p2 = parse_pattern("🟩🟨⬜🟩🟨").unwrap();
/// assert_eq!(p1, p2);
/// assert_eq!(p1[1], Feedback::Present);
/// ```
pub fn parse_pattern(s: &str) -> Result<Labels, PatternError> {
    let symbols: Vec<char> = s.trim().chars().collect();
    if symbols.len() != WORD_LENGTH {
        return Err(PatternError::InvalidLength(symbols.len()));
    }

    let mut labels = [Feedback::Absent; WORD_LENGTH];
    for (label, &ch) in labels.iter_mut().zip(&symbols) {
        *label = Feedback::from_char(ch).ok_or(PatternError::InvalidSymbol(ch))?;
    }
    Ok(labels)
}

/// Convert labels to an emoji string like "🟩🟨⬜🟩🟨"
#[must_use]
pub fn pattern_to_emoji(labels: &Labels) -> String {
    labels.iter().map(|label| label.emoji()).collect()
}

/// Labels the game would show for `guess` when `answer` is the solution
///
/// Greens are marked first and removed from the pool of available letters,
/// then yellows are taken from what remains, so duplicate letters are handled
/// the way the game does.
#[must_use]
pub fn labels_for(guess: &Word, answer: &Word) -> Labels {
    let mut result = [Feedback::Absent; WORD_LENGTH];
    let mut answer_available = answer.char_counts();

    for (i, label) in result.iter_mut().enumerate() {
        let letter = guess.char_at(i);
        if letter == answer.char_at(i) {
            *label = Feedback::Correct;
            if let Some(count) = answer_available.get_mut(&letter) {
                *count = count.saturating_sub(1);
            }
        }
    }

    for (i, label) in result.iter_mut().enumerate() {
        if *label == Feedback::Absent
            && let Some(count) = answer_available.get_mut(&guess.char_at(i))
            && *count > 0
        {
            *label = Feedback::Present;
            *count -= 1;
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use Feedback::{Absent, Correct, Present};

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn cycle_visits_all_labels() {
        assert_eq!(Absent.cycle(), Present);
        assert_eq!(Present.cycle(), Correct);
        assert_eq!(Correct.cycle(), Absent);
    }

    #[test]
    fn parse_pattern_valid() {
        let p1 = parse_pattern("GYG--").unwrap();
        let p2 = parse_pattern("🟩🟨🟩⬜⬛").unwrap();
        let p3 = parse_pattern("gyg._").unwrap();

        assert_eq!(p1, [Correct, Present, Correct, Absent, Absent]);
        assert_eq!(p1, p2);
        assert_eq!(p1, p3);
    }

    #[test]
    fn parse_pattern_invalid() {
        assert_eq!(parse_pattern("GYGGYG"), Err(PatternError::InvalidLength(6)));
        assert_eq!(parse_pattern("GYG"), Err(PatternError::InvalidLength(3)));
        assert_eq!(parse_pattern(""), Err(PatternError::InvalidLength(0)));
        assert_eq!(parse_pattern("GXGGY"), Err(PatternError::InvalidSymbol('X')));
    }

    #[test]
    fn emoji_round_trip_symbols() {
        let labels = [Correct, Present, Absent, Correct, Present];
        assert_eq!(pattern_to_emoji(&labels), "🟩🟨⬜🟩🟨");
    }

    #[test]
    fn serde_lowercase_names() {
        let json = serde_json::to_string(&[Absent, Present, Correct]).unwrap();
        assert_eq!(json, r#"["absent","present","correct"]"#);
    }

    #[test]
    fn labels_for_all_absent() {
        assert_eq!(labels_for(&word("abcde"), &word("fghij")), [Absent; 5]);
    }

    #[test]
    fn labels_for_exact_match() {
        assert_eq!(labels_for(&word("слива"), &word("слива")), [Correct; 5]);
    }

    #[test]
    fn labels_for_duplicate_letters() {
        // ROBOT vs FLOOR: first O misplaced, second O in place
        assert_eq!(
            labels_for(&word("robot"), &word("floor")),
            [Present, Present, Absent, Correct, Absent]
        );
        // SPEED vs ERASE: both E misplaced
        assert_eq!(
            labels_for(&word("speed"), &word("erase")),
            [Present, Absent, Present, Present, Absent]
        );
    }

    #[test]
    fn labels_for_surplus_duplicate_is_absent() {
        // Only one A in the answer, and it is taken by the green
        assert_eq!(
            labels_for(&word("aabcd"), &word("axxxx")),
            [Correct, Absent, Absent, Absent, Absent]
        );
    }
}
