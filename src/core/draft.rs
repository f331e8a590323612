//! The in-progress guess being edited
//!
//! A draft holds up to five typed letters. Typing a letter gives its cell an
//! explicit `Absent` label; the user cycles labels from there. Only a complete
//! draft converts into an [`Attempt`].

use super::attempt::Attempt;
use super::feedback::{Feedback, Labels};
use super::word::{WORD_LENGTH, Word};
use crate::error::HelperError;
use serde::{Deserialize, Serialize};

/// One filled cell of the draft
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftCell {
    pub letter: char,
    pub label: Feedback,
}

/// Current draft guess
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    cells: [Option<DraftCell>; WORD_LENGTH],
}

impl Draft {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Put `letter` into the first empty cell, labelled `Absent`
    ///
    /// Returns the filled position, or `None` when the draft is full or the
    /// character is not a letter.
    pub fn input_letter(&mut self, letter: char) -> Option<usize> {
        if !letter.is_alphabetic() {
            return None;
        }
        let letter = letter.to_lowercase().next().unwrap_or(letter);
        let index = self.cells.iter().position(Option::is_none)?;
        self.cells[index] = Some(DraftCell {
            letter,
            label: Feedback::Absent,
        });
        Some(index)
    }

    /// Clear the last filled cell
    ///
    /// Returns the cleared position, if any.
    pub fn backspace(&mut self) -> Option<usize> {
        let index = self.cells.iter().rposition(Option::is_some)?;
        self.cells[index] = None;
        Some(index)
    }

    /// Advance the label of a filled cell; empty cells are left alone
    pub fn cycle(&mut self, index: usize) -> Option<Feedback> {
        let cell = self.cells.get_mut(index)?.as_mut()?;
        cell.label = cell.label.cycle();
        Some(cell.label)
    }

    #[must_use]
    pub fn letter_at(&self, index: usize) -> Option<char> {
        self.cells.get(index).copied().flatten().map(|cell| cell.letter)
    }

    #[must_use]
    pub fn label_at(&self, index: usize) -> Option<Feedback> {
        self.cells.get(index).copied().flatten().map(|cell| cell.label)
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    /// Letters typed so far, in order
    #[must_use]
    pub fn text(&self) -> String {
        self.cells.iter().flatten().map(|cell| cell.letter).collect()
    }

    pub fn clear(&mut self) {
        self.cells = [None; WORD_LENGTH];
    }

    /// Build the attempt this draft describes
    ///
    /// # Errors
    /// Returns `HelperError::IncompleteDraft` unless all five cells are filled,
    /// or `HelperError::InvalidWord` if the letters do not form a valid word.
    pub fn to_attempt(&self) -> Result<Attempt, HelperError> {
        let mut labels: Labels = [Feedback::Absent; WORD_LENGTH];
        let mut text = String::with_capacity(WORD_LENGTH * 2);
        for (i, cell) in self.cells.iter().enumerate() {
            let cell = cell.ok_or(HelperError::IncompleteDraft { filled: i })?;
            labels[i] = cell.label;
            text.push(cell.letter);
        }
        Ok(Attempt::new(Word::new(text)?, labels))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(text: &str) -> Draft {
        let mut draft = Draft::new();
        for ch in text.chars() {
            draft.input_letter(ch);
        }
        draft
    }

    #[test]
    fn input_fills_cells_in_order_with_absent() {
        let draft = typed("сл");
        assert_eq!(draft.letter_at(0), Some('с'));
        assert_eq!(draft.letter_at(1), Some('л'));
        assert_eq!(draft.letter_at(2), None);
        assert_eq!(draft.label_at(0), Some(Feedback::Absent));
        assert_eq!(draft.label_at(2), None);
    }

    #[test]
    fn input_ignored_when_full_or_not_a_letter() {
        let mut draft = typed("слива");
        assert!(draft.is_complete());
        assert_eq!(draft.input_letter('х'), None);
        assert_eq!(draft.text(), "слива");

        let mut draft = Draft::new();
        assert_eq!(draft.input_letter('7'), None);
        assert!(draft.is_empty());
    }

    #[test]
    fn input_lowercases() {
        let draft = typed("СЛ");
        assert_eq!(draft.text(), "сл");
    }

    #[test]
    fn backspace_clears_last_filled() {
        let mut draft = typed("сли");
        assert_eq!(draft.backspace(), Some(2));
        assert_eq!(draft.text(), "сл");
        draft.backspace();
        draft.backspace();
        assert_eq!(draft.backspace(), None);
    }

    #[test]
    fn cycle_only_on_filled_cells() {
        let mut draft = typed("сл");
        assert_eq!(draft.cycle(0), Some(Feedback::Present));
        assert_eq!(draft.cycle(0), Some(Feedback::Correct));
        assert_eq!(draft.cycle(0), Some(Feedback::Absent));
        assert_eq!(draft.cycle(3), None);
        assert_eq!(draft.cycle(9), None);
    }

    #[test]
    fn to_attempt_requires_all_cells() {
        let draft = typed("сли");
        assert!(matches!(
            draft.to_attempt(),
            Err(HelperError::IncompleteDraft { filled: 3 })
        ));
    }

    #[test]
    fn to_attempt_carries_labels() {
        let mut draft = typed("слива");
        draft.cycle(0);
        draft.cycle(0);
        draft.cycle(4);

        let attempt = draft.to_attempt().unwrap();
        assert_eq!(attempt.word().text(), "слива");
        assert_eq!(
            attempt.labels(),
            &[
                Feedback::Correct,
                Feedback::Absent,
                Feedback::Absent,
                Feedback::Absent,
                Feedback::Present
            ]
        );
        assert!(attempt.refinements().is_empty());
    }

    #[test]
    fn clear_empties_draft() {
        let mut draft = typed("слива");
        draft.clear();
        assert!(draft.is_empty());
        assert_eq!(draft, Draft::default());
    }
}
