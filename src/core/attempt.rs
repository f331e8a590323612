//! Recorded guesses
//!
//! An Attempt is one finalized guess: the word, one label per position and the
//! manual refinements entered afterwards.

use super::feedback::{Feedback, Labels};
use super::word::{WORD_LENGTH, Word};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Manual exclusions: letter → positions where it is known not to be
pub type Refinements = BTreeMap<char, BTreeSet<usize>>;

/// One recorded guess with its feedback
///
/// The word and labels never change after construction. Only the refinement
/// map is mutated, through the attempt log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawAttempt")]
pub struct Attempt {
    word: Word,
    #[serde(rename = "states")]
    labels: Labels,
    #[serde(rename = "positions", default)]
    refinements: Refinements,
}

#[derive(Deserialize)]
struct RawAttempt {
    word: Word,
    states: Labels,
    #[serde(default)]
    positions: Refinements,
}

impl TryFrom<RawAttempt> for Attempt {
    type Error = String;

    fn try_from(raw: RawAttempt) -> Result<Self, Self::Error> {
        if let Some(position) = raw
            .positions
            .values()
            .flatten()
            .find(|&&position| position >= WORD_LENGTH)
        {
            return Err(format!(
                "refinement position {position} out of range for '{}'",
                raw.word
            ));
        }
        Ok(Self {
            word: raw.word,
            labels: raw.states,
            refinements: raw.positions,
        })
    }
}

impl Attempt {
    /// Create an attempt with no refinements
    ///
    /// Every position must carry a label; word and labels are fixed-size, so a
    /// length mismatch cannot be expressed.
    #[must_use]
    pub const fn new(word: Word, labels: Labels) -> Self {
        Self {
            word,
            labels,
            refinements: BTreeMap::new(),
        }
    }

    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    #[must_use]
    pub const fn labels(&self) -> &Labels {
        &self.labels
    }

    #[must_use]
    pub const fn refinements(&self) -> &Refinements {
        &self.refinements
    }

    /// Letter and label at each position
    pub fn cells(&self) -> impl Iterator<Item = (usize, char, Feedback)> + '_ {
        self.word
            .letters()
            .iter()
            .zip(self.labels.iter())
            .enumerate()
            .map(|(i, (&letter, &label))| (i, letter, label))
    }

    /// Flip `position` in the refinement set for `letter`
    ///
    /// The per-letter entry is created on first toggle and dropped once empty.
    /// Returns whether the position is excluded after the toggle.
    pub(crate) fn toggle_refinement(&mut self, letter: char, position: usize) -> bool {
        let positions = self.refinements.entry(letter).or_default();
        let excluded = if positions.remove(&position) {
            false
        } else {
            positions.insert(position);
            true
        };
        if positions.is_empty() {
            self.refinements.remove(&letter);
        }
        excluded
    }
}
