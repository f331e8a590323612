//! Ordered, append-only log of attempts
//!
//! Words and labels are fixed once appended. The only in-place mutation is
//! toggling manual refinements on an existing attempt.

use super::constraints::{ConstraintSet, derive};
use crate::core::{Attempt, WORD_LENGTH};
use crate::error::{HelperError, Result};
use log::debug;
use std::collections::BTreeSet;
use std::fmt;

/// Position of an attempt in the log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AttemptId(pub usize);

/// How a refinement finds its attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptSelector<'a> {
    /// The first attempt, in log order, whose word equals this text.
    /// A word guessed twice only ever resolves to its first occurrence.
    FirstWithWord(&'a str),
    /// A specific attempt
    Id(AttemptId),
}

impl fmt::Display for AttemptSelector<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FirstWithWord(word) => write!(f, "word '{word}'"),
            Self::Id(AttemptId(index)) => write!(f, "attempt #{}", index + 1),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttemptLog {
    attempts: Vec<Attempt>,
}

impl AttemptLog {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            attempts: Vec::new(),
        }
    }

    /// Append a finalized attempt
    pub fn append(&mut self, attempt: Attempt) -> AttemptId {
        debug!(
            "appending attempt #{}: {}",
            self.attempts.len() + 1,
            attempt.word()
        );
        self.attempts.push(attempt);
        AttemptId(self.attempts.len() - 1)
    }

    #[must_use]
    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    #[must_use]
    pub fn get(&self, id: AttemptId) -> Option<&Attempt> {
        self.attempts.get(id.0)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.attempts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attempts.is_empty()
    }

    pub fn clear(&mut self) {
        self.attempts.clear();
    }

    /// Constraint set for the whole log
    #[must_use]
    pub fn constraints(&self) -> ConstraintSet {
        derive(&self.attempts)
    }

    /// Resolve a selector to an attempt index
    #[must_use]
    pub fn find(&self, selector: AttemptSelector<'_>) -> Option<AttemptId> {
        match selector {
            AttemptSelector::FirstWithWord(text) => {
                let text = text.trim().to_lowercase();
                self.attempts
                    .iter()
                    .position(|attempt| attempt.word().text() == text)
                    .map(AttemptId)
            }
            AttemptSelector::Id(id) => (id.0 < self.attempts.len()).then_some(id),
        }
    }

    /// Toggle `position` in the selected attempt's refinement set for `letter`
    ///
    /// Returns whether the position is excluded after the toggle.
    ///
    /// # Errors
    /// Returns `HelperError::InvalidPosition` for positions outside 0-4, and
    /// `HelperError::UnknownAttempt` when the selector matches nothing.
    pub fn record_refinement(
        &mut self,
        selector: AttemptSelector<'_>,
        letter: char,
        position: usize,
    ) -> Result<bool> {
        if position >= WORD_LENGTH {
            return Err(HelperError::InvalidPosition(position));
        }
        let id = self
            .find(selector)
            .ok_or_else(|| HelperError::UnknownAttempt(selector.to_string()))?;
        let letter = lowercase(letter);

        let excluded = self.attempts[id.0].toggle_refinement(letter, position);
        debug!(
            "refinement on {selector}: '{letter}' {} position {}",
            if excluded { "excluded from" } else { "allowed at" },
            position + 1
        );
        Ok(excluded)
    }

    /// Manually excluded positions recorded for `letter` on the selected attempt
    #[must_use]
    pub fn excluded_positions(
        &self,
        selector: AttemptSelector<'_>,
        letter: char,
    ) -> BTreeSet<usize> {
        let letter = lowercase(letter);
        self.find(selector)
            .and_then(|id| self.attempts[id.0].refinements().get(&letter))
            .cloned()
            .unwrap_or_default()
    }
}

fn lowercase(letter: char) -> char {
    letter.to_lowercase().next().unwrap_or(letter)
}

impl From<Vec<Attempt>> for AttemptLog {
    fn from(attempts: Vec<Attempt>) -> Self {
        Self { attempts }
    }
}
