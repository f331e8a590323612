//! On-screen keyboard summary
//!
//! Best label seen for each guessed letter: correct beats present beats absent.

use crate::core::{Attempt, Feedback};
use std::collections::BTreeMap;

/// Strongest label each letter has received across `attempts`
#[must_use]
pub fn letter_states(attempts: &[Attempt]) -> BTreeMap<char, Feedback> {
    let mut states: BTreeMap<char, Feedback> = BTreeMap::new();
    for attempt in attempts {
        for (_, letter, label) in attempt.cells() {
            states
                .entry(letter)
                .and_modify(|best| *best = (*best).max(label))
                .or_insert(label);
        }
    }
    states
}
