//! Dictionary filtering
//!
//! Applies a [`ConstraintSet`] to the dictionary, keeping dictionary order.

use super::constraints::ConstraintSet;
use crate::core::Word;
use log::debug;

impl ConstraintSet {
    /// Returns `true` iff `word` satisfies every constraint
    ///
    /// - each exact position holds its letter
    /// - each present letter occurs, and not at any excluded position
    /// - no absent letter occurs anywhere
    #[must_use]
    pub fn is_satisfied_by(&self, word: &Word) -> bool {
        let letters = word.letters();

        self.exact
            .iter()
            .all(|(&position, &letter)| letters.get(position) == Some(&letter))
            && self.present.iter().all(|(&letter, excluded)| {
                word.has_letter(letter)
                    && excluded
                        .iter()
                        .all(|&position| letters.get(position) != Some(&letter))
            })
            && !self.absent.iter().any(|&letter| word.has_letter(letter))
    }
}

/// Filter `dictionary` down to the words consistent with `constraints`
///
/// Surviving words keep their relative order. With no constraints at all
/// (nothing guessed yet) the result is empty rather than the whole dictionary.
///
/// # Examples
/// ```
/// use wordle_helper::core::{Attempt, Word, parse_pattern};
/// use wordle_helper::engine::{derive, filter};
///
/// let dictionary: Vec<Word> = ["слива", "сорок", "стенд", "сушка"]
///     .into_iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
/// let attempt = Attempt::new(Word::new("слива").unwrap(), parse_pattern("G----").unwrap());
///
/// let survivors = filter(&dictionary, &derive(&[attempt]));
/// let texts: Vec<&str> = survivors.iter().map(|w| w.text()).collect();
/// assert_eq!(texts, ["сорок", "стенд"]);
///
/// assert!(filter(&dictionary, &derive(&[])).is_empty());
/// ```
#[must_use]
pub fn filter<'a>(dictionary: &'a [Word], constraints: &ConstraintSet) -> Vec<&'a Word> {
    if constraints.is_empty() {
        return Vec::new();
    }

    let survivors: Vec<&Word> = dictionary
        .iter()
        .filter(|word| constraints.is_satisfied_by(word))
        .collect();

    debug!(
        "filter kept {} of {} words",
        survivors.len(),
        dictionary.len()
    );
    survivors
}
