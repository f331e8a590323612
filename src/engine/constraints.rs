//! Constraint derivation
//!
//! Turns the attempt log into a normalized [`ConstraintSet`]. The set is a
//! plain value: it is rebuilt from the whole log on every change and never
//! patched in place.

use crate::core::{Attempt, Feedback};
use log::debug;
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Everything the attempts so far say about the solution
///
/// A letter that is an `exact` value or a `present` key is never also in
/// `absent`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstraintSet {
    pub(super) exact: BTreeMap<usize, char>,
    pub(super) present: FxHashMap<char, BTreeSet<usize>>,
    pub(super) absent: FxHashSet<char>,
}

impl ConstraintSet {
    /// Required letter by position
    #[must_use]
    pub const fn exact(&self) -> &BTreeMap<usize, char> {
        &self.exact
    }

    /// Letters known to be in the word, with the positions they are excluded from
    #[must_use]
    pub const fn present(&self) -> &FxHashMap<char, BTreeSet<usize>> {
        &self.present
    }

    /// Letters with no remaining occurrence in the word
    #[must_use]
    pub const fn absent(&self) -> &FxHashSet<char> {
        &self.absent
    }

    /// True only for the set derived from an empty log
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exact.is_empty() && self.present.is_empty() && self.absent.is_empty()
    }

    /// Positions `letter` is excluded from, if it is a present letter
    #[must_use]
    pub fn excluded_positions(&self, letter: char) -> Option<&BTreeSet<usize>> {
        self.present.get(&letter)
    }

    /// Whether `letter` is confirmed by a correct or present label
    #[must_use]
    pub fn is_required(&self, letter: char) -> bool {
        self.present.contains_key(&letter) || self.exact.values().any(|&l| l == letter)
    }

    /// Present letters in alphabetical order
    #[must_use]
    pub fn present_sorted(&self) -> Vec<(char, &BTreeSet<usize>)> {
        let mut present: Vec<_> = self.present.iter().map(|(&l, p)| (l, p)).collect();
        present.sort_unstable_by_key(|&(letter, _)| letter);
        present
    }

    /// Absent letters in alphabetical order
    #[must_use]
    pub fn absent_sorted(&self) -> Vec<char> {
        let mut absent: Vec<char> = self.absent.iter().copied().collect();
        absent.sort_unstable();
        absent
    }
}

impl fmt::Display for ConstraintSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let exact: Vec<String> = self
            .exact
            .iter()
            .map(|(pos, letter)| format!("{letter}@{}", pos + 1))
            .collect();
        let present: Vec<String> = self
            .present_sorted()
            .into_iter()
            .map(|(letter, excluded)| {
                let positions: Vec<String> =
                    excluded.iter().map(|pos| (pos + 1).to_string()).collect();
                format!("{letter}!{}", positions.join(","))
            })
            .collect();
        let absent: String = self.absent_sorted().into_iter().collect();
        write!(
            f,
            "exact [{}] present [{}] absent [{absent}]",
            exact.join(" "),
            present.join(" ")
        )
    }
}

/// Derive the constraint set implied by `attempts`
///
/// Correct and present labels are collected over the whole log first; absent
/// labels are then applied only to letters no strong label has confirmed, and
/// manual refinements sharpen existing present letters.
///
/// The model tracks letters by value, not by occurrence count: a present letter
/// that is also absent-flagged at a duplicate occurrence stays present, which
/// under-constrains words with repeated letters.
///
/// # Examples
/// ```
/// use wordle_helper::core::{Attempt, Word, parse_pattern};
/// use wordle_helper::engine::derive;
///
/// let attempt = Attempt::new(Word::new("слива").unwrap(), parse_pattern("G----").unwrap());
/// let constraints = derive(&[attempt]);
///
/// assert_eq!(constraints.exact().get(&0), Some(&'с'));
/// assert!(constraints.absent().contains(&'л'));
/// ```
#[must_use]
pub fn derive(attempts: &[Attempt]) -> ConstraintSet {
    let mut set = ConstraintSet::default();

    for attempt in attempts {
        for (position, letter, label) in attempt.cells() {
            match label {
                Feedback::Correct => {
                    set.exact.insert(position, letter);
                }
                Feedback::Present => {
                    set.present.entry(letter).or_default().insert(position);
                }
                Feedback::Absent => {}
            }
        }
    }

    for attempt in attempts {
        for (_, letter, label) in attempt.cells() {
            if label == Feedback::Absent && !set.is_required(letter) {
                set.absent.insert(letter);
            }
        }

        // Refinements only sharpen a present letter, they never create one
        for (letter, positions) in attempt.refinements() {
            if let Some(excluded) = set.present.get_mut(letter) {
                excluded.extend(positions.iter().copied());
            }
        }
    }

    debug!("derived from {} attempts: {set}", attempts.len());
    set
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Word, labels_for, parse_pattern};

    fn attempt(word: &str, pattern: &str) -> Attempt {
        Attempt::new(Word::new(word).unwrap(), parse_pattern(pattern).unwrap())
    }

    fn assert_precedence_holds(set: &ConstraintSet) {
        for letter in set.absent() {
            assert!(
                !set.exact().values().any(|l| l == letter),
                "'{letter}' both exact and absent"
            );
            assert!(
                !set.present().contains_key(letter),
                "'{letter}' both present and absent"
            );
        }
    }

    #[test]
    fn empty_log_gives_empty_set() {
        let set = derive(&[]);
        assert!(set.is_empty());
        assert_eq!(set, ConstraintSet::default());
    }

    #[test]
    fn single_correct_and_absents() {
        let set = derive(&[attempt("слива", "G----")]);

        assert_eq!(set.exact(), &BTreeMap::from([(0, 'с')]));
        assert!(set.present().is_empty());
        assert_eq!(set.absent_sorted(), vec!['а', 'в', 'и', 'л']);
        assert!(!set.is_empty());
    }

    #[test]
    fn present_collects_excluded_positions_across_attempts() {
        let set = derive(&[attempt("повар", "-Y---"), attempt("отвод", "Y----")]);

        assert_eq!(set.excluded_positions('о'), Some(&BTreeSet::from([0, 1])));
    }

    #[test]
    fn duplicate_letter_correct_suppresses_absent_in_same_guess() {
        // First А is correct, the later ones are flagged absent
        let set = derive(&[attempt("атака", "G----")]);

        assert_eq!(set.exact().get(&0), Some(&'а'));
        assert!(!set.absent().contains(&'а'));
        assert_eq!(set.absent_sorted(), vec!['к', 'т']);
        assert_precedence_holds(&set);
    }

    #[test]
    fn later_correct_overrides_earlier_absent() {
        let set = derive(&[attempt("песок", "-----"), attempt("ветер", "-G---")]);

        assert_eq!(set.exact().get(&1), Some(&'е'));
        assert!(!set.absent().contains(&'е'));
        assert!(set.absent().contains(&'п'));
        assert_precedence_holds(&set);
    }

    #[test]
    fn later_present_overrides_earlier_absent() {
        let set = derive(&[attempt("песок", "-----"), attempt("сетка", "Y----")]);

        assert_eq!(set.excluded_positions('с'), Some(&BTreeSet::from([0])));
        assert!(!set.absent().contains(&'с'));
        assert_precedence_holds(&set);
    }

    #[test]
    fn refinement_extends_present_letter() {
        let mut first = attempt("повар", "-Y---");
        first.toggle_refinement('о', 4);
        let set = derive(&[first]);

        assert_eq!(set.excluded_positions('о'), Some(&BTreeSet::from([1, 4])));
    }

    #[test]
    fn refinement_on_unconfirmed_letter_is_ignored() {
        let mut first = attempt("повар", "-Y---");
        first.toggle_refinement('п', 3);
        first.toggle_refinement('я', 0);
        let set = derive(&[first]);

        assert!(set.excluded_positions('п').is_none());
        assert!(set.excluded_positions('я').is_none());
        assert!(set.absent().contains(&'п'));
    }

    #[test]
    fn refinement_on_earlier_attempt_sees_later_present() {
        let mut first = attempt("песок", "-----");
        first.toggle_refinement('к', 2);
        let set = derive(&[first, attempt("кость", "Y----")]);

        assert_eq!(set.excluded_positions('к'), Some(&BTreeSet::from([0, 2])));
    }

    #[test]
    fn derive_is_idempotent() {
        let log = vec![
            attempt("слива", "G--Y-"),
            attempt("сувар", "GG---"),
            attempt("столб", "G-Y--"),
        ];
        assert_eq!(derive(&log), derive(&log));
    }

    #[test]
    fn precedence_holds_for_generated_logs() {
        let words = ["слива", "столб", "сушка", "повар", "ветер", "песок", "кость", "атака"];
        for answer in words {
            let answer = Word::new(answer).unwrap();
            let log: Vec<Attempt> = words
                .iter()
                .map(|guess| {
                    let guess = Word::new(*guess).unwrap();
                    let labels = labels_for(&guess, &answer);
                    Attempt::new(guess, labels)
                })
                .collect();
            assert_precedence_holds(&derive(&log));
        }
    }

    #[test]
    fn display_lists_constraints_one_based() {
        let set = derive(&[attempt("повар", "GY---")]);
        assert_eq!(set.to_string(), "exact [п@1] present [о!2] absent [авр]");
    }
}
