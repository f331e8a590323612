//! Orchestration between the engine, the draft and persistence
//!
//! Every mutation recomputes the constraint set before returning, so callers
//! never observe a log and a constraint set that disagree. Changes to the log
//! save the log together with the current draft; a failed save is logged and
//! the in-memory session carries on.

use crate::config::Settings;
use crate::core::{Attempt, Draft, Feedback, Word};
use crate::engine::{
    AttemptId, AttemptLog, AttemptSelector, ConstraintSet, filter, letter_states,
};
use crate::error::Result;
use crate::state::{PersistedState, StateStore};
use log::{info, warn};
use std::collections::{BTreeMap, BTreeSet};

/// Result of filtering the dictionary against the current log
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterOutcome<'a> {
    /// Nothing has been guessed yet
    NoAttempts,
    /// Guesses exist but no dictionary word satisfies them
    NoMatches,
    Matches(Vec<&'a Word>),
}

pub struct Session {
    dictionary: Vec<Word>,
    log: AttemptLog,
    draft: Draft,
    constraints: ConstraintSet,
    settings: Settings,
    store: Option<StateStore>,
}

impl Session {
    /// Session backed by the state file named in `settings`
    #[must_use]
    pub fn open(dictionary: Vec<Word>, settings: Settings) -> Self {
        let store = StateStore::new(settings.state_path.clone());
        let PersistedState { attempts, draft } = store.load();
        let log = AttemptLog::from(attempts);
        let mut session = Self::with_state(dictionary, settings, log, draft);
        session.store = Some(store);
        session
    }

    /// Session that never touches the filesystem
    #[must_use]
    pub fn ephemeral(dictionary: Vec<Word>, settings: Settings) -> Self {
        Self::with_state(dictionary, settings, AttemptLog::new(), Draft::new())
    }

    fn with_state(
        dictionary: Vec<Word>,
        settings: Settings,
        log: AttemptLog,
        draft: Draft,
    ) -> Self {
        let constraints = log.constraints();
        info!(
            "session ready: {} dictionary words, {} attempts",
            dictionary.len(),
            log.len()
        );
        Self {
            dictionary,
            log,
            draft,
            constraints,
            settings,
            store: None,
        }
    }

    #[must_use]
    pub fn dictionary(&self) -> &[Word] {
        &self.dictionary
    }

    #[must_use]
    pub fn attempts(&self) -> &[Attempt] {
        self.log.attempts()
    }

    #[must_use]
    pub const fn draft(&self) -> &Draft {
        &self.draft
    }

    #[must_use]
    pub const fn constraints(&self) -> &ConstraintSet {
        &self.constraints
    }

    #[must_use]
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Best label per guessed letter, for the keyboard summary
    #[must_use]
    pub fn letter_states(&self) -> BTreeMap<char, Feedback> {
        letter_states(self.log.attempts())
    }

    /// Type a letter into the draft
    pub fn input_letter(&mut self, letter: char) -> Option<usize> {
        self.draft.input_letter(letter)
    }

    /// Remove the last typed letter
    pub fn backspace(&mut self) -> Option<usize> {
        self.draft.backspace()
    }

    /// Cycle the label of a draft cell
    pub fn cycle_label(&mut self, index: usize) -> Option<Feedback> {
        self.draft.cycle(index)
    }

    /// Turn the draft into an attempt and append it
    ///
    /// # Errors
    ///
    /// Returns `HelperError::IncompleteDraft` while letters are missing.
    pub fn submit_draft(&mut self) -> Result<AttemptId> {
        let attempt = self.draft.to_attempt()?;
        self.draft.clear();
        Ok(self.add_attempt(attempt))
    }

    /// Append a finalized attempt
    pub fn add_attempt(&mut self, attempt: Attempt) -> AttemptId {
        let id = self.log.append(attempt);
        self.recompute();
        self.persist();
        id
    }

    /// Toggle an excluded position on the attempt picked by `selector`
    ///
    /// # Errors
    ///
    /// Returns `HelperError::UnknownAttempt` or `HelperError::InvalidPosition`
    /// from the log; the log is unchanged in that case.
    pub fn toggle_refinement(
        &mut self,
        selector: AttemptSelector<'_>,
        letter: char,
        position: usize,
    ) -> Result<bool> {
        let excluded = self.log.record_refinement(selector, letter, position)?;
        self.recompute();
        self.persist();
        Ok(excluded)
    }

    /// Toggle a refinement entered on attempt `id`, resolved through the
    /// configured keying
    ///
    /// # Errors
    ///
    /// Same as [`Session::toggle_refinement`].
    pub fn toggle_refinement_at(
        &mut self,
        id: AttemptId,
        letter: char,
        position: usize,
    ) -> Result<bool> {
        let word = self.word_at(id);
        let selector = self.settings.refinement_keying.selector(&word, id);
        self.toggle_refinement(selector, letter, position)
    }

    /// Excluded positions visible from attempt `id` under the configured keying
    #[must_use]
    pub fn excluded_positions_at(&self, id: AttemptId, letter: char) -> BTreeSet<usize> {
        let word = self.word_at(id);
        let selector = self.settings.refinement_keying.selector(&word, id);
        self.log.excluded_positions(selector, letter)
    }

    /// Forget every attempt and the draft, and delete the saved state
    pub fn reset(&mut self) {
        self.log.clear();
        self.draft.clear();
        self.recompute();
        if let Some(store) = &self.store
            && let Err(e) = store.clear()
        {
            warn!("cannot delete saved state {}: {e}", store.path().display());
        }
        info!("session reset");
    }

    /// Dictionary words consistent with the log
    #[must_use]
    pub fn outcome(&self) -> FilterOutcome<'_> {
        if self.log.is_empty() {
            return FilterOutcome::NoAttempts;
        }
        let matches = filter(&self.dictionary, &self.constraints);
        if matches.is_empty() {
            FilterOutcome::NoMatches
        } else {
            FilterOutcome::Matches(matches)
        }
    }

    fn word_at(&self, id: AttemptId) -> String {
        self.log
            .get(id)
            .map(|attempt| attempt.word().text().to_string())
            .unwrap_or_default()
    }

    fn recompute(&mut self) {
        self.constraints = self.log.constraints();
    }

    /// Save the log and draft; a failed save keeps the in-memory session
    fn persist(&self) {
        let Some(store) = &self.store else {
            return;
        };
        let state = PersistedState {
            attempts: self.log.attempts().to_vec(),
            draft: self.draft.clone(),
        };
        if let Err(e) = store.save(&state) {
            warn!("cannot save state to {}: {e}", store.path().display());
        }
    }
}
