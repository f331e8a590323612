//! Persisted state
//!
//! The attempt log and the in-progress draft, stored as one JSON document.
//! Loading never fails: a missing, unreadable or malformed document degrades
//! to an empty state.

use crate::core::{Attempt, Draft};
use crate::error::Result;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedState {
    pub attempts: Vec<Attempt>,
    #[serde(default)]
    pub draft: Draft,
}

/// File-backed store for [`PersistedState`]
#[derive(Debug, Clone)]
pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored state
    #[must_use]
    pub fn load(&self) -> PersistedState {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("no saved state at {}, starting fresh", self.path.display());
                return PersistedState::default();
            }
            Err(e) => {
                warn!("cannot read state {}: {e}", self.path.display());
                return PersistedState::default();
            }
        };

        match serde_json::from_str::<PersistedState>(&content) {
            Ok(state) => {
                info!(
                    "restored {} attempts from {}",
                    state.attempts.len(),
                    self.path.display()
                );
                state
            }
            Err(e) => {
                warn!("discarding malformed state {}: {e}", self.path.display());
                PersistedState::default()
            }
        }
    }

    /// Write `state`, replacing the previous document atomically
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or any filesystem step fails.
    pub fn save(&self, state: &PersistedState) -> Result<()> {
        let json = serde_json::to_string_pretty(state)?;
        let tmp = self.temp_path();
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        debug!(
            "saved {} attempts to {}",
            state.attempts.len(),
            self.path.display()
        );
        Ok(())
    }

    /// Delete the stored document; a missing file is not an error
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be removed.
    pub fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                info!("cleared saved state {}", self.path.display());
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(std::ffi::OsStr::to_os_string)
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
