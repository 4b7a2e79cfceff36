//! Session-backed permanent filter storage
//!
//! Filter state set in one invocation is visible in the next, the way the
//! dashboard keeps per-column filters in session storage.

use std::fs;
use std::path::PathBuf;

use log::{debug, warn};

use triage_core::{FilterId, PermanentSlice, PermanentStore};

use crate::errors::CliError;

/// Stores permanent filter slices in a JSON file between invocations
///
/// Every mutation writes straight through to disk, so a session is never
/// lost to an aborted run.
pub struct SessionStore {
    path: PathBuf,
    slices: Vec<PermanentSlice>,
}

impl SessionStore {
    /// Load the session file, starting empty when there is none yet
    pub fn load(path: PathBuf) -> Result<Self, CliError> {
        let slices = match fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw)
                .map_err(|error| CliError::SessionError(path.clone(), error.to_string()))?,
            Err(_) => Vec::new(),
        };

        debug!("Loaded {} filter slices from {}", slices.len(), path.display());
        Ok(Self { path, slices })
    }

    fn flush(&self) {
        let raw = match serde_json::to_string_pretty(&self.slices) {
            Ok(raw) => raw,
            Err(error) => {
                warn!("Could not serialize session state: {}", error);
                return;
            }
        };

        if let Err(error) = fs::write(&self.path, raw) {
            warn!(
                "Could not write session file {}: {}",
                self.path.display(),
                error
            );
        }
    }
}

impl PermanentStore for SessionStore {
    fn get(&self, id: &FilterId) -> Option<PermanentSlice> {
        self.slices.iter().find(|slice| &slice.id == id).cloned()
    }

    fn put(&mut self, slice: PermanentSlice) {
        match self.slices.iter().position(|s| s.id == slice.id) {
            Some(index) => self.slices[index] = slice,
            None => self.slices.push(slice),
        }
        self.flush();
    }

    fn clear(&mut self) {
        self.slices.clear();
        self.flush();
    }
}
