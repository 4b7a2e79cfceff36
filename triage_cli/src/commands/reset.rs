//! The reset command: clear every filter and the saved session

use std::path::PathBuf;

use triage_core::FilterSet;

use crate::errors::CliError;
use crate::findings::finding_filters;
use crate::session::SessionStore;
use crate::ui;

/// Resets every filter and clears the persisted session.
pub fn reset_filters(session_path: &PathBuf) -> Result<(), CliError> {
    ui::header("Resetting filters");

    let store = SessionStore::load(session_path.clone())?;
    let mut set = FilterSet::with_store(finding_filters(), store);
    set.reset_all();

    ui::success("All filters cleared");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use triage_core::{FilterId, PermanentSlice, PermanentStore};

    #[test]
    fn test_reset_empties_the_session_file() {
        let dir = TempDir::new().unwrap();
        let session = dir.path().join("session.json");

        let mut store = SessionStore::load(session.clone()).unwrap();
        store.put(PermanentSlice {
            value: Some("open".to_string()),
            ..PermanentSlice::new(FilterId::new("state"))
        });

        reset_filters(&session).unwrap();

        let reloaded = SessionStore::load(session).unwrap();
        assert!(reloaded.get(&FilterId::new("state")).is_none());
    }
}
