//! Command implementations for the Triage CLI

mod filters;
mod list;
mod reset;

pub use filters::show_filters;
pub use list::list_findings;
pub use reset::reset_filters;

use std::fs;
use std::path::{Path, PathBuf};

use triage_core::FilterSet;

use crate::errors::CliError;
use crate::findings::{Finding, finding_filters};
use crate::session::SessionStore;

/// Read a findings dataset from a JSON file.
fn load_findings(path: &Path) -> Result<Vec<Finding>, CliError> {
    let raw = fs::read_to_string(path)
        .map_err(|error| CliError::DatasetError(path.to_path_buf(), error.to_string()))?;
    serde_json::from_str(&raw)
        .map_err(|error| CliError::DatasetError(path.to_path_buf(), error.to_string()))
}

/// Build the findings filter set, hydrated from the session file.
fn open_filter_set(session_path: &PathBuf) -> Result<FilterSet<Finding>, CliError> {
    let store = SessionStore::load(session_path.clone())?;
    Ok(FilterSet::with_store(finding_filters(), store))
}
