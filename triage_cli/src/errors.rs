//! Error types for the Triage CLI

use std::path::PathBuf;
use std::{fmt, io};

use triage_core::FilterError;

/// Defines the errors you might encounter running the CLI.
#[derive(Debug)]
pub enum CliError {
    IoError(io::Error),
    DatasetError(PathBuf, String),
    SessionError(PathBuf, String),
    FilterError(FilterError),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::IoError(error) => {
                write!(f, "There was a problem reading files: {}", error)
            }
            CliError::DatasetError(path, error) => write!(
                f,
                "Dataset at {} could not be read: {}",
                path.display(),
                error
            ),
            CliError::SessionError(path, error) => write!(
                f,
                "Session file at {} is not usable: {}\n\nRun 'triage reset' to start a fresh session.",
                path.display(),
                error
            ),
            CliError::FilterError(error) => write!(f, "Filter configuration error: {}", error),
        }
    }
}

impl std::error::Error for CliError {}

impl From<io::Error> for CliError {
    fn from(error: io::Error) -> Self {
        CliError::IoError(error)
    }
}

impl From<FilterError> for CliError {
    fn from(error: FilterError) -> Self {
        CliError::FilterError(error)
    }
}
