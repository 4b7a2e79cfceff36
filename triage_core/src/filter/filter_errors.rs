//! Error types for filter evaluation

use std::fmt;

use super::types::FilterId;
use crate::record::FieldId;

/// Errors that can occur while matching filters against a dataset
///
/// Malformed numeric or date inputs never error; they silently exclude the
/// affected items. The only failure surfaced is a filter configured against
/// a field of the wrong shape.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterError {
    /// An includes-in-array filter targeted a field that is not a list
    NotAList {
        filter: FilterId,
        field: FieldId,
        actual: &'static str,
    },
}

impl fmt::Display for FilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterError::NotAList {
                filter,
                field,
                actual,
            } => {
                write!(
                    f,
                    "Filter '{}' expects field '{}' to hold a list, found {}",
                    filter, field, actual
                )
            }
        }
    }
}

impl std::error::Error for FilterError {}
