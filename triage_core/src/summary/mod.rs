//! Applied-filters summary
//!
//! Derives one removable chip per filter with an effective value. The
//! formatting rules mirror the evaluator's semantics but stand on their own
//! so either side can change under test without hiding a drift in the other.

pub mod format;

use std::fmt;

use crate::filter::{FilterId, FilterKind, FilterSpec};
use format::{format_check_values, format_date_range, format_number_range, format_value};

/// A removable token summarizing one active filter
#[derive(Debug, Clone, PartialEq)]
pub struct AppliedFilter {
    pub id: FilterId,
    pub label: String,
    pub value: String,
}

impl fmt::Display for AppliedFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.label, self.value)
    }
}

/// Derive the chip list for the current filter state
///
/// A chip exists exactly when the kind's formatter yields a value; the
/// dataset is only consulted to resolve derived select options.
pub fn applied_filters<T>(specs: &[FilterSpec<T>], dataset: &[T]) -> Vec<AppliedFilter> {
    specs
        .iter()
        .filter_map(|spec| {
            let value = match &spec.kind {
                FilterKind::NumberRange { bounds } => format_number_range(bounds),
                FilterKind::DateRange { bounds } => format_date_range(bounds),
                FilterKind::CheckBoxes { values } => {
                    format_check_values(values, &spec.resolved_options(dataset))
                }
                FilterKind::Text { value, .. }
                | FilterKind::Number { value }
                | FilterKind::Select { value, .. } => value
                    .as_deref()
                    .and_then(|value| format_value(value, &spec.resolved_options(dataset))),
            }?;

            Some(AppliedFilter {
                id: spec.id.clone(),
                label: spec.label.clone(),
                value,
            })
        })
        .collect()
}
