//! Filter specifications and matching logic

mod checkbox;
mod date;
mod filter_errors;
mod number;
mod text;
mod types;

// Re-export types
pub use filter_errors::FilterError;
pub use types::*;

pub(crate) use types::non_empty;

use std::sync::Arc;

use convert_case::{Case, Casing};

use crate::record::{FieldId, Record};

/// One filterable dimension over a dataset
///
/// A spec pairs a stable id and display label with what it tests (a record
/// field or a custom predicate), the kind of control it represents, and the
/// control's current value state.
#[derive(Debug)]
pub struct FilterSpec<T> {
    pub id: FilterId,
    pub label: String,
    pub key: FilterKey<T>,
    pub kind: FilterKind,
    pub options: SelectSource<T>,
}

// Not derived: a derived impl would demand `T: Clone`, but cloning a spec
// never clones dataset items
impl<T> Clone for FilterSpec<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            label: self.label.clone(),
            key: self.key.clone(),
            kind: self.kind.clone(),
            options: self.options.clone(),
        }
    }
}

impl<T> FilterSpec<T> {
    /// Create a spec on the record field named by `id`, deriving the label
    pub fn new(id: impl Into<String>, kind: FilterKind) -> Self {
        let id = id.into();
        let label = id.to_case(Case::Title);
        Self {
            key: FilterKey::Field(FieldId::new(id.clone())),
            id: FilterId::new(id),
            label,
            kind,
            options: SelectSource::None,
        }
    }

    /// Override the derived display label
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Target a different record field than the one named by the id
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.key = FilterKey::Field(FieldId::new(field.into()));
        self
    }

    /// Replace the field lookup with a custom predicate
    ///
    /// The predicate receives the item plus the spec's current scalar value
    /// and range bounds, and its verdict is authoritative: kind-specific
    /// matching is bypassed entirely.
    pub fn with_predicate(
        mut self,
        predicate: impl Fn(&T, Option<&str>, Option<&RangeBounds>) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.key = FilterKey::Predicate(Arc::new(predicate));
        self
    }

    /// Attach a fixed list of select/check-box choices
    pub fn with_options(mut self, options: Vec<SelectOption>) -> Self {
        self.options = SelectSource::Static(options);
        self
    }

    /// Derive the select/check-box choices from the dataset
    pub fn with_derived_options(
        mut self,
        derive: impl Fn(&[T]) -> Vec<SelectOption> + Send + Sync + 'static,
    ) -> Self {
        self.options = SelectSource::Derived(Arc::new(derive));
        self
    }

    /// Resolve this spec's choices into mapped options for one pass
    pub fn resolved_options(&self, dataset: &[T]) -> Vec<SelectOption> {
        self.options.resolve(dataset)
    }
}

impl<T: Record> FilterSpec<T> {
    /// Check if an item matches this filter's current state
    pub fn matches(&self, item: &T) -> Result<bool, FilterError> {
        match &self.key {
            FilterKey::Predicate(predicate) => Ok(predicate(
                item,
                self.kind.scalar_value(),
                self.kind.bounds(),
            )),
            FilterKey::Field(field_id) => self.matches_field(item, field_id),
        }
    }

    fn matches_field(&self, item: &T, field_id: &FieldId) -> Result<bool, FilterError> {
        // A filter without an effective value excludes nothing
        if !self.kind.is_active() {
            return Ok(true);
        }

        let field_value = match item.field(field_id) {
            Some(value) => value,
            None => return Ok(false), // Field doesn't exist, active filter fails
        };

        match &self.kind {
            FilterKind::Text { value, mode } | FilterKind::Select { value, mode } => {
                let filter_value = value.as_deref().unwrap_or_default();
                text::match_text(&self.id, field_id, &field_value, filter_value, *mode)
            }
            FilterKind::Number { value } => {
                let filter_value = value.as_deref().unwrap_or_default();
                Ok(number::match_number(&field_value, filter_value))
            }
            FilterKind::NumberRange { bounds } => {
                Ok(number::match_number_range(&field_value, bounds))
            }
            FilterKind::DateRange { bounds } => Ok(date::match_date_range(&field_value, bounds)),
            FilterKind::CheckBoxes { values } => {
                Ok(checkbox::match_check_values(&field_value, values))
            }
        }
    }
}
