//! Filter type definitions

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::record::FieldId;

/// Identifies one filter within a filter set
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FilterId(String);

impl FilterId {
    /// Create a new filter id
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FilterId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for FilterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Comparison mode for text and select filters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextMatch {
    /// Exact equality
    CaseSensitive,
    /// Equality after lowercasing both sides
    CaseInsensitive,
    /// Substring containment
    IncludesSensitive,
    /// Substring containment after lowercasing both sides
    #[default]
    IncludesInsensitive,
    /// Membership in a list field
    IncludesInArray,
}

/// One side of a range filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Min,
    Max,
}

/// Optional lower/upper bounds of a range filter, both inclusive
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RangeBounds {
    min: Option<String>,
    max: Option<String>,
}

impl RangeBounds {
    /// Create bounds from raw strings; empty sides are treated as unset
    pub fn new(min: &str, max: &str) -> Self {
        Self {
            min: non_empty(min),
            max: non_empty(max),
        }
    }

    pub fn min(&self) -> Option<&str> {
        self.min.as_deref()
    }

    pub fn max(&self) -> Option<&str> {
        self.max.as_deref()
    }

    pub fn get(&self, bound: Bound) -> Option<&str> {
        match bound {
            Bound::Min => self.min(),
            Bound::Max => self.max(),
        }
    }

    /// Replace one side, preserving the other; an empty value unsets the side
    pub fn set(&mut self, bound: Bound, value: &str) {
        match bound {
            Bound::Min => self.min = non_empty(value),
            Bound::Max => self.max = non_empty(value),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }
}

/// A resolved select/check-box choice: display header plus raw value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub header: String,
    pub value: String,
}

impl SelectOption {
    /// Create an option with a display header and a raw value
    pub fn new(header: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            value: value.into(),
        }
    }
}

impl From<&str> for SelectOption {
    /// A raw string option displays as itself
    fn from(value: &str) -> Self {
        Self::new(value, value)
    }
}

/// Where a filter's choices come from
pub enum SelectSource<T> {
    /// No predefined choices
    None,
    /// A fixed list of choices
    Static(Vec<SelectOption>),
    /// Choices derived from the current dataset
    Derived(Arc<dyn Fn(&[T]) -> Vec<SelectOption> + Send + Sync>),
}

impl<T> SelectSource<T> {
    /// Resolve the choices into mapped options for one pass
    pub fn resolve(&self, dataset: &[T]) -> Vec<SelectOption> {
        match self {
            SelectSource::None => Vec::new(),
            SelectSource::Static(options) => options.clone(),
            SelectSource::Derived(derive) => derive(dataset),
        }
    }
}

impl<T> Clone for SelectSource<T> {
    fn clone(&self) -> Self {
        match self {
            SelectSource::None => SelectSource::None,
            SelectSource::Static(options) => SelectSource::Static(options.clone()),
            SelectSource::Derived(derive) => SelectSource::Derived(Arc::clone(derive)),
        }
    }
}

impl<T> Default for SelectSource<T> {
    fn default() -> Self {
        SelectSource::None
    }
}

impl<T> fmt::Debug for SelectSource<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectSource::None => write!(f, "None"),
            SelectSource::Static(options) => f.debug_tuple("Static").field(options).finish(),
            SelectSource::Derived(_) => write!(f, "Derived(..)"),
        }
    }
}

/// What a filter tests: a record field or a custom predicate
///
/// A predicate key bypasses kind-specific matching entirely; the closure
/// receives the raw scalar value and range bounds and decides alone.
pub enum FilterKey<T> {
    /// Test a field of the record by id
    Field(FieldId),
    /// Custom test over the whole item
    Predicate(Arc<dyn Fn(&T, Option<&str>, Option<&RangeBounds>) -> bool + Send + Sync>),
}

impl<T> Clone for FilterKey<T> {
    fn clone(&self) -> Self {
        match self {
            FilterKey::Field(id) => FilterKey::Field(id.clone()),
            FilterKey::Predicate(predicate) => FilterKey::Predicate(Arc::clone(predicate)),
        }
    }
}

impl<T> fmt::Debug for FilterKey<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterKey::Field(id) => f.debug_tuple("Field").field(id).finish(),
            FilterKey::Predicate(_) => write!(f, "Predicate(..)"),
        }
    }
}

impl<T> From<&str> for FilterKey<T> {
    fn from(field: &str) -> Self {
        FilterKey::Field(FieldId::new(field))
    }
}

/// Kind of filter control plus its current value state
///
/// Each variant carries exactly the state its evaluator and formatter need,
/// so kind dispatch is exhaustive and a filter can never silently fall back
/// to text behavior.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterKind {
    Text { value: Option<String>, mode: TextMatch },
    Number { value: Option<String> },
    NumberRange { bounds: RangeBounds },
    DateRange { bounds: RangeBounds },
    Select { value: Option<String>, mode: TextMatch },
    CheckBoxes { values: Vec<String> },
}

impl FilterKind {
    /// An empty text filter with the default match mode
    pub fn text() -> Self {
        FilterKind::Text {
            value: None,
            mode: TextMatch::default(),
        }
    }

    /// An empty text filter with an explicit match mode
    pub fn text_matching(mode: TextMatch) -> Self {
        FilterKind::Text { value: None, mode }
    }

    /// An empty number filter
    pub fn number() -> Self {
        FilterKind::Number { value: None }
    }

    /// An empty number range filter
    pub fn number_range() -> Self {
        FilterKind::NumberRange {
            bounds: RangeBounds::default(),
        }
    }

    /// An empty date range filter
    pub fn date_range() -> Self {
        FilterKind::DateRange {
            bounds: RangeBounds::default(),
        }
    }

    /// An empty select filter with the default match mode
    pub fn select() -> Self {
        FilterKind::Select {
            value: None,
            mode: TextMatch::default(),
        }
    }

    /// An empty check-box filter
    pub fn check_boxes() -> Self {
        FilterKind::CheckBoxes { values: Vec::new() }
    }

    /// Returns the kind name for display and error messages
    pub fn name(&self) -> &'static str {
        match self {
            FilterKind::Text { .. } => "text",
            FilterKind::Number { .. } => "number",
            FilterKind::NumberRange { .. } => "number range",
            FilterKind::DateRange { .. } => "date range",
            FilterKind::Select { .. } => "select",
            FilterKind::CheckBoxes { .. } => "check boxes",
        }
    }

    /// Whether this filter currently has an effective value
    pub fn is_active(&self) -> bool {
        match self {
            FilterKind::Text { value, .. }
            | FilterKind::Number { value }
            | FilterKind::Select { value, .. } => value.is_some(),
            FilterKind::NumberRange { bounds } | FilterKind::DateRange { bounds } => {
                !bounds.is_empty()
            }
            FilterKind::CheckBoxes { values } => !values.is_empty(),
        }
    }

    /// Current scalar value of a text, number or select filter
    pub fn scalar_value(&self) -> Option<&str> {
        match self {
            FilterKind::Text { value, .. }
            | FilterKind::Number { value }
            | FilterKind::Select { value, .. } => value.as_deref(),
            _ => None,
        }
    }

    /// Current bounds of a range filter
    pub fn bounds(&self) -> Option<&RangeBounds> {
        match self {
            FilterKind::NumberRange { bounds } | FilterKind::DateRange { bounds } => Some(bounds),
            _ => None,
        }
    }

    /// Current selection of a check-box filter
    pub fn check_values(&self) -> Option<&[String]> {
        match self {
            FilterKind::CheckBoxes { values } => Some(values.as_slice()),
            _ => None,
        }
    }

    /// Reset this filter to its empty state
    pub fn clear(&mut self) {
        match self {
            FilterKind::Text { value, .. }
            | FilterKind::Number { value }
            | FilterKind::Select { value, .. } => *value = None,
            FilterKind::NumberRange { bounds } | FilterKind::DateRange { bounds } => {
                *bounds = RangeBounds::default()
            }
            FilterKind::CheckBoxes { values } => values.clear(),
        }
    }
}

/// Normalize a raw input value; empty strings mean "unset"
pub(crate) fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
