//! Filter state controller
//!
//! Owns the mutable state of a list of filter specifications, mediates
//! updates from the consuming surface, and mirrors every change into an
//! optional permanent store so filter state survives across set lifetimes.

mod permanent;

// Re-export types
pub use permanent::*;

use log::debug;

use crate::evaluate::evaluate;
use crate::filter::{Bound, FilterError, FilterId, FilterKind, FilterSpec};
use crate::record::Record;
use crate::summary::{self, AppliedFilter};

/// Owns a set of filter specifications and their lifecycle
///
/// Local spec state is the source of truth while the set lives; the
/// permanent store is a write-through mirror keyed by filter id, updated in
/// the same operation as the local change. Hydration from the store happens
/// once, at construction: the set owns its store afterwards, so later
/// external writes cannot be observed mid-session.
pub struct FilterSet<T> {
    specs: Vec<FilterSpec<T>>,
    store: Option<Box<dyn PermanentStore>>,
    panel_open: bool,
}

impl<T: Record> FilterSet<T> {
    /// Create a filter set with no permanent storage
    pub fn new(specs: Vec<FilterSpec<T>>) -> Self {
        Self {
            specs,
            store: None,
            panel_open: false,
        }
    }

    /// Create a filter set hydrated from a permanent store
    ///
    /// Each spec whose id has a stored slice starts from that slice's state;
    /// specs without one keep their initial state.
    pub fn with_store(specs: Vec<FilterSpec<T>>, store: impl PermanentStore + 'static) -> Self {
        let specs = specs
            .into_iter()
            .map(|mut spec| {
                if let Some(slice) = store.get(&spec.id) {
                    apply_slice(&mut spec.kind, &slice);
                }
                spec
            })
            .collect();

        Self {
            specs,
            store: Some(Box::new(store)),
            panel_open: false,
        }
    }

    /// Show the filter panel; filter values are untouched
    pub fn open_panel(&mut self) {
        self.panel_open = true;
    }

    /// Hide the filter panel; filter values are untouched
    pub fn close_panel(&mut self) {
        self.panel_open = false;
    }

    pub fn is_panel_open(&self) -> bool {
        self.panel_open
    }

    /// Update the scalar value of a text, number or select filter
    ///
    /// An empty value clears the filter. Other specs are untouched.
    pub fn set_value(&mut self, id: &FilterId, value: &str) {
        self.update(id, |kind| match kind {
            FilterKind::Text { value: current, .. }
            | FilterKind::Number { value: current }
            | FilterKind::Select { value: current, .. } => {
                *current = crate::filter::non_empty(value);
                true
            }
            _ => false,
        });
    }

    /// Update one side of a range filter, preserving the other side
    pub fn set_range_bound(&mut self, id: &FilterId, bound: Bound, value: &str) {
        self.update(id, |kind| match kind {
            FilterKind::NumberRange { bounds } | FilterKind::DateRange { bounds } => {
                bounds.set(bound, value);
                true
            }
            _ => false,
        });
    }

    /// Toggle one value's membership in a check-box filter
    pub fn toggle_check_value(&mut self, id: &FilterId, value: &str) {
        self.update(id, |kind| match kind {
            FilterKind::CheckBoxes { values } => {
                match values.iter().position(|v| v == value) {
                    Some(index) => {
                        values.remove(index);
                    }
                    None => values.push(value.to_string()),
                }
                true
            }
            _ => false,
        });
    }

    /// Reset one filter to its empty state, leaving all others untouched
    pub fn clear_filter(&mut self, id: &FilterId) {
        self.update(id, |kind| {
            kind.clear();
            true
        });
    }

    /// Reset every filter in one pass and empty the permanent store
    pub fn reset_all(&mut self) {
        let mut specs = self.specs.clone();
        for spec in &mut specs {
            spec.kind.clear();
        }
        self.specs = specs;

        if let Some(store) = self.store.as_mut() {
            store.clear();
        }
    }

    /// Apply the current filters to a dataset
    pub fn evaluate<'a>(&self, dataset: &'a [T]) -> Result<Vec<&'a T>, FilterError> {
        evaluate(dataset, &self.specs)
    }

    /// Derive the applied-filter chips for the current state
    pub fn applied_filters(&self, dataset: &[T]) -> Vec<AppliedFilter> {
        summary::applied_filters(&self.specs, dataset)
    }

    pub fn specs(&self) -> &[FilterSpec<T>] {
        &self.specs
    }

    pub fn spec(&self, id: &FilterId) -> Option<&FilterSpec<T>> {
        self.specs.iter().find(|spec| &spec.id == id)
    }

    /// Hand the permanent store back to the caller at teardown
    pub fn into_store(self) -> Option<Box<dyn PermanentStore>> {
        self.store
    }

    /// Apply one change to the spec matching `id`, then mirror it
    ///
    /// The spec list is rebuilt and swapped in whole, so a reader between
    /// operations only ever sees fully-applied state. Unknown ids and
    /// updates a kind does not support are ignored.
    fn update(&mut self, id: &FilterId, apply: impl FnOnce(&mut FilterKind) -> bool) {
        let Some(index) = self.specs.iter().position(|spec| &spec.id == id) else {
            debug!("Ignoring update for unknown filter '{}'", id);
            return;
        };

        let mut specs = self.specs.clone();
        if !apply(&mut specs[index].kind) {
            debug!(
                "Filter '{}' ({}) does not support this update",
                id,
                specs[index].kind.name()
            );
            return;
        }

        let slice = slice_of(&specs[index]);
        self.specs = specs;
        self.mirror(slice);
    }

    fn mirror(&mut self, slice: PermanentSlice) {
        if let Some(store) = self.store.as_mut() {
            store.put(slice);
        }
    }
}

/// Seed a filter kind's state from a stored slice
fn apply_slice(kind: &mut FilterKind, slice: &PermanentSlice) {
    match kind {
        FilterKind::Text { value, .. }
        | FilterKind::Number { value }
        | FilterKind::Select { value, .. } => {
            if let Some(stored) = &slice.value {
                *value = Some(stored.clone());
            }
        }
        FilterKind::NumberRange { bounds } | FilterKind::DateRange { bounds } => {
            if let Some(stored) = &slice.bounds {
                *bounds = stored.clone();
            }
        }
        FilterKind::CheckBoxes { values } => {
            if let Some(stored) = &slice.check_values {
                *values = stored.clone();
            }
        }
    }
}

/// Snapshot a spec's current state as its permanent slice
fn slice_of<T>(spec: &FilterSpec<T>) -> PermanentSlice {
    let mut slice = PermanentSlice::new(spec.id.clone());
    match &spec.kind {
        FilterKind::Text { value, .. }
        | FilterKind::Number { value }
        | FilterKind::Select { value, .. } => slice.value = value.clone(),
        FilterKind::NumberRange { bounds } | FilterKind::DateRange { bounds } => {
            slice.bounds = Some(bounds.clone())
        }
        FilterKind::CheckBoxes { values } => slice.check_values = Some(values.clone()),
    }
    slice
}
