//! Permanent filter state that outlives a filter set

use serde::{Deserialize, Serialize};

use crate::filter::{FilterId, RangeBounds};

/// Externally persisted mirror of one filter's mutable state, keyed by id
///
/// Only the fields relevant to the filter's kind are ever populated; the
/// rest stay `None` and are skipped during serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PermanentSlice {
    pub id: FilterId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounds: Option<RangeBounds>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_values: Option<Vec<String>>,
}

impl PermanentSlice {
    /// An empty slice for the given filter id
    pub fn new(id: FilterId) -> Self {
        Self {
            id,
            value: None,
            bounds: None,
            check_values: None,
        }
    }
}

/// Storage for permanent filter slices
///
/// The filter set writes through to its store on every local update; the
/// store decides where the slices live (memory, a session file, ...).
pub trait PermanentStore {
    /// Fetch the slice stored for a filter id, if any
    fn get(&self, id: &FilterId) -> Option<PermanentSlice>;
    /// Store a slice, replacing any previous slice with the same id
    fn put(&mut self, slice: PermanentSlice);
    /// Drop every stored slice
    fn clear(&mut self);
}

/// In-memory permanent store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slices: Vec<PermanentSlice>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with existing slices
    pub fn with_slices(slices: Vec<PermanentSlice>) -> Self {
        Self { slices }
    }

    pub fn slices(&self) -> &[PermanentSlice] {
        &self.slices
    }
}

impl PermanentStore for MemoryStore {
    fn get(&self, id: &FilterId) -> Option<PermanentSlice> {
        self.slices.iter().find(|slice| &slice.id == id).cloned()
    }

    fn put(&mut self, slice: PermanentSlice) {
        match self.slices.iter().position(|s| s.id == slice.id) {
            Some(index) => self.slices[index] = slice,
            None => self.slices.push(slice),
        }
    }

    fn clear(&mut self) {
        self.slices.clear();
    }
}
