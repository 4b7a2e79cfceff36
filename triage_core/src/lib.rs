//! Triage core: a generic, declarative filter engine for in-memory datasets
//!
//! This crate provides a complete filtering pipeline over any dataset whose
//! items expose typed fields through the [`Record`] trait:
//! - [`FilterSpec`] describes one filterable dimension: what it tests, the
//!   kind of control it represents, and the control's current value state
//! - [`evaluate`] keeps the items satisfying every spec (logical AND)
//! - [`FilterSet`] owns the spec list, mediates updates, and mirrors every
//!   change into an optional [`PermanentStore`] so filter state survives
//!   across set lifetimes
//! - [`applied_filters`] derives a removable chip per active filter

pub mod evaluate;
pub mod filter;
pub mod record;
pub mod state;
pub mod summary;

// Re-export the public surface at the crate root
pub use evaluate::evaluate;
pub use filter::{
    Bound, FilterError, FilterId, FilterKey, FilterKind, FilterSpec, RangeBounds, SelectOption,
    SelectSource, TextMatch,
};
pub use record::{FieldId, FieldValue, Record};
pub use state::{FilterSet, MemoryStore, PermanentSlice, PermanentStore};
pub use summary::{AppliedFilter, applied_filters};
