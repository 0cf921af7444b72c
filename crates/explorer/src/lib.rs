//! Catalog explorer state
//!
//! This crate owns the "current view" of the planet catalog: selection,
//! search filter, sort order, view mode and navigation, plus the
//! transient comparison session opened from the active selection. All
//! transitions are synchronous and single-writer; edge cases (unknown
//! ids, empty catalogs, degenerate arithmetic) degrade to inert states
//! rather than erroring.

pub mod comparison;
pub mod explorer;

// Re-export key types at crate root
pub use comparison::{
    percent_difference, ChartBar, ComparisonRow, ComparisonSession, ComparisonTab, RowValue,
};
pub use explorer::{Direction, Explorer, ScoredPlanet, SortKey, ViewMode};
