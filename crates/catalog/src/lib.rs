//! Solar-system planet catalog
//!
//! This crate provides the immutable planet records, the static
//! solar-system and trivia datasets, and an optional remote catalog
//! fetch (feature `remote`). Everything downstream (derived metrics,
//! explorer state) consumes the record shape defined here.

pub mod dataset;
pub mod facts;
pub mod planet;

#[cfg(feature = "remote")]
pub mod remote;

// Re-export key types at crate root
pub use dataset::solar_system_planets;
pub use facts::{space_facts, SpaceFact};
pub use planet::{fallback_semi_major_axis, Planet};

#[cfg(test)]
mod dataset_test;
