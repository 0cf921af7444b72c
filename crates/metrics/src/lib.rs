//! Derived planetary metrics
//!
//! Pure functions mapping catalog records to the quantities the
//! presentation layer renders: habitability score, volume, density,
//! surface gravity, orbital velocity, solar irradiance and temperature
//! classification. Everything except the habitability score is cheap
//! enough to recompute on demand; the score is sampled once per session
//! from an explicit RNG and cached by the caller.

pub mod derived;
pub mod habitability;
pub mod temperature;

// Re-export key types at crate root
pub use derived::{
    density, derived_metrics, orbital_velocity, solar_irradiance, surface_gravity, volume,
    DerivedMetrics,
};
pub use habitability::{habitability_score, score_catalog, EARTH_TEMPERATURE_K};
pub use temperature::TemperatureClass;

#[cfg(test)]
mod derived_test;
#[cfg(test)]
mod habitability_test;
