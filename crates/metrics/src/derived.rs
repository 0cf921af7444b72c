//! Derived physical and orbital quantities
//!
//! Closed-form approximations over catalog records. All quantities are
//! Earth-normalized except orbital velocity, which keeps the catalog's
//! historical constant scaling. Non-finite inputs propagate; validating
//! catalog data is the provider's responsibility.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

use catalog::Planet;

use crate::temperature::TemperatureClass;

/// One AU in millions of kilometers
const AU_IN_MILLION_KM: f64 = 149.6;

/// Seconds per day
const SECONDS_PER_DAY: f64 = 86_400.0;

/// Volume in Earth-radii³ from a radius in Earth radii
pub fn volume(radius: f64) -> f64 {
    4.0 / 3.0 * PI * radius.powi(3)
}

/// Mean density in relative units, mass over volume
pub fn density(mass: f64, radius: f64) -> f64 {
    mass / volume(radius)
}

/// Surface gravity in relative units (Earth ≈ 1 g), mass over radius²
pub fn surface_gravity(mass: f64, radius: f64) -> f64 {
    mass / radius.powi(2)
}

/// Mean orbital velocity from a circular-orbit approximation
///
/// `2π · a · 149.6 / (period · 86400)` with the semi-major axis in AU
/// and the period in days. Uses the record's axis when present, else the
/// catalog's fallback table.
pub fn orbital_velocity(planet: &Planet) -> f64 {
    2.0 * PI * planet.semi_major_axis_au() * AU_IN_MILLION_KM / (planet.period * SECONDS_PER_DAY)
}

/// Solar irradiance as a percentage of Earth's
///
/// Inverse-square law over the semi-major axis, Earth-normalized to 100.
pub fn solar_irradiance(planet: &Planet) -> f64 {
    100.0 / planet.semi_major_axis_au().powi(2)
}

/// Every derived quantity for one planet
///
/// The habitability score is carried from the session cache; the rest is
/// recomputed from the record on each call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct DerivedMetrics {
    /// Cached habitability score in [0, 100]
    pub habitability_score: u8,
    /// Volume in Earth-radii³
    pub volume: f64,
    /// Mean density in relative units
    pub density: f64,
    /// Surface gravity in relative units
    pub surface_gravity: f64,
    /// Mean orbital velocity
    pub orbital_velocity: f64,
    /// Solar irradiance as a percentage of Earth's
    pub solar_irradiance: f64,
    /// Temperature bucket for display treatment
    pub temperature_class: TemperatureClass,
}

/// Bundle the derived quantities for one record
pub fn derived_metrics(planet: &Planet, habitability_score: u8) -> DerivedMetrics {
    DerivedMetrics {
        habitability_score,
        volume: volume(planet.radius),
        density: density(planet.mass, planet.radius),
        surface_gravity: surface_gravity(planet.mass, planet.radius),
        orbital_velocity: orbital_velocity(planet),
        solar_irradiance: solar_irradiance(planet),
        temperature_class: TemperatureClass::classify(planet.temperature),
    }
}
