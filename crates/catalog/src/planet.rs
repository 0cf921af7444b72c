//! Planet catalog records
//!
//! A `Planet` is an immutable record supplied once at startup by the
//! data provider. The catalog assumes `id` and `name` are unique; the
//! provider is responsible for upholding that.

use serde::{Deserialize, Serialize};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

/// Fallback text for records without composition data
pub const DEFAULT_COMPOSITION: &str = "Primarily composed of silicate rocks and metals.";

/// Fallback text for records without atmosphere data
pub const DEFAULT_ATMOSPHERE: &str = "Thin or no atmosphere detected.";

/// A single planet record
///
/// Physical quantities are Earth-normalized: mass in Earth masses,
/// radius in Earth radii. The orbital period is in days and the mean
/// temperature in Kelvin.
///
/// `image_key` and the trivia text are opaque to this crate; the
/// presentation layer resolves them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct Planet {
    /// Unique stable key (e.g. "earth")
    pub id: String,
    /// Unique display label
    pub name: String,
    /// Mass in Earth masses (Earth = 1.0)
    pub mass: f64,
    /// Mean radius in Earth radii (Earth = 1.0)
    pub radius: f64,
    /// Orbital period in days
    pub period: f64,
    /// Semi-major axis in AU, when the provider supplies one
    ///
    /// Records without it fall back to the per-id table of
    /// [`fallback_semi_major_axis`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub semi_major_axis: Option<f64>,
    /// Mean surface/equilibrium temperature in Kelvin
    pub temperature: f64,
    /// Distance from the Sun in light years (None for solar-system bodies)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_light_year: Option<f64>,
    /// Host star mass in solar masses (M☉)
    pub host_star_mass: f64,
    /// Host star temperature in Kelvin
    pub host_star_temperature: f64,
    /// Free-text composition summary
    #[serde(skip_serializing_if = "Option::is_none")]
    pub composition: Option<String>,
    /// Free-text atmosphere summary
    #[serde(skip_serializing_if = "Option::is_none")]
    pub atmosphere: Option<String>,
    /// Detail-panel description
    pub description: String,
    /// One-line trivia shown alongside the description
    pub fun_fact: String,
    /// Opaque key into the presentation layer's image table
    pub image_key: String,
}

impl Planet {
    /// Semi-major axis in AU
    ///
    /// Prefers the record's own field; records without one fall back to
    /// the fixed per-id table, which defaults to 1 AU for unknown ids.
    pub fn semi_major_axis_au(&self) -> f64 {
        self.semi_major_axis
            .unwrap_or_else(|| fallback_semi_major_axis(&self.id))
    }

    /// Composition text, with the documented fallback when absent
    pub fn composition_text(&self) -> &str {
        self.composition.as_deref().unwrap_or(DEFAULT_COMPOSITION)
    }

    /// Atmosphere text, with the documented fallback when absent
    pub fn atmosphere_text(&self) -> &str {
        self.atmosphere.as_deref().unwrap_or(DEFAULT_ATMOSPHERE)
    }
}

/// Approximate orbital distance in AU for the major planets
///
/// Fallback for records missing `semi_major_axis`. These are modeling
/// constants, not ephemeris data; unknown ids default to 1 AU (Earth).
pub fn fallback_semi_major_axis(id: &str) -> f64 {
    match id {
        "mercury" => 0.4,
        "venus" => 0.7,
        "earth" => 1.0,
        "mars" => 1.5,
        "jupiter" => 5.2,
        "saturn" => 9.5,
        "uranus" => 19.8,
        "neptune" => 30.1,
        _ => 1.0,
    }
}
