//! Planetary temperature classification

use serde::{Deserialize, Serialize};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

/// Temperature bucket used to pick a display treatment
///
/// Presentation-neutral banding of a planet's mean temperature. It plays
/// no part in the habitability score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub enum TemperatureClass {
    /// T < 200 K - outer-system ice worlds
    Cold,

    /// 200-300 K - the band Earth sits in
    Temperate,

    /// 300-500 K - hot rocky worlds
    Warm,

    /// > 500 K - runaway-greenhouse and close-in planets
    Hot,
}

impl TemperatureClass {
    /// Classify a mean temperature in Kelvin
    pub fn classify(kelvin: f64) -> Self {
        match kelvin {
            t if t < 200.0 => Self::Cold,
            t if t < 300.0 => Self::Temperate,
            t if t < 500.0 => Self::Warm,
            _ => Self::Hot,
        }
    }

    /// Temperature range for this class in Kelvin
    pub fn range(&self) -> (f64, f64) {
        match self {
            Self::Cold => (0.0, 200.0),
            Self::Temperate => (200.0, 300.0),
            Self::Warm => (300.0, 500.0),
            Self::Hot => (500.0, f64::INFINITY),
        }
    }

    /// Human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Cold => "Cold",
            Self::Temperate => "Temperate",
            Self::Warm => "Warm",
            Self::Hot => "Hot",
        }
    }
}

impl std::fmt::Display for TemperatureClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
