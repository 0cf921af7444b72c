//! Habitability scoring
//!
//! A deliberately approximate score in [0, 100]: Earth is pinned at 100
//! by definition, and every other planet draws a uniform integer from a
//! band keyed to how far its mean temperature sits from Earth's. The
//! bands preserve a monotone tendency (closer to Earth-like temperature,
//! higher expected band) without pretending to be a physical model.
//!
//! Draws consume an explicit session RNG, so a seed reproduces the whole
//! table. Callers cache the result for the session instead of re-sampling
//! per render; see [`score_catalog`].

use std::collections::HashMap;

use rand::Rng;
use rand_chacha::ChaChaRng;

use catalog::Planet;

/// Earth's mean surface temperature in Kelvin, the band reference
pub const EARTH_TEMPERATURE_K: f64 = 288.0;

/// Score a single planet
///
/// Earth returns exactly 100 and consumes no randomness. Every other
/// planet draws from the band matching its temperature offset from
/// 288 K:
///
/// - over 200 K away: 1..=10
/// - over 100 K away: 10..=29
/// - over 50 K away: 20..=49
/// - within 50 K: 30..=69
pub fn habitability_score(planet: &Planet, rng: &mut ChaChaRng) -> u8 {
    if planet.name == "Earth" {
        return 100;
    }

    let temp_diff = (planet.temperature - EARTH_TEMPERATURE_K).abs();

    if temp_diff > 200.0 {
        rng.random_range(1..=10)
    } else if temp_diff > 100.0 {
        rng.random_range(10..=29)
    } else if temp_diff > 50.0 {
        rng.random_range(20..=49)
    } else {
        rng.random_range(30..=69)
    }
}

/// Score every record once, in catalog order
///
/// One seeded RNG walks the catalog front to back, so a given seed
/// always produces the same table. The explorer calls this exactly once
/// at initialization and treats the result as read-only for the rest of
/// the session; a planet's score never changes once set.
pub fn score_catalog(planets: &[Planet], rng: &mut ChaChaRng) -> HashMap<String, u8> {
    planets
        .iter()
        .map(|planet| (planet.id.clone(), habitability_score(planet, rng)))
        .collect()
}
