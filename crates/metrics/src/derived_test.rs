//! Tests for derived quantities

use std::f64::consts::PI;

use approx::assert_relative_eq;

use catalog::solar_system_planets;

use crate::derived::{
    density, derived_metrics, orbital_velocity, solar_irradiance, surface_gravity, volume,
};
use crate::temperature::TemperatureClass;

#[test]
fn test_volume_is_a_sphere() {
    assert_relative_eq!(volume(1.0), 4.0 / 3.0 * PI, epsilon = 1e-12);
    assert_relative_eq!(volume(2.0), 4.0 / 3.0 * PI * 8.0, epsilon = 1e-12);
}

#[test]
fn test_density_is_mass_over_volume() {
    for planet in solar_system_planets() {
        assert_relative_eq!(
            density(planet.mass, planet.radius),
            planet.mass / volume(planet.radius),
            epsilon = 1e-12
        );
    }
}

#[test]
fn test_earth_normalized_references() {
    // Earth: unit mass and radius
    assert_relative_eq!(surface_gravity(1.0, 1.0), 1.0, epsilon = 1e-12);
    assert_relative_eq!(density(1.0, 1.0), 3.0 / (4.0 * PI), epsilon = 1e-12);
}

#[test]
fn test_surface_gravity_mars() {
    // Mars: 0.107 M⊕ / 0.532² R⊕ ≈ 0.38 g
    assert_relative_eq!(surface_gravity(0.107, 0.532), 0.378, epsilon = 1e-3);
}

#[test]
fn test_orbital_velocity_uses_the_catalog_formula() {
    let planets = solar_system_planets();
    let earth = &planets[2];

    let expected = 2.0 * PI * 1.0 * 149.6 / (365.25 * 86_400.0);
    assert_relative_eq!(orbital_velocity(earth), expected, epsilon = 1e-12);
}

#[test]
fn test_orbital_velocity_decreases_outward() {
    let planets = solar_system_planets();
    let mercury = &planets[0];
    let neptune = &planets[7];
    assert!(orbital_velocity(mercury) > orbital_velocity(neptune));
}

#[test]
fn test_irradiance_is_inverse_square() {
    let planets = solar_system_planets();
    let earth = &planets[2];
    let mars = &planets[3];

    assert_relative_eq!(solar_irradiance(earth), 100.0, epsilon = 1e-12);
    assert_relative_eq!(solar_irradiance(mars), 100.0 / (1.524 * 1.524), epsilon = 1e-9);
}

#[test]
fn test_irradiance_falls_back_for_unknown_axis() {
    let planets = solar_system_planets();
    let mut rogue = planets[0].clone();
    rogue.id = "rogue".to_string();
    rogue.semi_major_axis = None;

    // Unknown id, no axis: table defaults to 1 AU
    assert_relative_eq!(solar_irradiance(&rogue), 100.0, epsilon = 1e-12);
}

#[test]
fn test_derived_metrics_bundle() {
    let planets = solar_system_planets();
    let earth = &planets[2];

    let metrics = derived_metrics(earth, 100);
    assert_eq!(metrics.habitability_score, 100);
    assert_relative_eq!(metrics.volume, 4.0 / 3.0 * PI, epsilon = 1e-12);
    assert_relative_eq!(metrics.surface_gravity, 1.0, epsilon = 1e-12);
    assert_relative_eq!(metrics.solar_irradiance, 100.0, epsilon = 1e-12);
    assert_eq!(metrics.temperature_class, TemperatureClass::Temperate);
}
