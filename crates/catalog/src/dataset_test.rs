//! Tests for the static datasets

use std::collections::HashSet;

use crate::dataset::solar_system_planets;
use crate::facts::space_facts;

#[test]
fn test_catalog_is_eight_planets_sun_outward() {
    let planets = solar_system_planets();
    let ids: Vec<&str> = planets.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(
        ids,
        [
            "mercury", "venus", "earth", "mars", "jupiter", "saturn", "uranus", "neptune"
        ]
    );
}

#[test]
fn test_ids_and_names_are_unique() {
    let planets = solar_system_planets();

    let ids: HashSet<&str> = planets.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids.len(), planets.len());

    let names: HashSet<&str> = planets.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names.len(), planets.len());
}

#[test]
fn test_earth_reference_record() {
    let planets = solar_system_planets();
    let earth = &planets[2];

    assert_eq!(earth.name, "Earth");
    assert_eq!(earth.mass, 1.0);
    assert_eq!(earth.radius, 1.0);
    assert_eq!(earth.temperature, 288.0);
    assert_eq!(earth.semi_major_axis, Some(1.0));
}

#[test]
fn test_primary_quantities_are_positive() {
    for planet in solar_system_planets() {
        assert!(planet.mass > 0.0, "{} mass", planet.name);
        assert!(planet.radius > 0.0, "{} radius", planet.name);
        assert!(planet.period > 0.0, "{} period", planet.name);
        assert!(planet.temperature > 0.0, "{} temperature", planet.name);
        assert!(planet.host_star_mass > 0.0, "{} host star", planet.name);
    }
}

#[test]
fn test_every_record_has_an_axis_and_prose() {
    for planet in solar_system_planets() {
        assert!(planet.semi_major_axis.is_some(), "{}", planet.name);
        assert!(!planet.description.is_empty(), "{}", planet.name);
        assert!(!planet.fun_fact.is_empty(), "{}", planet.name);
        assert_eq!(planet.image_key, planet.id);
    }
}

#[test]
fn test_semi_major_axes_increase_outward() {
    let planets = solar_system_planets();
    for window in planets.windows(2) {
        assert!(
            window[0].semi_major_axis_au() < window[1].semi_major_axis_au(),
            "{} should orbit inside {}",
            window[0].name,
            window[1].name
        );
    }
}

#[test]
fn test_facts_dataset() {
    let facts = space_facts();
    assert_eq!(facts.len(), 6);

    let ids: HashSet<u32> = facts.iter().map(|f| f.id).collect();
    assert_eq!(ids.len(), facts.len());

    for fact in &facts {
        assert!(!fact.title.is_empty());
        assert!(!fact.description.is_empty());
        assert!(!fact.icon.is_empty());
        assert!(!fact.extra_detail.is_empty());
    }
}
