//! Static solar-system dataset
//!
//! The catalog consumed when no remote provider is wired in. Ordering is
//! Sun-outward insertion order and is semantically meaningful: it is the
//! default display order and the order selection navigation walks.

use crate::planet::Planet;

/// The eight major planets, Sun-outward
pub fn solar_system_planets() -> Vec<Planet> {
    vec![
        Planet {
            id: "mercury".to_string(),
            name: "Mercury".to_string(),
            mass: 0.055,
            radius: 0.383,
            period: 87.97,
            semi_major_axis: Some(0.387),
            temperature: 440.0,
            distance_light_year: None,
            host_star_mass: 1.0,
            host_star_temperature: 5778.0,
            composition: None,
            atmosphere: None,
            description: "The smallest and innermost planet in the Solar System.".to_string(),
            fun_fact: "Mercury has no atmosphere, which means it has no weather and no sound \
                       can travel there."
                .to_string(),
            image_key: "mercury".to_string(),
        },
        Planet {
            id: "venus".to_string(),
            name: "Venus".to_string(),
            mass: 0.815,
            radius: 0.949,
            period: 224.7,
            semi_major_axis: Some(0.723),
            temperature: 737.0,
            distance_light_year: None,
            host_star_mass: 1.0,
            host_star_temperature: 5778.0,
            composition: None,
            atmosphere: None,
            description: "The second planet from the Sun, known as Earth's \"sister planet\"."
                .to_string(),
            fun_fact: "Venus rotates in the opposite direction to most planets, meaning the \
                       Sun rises in the west and sets in the east."
                .to_string(),
            image_key: "venus".to_string(),
        },
        Planet {
            id: "earth".to_string(),
            name: "Earth".to_string(),
            mass: 1.0,
            radius: 1.0,
            period: 365.25,
            semi_major_axis: Some(1.0),
            temperature: 288.0,
            distance_light_year: None,
            host_star_mass: 1.0,
            host_star_temperature: 5778.0,
            composition: None,
            atmosphere: None,
            description: "Our home planet and the only known celestial body to harbor life."
                .to_string(),
            fun_fact: "Earth is the only planet not named after a Greek or Roman god.".to_string(),
            image_key: "earth".to_string(),
        },
        Planet {
            id: "mars".to_string(),
            name: "Mars".to_string(),
            mass: 0.107,
            radius: 0.532,
            period: 687.0,
            semi_major_axis: Some(1.524),
            temperature: 210.0,
            distance_light_year: None,
            host_star_mass: 1.0,
            host_star_temperature: 5778.0,
            composition: None,
            atmosphere: None,
            description: "The fourth planet from the Sun, known as the \"Red Planet\"."
                .to_string(),
            fun_fact: "Mars has the largest dust storms in the solar system, sometimes \
                       engulfing the entire planet for months."
                .to_string(),
            image_key: "mars".to_string(),
        },
        Planet {
            id: "jupiter".to_string(),
            name: "Jupiter".to_string(),
            mass: 317.8,
            radius: 10.973,
            period: 4331.0,
            semi_major_axis: Some(5.203),
            temperature: 165.0,
            distance_light_year: None,
            host_star_mass: 1.0,
            host_star_temperature: 5778.0,
            composition: None,
            atmosphere: None,
            description: "The largest planet in our Solar System.".to_string(),
            fun_fact: "Jupiter's Great Red Spot is a storm that has been raging for at least \
                       400 years."
                .to_string(),
            image_key: "jupiter".to_string(),
        },
        Planet {
            id: "saturn".to_string(),
            name: "Saturn".to_string(),
            mass: 95.2,
            radius: 9.14,
            period: 10747.0,
            semi_major_axis: Some(9.539),
            temperature: 134.0,
            distance_light_year: None,
            host_star_mass: 1.0,
            host_star_temperature: 5778.0,
            composition: None,
            atmosphere: None,
            description: "The sixth planet from the Sun, famous for its stunning ring system."
                .to_string(),
            fun_fact: "Saturn has 83 confirmed moons, the most of any planet in our solar \
                       system."
                .to_string(),
            image_key: "saturn".to_string(),
        },
        Planet {
            id: "uranus".to_string(),
            name: "Uranus".to_string(),
            mass: 14.6,
            radius: 3.981,
            period: 30589.0,
            semi_major_axis: Some(19.18),
            temperature: 76.0,
            distance_light_year: None,
            host_star_mass: 1.0,
            host_star_temperature: 5778.0,
            composition: None,
            atmosphere: None,
            description: "The seventh planet from the Sun, an ice giant with a tilted axis."
                .to_string(),
            fun_fact: "Uranus rotates on its side, with its axis tilted at 98 degrees from \
                       its orbital plane."
                .to_string(),
            image_key: "uranus".to_string(),
        },
        Planet {
            id: "neptune".to_string(),
            name: "Neptune".to_string(),
            mass: 17.2,
            radius: 3.865,
            period: 59800.0,
            semi_major_axis: Some(30.07),
            temperature: 72.0,
            distance_light_year: None,
            host_star_mass: 1.0,
            host_star_temperature: 5778.0,
            composition: None,
            atmosphere: None,
            description: "The eighth and farthest known planet from the Sun, an ice giant."
                .to_string(),
            fun_fact: "Neptune has the strongest winds in the Solar System, reaching speeds \
                       of 2,100 km/h (1,300 mph)."
                .to_string(),
            image_key: "neptune".to_string(),
        },
    ]
}
