//! Trivia facts dataset
//!
//! Standalone facts rendered in the facts section. Like `image_key` on
//! planet records, `icon` is an opaque key the presentation layer maps
//! to an asset.

use serde::{Deserialize, Serialize};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

/// A single trivia fact
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct SpaceFact {
    /// Stable numeric key
    pub id: u32,
    /// Card heading
    pub title: String,
    /// Card body text
    pub description: String,
    /// Opaque icon key
    pub icon: String,
    /// Extra text revealed when the card is expanded
    pub extra_detail: String,
}

/// The built-in trivia facts
pub fn space_facts() -> Vec<SpaceFact> {
    vec![
        SpaceFact {
            id: 1,
            title: "Cosmic Scale".to_string(),
            description: "If the Sun were the size of a white blood cell, the Milky Way \
                          galaxy would be the size of the continental United States."
                .to_string(),
            icon: "scale".to_string(),
            extra_detail: "The Milky Way galaxy is estimated to contain 100-400 billion stars."
                .to_string(),
        },
        SpaceFact {
            id: 2,
            title: "Space Smell".to_string(),
            description: "Astronauts report that space smells like seared steak, hot metal, \
                          and welding fumes due to the presence of polycyclic aromatic \
                          hydrocarbons."
                .to_string(),
            icon: "wind".to_string(),
            extra_detail: "Space is a vacuum, so the smell is actually caused by particles \
                           on their spacesuits reacting with the airlock."
                .to_string(),
        },
        SpaceFact {
            id: 3,
            title: "Floating Water".to_string(),
            description: "In space, water doesn't flow—it forms floating blobs that \
                          astronauts can bounce around or even drink from mid-air."
                .to_string(),
            icon: "droplets".to_string(),
            extra_detail: "This is due to the lack of gravity in space, which causes surface \
                           tension to dominate the behavior of water."
                .to_string(),
        },
        SpaceFact {
            id: 4,
            title: "Diamond Planets".to_string(),
            description: "55 Cancri e is likely made largely of diamond, with a surface of \
                          graphite and diamond. It's worth an estimated $26.9 nonillion."
                .to_string(),
            icon: "diamond".to_string(),
            extra_detail: "55 Cancri e is a super-Earth exoplanet that orbits a star similar \
                           to our Sun."
                .to_string(),
        },
        SpaceFact {
            id: 5,
            title: "Neutron Stars".to_string(),
            description: "A teaspoon of neutron star material would weigh about 6 billion \
                          tons—as much as a mountain on Earth."
                .to_string(),
            icon: "star".to_string(),
            extra_detail: "Neutron stars are the smallest and densest stars known to exist."
                .to_string(),
        },
        SpaceFact {
            id: 6,
            title: "Cosmic Sounds".to_string(),
            description: "Space isn't silent. NASA has converted radio emissions from \
                          various planets into sound, creating eerie \"space music\"."
                .to_string(),
            icon: "music".to_string(),
            extra_detail: "These sounds are not audible to the human ear in space, but can \
                           be converted into sound waves for us to hear."
                .to_string(),
        },
    ]
}
