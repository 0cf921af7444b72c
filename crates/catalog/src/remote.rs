//! Remote catalog fetch
//!
//! Optional helper that pulls planet records from an api-ninjas-style
//! endpoint. The active explorer flow runs entirely off the static
//! dataset; this exists for providers that want live records instead.
//!
//! The remote shape is snake_case and carries no id, prose, or image
//! key, so records are converted rather than deserialized directly into
//! [`Planet`].

use serde::Deserialize;
use thiserror::Error;

use crate::planet::Planet;

/// Failure fetching or decoding the remote catalog
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport or JSON-decoding failure
    #[error("planet catalog request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Endpoint answered with a non-success status
    #[error("planet catalog endpoint returned status {0}")]
    Status(reqwest::StatusCode),
}

/// Planet record as returned by the remote API
#[derive(Debug, Clone, Deserialize)]
pub struct RemotePlanet {
    pub name: String,
    pub mass: f64,
    pub radius: f64,
    pub period: f64,
    pub semi_major_axis: Option<f64>,
    pub temperature: f64,
    pub distance_light_year: Option<f64>,
    pub host_star_mass: f64,
    pub host_star_temperature: f64,
}

impl From<RemotePlanet> for Planet {
    fn from(remote: RemotePlanet) -> Self {
        // Remote records carry no id; the lowercased name doubles as both
        // the stable key and the image key, matching the static dataset.
        let id = remote.name.to_lowercase();
        Planet {
            id: id.clone(),
            name: remote.name,
            mass: remote.mass,
            radius: remote.radius,
            period: remote.period,
            semi_major_axis: remote.semi_major_axis,
            temperature: remote.temperature,
            distance_light_year: remote.distance_light_year,
            host_star_mass: remote.host_star_mass,
            host_star_temperature: remote.host_star_temperature,
            composition: None,
            atmosphere: None,
            description: String::new(),
            fun_fact: String::new(),
            image_key: id,
        }
    }
}

/// Fetch planet records from `url`, authenticating with `api_key`
///
/// Returns every record the endpoint provides, converted to the catalog
/// shape. Callers decide how to degrade on failure; the explorer itself
/// never performs I/O.
pub async fn fetch_planets(url: &str, api_key: &str) -> Result<Vec<Planet>, FetchError> {
    let client = reqwest::Client::new();
    let response = client.get(url).header("X-Api-Key", api_key).send().await?;

    if !response.status().is_success() {
        return Err(FetchError::Status(response.status()));
    }

    let records: Vec<RemotePlanet> = response.json().await?;
    Ok(records.into_iter().map(Planet::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_record_conversion() {
        let json = r#"{
            "name": "Mars",
            "mass": 0.107,
            "radius": 0.532,
            "period": 687.0,
            "semi_major_axis": 1.524,
            "temperature": 210.0,
            "distance_light_year": null,
            "host_star_mass": 1.0,
            "host_star_temperature": 5778.0
        }"#;

        let remote: RemotePlanet = serde_json::from_str(json).unwrap();
        let planet = Planet::from(remote);

        assert_eq!(planet.id, "mars");
        assert_eq!(planet.name, "Mars");
        assert_eq!(planet.image_key, "mars");
        assert_eq!(planet.semi_major_axis, Some(1.524));
        assert_eq!(planet.distance_light_year, None);
        assert!(planet.composition.is_none());
    }
}
