//! Explorer state machine
//!
//! Owns selection, search, sort and view mode over an immutable catalog.
//! Habitability scores are computed exactly once at construction from a
//! seeded RNG and are read-only afterwards; navigation walks catalog
//! order regardless of the active filter or sort.

use std::cmp::Ordering;
use std::collections::HashMap;

use rand::SeedableRng;
use rand_chacha::ChaChaRng;
use serde::{Deserialize, Serialize};

use catalog::Planet;
use metrics::{derived_metrics, score_catalog, DerivedMetrics};

use crate::comparison::ComparisonSession;

/// Sort order for the visible planet list, always ascending
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Lexicographic by display name
    #[default]
    Name,
    /// Numeric by mass in Earth masses
    Mass,
    /// Numeric by mean temperature in Kelvin
    Temperature,
    /// Numeric by radius in Earth radii
    Radius,
}

impl SortKey {
    /// Parse the presentation layer's key string ("name", "mass", ...)
    pub fn parse(key: &str) -> Option<Self> {
        match key {
            "name" => Some(Self::Name),
            "mass" => Some(Self::Mass),
            "temperature" => Some(Self::Temperature),
            "radius" => Some(Self::Radius),
            _ => None,
        }
    }
}

/// Card layout for the catalog section
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Grid,
    Carousel,
}

impl ViewMode {
    /// Parse the presentation layer's mode string
    pub fn parse(mode: &str) -> Option<Self> {
        match mode {
            "grid" => Some(Self::Grid),
            "carousel" => Some(Self::Carousel),
            _ => None,
        }
    }
}

/// Direction for selection navigation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Prev,
    Next,
}

/// A catalog entry annotated with its cached habitability score
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredPlanet<'a> {
    #[serde(flatten)]
    pub planet: &'a Planet,
    pub habitability_score: u8,
}

/// Explorer state over an immutable catalog
#[derive(Debug, Clone)]
pub struct Explorer {
    catalog: Vec<Planet>,
    scores: HashMap<String, u8>,
    selected_id: Option<String>,
    search_term: String,
    sort_key: SortKey,
    view_mode: ViewMode,
    comparison: Option<ComparisonSession>,
}

impl Explorer {
    /// Build an explorer with a caller-supplied score seed
    ///
    /// Scores every record exactly once, then selects the entry named
    /// "Earth" when present, else the first entry. An empty catalog
    /// yields a valid state with no selection.
    pub fn with_seed(catalog: Vec<Planet>, seed: u64) -> Self {
        let mut rng = ChaChaRng::seed_from_u64(seed);
        let scores = score_catalog(&catalog, &mut rng);

        let selected_id = catalog
            .iter()
            .find(|p| p.name == "Earth")
            .or_else(|| catalog.first())
            .map(|p| p.id.clone());

        Self {
            catalog,
            scores,
            selected_id,
            search_term: String::new(),
            sort_key: SortKey::Name,
            view_mode: ViewMode::Grid,
            comparison: None,
        }
    }

    /// Build an explorer with an entropy-drawn seed
    pub fn new(catalog: Vec<Planet>) -> Self {
        Self::with_seed(catalog, rand::random())
    }

    /// The full catalog in insertion order
    pub fn catalog(&self) -> &[Planet] {
        &self.catalog
    }

    /// The session score cache
    pub fn scores(&self) -> &HashMap<String, u8> {
        &self.scores
    }

    /// Cached score for one id
    pub fn score_for(&self, id: &str) -> Option<u8> {
        self.scores.get(id).copied()
    }

    /// Currently selected planet, if any
    pub fn selected_planet(&self) -> Option<&Planet> {
        self.selected_id.as_deref().and_then(|id| self.find(id))
    }

    /// Select a planet by id; unknown ids are ignored
    pub fn select(&mut self, id: &str) {
        if self.find(id).is_some() {
            self.selected_id = Some(id.to_string());
        }
    }

    /// Move the selection to the adjacent catalog entry
    ///
    /// Walks catalog order (not the filtered or sorted view) and wraps
    /// around at both ends. Without a selection this is a no-op.
    pub fn navigate(&mut self, direction: Direction) {
        let Some(current) = self
            .selected_id
            .as_deref()
            .and_then(|id| self.position(id))
        else {
            return;
        };

        let last = self.catalog.len() - 1;
        let next = match direction {
            Direction::Prev => {
                if current == 0 {
                    last
                } else {
                    current - 1
                }
            }
            Direction::Next => {
                if current == last {
                    0
                } else {
                    current + 1
                }
            }
        };

        self.selected_id = Some(self.catalog[next].id.clone());
    }

    /// Current search term
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Set the name filter; matching is case-insensitive substring
    pub fn set_search_term(&mut self, term: &str) {
        self.search_term = term.to_string();
    }

    /// Current sort key
    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    pub fn set_sort_key(&mut self, key: SortKey) {
        self.sort_key = key;
    }

    /// Current view mode
    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    /// Clear the search term and restore name ordering
    ///
    /// Selection and view mode are untouched.
    pub fn reset_filters(&mut self) {
        self.search_term.clear();
        self.sort_key = SortKey::Name;
    }

    /// Planets matching the current filter, in the current sort order
    ///
    /// Filters by case-insensitive substring match on the name, then
    /// stable-sorts ascending by the active key. Each entry carries its
    /// cached score.
    pub fn visible_planets(&self) -> Vec<ScoredPlanet<'_>> {
        let needle = self.search_term.to_lowercase();
        let mut visible: Vec<&Planet> = self
            .catalog
            .iter()
            .filter(|p| p.name.to_lowercase().contains(&needle))
            .collect();

        match self.sort_key {
            SortKey::Name => visible.sort_by(|a, b| a.name.cmp(&b.name)),
            SortKey::Mass => sort_by_value(&mut visible, |p| p.mass),
            SortKey::Temperature => sort_by_value(&mut visible, |p| p.temperature),
            SortKey::Radius => sort_by_value(&mut visible, |p| p.radius),
        }

        visible
            .into_iter()
            .map(|planet| ScoredPlanet {
                planet,
                habitability_score: self.scores.get(&planet.id).copied().unwrap_or(0),
            })
            .collect()
    }

    /// Derived quantities for one id, with its cached score
    pub fn derived_metrics_for(&self, id: &str) -> Option<DerivedMetrics> {
        let planet = self.find(id)?;
        let score = self.score_for(id).unwrap_or(0);
        Some(derived_metrics(planet, score))
    }

    /// Open a comparison session for the current selection
    ///
    /// Candidates are the whole catalog. Returns false (and leaves any
    /// open session untouched) when nothing is selected.
    pub fn open_comparison(&mut self) -> bool {
        let Some(primary) = self.selected_planet().cloned() else {
            return false;
        };
        self.comparison = Some(ComparisonSession::open(primary, self.catalog.clone()));
        true
    }

    /// The open comparison session, if any
    pub fn comparison(&self) -> Option<&ComparisonSession> {
        self.comparison.as_ref()
    }

    pub fn comparison_mut(&mut self) -> Option<&mut ComparisonSession> {
        self.comparison.as_mut()
    }

    /// Close the comparison session, discarding its transient state
    pub fn close_comparison(&mut self) {
        self.comparison = None;
    }

    fn find(&self, id: &str) -> Option<&Planet> {
        self.catalog.iter().find(|p| p.id == id)
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.catalog.iter().position(|p| p.id == id)
    }
}

fn sort_by_value(planets: &mut [&Planet], value: impl Fn(&Planet) -> f64) {
    planets.sort_by(|a, b| {
        value(a)
            .partial_cmp(&value(b))
            .unwrap_or(Ordering::Equal)
    });
}
