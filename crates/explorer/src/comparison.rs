//! Pairwise comparison session
//!
//! Transient modal state pairing the selected planet with a comparison
//! target, plus the row and chart builders behind the tabbed displays.
//! Rows are rebuilt on demand from cheap pure functions; nothing here
//! outlives the session or is cached across sessions.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use catalog::Planet;
use metrics::{density, orbital_velocity, solar_irradiance, surface_gravity, volume};

/// Tabs of the comparison modal
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComparisonTab {
    #[default]
    Overview,
    Details,
    Charts,
}

impl ComparisonTab {
    /// Parse the presentation layer's tab string
    pub fn parse(tab: &str) -> Option<Self> {
        match tab {
            "overview" => Some(Self::Overview),
            "details" => Some(Self::Details),
            "charts" => Some(Self::Charts),
            _ => None,
        }
    }
}

/// One value column of a comparison row
///
/// Raw quantities stay numeric; derived quantities arrive pre-formatted
/// as text, which is what decides whether a row gets a percentage badge.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RowValue {
    Number(f64),
    Text(String),
}

impl RowValue {
    fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            Self::Text(_) => None,
        }
    }
}

/// A single labelled comparison row
///
/// `difference` is the signed percentage difference of `value1` against
/// `value2`, present only when both columns are numeric.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonRow {
    pub label: String,
    pub value1: RowValue,
    pub value2: RowValue,
    pub unit: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difference: Option<i32>,
}

impl ComparisonRow {
    /// Build a row, attaching the percentage when both values are numeric
    pub fn new(label: &str, value1: RowValue, value2: RowValue, unit: &str) -> Self {
        let difference = match (value1.as_number(), value2.as_number()) {
            (Some(a), Some(b)) => Some(percent_difference(a, b)),
            _ => None,
        };

        Self {
            label: label.to_string(),
            value1,
            value2,
            unit: unit.to_string(),
            difference,
        }
    }
}

/// Signed percentage difference of `value1` against `value2`
///
/// A zero reference value reports 100% by convention instead of dividing
/// by zero.
pub fn percent_difference(value1: f64, value2: f64) -> i32 {
    if value2 == 0.0 {
        return 100;
    }
    ((value1 - value2) / value2 * 100.0).round() as i32
}

/// One bar pair of the charts tab, normalized to the pair maximum
///
/// Fractions lie in [0, 1]; the larger side is exactly 1. A pair of
/// zeros renders as two empty bars.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartBar {
    pub label: String,
    pub primary_fraction: f64,
    pub secondary_fraction: f64,
    pub unit: String,
}

impl ChartBar {
    fn new(label: &str, value1: f64, value2: f64, unit: &str) -> Self {
        let max = value1.max(value2);
        let scale = |value: f64| if max > 0.0 { value / max } else { 0.0 };

        Self {
            label: label.to_string(),
            primary_fraction: scale(value1),
            secondary_fraction: scale(value2),
            unit: unit.to_string(),
        }
    }
}

/// Transient paired-planet comparison state
///
/// Lives from `open` until the owning modal closes; closing discards it
/// without side effects on the explorer or catalog.
#[derive(Debug, Clone)]
pub struct ComparisonSession {
    primary: Planet,
    secondary: Option<Planet>,
    candidates: Vec<Planet>,
    tab: ComparisonTab,
    picker_open: bool,
}

impl ComparisonSession {
    /// Open a session for `primary`
    ///
    /// The default target is Mars when the primary is Earth, Earth
    /// otherwise. When the default is missing from the candidates the
    /// secondary stays unset, and no rows are produced until one is
    /// picked explicitly.
    pub fn open(primary: Planet, candidates: Vec<Planet>) -> Self {
        let default_name = if primary.name == "Earth" { "Mars" } else { "Earth" };
        let secondary = candidates.iter().find(|p| p.name == default_name).cloned();

        Self {
            primary,
            secondary,
            candidates,
            tab: ComparisonTab::Overview,
            picker_open: false,
        }
    }

    pub fn primary(&self) -> &Planet {
        &self.primary
    }

    pub fn secondary(&self) -> Option<&Planet> {
        self.secondary.as_ref()
    }

    /// Planets offered by the comparison picker
    pub fn candidates(&self) -> &[Planet] {
        &self.candidates
    }

    pub fn tab(&self) -> ComparisonTab {
        self.tab
    }

    pub fn set_tab(&mut self, tab: ComparisonTab) {
        self.tab = tab;
    }

    pub fn picker_open(&self) -> bool {
        self.picker_open
    }

    pub fn toggle_picker(&mut self) {
        self.picker_open = !self.picker_open;
    }

    pub fn close_picker(&mut self) {
        self.picker_open = false;
    }

    /// Replace the comparison target
    ///
    /// Self-comparison and ids outside the candidate list are rejected
    /// without touching the current target. A successful pick closes the
    /// picker.
    pub fn pick_secondary(&mut self, id: &str) {
        if id == self.primary.id {
            return;
        }
        if let Some(candidate) = self.candidates.iter().find(|p| p.id == id) {
            self.secondary = Some(candidate.clone());
            self.picker_open = false;
        }
    }

    /// Rows for the overview tab
    ///
    /// Empty until a secondary is set. The habitability row reads the
    /// session score cache; ids missing from it render as 0.
    pub fn overview_rows(&self, scores: &HashMap<String, u8>) -> Vec<ComparisonRow> {
        let Some((a, b)) = self.pair() else {
            return Vec::new();
        };
        let score = |p: &Planet| f64::from(scores.get(&p.id).copied().unwrap_or(0));

        vec![
            ComparisonRow::new(
                "Mass",
                RowValue::Number(a.mass),
                RowValue::Number(b.mass),
                "M⊕",
            ),
            ComparisonRow::new(
                "Radius",
                RowValue::Number(a.radius),
                RowValue::Number(b.radius),
                "R⊕",
            ),
            ComparisonRow::new(
                "Temperature",
                RowValue::Number(a.temperature),
                RowValue::Number(b.temperature),
                "K",
            ),
            ComparisonRow::new(
                "Orbital Period",
                RowValue::Number(a.period),
                RowValue::Number(b.period),
                "days",
            ),
            ComparisonRow::new(
                "Habitability Score",
                RowValue::Number(score(a)),
                RowValue::Number(score(b)),
                "%",
            ),
        ]
    }

    /// Physical-property rows for the details tab
    ///
    /// Derived quantities are pre-formatted text, so only the raw mass
    /// and radius rows carry a percentage.
    pub fn physical_rows(&self) -> Vec<ComparisonRow> {
        let Some((a, b)) = self.pair() else {
            return Vec::new();
        };

        vec![
            ComparisonRow::new(
                "Mass",
                RowValue::Number(a.mass),
                RowValue::Number(b.mass),
                "M⊕",
            ),
            ComparisonRow::new(
                "Radius",
                RowValue::Number(a.radius),
                RowValue::Number(b.radius),
                "R⊕",
            ),
            ComparisonRow::new(
                "Volume",
                RowValue::Text(format!("{:.1}", volume(a.radius))),
                RowValue::Text(format!("{:.1}", volume(b.radius))),
                "R⊕³",
            ),
            ComparisonRow::new(
                "Surface Gravity",
                RowValue::Text(format!("{:.2}", surface_gravity(a.mass, a.radius))),
                RowValue::Text(format!("{:.2}", surface_gravity(b.mass, b.radius))),
                "g",
            ),
            ComparisonRow::new(
                "Density",
                RowValue::Text(format!("{:.2}", density(a.mass, a.radius))),
                RowValue::Text(format!("{:.2}", density(b.mass, b.radius))),
                "g/cm³",
            ),
        ]
    }

    /// Orbital-property rows for the details tab
    pub fn orbital_rows(&self) -> Vec<ComparisonRow> {
        let Some((a, b)) = self.pair() else {
            return Vec::new();
        };

        vec![
            ComparisonRow::new(
                "Orbital Period",
                RowValue::Number(a.period),
                RowValue::Number(b.period),
                "days",
            ),
            ComparisonRow::new(
                "Orbital Velocity",
                RowValue::Text(format!("{:.1}", orbital_velocity(a))),
                RowValue::Text(format!("{:.1}", orbital_velocity(b))),
                "km/s",
            ),
            ComparisonRow::new(
                "Solar Irradiance",
                RowValue::Text(format!("{:.1}", solar_irradiance(a))),
                RowValue::Text(format!("{:.1}", solar_irradiance(b))),
                "%",
            ),
        ]
    }

    /// Bar pairs for the charts tab
    pub fn chart_bars(&self, scores: &HashMap<String, u8>) -> Vec<ChartBar> {
        let Some((a, b)) = self.pair() else {
            return Vec::new();
        };
        let score = |p: &Planet| f64::from(scores.get(&p.id).copied().unwrap_or(0));

        vec![
            ChartBar::new("Mass", a.mass, b.mass, "M⊕"),
            ChartBar::new("Radius", a.radius, b.radius, "R⊕"),
            ChartBar::new("Temperature", a.temperature, b.temperature, "K"),
            ChartBar::new("Orbital Period", a.period, b.period, "days"),
            ChartBar::new("Habitability Score", score(a), score(b), "%"),
        ]
    }

    fn pair(&self) -> Option<(&Planet, &Planet)> {
        self.secondary.as_ref().map(|s| (&self.primary, s))
    }
}
