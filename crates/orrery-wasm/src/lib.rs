//! WASM bindings for the planet catalog explorer.
//!
//! This crate provides JavaScript/TypeScript bindings for the explorer
//! state machine using `wasm-bindgen` and `serde-wasm-bindgen` for
//! seamless type conversion. The presentation layer drives one
//! [`Explorer`] instance per page and reads back JSON-shaped values.

use wasm_bindgen::prelude::*;

use explorer::{ComparisonTab, Direction, Explorer as CatalogExplorer, SortKey, ViewMode};

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsError::new(&e.to_string()))
}

/// Explorer over the built-in solar-system catalog.
#[wasm_bindgen]
pub struct Explorer {
    inner: CatalogExplorer,
}

#[wasm_bindgen]
impl Explorer {
    /// Create an explorer over the static catalog.
    ///
    /// # Arguments
    /// * `seed` - Random seed for reproducible habitability scores
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u64) -> Explorer {
        Explorer {
            inner: CatalogExplorer::with_seed(catalog::solar_system_planets(), seed),
        }
    }

    /// Planets matching the current search and sort, with scores.
    pub fn visible_planets(&self) -> Result<JsValue, JsError> {
        to_js(&self.inner.visible_planets())
    }

    /// Currently selected planet, or undefined.
    pub fn selected_planet(&self) -> Result<JsValue, JsError> {
        to_js(&self.inner.selected_planet())
    }

    /// Select a planet by id. Unknown ids are ignored.
    pub fn select(&mut self, id: &str) {
        self.inner.select(id);
    }

    /// Move the selection to the next planet in catalog order.
    pub fn navigate_next(&mut self) {
        self.inner.navigate(Direction::Next);
    }

    /// Move the selection to the previous planet in catalog order.
    pub fn navigate_prev(&mut self) {
        self.inner.navigate(Direction::Prev);
    }

    /// Set the case-insensitive name filter.
    pub fn set_search_term(&mut self, term: &str) {
        self.inner.set_search_term(term);
    }

    /// Set the sort key ("name", "mass", "temperature" or "radius").
    ///
    /// Unknown keys are ignored.
    pub fn set_sort_key(&mut self, key: &str) {
        if let Some(key) = SortKey::parse(key) {
            self.inner.set_sort_key(key);
        }
    }

    /// Set the view mode ("grid" or "carousel"). Unknown modes are ignored.
    pub fn set_view_mode(&mut self, mode: &str) {
        if let Some(mode) = ViewMode::parse(mode) {
            self.inner.set_view_mode(mode);
        }
    }

    /// Clear the search term and restore name ordering.
    pub fn reset_filters(&mut self) {
        self.inner.reset_filters();
    }

    /// Derived quantities for one id, or undefined for unknown ids.
    pub fn derived_metrics_for(&self, id: &str) -> Result<JsValue, JsError> {
        to_js(&self.inner.derived_metrics_for(id))
    }

    /// Open a comparison for the current selection.
    ///
    /// Returns false when nothing is selected.
    pub fn open_comparison(&mut self) -> bool {
        self.inner.open_comparison()
    }

    /// Close the comparison, discarding its transient state.
    pub fn close_comparison(&mut self) {
        self.inner.close_comparison();
    }

    /// Replace the comparison target. Self-comparison is rejected.
    pub fn pick_secondary(&mut self, id: &str) {
        if let Some(session) = self.inner.comparison_mut() {
            session.pick_secondary(id);
        }
    }

    /// Switch the comparison tab ("overview", "details" or "charts").
    pub fn set_comparison_tab(&mut self, tab: &str) {
        if let (Some(session), Some(tab)) = (self.inner.comparison_mut(), ComparisonTab::parse(tab))
        {
            session.set_tab(tab);
        }
    }

    /// Toggle the comparison target picker.
    pub fn toggle_picker(&mut self) {
        if let Some(session) = self.inner.comparison_mut() {
            session.toggle_picker();
        }
    }

    /// Overview rows for the open comparison (empty when closed).
    pub fn comparison_overview(&self) -> Result<JsValue, JsError> {
        let rows = self
            .inner
            .comparison()
            .map(|session| session.overview_rows(self.inner.scores()))
            .unwrap_or_default();
        to_js(&rows)
    }

    /// Physical-property rows for the open comparison.
    pub fn comparison_physical(&self) -> Result<JsValue, JsError> {
        let rows = self
            .inner
            .comparison()
            .map(|session| session.physical_rows())
            .unwrap_or_default();
        to_js(&rows)
    }

    /// Orbital-property rows for the open comparison.
    pub fn comparison_orbital(&self) -> Result<JsValue, JsError> {
        let rows = self
            .inner
            .comparison()
            .map(|session| session.orbital_rows())
            .unwrap_or_default();
        to_js(&rows)
    }

    /// Chart bar pairs for the open comparison.
    pub fn comparison_charts(&self) -> Result<JsValue, JsError> {
        let bars = self
            .inner
            .comparison()
            .map(|session| session.chart_bars(self.inner.scores()))
            .unwrap_or_default();
        to_js(&bars)
    }
}

/// Trivia facts for the facts section.
#[wasm_bindgen]
pub fn space_facts() -> Result<JsValue, JsError> {
    to_js(&catalog::space_facts())
}
