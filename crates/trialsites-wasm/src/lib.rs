//! trialsites-wasm — WebAssembly bindings for trialsites-core
//!
//! Exposes the site organizer to the trial-search UI as a `SiteOrganizer`
//! class. Site lists, search contexts and display trees cross the boundary
//! as plain JS objects.
//!
//! Quick start (browser)
//! ---------------------
//! ```javascript
//! import init, { SiteOrganizer } from 'trialsites-wasm';
//!
//! async function main() {
//!   await init();
//!   const org = new SiteOrganizer(trial.sites);
//!   org.updateContext({ location: 'search-location-zip', zip: '20850',
//!                       zipCoords: { lat: 39.08, long: -77.15 }, zipRadius: 50 });
//!
//!   render(org.displayTree(), org.filterOptions());
//!   toggleButton.onclick = () => { org.toggleNearby(); render(org.displayTree(), org.filterOptions()); };
//! }
//! main();
//! ```
//!
//! Notes
//! -----
//! - Display trees are arrays of `{ kind: "country" | "state", ... }` objects.
//! - Malformed input is reported as a thrown `Error`.
use serde::Serialize;
use serde_wasm_bindgen::Serializer;
use wasm_bindgen::prelude::*;

use std::result::Result;
use trialsites_core::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    web_sys::console::log_1(&"trialsites-wasm ready".into());
}

// Each element is parsed on its own; malformed records are skipped.
fn sites_from_js(sites: JsValue) -> Result<Vec<SiteRecord>, JsError> {
    if !js_sys::Array::is_array(&sites) {
        return Err(JsError::new("expected an array of sites"));
    }
    let records = js_sys::Array::from(&sites);
    let parsed: Vec<SiteRecord> = records
        .iter()
        .filter_map(|record| serde_wasm_bindgen::from_value(record).ok())
        .collect();
    #[cfg(target_arch = "wasm32")]
    if parsed.len() < records.length() as usize {
        web_sys::console::warn_1(
            &format!("Skipped {} malformed site records", records.length() as usize - parsed.len()).into(),
        );
    }
    Ok(parsed)
}

// Flattened nodes serialize as maps; json_compatible keeps them plain objects.
fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsError> {
    Ok(value.serialize(&Serializer::json_compatible())?)
}

/// The organizer for one trial page.
#[wasm_bindgen]
pub struct SiteOrganizer {
    inner: OrganizerFacade,
}

impl SiteOrganizer {
    fn from_sites(sites: Vec<SiteRecord>) -> SiteOrganizer {
        let mut inner = OrganizerFacade::default();
        inner.set_sites(sites);
        #[cfg(target_arch = "wasm32")]
        web_sys::console::log_1(
            &format!(
                "Organized {} sites in {} countries",
                inner.sites().len(),
                inner.index().countries.len()
            )
            .into(),
        );
        SiteOrganizer { inner }
    }
}

#[wasm_bindgen]
impl SiteOrganizer {
    /// Creates an organizer for an array of site objects.
    #[wasm_bindgen(constructor)]
    pub fn new(sites: JsValue) -> Result<SiteOrganizer, JsError> {
        let sites = sites_from_js(sites)?;
        Ok(Self::from_sites(sites))
    }

    /// Creates an organizer from a JSON string: a site array or a trial
    /// document with a `sites` array.
    #[wasm_bindgen(js_name = fromJson)]
    pub fn from_json(json: &str) -> Result<SiteOrganizer, JsError> {
        let sites = sites_from_json(json)?;
        Ok(Self::from_sites(sites))
    }

    /// Replaces the site list, e.g. when the page loads another trial.
    #[wasm_bindgen(js_name = setSites)]
    pub fn set_sites(&mut self, sites: JsValue) -> Result<(), JsError> {
        let sites = sites_from_js(sites)?;
        self.inner.set_sites(sites);
        Ok(())
    }

    #[wasm_bindgen(js_name = updateContext)]
    pub fn update_context(&mut self, context: JsValue) -> Result<(), JsError> {
        let context: SearchContext = serde_wasm_bindgen::from_value(context)?;
        self.inner.update_context(context);
        Ok(())
    }

    #[wasm_bindgen(js_name = displayTree)]
    pub fn display_tree(&self) -> Result<JsValue, JsError> {
        to_js(&self.inner.display_tree())
    }

    #[wasm_bindgen(js_name = filterOptions)]
    pub fn filter_options(&self) -> Result<JsValue, JsError> {
        to_js(&self.inner.filter_options())
    }

    #[wasm_bindgen(js_name = setCountryFilter)]
    pub fn set_country_filter(&mut self, country: &str) {
        self.inner.set_country_filter(country);
    }

    #[wasm_bindgen(js_name = setStateFilter)]
    pub fn set_state_filter(&mut self, state: &str) {
        self.inner.set_state_filter(state);
    }

    /// Flips between nearby and all locations; returns the new state.
    #[wasm_bindgen(js_name = toggleNearby)]
    pub fn toggle_nearby(&mut self) -> bool {
        self.inner.toggle_nearby()
    }

    #[wasm_bindgen(js_name = isShowingNearby)]
    pub fn is_showing_nearby(&self) -> bool {
        self.inner.is_showing_nearby()
    }

    /// Full state name for an abbreviation, for labels outside the tree.
    #[wasm_bindgen(js_name = stateLabel)]
    pub fn state_label(&self, abbr: &str) -> String {
        self.inner.resolver().state_label(abbr).to_owned()
    }

    /// Countries with sites, ascending.
    pub fn countries(&self) -> js_sys::Array {
        self.inner
            .index()
            .countries
            .iter()
            .map(|c| JsValue::from_str(c))
            .collect()
    }

    pub fn stats(&self) -> Result<JsValue, JsError> {
        to_js(&self.inner.stats())
    }
}
