// crates/trialsites-core/src/model/context.rs
use super::non_blank;
use super::site::Coordinates;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// How the user constrained the search geographically.
///
/// Deserializes from the short names (`"ZIP"`) as well as the values the
/// search form stores (`"search-location-zip"`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LocationMode {
    #[default]
    #[serde(rename = "search-location-all", alias = "ALL")]
    All,
    #[serde(rename = "search-location-zip", alias = "ZIP")]
    Zip,
    #[serde(rename = "search-location-country", alias = "COUNTRY")]
    Country,
    #[serde(rename = "search-location-hospital", alias = "HOSPITAL")]
    Hospital,
    #[serde(rename = "search-location-nih", alias = "NIH")]
    Nih,
}

/// A US state picked in the search form.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StateRef {
    pub abbr: String,
    #[serde(default)]
    pub name: String,
}

impl StateRef {
    pub fn new(abbr: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            abbr: abbr.into(),
            name: name.into(),
        }
    }
}

/// Snapshot of the geographic part of the search form.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchContext {
    #[serde(alias = "location")]
    pub location_mode: LocationMode,
    pub zip: Option<String>,
    pub zip_coords: Option<Coordinates>,
    #[serde(alias = "zipRadius")]
    pub zip_radius_miles: Option<f64>,
    pub country: Option<String>,
    pub states: Vec<StateRef>,
    pub city: Option<String>,
    pub va_only: bool,
}

impl SearchContext {
    /// Unrestricted search.
    pub fn all() -> Self {
        Self::default()
    }

    /// Radius search around an already geocoded zip code.
    pub fn zip(zip: impl Into<String>, coords: Coordinates, radius_miles: f64) -> Self {
        Self {
            location_mode: LocationMode::Zip,
            zip: Some(zip.into()),
            zip_coords: Some(coords),
            zip_radius_miles: Some(radius_miles),
            ..Self::default()
        }
    }

    pub fn country(country: impl Into<String>) -> Self {
        Self {
            location_mode: LocationMode::Country,
            country: Some(country.into()),
            ..Self::default()
        }
    }

    pub fn hospital() -> Self {
        Self {
            location_mode: LocationMode::Hospital,
            ..Self::default()
        }
    }

    pub fn nih() -> Self {
        Self {
            location_mode: LocationMode::Nih,
            ..Self::default()
        }
    }

    pub fn with_states<I>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = StateRef>,
    {
        self.states = states.into_iter().collect();
        self
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn with_va_only(mut self, va_only: bool) -> Self {
        self.va_only = va_only;
        self
    }

    pub fn country_name(&self) -> Option<&str> {
        non_blank(&self.country)
    }

    /// The city constraint, if any. A blank city means "any city".
    pub fn city_name(&self) -> Option<&str> {
        non_blank(&self.city)
    }

    /// Distinct state abbreviations picked in the form; order is irrelevant.
    pub fn state_abbrs(&self) -> BTreeSet<&str> {
        self.states.iter().map(|s| s.abbr.as_str()).collect()
    }
}
