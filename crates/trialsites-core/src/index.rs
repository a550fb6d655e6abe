// crates/trialsites-core/src/index.rs
use crate::common::UNITED_STATES;
use crate::model::SiteRecord;
use crate::traits::StateNameResolver;
use serde::Serialize;
use std::collections::BTreeSet;

/// The countries and US states present in a site list.
///
/// Both lists hold each value once. `countries` is in ascending string
/// order; `us_states` holds abbreviations ordered by their full state name,
/// so `"NE"` (Nebraska) sorts before `"NH"` (New Hampshire) and `"NV"`
/// (Nevada) before both of those.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct GeographyIndex {
    pub countries: Vec<String>,
    pub us_states: Vec<String>,
}

impl GeographyIndex {
    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    pub fn has_country(&self, country: &str) -> bool {
        self.countries.iter().any(|c| c == country)
    }

    /// Countries other than the United States and Canada.
    pub fn other_countries(&self) -> impl Iterator<Item = &str> {
        self.countries
            .iter()
            .map(String::as_str)
            .filter(|c| !crate::selection::is_north_american(c))
    }
}

/// Distinct countries of `sites`, ascending. Sites without a country are
/// ignored.
pub fn distinct_countries<'a, I>(sites: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a SiteRecord>,
{
    sites
        .into_iter()
        .filter_map(SiteRecord::country)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_owned)
        .collect()
}

/// Distinct state abbreviations of the US sites, ordered by full state name.
///
/// Abbreviations the resolver does not know sort by the abbreviation itself.
pub fn us_states_by_name<'a, I, R>(sites: I, resolver: &R) -> Vec<String>
where
    I: IntoIterator<Item = &'a SiteRecord>,
    R: StateNameResolver + ?Sized,
{
    let abbrs: BTreeSet<&str> = sites
        .into_iter()
        .filter(|s| s.is_in_country(UNITED_STATES))
        .filter_map(SiteRecord::region_code)
        .collect();

    let mut named: Vec<(&str, &str)> = abbrs
        .into_iter()
        .map(|abbr| (resolver.state_label(abbr), abbr))
        .collect();
    named.sort();
    named.into_iter().map(|(_, abbr)| abbr.to_owned()).collect()
}

/// Builds the [`GeographyIndex`] of a site list.
pub fn build_geography_index<R>(sites: &[SiteRecord], resolver: &R) -> GeographyIndex
where
    R: StateNameResolver + ?Sized,
{
    let index = GeographyIndex {
        countries: distinct_countries(sites),
        us_states: us_states_by_name(sites, resolver),
    };
    tracing::debug!(
        sites = sites.len(),
        countries = index.countries.len(),
        us_states = index.us_states.len(),
        "built geography index"
    );
    index
}
