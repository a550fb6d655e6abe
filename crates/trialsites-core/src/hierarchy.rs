// crates/trialsites-core/src/hierarchy.rs

//! # Hierarchy Assembly
//!
//! Turns a flat site list into the nested display model:
//!
//! - **United States** → every indexed state → cities
//! - **Canada** → provinces present in the list → cities
//! - **any other country** → cities
//!
//! The United States entry always comes first. Other countries keep the
//! order in which they are passed in.

use crate::common::{CANADA, UNITED_STATES};
use crate::grouping::group_by_city;
use crate::index::{distinct_countries, GeographyIndex};
use crate::model::{
    CountryDivisions, CountryNode, GeographyNode, ProvinceNode, SiteRecord, StateNode,
};
use std::collections::BTreeSet;

/// Assembles the hierarchy of `sites` for the given `countries`.
///
/// The US breakdown enumerates every state in `index.us_states`, including
/// states with no site in `sites`; those get an empty city list.
pub fn assemble<S>(sites: &[SiteRecord], index: &GeographyIndex, countries: &[S]) -> Vec<GeographyNode>
where
    S: AsRef<str>,
{
    let mut master = Vec::with_capacity(countries.len());

    for country in countries.iter().map(|c| c.as_ref()) {
        match country {
            UNITED_STATES => master.insert(0, united_states(sites, index)),
            CANADA => master.push(canada(sites)),
            other => master.push(GeographyNode::Country(CountryNode {
                country: other.to_owned(),
                divisions: CountryDivisions::Cities(group_by_city(
                    sites.iter().filter(|s| s.is_in_country(other)),
                )),
            })),
        }
    }

    master
}

/// Hierarchy of the complete site list the index was built from.
pub fn assemble_all(sites: &[SiteRecord], index: &GeographyIndex) -> Vec<GeographyNode> {
    assemble(sites, index, &index.countries)
}

/// Hierarchy of a filtered subset; countries are taken from the subset
/// itself while the US state list still comes from the full index.
pub fn assemble_subset(subset: &[SiteRecord], index: &GeographyIndex) -> Vec<GeographyNode> {
    assemble(subset, index, &distinct_countries(subset))
}

fn united_states(sites: &[SiteRecord], index: &GeographyIndex) -> GeographyNode {
    let us_sites: Vec<&SiteRecord> = sites
        .iter()
        .filter(|s| s.is_in_country(UNITED_STATES))
        .collect();

    let states = index
        .us_states
        .iter()
        .map(|abbr| StateNode {
            state: abbr.clone(),
            cities: group_by_city(
                us_sites
                    .iter()
                    .copied()
                    .filter(|s| s.region_code() == Some(abbr.as_str())),
            ),
        })
        .collect();

    GeographyNode::Country(CountryNode {
        country: UNITED_STATES.to_owned(),
        divisions: CountryDivisions::States(states),
    })
}

fn canada(sites: &[SiteRecord]) -> GeographyNode {
    let canada_sites: Vec<&SiteRecord> = sites.iter().filter(|s| s.is_in_country(CANADA)).collect();

    let provinces: BTreeSet<&str> = canada_sites
        .iter()
        .filter_map(|s| s.region_code())
        .collect();

    let provinces = provinces
        .into_iter()
        .map(|province| ProvinceNode {
            province: province.to_owned(),
            cities: group_by_city(
                canada_sites
                    .iter()
                    .copied()
                    .filter(|s| s.region_code() == Some(province)),
            ),
        })
        .collect();

    GeographyNode::Country(CountryNode {
        country: CANADA.to_owned(),
        divisions: CountryDivisions::Provinces(provinces),
    })
}
