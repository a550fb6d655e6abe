// crates/trialsites-core/src/model/node.rs
use super::site::SiteRecord;
use crate::traits::StateNameResolver;
use serde::Serialize;

/// All sites of one city, in input order.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CityGroup {
    pub city: String,
    pub sites: Vec<SiteRecord>,
}

/// A US state and its cities.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StateNode {
    pub state: String,
    pub cities: Vec<CityGroup>,
}

impl StateNode {
    /// States without cities are kept in the tree but not shown.
    pub fn is_displayed(&self) -> bool {
        !self.cities.is_empty()
    }

    /// Full state name, or the abbreviation when the resolver does not know it.
    pub fn label<'a, R: StateNameResolver + ?Sized>(&'a self, resolver: &'a R) -> &'a str {
        resolver.state_label(&self.state)
    }
}

/// A Canadian province and its cities.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProvinceNode {
    pub province: String,
    pub cities: Vec<CityGroup>,
}

/// How a country's sites are broken down below the country level.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CountryDivisions {
    /// United States only.
    States(Vec<StateNode>),
    /// Canada only.
    Provinces(Vec<ProvinceNode>),
    /// Every other country.
    Cities(Vec<CityGroup>),
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CountryNode {
    pub country: String,
    #[serde(flatten)]
    pub divisions: CountryDivisions,
}

/// One entry of a display list.
///
/// The master hierarchy only holds `Country` entries; narrowing the selection
/// to a single US state yields a `State` entry.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum GeographyNode {
    Country(CountryNode),
    State(StateNode),
    Province(ProvinceNode),
}

/// Every city group below a node, in display order.
pub type CityGroupsIter<'a> = Box<dyn Iterator<Item = &'a CityGroup> + 'a>;

impl CountryNode {
    pub fn city_groups(&self) -> CityGroupsIter<'_> {
        match &self.divisions {
            CountryDivisions::States(states) => {
                Box::new(states.iter().flat_map(|s| s.cities.iter()))
            }
            CountryDivisions::Provinces(provinces) => {
                Box::new(provinces.iter().flat_map(|p| p.cities.iter()))
            }
            CountryDivisions::Cities(cities) => Box::new(cities.iter()),
        }
    }

    pub fn states(&self) -> &[StateNode] {
        match &self.divisions {
            CountryDivisions::States(states) => states,
            _ => &[],
        }
    }

    pub fn provinces(&self) -> &[ProvinceNode] {
        match &self.divisions {
            CountryDivisions::Provinces(provinces) => provinces,
            _ => &[],
        }
    }
}

impl GeographyNode {
    /// Country name, state abbreviation or province abbreviation.
    pub fn name(&self) -> &str {
        match self {
            GeographyNode::Country(c) => &c.country,
            GeographyNode::State(s) => &s.state,
            GeographyNode::Province(p) => &p.province,
        }
    }

    pub fn city_groups(&self) -> CityGroupsIter<'_> {
        match self {
            GeographyNode::Country(c) => c.city_groups(),
            GeographyNode::State(s) => Box::new(s.cities.iter()),
            GeographyNode::Province(p) => Box::new(p.cities.iter()),
        }
    }

    pub fn site_count(&self) -> usize {
        self.city_groups().map(|g| g.sites.len()).sum()
    }

    pub fn as_country(&self) -> Option<&CountryNode> {
        match self {
            GeographyNode::Country(c) => Some(c),
            _ => None,
        }
    }
}
