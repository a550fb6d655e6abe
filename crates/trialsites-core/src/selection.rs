// crates/trialsites-core/src/selection.rs
use crate::common::{ALL_STATES, CANADA, OTHER_COUNTRIES, UNITED_STATES};
use crate::model::GeographyNode;
use std::fmt;

/// `true` for the two countries with their own selector entry.
pub(crate) fn is_north_american(country: &str) -> bool {
    country == UNITED_STATES || country == CANADA
}

/// Country selector value.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum CountryFilter {
    /// Every country except the United States and Canada.
    Other,
    Named(String),
}

impl CountryFilter {
    pub fn united_states() -> Self {
        CountryFilter::Named(UNITED_STATES.to_owned())
    }

    pub fn as_str(&self) -> &str {
        match self {
            CountryFilter::Other => OTHER_COUNTRIES,
            CountryFilter::Named(name) => name,
        }
    }

    pub fn is_united_states(&self) -> bool {
        self.as_str() == UNITED_STATES
    }
}

impl From<&str> for CountryFilter {
    fn from(value: &str) -> Self {
        if value == OTHER_COUNTRIES {
            CountryFilter::Other
        } else {
            CountryFilter::Named(value.to_owned())
        }
    }
}

impl fmt::Display for CountryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// State selector value; only meaningful while the United States is selected.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum StateFilter {
    #[default]
    All,
    Named(String),
}

impl StateFilter {
    pub fn as_str(&self) -> &str {
        match self {
            StateFilter::All => ALL_STATES,
            StateFilter::Named(abbr) => abbr,
        }
    }
}

impl From<&str> for StateFilter {
    /// `"all"` and the empty string both mean every state.
    fn from(value: &str) -> Self {
        if value.is_empty() || value == ALL_STATES {
            StateFilter::All
        } else {
            StateFilter::Named(value.to_owned())
        }
    }
}

impl fmt::Display for StateFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The user's country/state pick for the full hierarchy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection {
    country: CountryFilter,
    state: StateFilter,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            country: CountryFilter::united_states(),
            state: StateFilter::All,
        }
    }
}

impl Selection {
    pub fn new(country: CountryFilter, state: StateFilter) -> Self {
        let mut selection = Self {
            country: CountryFilter::Other,
            state,
        };
        selection.set_country(country);
        selection
    }

    pub fn country(&self) -> &CountryFilter {
        &self.country
    }

    pub fn state(&self) -> &StateFilter {
        &self.state
    }

    /// Selecting any country other than the United States resets the state
    /// to [`StateFilter::All`].
    pub fn set_country(&mut self, country: CountryFilter) {
        if !country.is_united_states() {
            self.state = StateFilter::All;
        }
        self.country = country;
    }

    pub fn set_state(&mut self, state: StateFilter) {
        self.state = state;
    }
}

/// Projects the master hierarchy onto `selection`.
///
/// - `Other`: every country node except the United States and Canada.
/// - a named country: that country's node.
/// - the United States with a named state: that state's node only.
pub fn select(master: &[GeographyNode], selection: &Selection) -> Vec<GeographyNode> {
    let countries = master.iter().filter_map(GeographyNode::as_country);

    match (selection.country(), selection.state()) {
        (CountryFilter::Other, _) => countries
            .filter(|c| !is_north_american(&c.country))
            .cloned()
            .map(GeographyNode::Country)
            .collect(),
        (CountryFilter::Named(name), StateFilter::Named(abbr)) if name == UNITED_STATES => countries
            .filter(|c| c.country == *name)
            .flat_map(|c| c.states())
            .filter(|s| s.state == *abbr)
            .cloned()
            .map(GeographyNode::State)
            .collect(),
        (CountryFilter::Named(name), _) => countries
            .filter(|c| c.country == *name)
            .cloned()
            .map(GeographyNode::Country)
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hierarchy::assemble_all;
    use crate::index::build_geography_index;
    use crate::model::{RecruitmentStatus, SiteRecord};
    use crate::states::UsStateNames;

    fn master() -> Vec<GeographyNode> {
        let site = |name: &str, country: &str, region: &str, city: &str| {
            SiteRecord::new(name, RecruitmentStatus::Active)
                .in_country(country)
                .in_state(region)
                .in_city(city)
        };
        let sites = vec![
            site("us1", UNITED_STATES, "MD", "Bethesda"),
            site("us2", UNITED_STATES, "VA", "Richmond"),
            site("ca1", CANADA, "ON", "Toronto"),
            site("fr1", "France", "", "Paris"),
            site("jp1", "Japan", "", "Tokyo"),
        ];
        let index = build_geography_index(&sites, &UsStateNames);
        assemble_all(&sites, &index)
    }

    fn names(nodes: &[GeographyNode]) -> Vec<&str> {
        nodes.iter().map(GeographyNode::name).collect()
    }

    #[test]
    fn default_selection_is_united_states() {
        let shown = select(&master(), &Selection::default());
        assert_eq!(names(&shown), vec![UNITED_STATES]);
    }

    #[test]
    fn other_excludes_north_america() {
        let selection = Selection::new(CountryFilter::Other, StateFilter::All);
        assert_eq!(names(&select(&master(), &selection)), vec!["France", "Japan"]);
    }

    #[test]
    fn named_country() {
        let selection = Selection::new("Canada".into(), StateFilter::All);
        assert_eq!(names(&select(&master(), &selection)), vec!["Canada"]);
    }

    #[test]
    fn us_state_narrows_to_state_node() {
        let selection = Selection::new(CountryFilter::united_states(), "VA".into());
        let shown = select(&master(), &selection);
        assert_eq!(shown.len(), 1);
        assert!(matches!(&shown[0], GeographyNode::State(s) if s.state == "VA"));
        assert_eq!(shown[0].site_count(), 1);
    }

    #[test]
    fn unknown_state_shows_nothing() {
        let selection = Selection::new(CountryFilter::united_states(), "TX".into());
        assert!(select(&master(), &selection).is_empty());
    }

    #[test]
    fn leaving_united_states_resets_state() {
        let mut selection = Selection::new(CountryFilter::united_states(), "MD".into());
        assert_eq!(selection.state(), &StateFilter::Named("MD".into()));
        selection.set_country(CountryFilter::Other);
        assert_eq!(selection.state(), &StateFilter::All);
        assert_eq!(Selection::new("Japan".into(), "MD".into()).state(), &StateFilter::All);
    }

    #[test]
    fn selector_values_parse() {
        assert_eq!(CountryFilter::from("other"), CountryFilter::Other);
        assert_eq!(StateFilter::from(""), StateFilter::All);
        assert_eq!(StateFilter::from("all"), StateFilter::All);
        assert_eq!(StateFilter::from("MD").to_string(), "MD");
    }
}
