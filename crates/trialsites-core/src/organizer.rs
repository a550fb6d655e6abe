// crates/trialsites-core/src/organizer.rs

//! # Organizer
//!
//! [`OrganizerFacade`] owns the derived data of one trial's site list and
//! keeps it current as the user edits the search or the filter selectors.
//!
//! | change                  | recomputed                                   |
//! |-------------------------|----------------------------------------------|
//! | new site list           | index, master hierarchy, nearby set and tree |
//! | new search context      | nearby set and tree                          |
//! | country/state selection | nothing (projection on read)                 |
//!
//! The nearby view is revealed automatically the first time a search yields
//! nearby sites. After that only [`OrganizerFacade::toggle_nearby`] changes
//! it.

use crate::common::{OrganizerStats, CANADA, OTHER_COUNTRIES, UNITED_STATES};
use crate::geo::Haversine;
use crate::hierarchy::{assemble_all, assemble_subset};
use crate::index::{build_geography_index, GeographyIndex};
use crate::model::{GeographyNode, SearchContext, SiteRecord};
use crate::proximity::nearby_sites;
use crate::selection::{select, CountryFilter, Selection, StateFilter};
use crate::states::UsStateNames;
use crate::traits::{RadiusPredicate, StateNameResolver};
use serde::Serialize;

/// One entry of a selector.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// The "near me" / "all locations" switch.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NearbyToggle {
    pub showing_nearby: bool,
    pub label: &'static str,
}

/// What the presentation layer needs to draw the filter controls.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    pub countries: Vec<SelectOption>,
    /// Starts with the "all" entry.
    pub states: Vec<SelectOption>,
    pub show_country_filter: bool,
    pub show_state_filter: bool,
    /// Present whenever the nearby set is non-empty, even for a trial with a
    /// single country and state. The trial page this replaces only drew the
    /// toggle next to the country/state selectors, i.e. with more than one
    /// country or state.
    pub nearby_toggle: Option<NearbyToggle>,
    pub selected_country: String,
    pub selected_state: String,
}

/// Stateful coordinator for one trial's site list.
///
/// Generic over the two collaborators it consumes; the defaults are the
/// built-in state table and the haversine radius test.
#[derive(Debug, Clone)]
pub struct OrganizerFacade<R = UsStateNames, P = Haversine> {
    resolver: R,
    radius: P,
    sites: Vec<SiteRecord>,
    index: GeographyIndex,
    master: Vec<GeographyNode>,
    context: SearchContext,
    nearby: Vec<SiteRecord>,
    nearby_tree: Vec<GeographyNode>,
    selection: Selection,
    show_nearby: bool,
    nearby_revealed: bool,
}

impl Default for OrganizerFacade {
    fn default() -> Self {
        Self::new(UsStateNames, Haversine)
    }
}

impl<R, P> OrganizerFacade<R, P>
where
    R: StateNameResolver,
    P: RadiusPredicate,
{
    pub fn new(resolver: R, radius: P) -> Self {
        Self {
            resolver,
            radius,
            sites: Vec::new(),
            index: GeographyIndex::default(),
            master: Vec::new(),
            context: SearchContext::default(),
            nearby: Vec::new(),
            nearby_tree: Vec::new(),
            selection: Selection::default(),
            show_nearby: false,
            nearby_revealed: false,
        }
    }

    /// Organizer for `sites` under `context`, in one step.
    pub fn with_sites(resolver: R, radius: P, sites: Vec<SiteRecord>, context: SearchContext) -> Self {
        let mut organizer = Self::new(resolver, radius);
        organizer.context = context;
        organizer.set_sites(sites);
        organizer
    }

    /// Replaces the site list.
    ///
    /// Supplying the list already held is a no-op. Any other list replaces
    /// every cache, resets the selection and re-arms the nearby auto-reveal.
    pub fn set_sites(&mut self, sites: Vec<SiteRecord>) {
        if sites == self.sites && !self.index.is_empty() {
            return;
        }

        self.sites = sites;
        self.index = GeographyIndex::default();
        self.master.clear();
        self.nearby.clear();
        self.nearby_tree.clear();
        self.show_nearby = false;
        self.nearby_revealed = false;

        if self.sites.is_empty() {
            self.selection = Selection::default();
            return;
        }

        self.index = build_geography_index(&self.sites, &self.resolver);
        if !self.index.is_empty() {
            self.master = assemble_all(&self.sites, &self.index);
            self.selection = Selection::new(self.initial_country(), StateFilter::All);
            self.refresh_nearby();
        }
        tracing::debug!(
            sites = self.sites.len(),
            countries = self.index.countries.len(),
            "site list replaced"
        );
    }

    /// Applies a new search context snapshot.
    pub fn update_context(&mut self, context: SearchContext) {
        if context == self.context {
            return;
        }
        self.context = context;
        if !self.index.is_empty() {
            self.refresh_nearby();
        }
    }

    pub fn set_country_filter(&mut self, country: impl Into<CountryFilter>) {
        self.selection.set_country(country.into());
    }

    pub fn set_state_filter(&mut self, state: impl Into<StateFilter>) {
        self.selection.set_state(state.into());
    }

    /// Flips between the nearby and the full view; returns the new state.
    ///
    /// Without nearby sites there is nothing to switch to and the call does
    /// nothing.
    pub fn toggle_nearby(&mut self) -> bool {
        if !self.nearby.is_empty() {
            self.show_nearby = !self.show_nearby;
        }
        self.is_showing_nearby()
    }

    pub fn is_showing_nearby(&self) -> bool {
        self.show_nearby && !self.nearby.is_empty()
    }

    /// The list to draw: the nearby hierarchy when showing nearby sites,
    /// otherwise the master hierarchy narrowed to the current selection.
    pub fn display_tree(&self) -> Vec<GeographyNode> {
        if self.is_showing_nearby() {
            self.nearby_tree.clone()
        } else {
            select(&self.master, &self.selection)
        }
    }

    pub fn filter_options(&self) -> FilterOptions {
        let showing_nearby = self.is_showing_nearby();

        let mut countries = Vec::new();
        if self.index.has_country(UNITED_STATES) {
            countries.push(SelectOption::new(UNITED_STATES, "U.S.A."));
        }
        if self.index.has_country(CANADA) {
            countries.push(SelectOption::new(CANADA, CANADA));
        }
        if self.index.other_countries().next().is_some() {
            countries.push(SelectOption::new(OTHER_COUNTRIES, "Other"));
        }

        let states = std::iter::once(SelectOption::new(StateFilter::All.as_str(), "All"))
            .chain(self.index.us_states.iter().map(|abbr| {
                SelectOption::new(abbr.as_str(), self.resolver.state_label(abbr))
            }))
            .collect();

        FilterOptions {
            countries,
            states,
            show_country_filter: !showing_nearby && self.index.countries.len() > 1,
            show_state_filter: !showing_nearby
                && self.index.us_states.len() > 1
                && self.selection.country().is_united_states(),
            nearby_toggle: (!self.nearby.is_empty()).then(|| NearbyToggle {
                showing_nearby,
                label: if showing_nearby {
                    "Show all locations"
                } else {
                    "Show locations near me"
                },
            }),
            selected_country: self.selection.country().to_string(),
            selected_state: self.selection.state().to_string(),
        }
    }

    pub fn sites(&self) -> &[SiteRecord] {
        &self.sites
    }

    pub fn index(&self) -> &GeographyIndex {
        &self.index
    }

    pub fn master_hierarchy(&self) -> &[GeographyNode] {
        &self.master
    }

    pub fn nearby_sites(&self) -> &[SiteRecord] {
        &self.nearby
    }

    pub fn nearby_hierarchy(&self) -> &[GeographyNode] {
        &self.nearby_tree
    }

    pub fn context(&self) -> &SearchContext {
        &self.context
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    pub fn stats(&self) -> OrganizerStats {
        OrganizerStats {
            sites: self.sites.len(),
            countries: self.index.countries.len(),
            us_states: self.index.us_states.len(),
            nearby: self.nearby.len(),
        }
    }

    fn refresh_nearby(&mut self) {
        self.nearby = nearby_sites(&self.sites, &self.context, &self.radius);
        self.nearby_tree = if self.nearby.is_empty() {
            Vec::new()
        } else {
            assemble_subset(&self.nearby, &self.index)
        };

        if !self.nearby.is_empty() && !self.nearby_revealed {
            self.nearby_revealed = true;
            self.show_nearby = true;
            tracing::debug!(nearby = self.nearby.len(), "revealing nearby sites");
        }
    }

    // The United States when present, otherwise the first selector entry.
    fn initial_country(&self) -> CountryFilter {
        if self.index.has_country(UNITED_STATES) {
            CountryFilter::united_states()
        } else if self.index.has_country(CANADA) {
            CountryFilter::from(CANADA)
        } else {
            CountryFilter::Other
        }
    }
}
