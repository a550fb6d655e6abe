// crates/trialsites-core/src/lib.rs

//! # trialsites-core
//!
//! Organizes the participating sites of a clinical trial for display:
//!
//! - a sorted country → state/province → city hierarchy of every site
//!   ([`hierarchy::assemble`]), and
//! - the "nearby" subset matching the user's geographic search
//!   ([`proximity::nearby_sites`]).
//!
//! [`OrganizerFacade`] ties both together and keeps the derived data in sync
//! with the user's search context and filter selections.
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod common;
pub mod error;
pub mod geo;
pub mod grouping;
pub mod hierarchy;
pub mod index;
#[cfg(feature = "json")]
pub mod loader;
pub mod model;
pub mod organizer;
pub mod prelude;
pub mod proximity;
pub mod selection;
pub mod states;
pub mod traits;

// Re-exports
pub use crate::common::{
    OrganizerStats, ALL_STATES, CANADA, CONTACT_UNAVAILABLE, NIH_ZIPCODE, OTHER_COUNTRIES,
    UNITED_STATES,
};
pub use crate::error::{Result, SiteError};
pub use crate::geo::Haversine;
pub use crate::index::GeographyIndex;
pub use crate::model::{
    CityGroup, Contact, Coordinates, CountryDivisions, CountryNode, GeographyNode, LocationMode,
    ProvinceNode, RecruitmentStatus, SearchContext, SiteRecord, StateNode, StateRef,
};
pub use crate::organizer::{FilterOptions, NearbyToggle, OrganizerFacade, SelectOption};
pub use crate::selection::{CountryFilter, Selection, StateFilter};
pub use crate::states::UsStateNames;
pub use crate::traits::{RadiusPredicate, StateNameResolver};
