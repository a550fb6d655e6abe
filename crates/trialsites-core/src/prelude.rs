//! trialsites prelude: bring common types and traits into scope for demos and tools.

#![allow(unused_imports)]

pub use crate::common::{OrganizerStats, CANADA, CONTACT_UNAVAILABLE, NIH_ZIPCODE, UNITED_STATES};
pub use crate::error::{Result, SiteError};
pub use crate::geo::{haversine_miles, Haversine};
pub use crate::grouping::group_by_city;
pub use crate::hierarchy::{assemble, assemble_all, assemble_subset};
pub use crate::index::{build_geography_index, GeographyIndex};
#[cfg(feature = "json")]
pub use crate::loader::{load_search_context, load_sites, search_context_from_json, sites_from_json};
pub use crate::model::{
    CityGroup, Contact, Coordinates, CountryDivisions, CountryNode, GeographyNode, LocationMode,
    ProvinceNode, RecruitmentStatus, SearchContext, SiteRecord, StateNode, StateRef,
};
pub use crate::organizer::{FilterOptions, NearbyToggle, OrganizerFacade, SelectOption};
pub use crate::proximity::{has_nearby_view, nearby_sites};
pub use crate::selection::{select, CountryFilter, Selection, StateFilter};
pub use crate::states::UsStateNames;
pub use crate::traits::{RadiusPredicate, StateNameResolver};
