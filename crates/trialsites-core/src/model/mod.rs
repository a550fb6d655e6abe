// crates/trialsites-core/src/model/mod.rs
pub mod context;
pub mod node;
pub mod site;

pub use context::{LocationMode, SearchContext, StateRef};
pub use node::{CityGroup, CountryDivisions, CountryNode, GeographyNode, ProvinceNode, StateNode};
pub use site::{Contact, Coordinates, RecruitmentStatus, SiteRecord};

/// `Some(s)` for a non-blank string, `None` otherwise.
///
/// Site data is sparse; an empty string carries no more information than a
/// missing field, so both are treated the same.
pub(crate) fn non_blank(s: &Option<String>) -> Option<&str> {
    s.as_deref().filter(|v| !v.trim().is_empty())
}
