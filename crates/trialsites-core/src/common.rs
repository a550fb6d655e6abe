// crates/trialsites-core/src/common.rs
use serde::{Deserialize, Serialize};

/// Country name that gets a per-state breakdown.
pub const UNITED_STATES: &str = "United States";

/// Country name that gets a per-province breakdown.
pub const CANADA: &str = "Canada";

/// Postal code of the NIH Clinical Center in Bethesda, MD.
pub const NIH_ZIPCODE: &str = "20892";

/// Selector value standing for "every country except the US and Canada".
pub const OTHER_COUNTRIES: &str = "other";

/// Selector value standing for "every state".
pub const ALL_STATES: &str = "all";

/// Shown in place of a contact block when a site has no contact name.
pub const CONTACT_UNAVAILABLE: &str = "Name Not Available";

/// Simple aggregate counts for an organizer.
///
/// Returned by [`crate::OrganizerFacade::stats`]; the counts reflect the
/// current site list and the nearby set of the current search context.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizerStats {
    pub sites: usize,
    pub countries: usize,
    pub us_states: usize,
    pub nearby: usize,
}
