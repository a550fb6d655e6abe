// crates/trialsites-core/src/proximity.rs

//! # Proximity Filter
//!
//! Picks the sites that match the geographic part of the user's search, the
//! "nearby" set. The rules are evaluated in this order:
//!
//! 1. Hospital searches, and unrestricted searches without the VA-only flag,
//!    produce no nearby set at all.
//! 2. With the VA-only flag, only VA sites are considered.
//! 3. ZIP: sites within the search radius of the zip code.
//! 4. Country: state / country match, optionally narrowed to one city.
//! 5. NIH: sites at the NIH Clinical Center.
//! 6. Unrestricted + VA-only: every VA site.
//!
//! The output keeps the input order.

use crate::common::{NIH_ZIPCODE, UNITED_STATES};
use crate::model::{LocationMode, SearchContext, SiteRecord};
use crate::traits::RadiusPredicate;

/// Whether `ctx` produces a nearby set at all.
///
/// When this is `false` the caller shows the full hierarchy and offers no
/// "near me" toggle.
pub fn has_nearby_view(ctx: &SearchContext) -> bool {
    !matches!(
        (ctx.location_mode, ctx.va_only),
        (LocationMode::Hospital, _) | (LocationMode::All, false)
    )
}

/// Sites matching the geographic part of `ctx`, in input order.
///
/// A context that is missing what its mode needs (zip coordinates or radius
/// for ZIP, a country for COUNTRY) yields an empty set.
pub fn nearby_sites<P>(sites: &[SiteRecord], ctx: &SearchContext, radius: &P) -> Vec<SiteRecord>
where
    P: RadiusPredicate + ?Sized,
{
    if !has_nearby_view(ctx) {
        return Vec::new();
    }

    let candidates = sites.iter().filter(|s| !ctx.va_only || s.is_va);

    let nearby: Vec<SiteRecord> = match ctx.location_mode {
        LocationMode::Zip => {
            let (Some(center), Some(miles)) = (ctx.zip_coords, ctx.zip_radius_miles) else {
                tracing::warn!(zip = ?ctx.zip, "zip search without resolved coordinates or radius");
                return Vec::new();
            };
            candidates
                .filter(|s| {
                    s.coordinates
                        .is_some_and(|point| radius.is_within_radius(center, point, miles))
                })
                .cloned()
                .collect()
        }
        LocationMode::Country => {
            let Some(country) = ctx.country_name() else {
                tracing::warn!("country search without a country");
                return Vec::new();
            };
            let city = ctx.city_name();
            let states = ctx.state_abbrs();
            let in_city = |s: &SiteRecord| city.map_or(true, |c| s.city() == Some(c));

            if country == UNITED_STATES && !states.is_empty() {
                candidates
                    .filter(|s| s.region_code().is_some_and(|r| states.contains(r)))
                    .filter(|&s| in_city(s))
                    .cloned()
                    .collect()
            } else {
                candidates
                    .filter(|s| s.is_in_country(country))
                    .filter(|&s| in_city(s))
                    .cloned()
                    .collect()
            }
        }
        LocationMode::Nih => candidates
            .filter(|s| s.postal_code() == Some(NIH_ZIPCODE))
            .cloned()
            .collect(),
        // VA-only is the whole filter here.
        LocationMode::All => candidates.cloned().collect(),
        LocationMode::Hospital => Vec::new(),
    };

    tracing::debug!(
        mode = ?ctx.location_mode,
        va_only = ctx.va_only,
        sites = sites.len(),
        nearby = nearby.len(),
        "computed nearby sites"
    );
    nearby
}
