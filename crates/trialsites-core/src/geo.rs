// crates/trialsites-core/src/geo.rs
use crate::model::Coordinates;
use crate::traits::RadiusPredicate;

/// Mean Earth radius in statute miles.
pub const EARTH_RADIUS_MILES: f64 = 3958.8;

/// Great-circle distance between two points, in miles.
pub fn haversine_miles(a: Coordinates, b: Coordinates) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let dlat = (b.lat - a.lat).to_radians();
    let dlon = (b.lon - a.lon).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_MILES * h.sqrt().min(1.0).asin()
}

/// Default [`RadiusPredicate`]: haversine distance on a spherical Earth.
#[derive(Debug, Clone, Copy, Default)]
pub struct Haversine;

impl RadiusPredicate for Haversine {
    fn is_within_radius(&self, center: Coordinates, point: Coordinates, radius_miles: f64) -> bool {
        haversine_miles(center, point) <= radius_miles
    }
}
