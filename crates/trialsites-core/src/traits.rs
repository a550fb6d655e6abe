// crates/trialsites-core/src/traits.rs
use crate::model::Coordinates;
use std::collections::HashMap;

/// Resolves a US state abbreviation to its full name.
///
/// The organizer uses the full name as the sort key for the state list and
/// as the display label. Implementors only need to provide
/// [`StateNameResolver::state_name`]; [`StateNameResolver::state_label`]
/// falls back to the abbreviation itself for unknown codes.
///
/// # Examples
/// ```rust
/// use std::collections::HashMap;
/// use trialsites_core::traits::StateNameResolver;
///
/// let mut names = HashMap::new();
/// names.insert("MD".to_string(), "Maryland".to_string());
///
/// assert_eq!(names.state_label("MD"), "Maryland");
/// assert_eq!(names.state_label("ZZ"), "ZZ");
/// ```
pub trait StateNameResolver {
    /// Full name for `abbr`, if known.
    fn state_name(&self, abbr: &str) -> Option<&str>;

    /// Full name for `abbr`, or `abbr` itself when unknown.
    #[inline]
    fn state_label<'a>(&'a self, abbr: &'a str) -> &'a str {
        self.state_name(abbr).unwrap_or(abbr)
    }
}

impl StateNameResolver for HashMap<String, String> {
    fn state_name(&self, abbr: &str) -> Option<&str> {
        self.get(abbr).map(String::as_str)
    }
}

impl<R: StateNameResolver + ?Sized> StateNameResolver for &R {
    fn state_name(&self, abbr: &str) -> Option<&str> {
        (**self).state_name(abbr)
    }
}

/// Geodesic "is this point within N miles of that center" test.
///
/// The organizer never measures distances itself; ZIP-mode searches call
/// this predicate once per site. Closures with the matching signature
/// implement it, which keeps tests free of real geometry.
///
/// # Examples
/// ```rust
/// use trialsites_core::{Coordinates, RadiusPredicate};
///
/// let everywhere = |_: Coordinates, _: Coordinates, _: f64| true;
/// assert!(everywhere.is_within_radius(
///     Coordinates::new(0.0, 0.0),
///     Coordinates::new(10.0, 10.0),
///     1.0,
/// ));
/// ```
pub trait RadiusPredicate {
    fn is_within_radius(&self, center: Coordinates, point: Coordinates, radius_miles: f64)
        -> bool;
}

impl<F> RadiusPredicate for F
where
    F: Fn(Coordinates, Coordinates, f64) -> bool,
{
    #[inline]
    fn is_within_radius(&self, center: Coordinates, point: Coordinates, radius_miles: f64) -> bool {
        self(center, point, radius_miles)
    }
}
