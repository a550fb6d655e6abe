//! Property tests for the organizing functions, run over randomly generated
//! site lists and search contexts.

use proptest::prelude::*;
use std::collections::BTreeSet;
use trialsites_core::prelude::*;

const COUNTRIES: &[&str] = &["United States", "Canada", "France", "Japan", "Brazil"];
const REGIONS: &[&str] = &["MD", "VA", "NY", "NE", "NV", "ON", "BC", "QC"];
const CITIES: &[&str] = &["Baltimore", "Bethesda", "Toronto", "Paris", "Osaka", "Richmond"];

fn status() -> impl Strategy<Value = RecruitmentStatus> {
    prop_oneof![
        Just(RecruitmentStatus::Active),
        Just(RecruitmentStatus::ClosedToAccrual),
        Just(RecruitmentStatus::TemporarilyClosedToAccrual),
        Just(RecruitmentStatus::Unknown),
    ]
}

/// Sites with sparse geography: any of the location fields may be missing.
fn site() -> impl Strategy<Value = SiteRecord> {
    (
        "[a-z]{1,8}",
        status(),
        prop::option::of(prop::sample::select(COUNTRIES)),
        prop::option::of(prop::sample::select(REGIONS)),
        prop::option::of(prop::sample::select(CITIES)),
        prop::option::of((25.0f64..50.0, -125.0f64..-65.0)),
        any::<bool>(),
        prop::bool::weighted(0.1),
    )
        .prop_map(|(name, status, country, region, city, coords, is_va, nih)| {
            let mut site = SiteRecord::new(name, status).va(is_va);
            site.country = country.map(str::to_owned);
            site.state_or_province_abbreviation = region.map(str::to_owned);
            site.city = city.map(str::to_owned);
            site.coordinates = coords.map(|(lat, lon)| Coordinates::new(lat, lon));
            if nih {
                site.postal_code = Some(NIH_ZIPCODE.to_owned());
            }
            site
        })
}

fn sites() -> impl Strategy<Value = Vec<SiteRecord>> {
    prop::collection::vec(site(), 0..40)
}

fn mode() -> impl Strategy<Value = LocationMode> {
    prop_oneof![
        Just(LocationMode::All),
        Just(LocationMode::Zip),
        Just(LocationMode::Country),
        Just(LocationMode::Hospital),
        Just(LocationMode::Nih),
    ]
}

fn context() -> impl Strategy<Value = SearchContext> {
    (
        mode(),
        prop::option::of((25.0f64..50.0, -125.0f64..-65.0)),
        prop::option::of(1.0f64..500.0),
        prop::option::of(prop::sample::select(COUNTRIES)),
        prop::collection::vec(prop::sample::select(REGIONS), 0..3),
        prop::option::of(prop::sample::select(CITIES)),
        any::<bool>(),
    )
        .prop_map(|(mode, coords, radius, country, states, city, va_only)| SearchContext {
            location_mode: mode,
            zip: None,
            zip_coords: coords.map(|(lat, lon)| Coordinates::new(lat, lon)),
            zip_radius_miles: radius,
            country: country.map(str::to_owned),
            states: states.into_iter().map(|s| StateRef::new(s, "")).collect(),
            city: city.map(str::to_owned),
            va_only,
        })
}

proptest! {
    /// Property: the country index lists every distinct country once, ascending.
    #[test]
    fn prop_index_countries_distinct_and_sorted(sites in sites()) {
        let index = build_geography_index(&sites, &UsStateNames);
        let expected: Vec<String> = sites
            .iter()
            .filter_map(SiteRecord::country)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_owned)
            .collect();
        prop_assert_eq!(index.countries, expected);
    }

    /// Property: state abbreviations are unique and ordered by full name.
    #[test]
    fn prop_index_states_ordered_by_name(sites in sites()) {
        let index = build_geography_index(&sites, &UsStateNames);
        let unique: BTreeSet<_> = index.us_states.iter().collect();
        prop_assert_eq!(unique.len(), index.us_states.len());
        let resolver = UsStateNames;
        let labels: Vec<_> = index.us_states.iter().map(|a| resolver.state_label(a)).collect();
        let mut sorted = labels.clone();
        sorted.sort();
        prop_assert_eq!(labels, sorted);
    }

    /// Property: city grouping partitions every site that has a city.
    #[test]
    fn prop_city_grouping_partitions_input(sites in sites()) {
        let groups = group_by_city(&sites);

        let grouped: usize = groups.iter().map(|g| g.sites.len()).sum();
        let with_city = sites.iter().filter(|s| s.city().is_some()).count();
        prop_assert_eq!(grouped, with_city);

        let cities: Vec<_> = groups.iter().map(|g| g.city.as_str()).collect();
        let mut sorted = cities.clone();
        sorted.sort();
        sorted.dedup();
        prop_assert_eq!(&cities, &sorted);

        for group in &groups {
            let expected: Vec<_> = sites
                .iter()
                .filter(|s| s.city() == Some(group.city.as_str()))
                .cloned()
                .collect();
            prop_assert_eq!(&group.sites, &expected);
        }
    }

    /// Property: the US node lists every indexed state, even empty ones.
    #[test]
    fn prop_us_node_enumerates_indexed_states(sites in sites(), ctx in context()) {
        let index = build_geography_index(&sites, &UsStateNames);
        let nearby = nearby_sites(&sites, &ctx, &Haversine);

        for tree in [assemble_all(&sites, &index), assemble_subset(&nearby, &index)] {
            if let Some(us) = tree.iter().filter_map(GeographyNode::as_country).find(|c| c.country == UNITED_STATES) {
                prop_assert_eq!(tree[0].name(), UNITED_STATES);
                let states: Vec<_> = us.states().iter().map(|s| s.state.clone()).collect();
                prop_assert_eq!(&states, &index.us_states);
            }
        }
    }

    /// Property: the same context over the same sites gives the same nearby set.
    #[test]
    fn prop_nearby_is_idempotent(sites in sites(), ctx in context()) {
        let first = nearby_sites(&sites, &ctx, &Haversine);
        let second = nearby_sites(&sites, &ctx, &Haversine);
        prop_assert_eq!(first, second);
    }

    /// Property: hospital searches never have a nearby set.
    #[test]
    fn prop_hospital_search_is_never_nearby(sites in sites(), ctx in context()) {
        let ctx = SearchContext { location_mode: LocationMode::Hospital, ..ctx };
        prop_assert!(nearby_sites(&sites, &ctx, &Haversine).is_empty());
    }

    /// Property: the nearby set is an order-preserving subsequence of the input.
    #[test]
    fn prop_nearby_preserves_input_order(sites in sites(), ctx in context()) {
        let nearby = nearby_sites(&sites, &ctx, &Haversine);
        let mut rest = sites.iter();
        for site in &nearby {
            prop_assert!(rest.any(|s| s == site));
            if ctx.va_only {
                prop_assert!(site.is_va);
            }
        }
    }
}
