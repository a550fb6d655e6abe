use trialsites_core::prelude::*;

const ZIP_20850: Coordinates = Coordinates {
    lat: 39.0840,
    lon: -77.1528,
};

fn site(name: &str) -> SiteRecord {
    SiteRecord::new(name, RecruitmentStatus::Active)
}

fn us(name: &str, state: &str, city: &str) -> SiteRecord {
    site(name).in_country(UNITED_STATES).in_state(state).in_city(city)
}

fn names(sites: &[SiteRecord]) -> Vec<&str> {
    sites.iter().map(SiteRecord::name).collect()
}

#[test]
fn zip_radius_keeps_nearby_maryland_sites() {
    let sites = vec![
        us("Rockville", "MD", "Rockville").at(39.0840, -77.1528),
        us("Bethesda", "MD", "Bethesda").at(38.9847, -77.0947),
        us("Los Angeles", "CA", "Los Angeles").at(34.0522, -118.2437),
        us("Gaithersburg", "MD", "Gaithersburg").at(39.1434, -77.2014),
    ];
    let ctx = SearchContext::zip("20850", ZIP_20850, 25.0);

    let nearby = nearby_sites(&sites, &ctx, &Haversine);
    assert_eq!(names(&nearby), vec!["Rockville", "Bethesda", "Gaithersburg"]);
}

#[test]
fn unrestricted_search_has_no_nearby_set_and_canada_splits_by_province() {
    let sites = vec![
        site("Princess Margaret").in_country(CANADA).in_state("ON").in_city("Toronto"),
        site("BC Cancer").in_country(CANADA).in_state("BC").in_city("Vancouver"),
        us("NIH CC", "MD", "Bethesda"),
    ];
    assert!(nearby_sites(&sites, &SearchContext::all(), &Haversine).is_empty());

    let index = build_geography_index(&sites, &UsStateNames);
    let master = assemble_all(&sites, &index);
    let canada = master
        .iter()
        .filter_map(GeographyNode::as_country)
        .find(|c| c.country == CANADA)
        .expect("canada node");

    let provinces: Vec<_> = canada.provinces().iter().map(|p| p.province.as_str()).collect();
    assert_eq!(provinces, vec!["BC", "ON"]);
    for province in canada.provinces() {
        assert_eq!(province.cities.len(), 1);
    }
}

#[test]
fn country_search_with_state_keeps_only_that_state() {
    let sites = vec![
        us("md1", "MD", "Baltimore"),
        us("va1", "VA", "Richmond"),
        us("md2", "MD", "Bethesda"),
        us("va2", "VA", "Norfolk"),
        us("md3", "MD", "Baltimore"),
    ];
    let ctx = SearchContext::country(UNITED_STATES).with_states([StateRef::new("MD", "Maryland")]);
    let nearby = nearby_sites(&sites, &ctx, &Haversine);
    assert_eq!(names(&nearby), vec!["md1", "md2", "md3"]);
}

#[test]
fn nih_search_finds_the_clinical_center() {
    let sites = vec![
        us("Clinical Center", "MD", "Bethesda").with_postal_code(NIH_ZIPCODE),
        us("Johns Hopkins", "MD", "Baltimore").with_postal_code("21287"),
        us("No postal code", "MD", "Rockville"),
    ];
    let nearby = nearby_sites(&sites, &SearchContext::nih(), &Haversine);
    assert_eq!(names(&nearby), vec!["Clinical Center"]);
}

#[test]
fn va_only_with_unrestricted_location_keeps_va_sites() {
    let sites = vec![
        us("a", "MD", "Baltimore").va(true),
        us("b", "MD", "Baltimore"),
        us("c", "TX", "Houston").va(true),
        us("d", "TX", "Houston"),
    ];
    let ctx = SearchContext::all().with_va_only(true);
    let nearby = nearby_sites(&sites, &ctx, &Haversine);
    assert_eq!(names(&nearby), vec!["a", "c"]);
}

#[test]
fn organizer_walkthrough() {
    let sites = vec![
        us("Rockville", "MD", "Rockville").at(39.0840, -77.1528),
        us("Houston", "TX", "Houston").at(29.7604, -95.3698),
        site("Toronto").in_country(CANADA).in_state("ON").in_city("Toronto"),
        site("Paris").in_country("France").in_city("Paris"),
    ];
    let mut org: OrganizerFacade = OrganizerFacade::default();
    org.set_sites(sites);

    // No location search yet: full view, United States selected.
    assert!(!org.is_showing_nearby());
    let tree = org.display_tree();
    assert_eq!(tree.len(), 1);
    assert_eq!(tree[0].name(), UNITED_STATES);
    assert_eq!(tree[0].site_count(), 2);

    // A zip search reveals the nearby view.
    org.update_context(SearchContext::zip("20850", ZIP_20850, 50.0));
    assert!(org.is_showing_nearby());
    let tree = org.display_tree();
    assert_eq!(tree[0].site_count(), 1);
    let shown: Vec<_> = tree[0]
        .as_country()
        .unwrap()
        .states()
        .iter()
        .filter(|s| s.is_displayed())
        .map(|s| s.label(org.resolver()))
        .collect();
    assert_eq!(shown, vec!["Maryland"]);

    // Back to all locations, then narrow to "other" countries.
    assert!(!org.toggle_nearby());
    org.set_country_filter("other");
    let tree = org.display_tree();
    assert_eq!(tree.len(), 1);
    assert_eq!(tree[0].name(), "France");

    let stats = org.stats();
    assert_eq!(stats.sites, 4);
    assert_eq!(stats.countries, 3);
    assert_eq!(stats.us_states, 2);
    assert_eq!(stats.nearby, 1);
}

#[test]
fn display_tree_serializes_for_the_ui() {
    let sites = vec![us("Rockville", "MD", "Rockville")];
    let org = OrganizerFacade::with_sites(UsStateNames, Haversine, sites, SearchContext::all());
    let json = serde_json::to_value(org.display_tree()).unwrap();
    assert_eq!(json[0]["kind"], "country");
    assert_eq!(json[0]["states"][0]["state"], "MD");
    assert_eq!(json[0]["states"][0]["cities"][0]["city"], "Rockville");
}
