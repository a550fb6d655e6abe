//! Basic usage example for trialsites-rs
//!
//! This example demonstrates how to:
//! - Build the geography index of a trial's sites
//! - Assemble the country / state / city hierarchy
//! - Narrow the view with the country and state filters

use trialsites_rs::prelude::*;

fn trial_sites() -> Vec<SiteRecord> {
    vec![
        SiteRecord::new("Johns Hopkins", RecruitmentStatus::Active)
            .in_country(UNITED_STATES)
            .in_state("MD")
            .in_city("Baltimore")
            .with_contact("Site Public Contact", Some("410-955-8804"), None),
        SiteRecord::new("NIH Clinical Center", RecruitmentStatus::Active)
            .in_country(UNITED_STATES)
            .in_state("MD")
            .in_city("Bethesda")
            .with_postal_code(NIH_ZIPCODE),
        SiteRecord::new("MD Anderson", RecruitmentStatus::TemporarilyClosedToAccrual)
            .in_country(UNITED_STATES)
            .in_state("TX")
            .in_city("Houston"),
        SiteRecord::new("Princess Margaret", RecruitmentStatus::Active)
            .in_country(CANADA)
            .in_state("ON")
            .in_city("Toronto"),
        SiteRecord::new("Gustave Roussy", RecruitmentStatus::ClosedToAccrual)
            .in_country("France")
            .in_city("Villejuif"),
    ]
}

fn main() -> Result<()> {
    println!("=== trialsites-rs Basic Usage Example ===\n");

    let sites = trial_sites();

    // Example 1: Index
    println!("--- Example 1: Countries and US states ---");
    let index = build_geography_index(&sites, &UsStateNames);
    println!("Countries: {}", index.countries.join(", "));
    for abbr in &index.us_states {
        println!("- {} ({abbr})", UsStateNames.state_label(abbr));
    }
    println!();

    // Example 2: Master hierarchy
    println!("--- Example 2: Master hierarchy ---");
    for node in assemble_all(&sites, &index) {
        println!("{} ({} sites)", node.name(), node.site_count());
        for group in node.city_groups() {
            let names: Vec<_> = group.sites.iter().map(SiteRecord::name).collect();
            println!("  {}: {}", group.city, names.join(", "));
        }
    }
    println!();

    // Example 3: Filters
    println!("--- Example 3: Filtering to Maryland ---");
    let mut org: OrganizerFacade = OrganizerFacade::default();
    org.set_sites(sites);
    org.set_state_filter("MD");
    for node in org.display_tree() {
        println!("{} ({} sites)", node.name(), node.site_count());
    }
    println!();

    println!("--- Example 4: Filter controls ---");
    let options = org.filter_options();
    let countries: Vec<_> = options.countries.iter().map(|o| o.label.as_str()).collect();
    println!("Country selector: {}", countries.join(" | "));
    println!("State selector shown: {}", options.show_state_filter);

    // Example 5: Loading from JSON
    println!("\n--- Example 5: Loading a trial document ---");
    let loaded = sites_from_json(
        r#"{ "sites": [ { "name": "Mayo Clinic", "country": "United States",
              "stateOrProvinceAbbreviation": "MN", "city": "Rochester",
              "recruitmentStatus": "ACTIVE" } ] }"#,
    )?;
    println!("Loaded {} site(s): {}", loaded.len(), loaded[0].name());

    Ok(())
}
