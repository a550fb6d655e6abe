//! Nearby search example for trialsites-rs
//!
//! This example demonstrates how the organizer reacts to the user's
//! location search: zip radius, country/state and NIH searches.

use trialsites_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== trialsites-rs Nearby Search Example ===\n");

    let sites = vec![
        SiteRecord::new("Rockville", RecruitmentStatus::Active)
            .in_country(UNITED_STATES)
            .in_state("MD")
            .in_city("Rockville")
            .at(39.0840, -77.1528),
        SiteRecord::new("NIH Clinical Center", RecruitmentStatus::Active)
            .in_country(UNITED_STATES)
            .in_state("MD")
            .in_city("Bethesda")
            .with_postal_code(NIH_ZIPCODE)
            .at(39.0000, -77.1000),
        SiteRecord::new("VA Richmond", RecruitmentStatus::Active)
            .in_country(UNITED_STATES)
            .in_state("VA")
            .in_city("Richmond")
            .at(37.5407, -77.4360)
            .va(true),
        SiteRecord::new("Cedars-Sinai", RecruitmentStatus::Active)
            .in_country(UNITED_STATES)
            .in_state("CA")
            .in_city("Los Angeles")
            .at(34.0522, -118.2437),
    ];

    let rockville = Coordinates::new(39.0840, -77.1528);
    let searches = [
        ("zip 20850, 25 miles", SearchContext::zip("20850", rockville, 25.0)),
        ("zip 20850, 150 miles, VA only", SearchContext::zip("20850", rockville, 150.0).with_va_only(true)),
        (
            "United States, Maryland",
            SearchContext::country(UNITED_STATES).with_states([StateRef::new("MD", "Maryland")]),
        ),
        ("NIH Clinical Center", SearchContext::nih()),
        ("anywhere", SearchContext::all()),
    ];

    let mut org: OrganizerFacade = OrganizerFacade::default();
    org.set_sites(sites);

    for (label, ctx) in searches {
        org.update_context(ctx);
        let names: Vec<_> = org.nearby_sites().iter().map(SiteRecord::name).collect();
        println!("--- {label} ---");
        if names.is_empty() {
            println!("No nearby set; showing all {} sites", org.sites().len());
        } else {
            println!("Nearby: {}", names.join(", "));
        }
        if let Some(toggle) = org.filter_options().nearby_toggle {
            println!("Toggle: {}", toggle.label);
        }
        println!();
    }

    println!(
        "Rockville to Los Angeles: {:.0} miles",
        haversine_miles(rockville, Coordinates::new(34.0522, -118.2437))
    );

    Ok(())
}
