//! trialsites — Command-line interface for trialsites-core
//!
//! Loads a trial's site list (and optionally the user's search context) and
//! prints what the trial-search UI would show: the country / state / city
//! tree, the nearby set and the filter controls.
//!
//! Usage examples
//! --------------
//!
//! - Show overall stats
//!   $ trialsites --sites trial.json stats
//!
//! - List countries and US states
//!   $ trialsites --sites trial.json countries
//!   $ trialsites --sites trial.json states
//!
//! - Print the tree, narrowed to one state
//!   $ trialsites --sites trial.json tree --state MD
//!
//! - Print the sites near a zip code
//!   $ trialsites --sites trial.json --context zip.json nearby
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::Context as _;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use trialsites_core::prelude::*;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let sites_path = args
        .sites
        .context("no site list given; pass --sites <path>")?;
    let sites = load_sites(&sites_path)
        .with_context(|| format!("reading sites from {}", sites_path.display()))?;

    let context = match &args.context {
        Some(path) => load_search_context(path)
            .with_context(|| format!("reading search context from {}", path.display()))?,
        None => SearchContext::all(),
    };
    tracing::debug!(
        sites = sites.len(),
        path = %sites_path.display(),
        mode = ?context.location_mode,
        "inputs loaded"
    );

    let mut org: OrganizerFacade = OrganizerFacade::with_sites(UsStateNames, Haversine, sites, context);
    if org.sites().is_empty() {
        tracing::warn!(path = %sites_path.display(), "site list is empty");
    }

    match args.command {
        Commands::Stats => {
            let stats = org.stats();
            println!("Site statistics:");
            println!("  Sites: {}", stats.sites);
            println!("  Countries: {}", stats.countries);
            println!("  US states: {}", stats.us_states);
            println!("  Nearby: {}", stats.nearby);
        }

        Commands::Countries => {
            for country in &org.index().countries {
                println!("{country}");
            }
        }

        Commands::States => {
            if org.index().us_states.is_empty() {
                println!("No US sites.");
            }
            for abbr in &org.index().us_states {
                println!("{} ({abbr})", org.resolver().state_label(abbr));
            }
        }

        Commands::Tree { country, state, all } => {
            if all && org.is_showing_nearby() {
                org.toggle_nearby();
            }
            if let Some(country) = country.as_deref() {
                org.set_country_filter(country);
            }
            if let Some(state) = state.as_deref() {
                org.set_state_filter(state);
            }
            if org.is_showing_nearby() {
                println!("Showing locations near you ({} sites)", org.nearby_sites().len());
            }
            print_tree(&org.display_tree(), org.resolver());
        }

        Commands::Nearby => {
            if !has_nearby_view(org.context()) {
                println!("The search has no location restriction; every site is shown.");
            } else if org.nearby_sites().is_empty() {
                println!("No sites match the location search.");
            } else {
                print_tree(org.nearby_hierarchy(), org.resolver());
            }
        }

        Commands::Options => {
            println!("{}", serde_json::to_string_pretty(&org.filter_options())?);
        }
    }

    Ok(())
}

fn print_tree<R: StateNameResolver>(nodes: &[GeographyNode], resolver: &R) {
    for node in nodes {
        match node {
            GeographyNode::Country(country) => {
                println!("{}", country.country);
                match &country.divisions {
                    CountryDivisions::States(states) => {
                        for state in states.iter().filter(|s| s.is_displayed()) {
                            println!("  {}", state.label(resolver));
                            print_cities(&state.cities, 4);
                        }
                    }
                    CountryDivisions::Provinces(provinces) => {
                        for province in provinces {
                            println!("  {}", province.province);
                            print_cities(&province.cities, 4);
                        }
                    }
                    CountryDivisions::Cities(cities) => print_cities(cities, 2),
                }
            }
            GeographyNode::State(state) => {
                println!("{}", state.label(resolver));
                print_cities(&state.cities, 2);
            }
            GeographyNode::Province(province) => {
                println!("{}", province.province);
                print_cities(&province.cities, 2);
            }
        }
    }
}

fn print_cities(cities: &[CityGroup], indent: usize) {
    let pad = " ".repeat(indent);
    for group in cities {
        println!("{pad}{}", group.city);
        for site in &group.sites {
            println!("{pad}  - {} [{}]", site.name(), site.recruitment_status.label());
            match site.contact() {
                Some(contact) => {
                    let reach: Vec<&str> = contact.phone.into_iter().chain(contact.email).collect();
                    if reach.is_empty() {
                        println!("{pad}    Contact: {}", contact.name);
                    } else {
                        println!("{pad}    Contact: {} ({})", contact.name, reach.join(", "));
                    }
                }
                None => println!("{pad}    Contact: {CONTACT_UNAVAILABLE}"),
            }
        }
    }
}
