use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for trialsites
#[derive(Debug, Parser)]
#[command(
    name = "trialsites",
    version,
    about = "Organize a clinical trial's sites by geography and by the user's location search"
)]
pub struct CliArgs {
    /// Path to the site list: a JSON array of sites or a trial document with a
    /// "sites" array (.json or .json.gz)
    #[arg(short = 's', long = "sites", global = true)]
    pub sites: Option<PathBuf>,

    /// Optional path to a search context JSON (location mode, zip, radius, ...)
    #[arg(short = 'c', long = "context", global = true)]
    pub context: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the site list
    Stats,

    /// List the countries with sites
    Countries,

    /// List the US states with sites, ordered by name
    States,

    /// Print the display tree
    Tree {
        /// Country filter: "United States", "Canada" or "other"
        #[arg(long)]
        country: Option<String>,

        /// State filter (US only): an abbreviation such as MD, or "all"
        #[arg(long)]
        state: Option<String>,

        /// Show all locations even when a nearby set exists
        #[arg(long)]
        all: bool,
    },

    /// Print the sites matching the location search
    Nearby,

    /// Print the filter controls as JSON
    Options,
}
