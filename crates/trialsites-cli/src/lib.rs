//! trialsites-cli
//! ==============
//!
//! Command-line interface for the `trialsites-core` site organizer.
//!
//! This crate primarily provides a binary (`trialsites`). The library target
//! only exists so that the documentation has an overview page.
//!
//! Quick start
//! -----------
//!
//! ```text
//! trialsites --help
//! trialsites --sites trial.json stats
//! trialsites --sites trial.json tree --country "United States" --state MD
//! trialsites --sites trial.json --context zip-20850.json nearby
//! ```
//!
//! A search context file uses the same field names as the trial-search UI:
//!
//! ```json
//! { "location": "search-location-zip", "zip": "20850",
//!   "zipCoords": { "lat": 39.084, "long": -77.1528 }, "zipRadius": 50 }
//! ```
//!
//! Set `RUST_LOG=trialsites_core=debug` to see what the organizer skipped.
//!
//! For programmatic access use the [`trialsites-core`] crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]
