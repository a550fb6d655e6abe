// crates/trialsites-core/src/loader/mod.rs

//! # Data Loader
//!
//! Reads site lists and search contexts from JSON (optionally gzipped).
//!
//! A site file is either a bare array of sites or a trial document carrying
//! them under `"sites"`:
//!
//! ```json
//! { "nciId": "NCI-2019-01234", "sites": [ { "name": "...", ... } ] }
//! ```

use crate::error::{Result, SiteError};
use crate::model::{SearchContext, SiteRecord};
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;

mod common_io;

pub use common_io::open_stream;

// Records stay untyped until the document shape is known, so one bad record
// cannot fail the whole list.
#[derive(Deserialize)]
#[serde(untagged)]
enum SitesPayload {
    Bare(Vec<Value>),
    Trial { sites: Vec<Value> },
}

impl From<SitesPayload> for Vec<SiteRecord> {
    fn from(payload: SitesPayload) -> Self {
        match payload {
            SitesPayload::Bare(records) | SitesPayload::Trial { sites: records } => {
                sites_from_records(records)
            }
        }
    }
}

/// Deserializes each record on its own; malformed records are skipped.
fn sites_from_records(records: Vec<Value>) -> Vec<SiteRecord> {
    let total = records.len();
    let sites: Vec<SiteRecord> = records
        .into_iter()
        .enumerate()
        .filter_map(|(i, record)| match serde_json::from_value(record) {
            Ok(site) => Some(site),
            Err(e) => {
                tracing::debug!(index = i, error = %e, "skipping malformed site record");
                None
            }
        })
        .collect();
    if sites.len() < total {
        tracing::debug!(skipped = total - sites.len(), kept = sites.len(), "malformed site records left out");
    }
    sites
}

/// Parses a site list from a JSON string.
pub fn sites_from_json(json: &str) -> Result<Vec<SiteRecord>> {
    let payload: SitesPayload = serde_json::from_str(json).map_err(invalid_sites)?;
    Ok(payload.into())
}

/// Parses a search context from a JSON string.
pub fn search_context_from_json(json: &str) -> Result<SearchContext> {
    Ok(serde_json::from_str(json)?)
}

/// Reads a site list from `path` (`.json` or `.json.gz`).
pub fn load_sites(path: impl AsRef<Path>) -> Result<Vec<SiteRecord>> {
    let path = path.as_ref();
    let reader = open_stream(path)?;
    let payload: SitesPayload = serde_json::from_reader(reader).map_err(invalid_sites)?;
    let sites: Vec<SiteRecord> = payload.into();
    tracing::debug!(path = %path.display(), sites = sites.len(), "loaded sites");
    Ok(sites)
}

/// Reads a search context from `path` (`.json` or `.json.gz`).
pub fn load_search_context(path: impl AsRef<Path>) -> Result<SearchContext> {
    let path = path.as_ref();
    let reader = open_stream(path)?;
    let context: SearchContext = serde_json::from_reader(reader)?;
    tracing::debug!(path = %path.display(), mode = ?context.location_mode, "loaded search context");
    Ok(context)
}

// Untagged enums swallow the inner serde message, so keep it readable.
fn invalid_sites(e: serde_json::Error) -> SiteError {
    if e.is_io() {
        SiteError::Json(e)
    } else {
        SiteError::InvalidData(format!(
            "expected an array of sites or an object with a \"sites\" array: {e}"
        ))
    }
}
