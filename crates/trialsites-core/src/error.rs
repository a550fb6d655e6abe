// crates/trialsites-core/src/error.rs
use thiserror::Error;

/// Errors raised while reading site lists and search contexts.
///
/// The organizing operations themselves never fail; malformed records are
/// skipped instead.
#[derive(Debug, Error)]
pub enum SiteError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "json")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

pub type Result<T> = std::result::Result<T, SiteError>;
