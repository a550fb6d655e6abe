//! trialsites-rs
//!
//! Umbrella crate for the workspace. Re-exports [`trialsites_core`] so the
//! demos can `use trialsites_rs::prelude::*`.
pub use trialsites_core::*;
