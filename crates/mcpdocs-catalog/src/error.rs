//! Catalog loading errors.

use std::path::PathBuf;

/// Errors that can occur while loading catalog data.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Invalid catalog data: {0}")]
    InvalidData(String),

    #[error("Catalog entry {0:?} is not a canonical name (expected {1:?})")]
    NonCanonicalName(String, String),

    #[error("Duplicate {kind} entry: {name}")]
    Duplicate { kind: &'static str, name: String },

    #[error("Failed to read {path}: {message}")]
    ReadError { path: PathBuf, message: String },

    #[error("Failed to parse component listing {path}: {message}")]
    ListingParseError { path: PathBuf, message: String },
}
