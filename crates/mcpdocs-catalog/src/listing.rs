//! Component listings exported by a framework's own tooling.
//!
//! The vue library publishes a JSON document of the form
//! `{"components": [{"displayName": "Badge", "sourcePath": "src/components/Badge.vue"}]}`.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::CatalogError;
use crate::model::{ComponentListing, Framework, PreviewHost};
use crate::name::normalize;

#[derive(Debug, Deserialize)]
struct ListingFile {
    components: Vec<ListingFileEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListingFileEntry {
    display_name: String,
    #[serde(default)]
    source_path: String,
}

/// Parse a component listing document.
///
/// Entries whose display name normalizes to an empty string are skipped.
pub fn parse_listing(
    source: &str,
    framework: Framework,
    preview: PreviewHost,
) -> Result<Vec<ComponentListing>, serde_json::Error> {
    let file: ListingFile = serde_json::from_str(source)?;

    let listings = file
        .components
        .into_iter()
        .filter_map(|entry| {
            let name = normalize(&entry.display_name);
            if name.is_empty() {
                tracing::debug!("Skipping listing entry {:?}", entry.display_name);
                return None;
            }
            Some(ComponentListing {
                name,
                display_name: entry.display_name,
                framework,
                path: entry.source_path,
                preview,
            })
        })
        .collect();

    Ok(listings)
}

/// Read and parse a component listing file.
pub fn load_listing_file(
    path: &Path,
    framework: Framework,
    preview: PreviewHost,
) -> Result<Vec<ComponentListing>, CatalogError> {
    let source = fs::read_to_string(path).map_err(|e| CatalogError::ReadError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    parse_listing(&source, framework, preview).map_err(|e| CatalogError::ListingParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
