//! Print component documentation from the catalog.

use std::path::Path;

use anyhow::{bail, Result};
use mcpdocs_catalog::Catalog;
use serde_json::{json, Value};

use crate::config::{load_catalog, load_config};

/// Run the components command.
pub fn run(config_path: &Path, name: Option<&str>) -> Result<()> {
    let config = load_config(config_path)?;
    let catalog = load_catalog(&config)?;

    let document = match name {
        Some(name) => describe(&catalog, name)?,
        None => json!({
            "total": catalog.list_all().len(),
            "components": catalog.list_all(),
        }),
    };

    println!("{}", serde_json::to_string_pretty(&document)?);
    Ok(())
}

/// Both framework sides of one component plus its prop correspondence.
fn describe(catalog: &Catalog, name: &str) -> Result<Value> {
    let Some(mapping) = catalog.mapping(name) else {
        bail!(
            "Component '{}' not found. Available: {}",
            name,
            catalog.component_names().join(", ")
        );
    };
    let merged = catalog.get(name);

    Ok(json!({
        "name": mapping.component_name,
        "rails": merged.rails,
        "vue": merged.vue,
        "mapping": mapping,
    }))
}
