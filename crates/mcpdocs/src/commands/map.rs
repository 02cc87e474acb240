//! Map a Figma payload file to component code.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use mcpdocs_catalog::Framework;
use mcpdocs_figma::{generator_for, FigmaMapper};
use serde_json::Value;

use crate::config::{load_catalog, load_config};

/// Run the map command.
pub fn run(config_path: &Path, file: &Path, framework: Framework) -> Result<()> {
    let config = load_config(config_path)?;
    let catalog = load_catalog(&config)?;

    let content = fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let document: Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {}", file.display()))?;

    let generator = generator_for(framework);
    let outcome = FigmaMapper::new(&catalog).map(figma_payload(&document), generator);

    println!("{}", serde_json::to_string_pretty(&outcome.to_json())?);

    if !outcome.is_success() {
        bail!("Could not map {} to a {} component", file.display(), framework);
    }
    Ok(())
}

/// Accepts either an API request body (`{"figma_data": ...}`) or the bare payload.
fn figma_payload(document: &Value) -> &Value {
    document.get("figma_data").unwrap_or(document)
}
