//! Initialize mcpdocs in a project.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::config::load_config;

/// Run the init command.
pub async fn run(config_path: &Path, yes: bool) -> Result<()> {
    tracing::info!("Initializing mcpdocs...");

    if config_path.exists() && !yes {
        tracing::warn!(
            "{} already exists. Use --yes to overwrite.",
            config_path.display()
        );
        return Ok(());
    }

    fs::write(config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    tracing::info!("Created {}", config_path.display());

    // Listing path is relative to the working directory, like the server reads it
    let config = load_config(config_path)?;
    let listing_path = config.catalog.vue_components;

    if !listing_path.exists() || yes {
        if let Some(parent) = listing_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(&listing_path, DEFAULT_VUE_COMPONENTS)
            .with_context(|| format!("Failed to write {}", listing_path.display()))?;
        tracing::info!("Created {}", listing_path.display());
    }

    tracing::info!("Initialization complete!");
    tracing::info!("Run 'mcpdocs serve' to start the API server.");

    Ok(())
}

const DEFAULT_CONFIG: &str = r#"# mcpdocs configuration

[server]
# Address the JSON API binds to
host = "127.0.0.1"
port = 3000

[catalog]
# Vue component listing exported by the component library.
# The built-in list is used when this file is missing or invalid.
vue_components = "docs/vue-components.json"
"#;

const DEFAULT_VUE_COMPONENTS: &str = r#"{
  "components": [
    { "displayName": "Badge", "sourcePath": "src/components/PfBadge.vue" },
    { "displayName": "Button", "sourcePath": "src/components/PfButton.vue" }
  ]
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use mcpdocs_catalog::{parse_listing, Framework, PreviewHost};

    #[test]
    fn default_config_parses() {
        let config: crate::config::ConfigFile = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(
            config.catalog.vue_components,
            Path::new("docs/vue-components.json")
        );
    }

    #[test]
    fn default_listing_parses() {
        let listing =
            parse_listing(DEFAULT_VUE_COMPONENTS, Framework::Vue, PreviewHost::Storybook).unwrap();
        let names: Vec<_> = listing.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["badge", "button"]);
    }

    #[tokio::test]
    async fn keeps_existing_config_without_yes() {
        let temp = tempfile::tempdir().unwrap();
        let config_path = temp.path().join("mcpdocs.toml");
        fs::write(&config_path, "# mine\n").unwrap();

        run(&config_path, false).await.unwrap();

        assert_eq!(fs::read_to_string(&config_path).unwrap(), "# mine\n");
    }
}
