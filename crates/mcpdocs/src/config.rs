//! Configuration file (mcpdocs.toml).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use mcpdocs_catalog::{Catalog, CatalogOptions};
use serde::Deserialize;

/// Configuration file structure.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub catalog: CatalogSettings,
}

#[derive(Debug, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CatalogSettings {
    /// JSON listing of vue components exported by the component library
    #[serde(default = "default_vue_components")]
    pub vue_components: PathBuf,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            vue_components: default_vue_components(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}
fn default_port() -> u16 {
    3000
}
fn default_vue_components() -> PathBuf {
    PathBuf::from("docs/vue-components.json")
}

/// Load configuration from `path` if it exists.
/// Returns an error if the config file exists but is malformed.
pub fn load_config(path: &Path) -> Result<ConfigFile> {
    if !path.exists() {
        return Ok(ConfigFile::default());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let config: ConfigFile = toml::from_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    tracing::info!("Loaded config from {}", path.display());
    Ok(config)
}

/// Build the catalog described by the configuration.
pub fn load_catalog(config: &ConfigFile) -> Result<Catalog> {
    let options = CatalogOptions {
        vue_listing: Some(&config.catalog.vue_components),
    };
    Catalog::load(&options).context("Failed to load component catalog")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_uses_defaults() {
        let temp = tempdir().unwrap();
        let config = load_config(&temp.path().join("mcpdocs.toml")).unwrap();

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(
            config.catalog.vue_components,
            PathBuf::from("docs/vue-components.json")
        );
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("mcpdocs.toml");
        fs::write(&path, "[server]\nport = 8080\n").unwrap();

        let config = load_config(&path).unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "127.0.0.1");
    }

    #[test]
    fn malformed_file_is_an_error() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("mcpdocs.toml");
        fs::write(&path, "[server\nport = ").unwrap();

        assert!(load_config(&path).is_err());
    }

    #[test]
    fn catalog_uses_configured_listing() {
        let temp = tempdir().unwrap();
        let listing = temp.path().join("vue.json");
        fs::write(
            &listing,
            r#"{"components": [{"displayName": "Badge"}, {"displayName": "Chip"}, {"displayName": "Tooltip"}]}"#,
        )
        .unwrap();

        let config = ConfigFile {
            catalog: CatalogSettings {
                vue_components: listing,
            },
            ..Default::default()
        };

        let catalog = load_catalog(&config).unwrap();
        assert_eq!(
            catalog.listing(mcpdocs_catalog::Framework::Vue).len(),
            3
        );
    }
}
