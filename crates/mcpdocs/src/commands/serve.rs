//! Run the JSON API server.

use std::path::Path;

use anyhow::Result;
use mcpdocs_server::{ApiServer, ApiServerConfig};

use crate::config::{load_catalog, load_config};

/// Run the serve command. Flags override the config file.
pub async fn run(config_path: &Path, port: Option<u16>, host: Option<String>) -> Result<()> {
    let config = load_config(config_path)?;
    let catalog = load_catalog(&config)?;

    let server_config = ApiServerConfig {
        host: host.unwrap_or(config.server.host),
        port: port.unwrap_or(config.server.port),
    };

    tracing::info!(
        "Catalog has {} components",
        catalog.component_names().len()
    );

    let server = ApiServer::new(server_config, catalog);
    server.start().await?;

    Ok(())
}
