//! Development server command.

use std::path::Path;

use anyhow::Result;
use ctnatural_server::{SiteServer, SiteServerConfig};

use crate::config::{load_config, load_content};

/// Run the dev server.
pub async fn run(config_path: &Path, port: u16, open: bool) -> Result<()> {
    tracing::info!("Starting development server on port {}", port);

    let file_config = load_config(config_path)?;
    let content = load_content(config_path)?;

    let config = SiteServerConfig {
        content_path: config_path.to_path_buf(),
        public_dir: file_config.build.public_dir(),
        port,
        host: file_config.server.host,
        open,
        ..Default::default()
    };

    SiteServer::new(config, content).start().await?;

    Ok(())
}
