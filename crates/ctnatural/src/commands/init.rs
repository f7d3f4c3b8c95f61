//! Initialize a site in the current project.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use ctnatural_content::DEFAULT_SITE_TOML;

use crate::config::load_config;

/// Run the init command.
///
/// Writes the config file and a `public/` directory next to it.
pub async fn run(config_path: &Path, yes: bool) -> Result<()> {
    tracing::info!("Initializing site...");

    if config_path.exists() && !yes {
        tracing::warn!(
            "{} already exists. Use --yes to overwrite.",
            config_path.display()
        );
        return Ok(());
    }

    fs::write(config_path, DEFAULT_SITE_TOML)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    tracing::info!("Created {}", config_path.display());

    let public_dir = load_config(config_path)?.build.public_dir();
    if !public_dir.exists() {
        fs::create_dir_all(&public_dir).context("Failed to create public directory")?;
    }

    let logo_path = public_dir.join("logo.svg");
    if !logo_path.exists() || yes {
        fs::write(&logo_path, DEFAULT_LOGO).context("Failed to write logo.svg")?;
        tracing::info!("Created {}", logo_path.display());
    }

    tracing::info!("Initialization complete!");
    tracing::info!("Run 'ctnatural dev' to start the development server.");

    Ok(())
}

const DEFAULT_LOGO: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="160" height="48" viewBox="0 0 160 48">
  <rect width="48" height="48" rx="12" fill="#16a34a"/>
  <text x="24" y="30" text-anchor="middle" font-family="system-ui, sans-serif" font-size="16" font-weight="700" fill="#ffffff">CTN</text>
  <text x="58" y="30" font-family="system-ui, sans-serif" font-size="18" font-weight="600" fill="#0f172a">CT Natural</text>
</svg>
"##;
