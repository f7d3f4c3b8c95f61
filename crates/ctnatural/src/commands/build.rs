//! Static site build command.

use std::path::{Path, PathBuf};

use anyhow::Result;
use ctnatural_static::{BuildConfig, StaticBuilder};

use crate::config::{load_config, load_content};

/// Run the build command.
pub async fn run(config_path: &Path, output: Option<PathBuf>, minify: Option<bool>) -> Result<()> {
    tracing::info!("Building static site...");

    let file_config = load_config(config_path)?;
    let content = load_content(config_path)?;

    let config = BuildConfig {
        output_dir: output.unwrap_or_else(|| file_config.build.output_dir()),
        public_dir: Some(file_config.build.public_dir()),
        minify: minify.unwrap_or(file_config.build.minify),
        base_url: file_config.build.base_url,
    };

    let result = StaticBuilder::new(config, content).build().await?;

    tracing::info!(
        "Built {} page and copied {} files in {}ms",
        result.pages,
        result.assets,
        result.duration_ms
    );

    tracing::info!("Output: {}", result.output_dir.display());

    Ok(())
}
