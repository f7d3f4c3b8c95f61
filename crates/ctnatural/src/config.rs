//! Build and server settings from the site config file.
//!
//! Content tables in the same file are read by `ctnatural-content`; this
//! module only picks out `[build]` and `[server]`. Relative directories are
//! resolved against the directory holding the config file.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use ctnatural_content::{ContentFormat, SiteContent};
use serde::Deserialize;

/// Settings tables of the config file.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub build: BuildSettings,
    #[serde(default)]
    pub server: ServerSettings,
}

#[derive(Debug, Deserialize)]
pub struct BuildSettings {
    #[serde(default = "default_output")]
    pub output: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_public_dir")]
    pub public_dir: String,
    #[serde(default = "default_minify")]
    pub minify: bool,
    /// Directory the config file lives in
    #[serde(skip)]
    pub root: PathBuf,
}

#[derive(Debug, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
}

fn default_output() -> String {
    "dist".to_string()
}
fn default_base_url() -> String {
    "/".to_string()
}
fn default_public_dir() -> String {
    "public".to_string()
}
fn default_minify() -> bool {
    true
}
fn default_host() -> String {
    "127.0.0.1".to_string()
}

impl Default for BuildSettings {
    fn default() -> Self {
        Self {
            output: default_output(),
            base_url: default_base_url(),
            public_dir: default_public_dir(),
            minify: default_minify(),
            root: PathBuf::from("."),
        }
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
        }
    }
}

impl BuildSettings {
    pub fn public_dir(&self) -> PathBuf {
        self.root.join(&self.public_dir)
    }

    pub fn output_dir(&self) -> PathBuf {
        self.root.join(&self.output)
    }
}

/// Directory that holds the config file and the site's `public/` folder.
pub fn project_root(config_path: &Path) -> PathBuf {
    config_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."))
        .to_path_buf()
}

/// Load settings from the config file if it exists.
/// Returns an error if the file exists but is malformed.
pub fn load_config(path: &Path) -> Result<ConfigFile> {
    let mut config = read_config(path)?;
    config.build.root = project_root(path);
    Ok(config)
}

fn read_config(path: &Path) -> Result<ConfigFile> {
    if !path.exists() {
        return Ok(ConfigFile::default());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let config: ConfigFile = match ContentFormat::from_path(path) {
        ContentFormat::Toml => toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?,
        ContentFormat::Yaml => serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?,
    };

    tracing::info!("Loaded config from {}", path.display());
    Ok(config)
}

/// Load site content from the config file, or the built-in site if it is
/// missing.
pub fn load_content(path: &Path) -> Result<SiteContent> {
    SiteContent::load_or_default(path)
        .with_context(|| format!("Failed to load content from {}", path.display()))
}
