//! Loading site content from TOML or YAML.

use std::fs;
use std::path::Path;

use crate::defaults::DEFAULT_SITE_TOML;
use crate::site::SiteContent;

/// Supported content file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentFormat {
    Toml,
    Yaml,
}

impl ContentFormat {
    /// Pick a format from the file extension. Anything that is not YAML is
    /// read as TOML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => ContentFormat::Yaml,
            _ => ContentFormat::Toml,
        }
    }
}

/// Errors that can occur when loading content.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("Failed to read {path}: {message}")]
    Read { path: String, message: String },

    #[error("Invalid TOML in content: {0}")]
    InvalidToml(String),

    #[error("Invalid YAML in content: {0}")]
    InvalidYaml(String),

    #[error("Invalid content: {0}")]
    Invalid(String),
}

impl SiteContent {
    /// Parse and validate content from a string.
    pub fn parse(source: &str, format: ContentFormat) -> Result<Self, ContentError> {
        let content: SiteContent = match format {
            ContentFormat::Toml => {
                toml::from_str(source).map_err(|e| ContentError::InvalidToml(e.to_string()))?
            }
            ContentFormat::Yaml => serde_yaml::from_str(source)
                .map_err(|e| ContentError::InvalidYaml(e.to_string()))?,
        };

        content.validate()?;
        Ok(content)
    }

    /// Load content from a file, choosing the format by extension.
    pub fn load(path: &Path) -> Result<Self, ContentError> {
        let source = fs::read_to_string(path).map_err(|e| ContentError::Read {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let content = Self::parse(&source, ContentFormat::from_path(path))?;
        tracing::debug!(
            "Loaded content from {} ({} features, {} testimonials)",
            path.display(),
            content.features.len(),
            content.testimonials.len()
        );

        Ok(content)
    }

    /// Load content from `path` if it exists, otherwise use the built-in site.
    ///
    /// A file that exists but does not parse is an error.
    pub fn load_or_default(path: &Path) -> Result<Self, ContentError> {
        if path.exists() {
            return Self::load(path);
        }

        tracing::info!(
            "{} not found, using built-in content",
            path.display()
        );
        Self::default_site()
    }

    /// The built-in CT Natural content.
    pub fn default_site() -> Result<Self, ContentError> {
        Self::parse(DEFAULT_SITE_TOML, ContentFormat::Toml)
    }
}
