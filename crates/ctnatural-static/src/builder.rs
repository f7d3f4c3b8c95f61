//! Static site builder.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use walkdir::WalkDir;

use ctnatural_content::SiteContent;

use crate::assets::AssetPipeline;
use crate::templates::{InquiryView, PageContext, TemplateEngine};

/// Configuration for building the static site.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Output directory
    pub output_dir: PathBuf,

    /// Directory copied verbatim into the output (logo, PDFs)
    pub public_dir: Option<PathBuf>,

    /// Minify CSS output
    pub minify: bool,

    /// Base URL for the site
    pub base_url: String,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("dist"),
            public_dir: None,
            minify: true,
            base_url: "/".to_string(),
        }
    }
}

/// Result of a build operation.
#[derive(Debug)]
pub struct BuildResult {
    /// Number of pages generated
    pub pages: usize,

    /// Number of files copied from the public directory
    pub assets: usize,

    /// Total build time in milliseconds
    pub duration_ms: u64,

    /// Output directory
    pub output_dir: PathBuf,
}

/// Errors that can occur during build.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Failed to read input: {0}")]
    ReadError(String),

    #[error("Failed to render template: {0}")]
    TemplateError(String),

    #[error("Failed to write output: {0}")]
    WriteError(String),
}

/// Static site builder.
pub struct StaticBuilder {
    config: BuildConfig,
    content: SiteContent,
    templates: TemplateEngine,
}

impl StaticBuilder {
    /// Create a new static builder for the given content.
    pub fn new(config: BuildConfig, content: SiteContent) -> Self {
        Self {
            config,
            content,
            templates: TemplateEngine::new(),
        }
    }

    /// Build the static site.
    pub async fn build(&self) -> Result<BuildResult, BuildError> {
        let start = Instant::now();

        fs::create_dir_all(&self.config.output_dir)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        self.build_index()?;
        self.generate_assets()?;
        let assets = self.copy_public()?;
        self.generate_sitemap()?;

        let duration = start.elapsed();

        Ok(BuildResult {
            pages: 1,
            assets,
            duration_ms: duration.as_millis() as u64,
            output_dir: self.config.output_dir.clone(),
        })
    }

    /// Render the landing page with an empty form.
    fn build_index(&self) -> Result<(), BuildError> {
        let inquiry = InquiryView::default();
        let html = self
            .templates
            .render_landing(&PageContext {
                site: &self.content,
                base_url: &self.config.base_url,
                inquiry: &inquiry,
                live_reload: false,
            })
            .map_err(|e| BuildError::TemplateError(e.to_string()))?;

        fs::write(self.config.output_dir.join("index.html"), html)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        tracing::debug!(
            "Rendered index.html ({} features, {} testimonials)",
            self.content.features.len(),
            self.content.testimonials.len()
        );

        Ok(())
    }

    /// Generate static assets.
    fn generate_assets(&self) -> Result<(), BuildError> {
        let assets_dir = self.config.output_dir.join("assets");
        fs::create_dir_all(&assets_dir).map_err(|e| BuildError::WriteError(e.to_string()))?;

        let css = AssetPipeline::stylesheet(&self.content.brand, self.config.minify);
        fs::write(assets_dir.join("main.css"), css)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        let js = AssetPipeline::generate_js();
        fs::write(assets_dir.join("main.js"), js)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        Ok(())
    }

    /// Copy the public directory into the output root.
    fn copy_public(&self) -> Result<usize, BuildError> {
        let Some(ref public_dir) = self.config.public_dir else {
            return Ok(0);
        };

        if !public_dir.exists() {
            tracing::warn!("Public directory not found: {}", public_dir.display());
            return Ok(0);
        }

        let mut count = 0;

        for entry in WalkDir::new(public_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            if !entry.file_type().is_file() {
                continue;
            }

            let relative = entry
                .path()
                .strip_prefix(public_dir)
                .map_err(|e| BuildError::ReadError(e.to_string()))?;
            let target = self.config.output_dir.join(relative);

            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent).map_err(|e| BuildError::WriteError(e.to_string()))?;
            }

            fs::copy(entry.path(), &target).map_err(|e| {
                BuildError::WriteError(format!("{}: {}", relative.display(), e))
            })?;
            count += 1;
        }

        tracing::info!("Copied {} files from {}", count, public_dir.display());

        Ok(count)
    }

    /// Generate sitemap and robots.txt.
    fn generate_sitemap(&self) -> Result<(), BuildError> {
        let sitemap = format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
  <url>
    <loc>{}/</loc>
  </url>
</urlset>"#,
            self.config.base_url.trim_end_matches('/')
        );

        fs::write(self.config.output_dir.join("sitemap.xml"), sitemap)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        let robots = format!(
            "User-agent: *\nAllow: /\nSitemap: {}sitemap.xml",
            self.config.base_url
        );
        fs::write(self.config.output_dir.join("robots.txt"), robots)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        Ok(())
    }
}
