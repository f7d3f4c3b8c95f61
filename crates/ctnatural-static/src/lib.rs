//! Static site generator for the CT Natural landing page.
//!
//! Renders site content into a single HTML page with its stylesheet and
//! inquiry form script.

pub mod assets;
pub mod builder;
pub mod templates;

pub use assets::AssetPipeline;
pub use builder::{BuildConfig, BuildError, BuildResult, StaticBuilder};
pub use templates::{InquiryView, PageContext, TemplateEngine};
