//! Site content for the CT Natural landing page.
//!
//! This crate owns the read-only content record the page is rendered from:
//! brand strings, contact channels, image references and the ordered lists of
//! features, testimonials and product highlights. Content is loaded once from a
//! TOML or YAML file and handed explicitly to the renderer.

pub mod defaults;
pub mod loader;
pub mod site;

pub use defaults::DEFAULT_SITE_TOML;
pub use loader::{ContentError, ContentFormat};
pub use site::{
    Badge, Brand, Contact, DocLink, Docs, Feature, Hero, Images, Product, SiteContent,
    Testimonial,
};
