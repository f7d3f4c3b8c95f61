//! Landing page server.
//!
//! Renders the page per request, turns inquiry form posts into a `mailto:`
//! navigation, and in development pushes reloads to open pages when the
//! content file changes.

pub mod reload;
pub mod server;
pub mod watcher;

pub use reload::{ReloadHub, ReloadMessage};
pub use server::{process_inquiry, InquiryOutcome, ServerError, SiteServer, SiteServerConfig};
pub use watcher::{FileWatcher, WatchEvent};
