//! Handing a composed `mailto:` URL to whatever opens it.

use std::sync::Mutex;

/// Opens a `mailto:` URL.
///
/// Launching is fire-and-forget: there is no way to learn whether a mail
/// client actually picked the draft up, so nothing is returned.
pub trait MailLauncher: Send + Sync {
    fn open(&self, url: &str);
}

/// Passes the URL to the operating system's default handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLauncher;

impl MailLauncher for SystemLauncher {
    fn open(&self, url: &str) {
        if let Err(e) = open::that(url) {
            // No registered mail handler is not an error for the form
            tracing::debug!("Mail client did not open: {}", e);
        }
    }
}

/// Records every URL it is asked to open.
///
/// The HTTP handler uses this to capture the navigation target for the
/// response page.
#[derive(Debug, Default)]
pub struct RecordingLauncher {
    urls: Mutex<Vec<String>>,
}

impl RecordingLauncher {
    pub fn new() -> Self {
        Self::default()
    }

    /// URLs opened so far, oldest first.
    pub fn urls(&self) -> Vec<String> {
        self.urls.lock().map(|u| u.clone()).unwrap_or_default()
    }

    /// The most recently opened URL.
    pub fn last(&self) -> Option<String> {
        self.urls.lock().ok().and_then(|u| u.last().cloned())
    }
}

impl MailLauncher for RecordingLauncher {
    fn open(&self, url: &str) {
        if let Ok(mut urls) = self.urls.lock() {
            urls.push(url.to_string());
        }
    }
}
