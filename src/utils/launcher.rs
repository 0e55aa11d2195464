//! Opening catalog links
//!
//! Activating a card hands its link to the desktop's default handler. The opener
//! is a trait so the controller can be exercised without spawning a browser.

use crate::error::{PortalError, Result};
use tracing::info;

/// Opens a link outside the application
pub trait LinkOpener {
    /// Open `url` with the default handler
    fn open(&self, url: &str) -> Result<()>;
}

/// Opener using the desktop's default browser
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLinkOpener;

impl LinkOpener for SystemLinkOpener {
    fn open(&self, url: &str) -> Result<()> {
        info!("Opening {}", url);
        open::that_detached(url).map_err(|source| PortalError::LaunchFailed {
            url: url.to_string(),
            source,
        })
    }
}
