//! Hand URLs to the operating system's default handlers.

use tracing::{debug, warn};

use crate::error::{FolioError, Result};
use crate::page::model::mailto_href;

/// Opens a URL (`https://`, `mailto:`, `tel:`) with whatever the platform
/// has registered for it.
pub trait Launcher {
    fn open(&self, target: &str) -> Result<()>;
}

impl<L: Launcher + ?Sized> Launcher for &L {
    fn open(&self, target: &str) -> Result<()> {
        (**self).open(target)
    }
}

/// Launcher backed by the desktop's default handlers.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLauncher;

impl Launcher for SystemLauncher {
    fn open(&self, target: &str) -> Result<()> {
        match open::that(target) {
            Ok(()) => {
                debug!(target = %target, "opened with default handler");
                Ok(())
            }
            Err(err) => Err(FolioError::Launch {
                target: target.to_string(),
                reason: err.to_string(),
            }),
        }
    }
}

/// Result of asking for the mail composer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MailOutcome {
    /// The default mail handler took the `mailto:` URL.
    Opened,
    /// No handler could be started; show this `mailto:` link instead.
    Fallback(String),
}

/// Open the default mail composer addressed to `email`, falling back to a
/// plain `mailto:` link when the platform has no handler.
pub fn open_mail_composer(launcher: &dyn Launcher, email: &str) -> MailOutcome {
    let href = mailto_href(email);
    match launcher.open(&href) {
        Ok(()) => MailOutcome::Opened,
        Err(err) => {
            warn!(error = %err, "mail composer unavailable, falling back to link");
            MailOutcome::Fallback(href)
        }
    }
}
