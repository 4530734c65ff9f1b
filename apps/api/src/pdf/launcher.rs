//! The browser seam: a launcher that starts isolated browser processes and the
//! session each launch yields. The release guard closes sessions on every exit
//! path, including cancellation.

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use tracing::warn;

/// A failure inside one PDF attempt. All variants are treated as transient.
#[derive(Debug, Error)]
pub enum BrowserError {
    #[error("browser launch failed: {0}")]
    Launch(String),

    #[error("page setup failed: {0}")]
    Page(String),

    #[error("{stage} timed out after {}ms", .after.as_millis())]
    Timeout {
        stage: &'static str,
        after: Duration,
    },

    #[error("PDF capture failed: {0}")]
    Capture(String),

    #[error("browser close failed: {0}")]
    Close(String),
}

/// Paper geometry and wait budget for one capture.
#[derive(Debug, Clone, PartialEq)]
pub struct PrintOptions {
    pub paper_width_in: f64,
    pub paper_height_in: f64,
    pub margin_in: f64,
    /// Upper bound on waiting for fonts and images after the content is set.
    pub network_idle_timeout: Duration,
    /// Fixed pause after the page reports idle, before the scroll pass.
    pub settle_delay: Duration,
    pub capture_timeout: Duration,
}

#[async_trait]
pub trait BrowserLauncher: Send + Sync {
    /// Starts a fresh browser process.
    async fn launch(&self) -> Result<Box<dyn BrowserSession>, BrowserError>;
}

#[async_trait]
pub trait BrowserSession: Send {
    /// Loads `html`, waits for it to settle, and prints it to PDF bytes.
    async fn render_pdf(&mut self, html: &str, options: &PrintOptions)
        -> Result<Vec<u8>, BrowserError>;

    /// Terminates the browser process.
    async fn close(self: Box<Self>) -> Result<(), BrowserError>;
}

/// Owns a launched session until [`SessionGuard::release`].
///
/// Dropping an unreleased guard closes the session on a background task so the
/// browser process never outlives the request that started it.
pub struct SessionGuard {
    session: Option<Box<dyn BrowserSession>>,
}

impl SessionGuard {
    pub async fn acquire(launcher: &dyn BrowserLauncher) -> Result<Self, BrowserError> {
        let session = launcher.launch().await?;
        Ok(Self {
            session: Some(session),
        })
    }

    pub fn session(&mut self) -> Result<&mut (dyn BrowserSession + 'static), BrowserError> {
        self.session
            .as_deref_mut()
            .ok_or_else(|| BrowserError::Page("browser session already released".to_string()))
    }

    /// Closes the session, logging rather than propagating a close failure.
    pub async fn release(mut self) {
        if let Some(session) = self.session.take() {
            if let Err(e) = session.close().await {
                warn!("Browser did not close cleanly: {e}");
            }
        }
    }
}

impl Drop for SessionGuard {
    fn drop(&mut self) {
        let Some(session) = self.session.take() else {
            return;
        };
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                warn!("Browser session dropped without release; closing in background");
                handle.spawn(async move {
                    if let Err(e) = session.close().await {
                        warn!("Background browser close failed: {e}");
                    }
                });
            }
            Err(_) => warn!("Browser session dropped outside a runtime; relying on process drop"),
        }
    }
}

/// Launch, render, release: the session is closed whether rendering succeeds or not.
pub async fn render_once(
    launcher: &dyn BrowserLauncher,
    html: &str,
    options: &PrintOptions,
) -> Result<Vec<u8>, BrowserError> {
    let mut guard = SessionGuard::acquire(launcher).await?;
    let result = match guard.session() {
        Ok(session) => session.render_pdf(html, options).await,
        Err(e) => Err(e),
    };
    guard.release().await;
    result
}
