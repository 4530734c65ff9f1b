//! Headless Chromium launcher backed by `chromiumoxide`.

use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::cdp::browser_protocol::page::PrintToPdfParams;
use chromiumoxide::Page;
use futures::StreamExt;
use tempfile::TempDir;
use tokio::task::JoinHandle;
use tokio::time::timeout;
use tracing::{debug, info, warn};

use crate::pdf::launcher::{BrowserError, BrowserLauncher, BrowserSession, PrintOptions};

/// Well-known install locations, probed in order after the override.
pub const KNOWN_CHROME_PATHS: &[&str] = &[
    "/usr/bin/google-chrome-stable",
    "/usr/bin/google-chrome",
    "/usr/bin/chromium",
    "/usr/bin/chromium-browser",
    "/snap/bin/chromium",
    "/opt/google/chrome/chrome",
    "/Applications/Google Chrome.app/Contents/MacOS/Google Chrome",
    "/Applications/Chromium.app/Contents/MacOS/Chromium",
];

const LAUNCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Resolves a runnable browser path: the override if it exists, otherwise the
/// first existing candidate. `None` defers to chromiumoxide's own detection.
pub fn discover_executable(override_path: Option<&Path>, candidates: &[&str]) -> Option<PathBuf> {
    if let Some(path) = override_path {
        if path.is_file() {
            return Some(path.to_path_buf());
        }
        warn!(
            "Browser override {} does not exist, probing known paths",
            path.display()
        );
    }

    candidates
        .iter()
        .map(PathBuf::from)
        .find(|candidate| candidate.is_file())
}

/// Waits for web fonts and any pending images.
const IDLE_SCRIPT: &str = "Promise.all([document.fonts.ready].concat(\
    Array.from(document.images).filter(i => !i.complete).map(i => new Promise(r => { i.onload = i.onerror = r; }))\
)).then(() => true)";

/// Forces layout of anything rendered lazily before printing.
const SCROLL_SCRIPT: &str = "window.scrollTo(0, document.body.scrollHeight); window.scrollTo(0, 0); true";

pub struct ChromiumLauncher {
    executable: Option<PathBuf>,
}

impl ChromiumLauncher {
    pub fn new(override_path: Option<PathBuf>) -> Self {
        let executable = discover_executable(override_path.as_deref(), KNOWN_CHROME_PATHS);
        match &executable {
            Some(path) => info!("Using browser executable {}", path.display()),
            None => info!("No browser executable found; using chromiumoxide detection"),
        }
        Self { executable }
    }
}

#[async_trait]
impl BrowserLauncher for ChromiumLauncher {
    async fn launch(&self) -> Result<Box<dyn BrowserSession>, BrowserError> {
        // Each process gets its own profile so concurrent exports never share a lock.
        let profile = tempfile::Builder::new()
            .prefix("resume-pdf-")
            .tempdir()
            .map_err(|e| BrowserError::Launch(format!("could not create profile dir: {e}")))?;

        let mut builder = BrowserConfig::builder()
            .user_data_dir(profile.path())
            .no_sandbox()
            .arg("--disable-gpu")
            .arg("--disable-dev-shm-usage")
            .arg("--font-render-hinting=none");
        if let Some(path) = &self.executable {
            builder = builder.chrome_executable(path);
        }
        let config = builder.build().map_err(BrowserError::Launch)?;

        let (browser, mut handler) = timeout(LAUNCH_TIMEOUT, Browser::launch(config))
            .await
            .map_err(|_| BrowserError::Timeout {
                stage: "browser launch",
                after: LAUNCH_TIMEOUT,
            })?
            .map_err(|e| BrowserError::Launch(e.to_string()))?;

        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if event.is_err() {
                    break;
                }
            }
        });

        debug!("Browser launched with profile {}", profile.path().display());
        Ok(Box::new(ChromiumSession {
            browser,
            handler_task,
            _profile: profile,
        }))
    }
}

struct ChromiumSession {
    browser: Browser,
    handler_task: JoinHandle<()>,
    /// Removed from disk when the session drops.
    _profile: TempDir,
}

impl ChromiumSession {
    async fn print(&self, page: &Page, html: &str, options: &PrintOptions) -> Result<Vec<u8>, BrowserError> {
        page.set_content(html)
            .await
            .map_err(|e| BrowserError::Page(e.to_string()))?;

        timeout(options.network_idle_timeout, page.evaluate(IDLE_SCRIPT.to_string()))
            .await
            .map_err(|_| BrowserError::Timeout {
                stage: "network idle",
                after: options.network_idle_timeout,
            })?
            .map_err(|e| BrowserError::Page(e.to_string()))?;

        tokio::time::sleep(options.settle_delay).await;

        page.evaluate(SCROLL_SCRIPT.to_string())
            .await
            .map_err(|e| BrowserError::Page(e.to_string()))?;

        let params = PrintToPdfParams {
            print_background: Some(true),
            paper_width: Some(options.paper_width_in),
            paper_height: Some(options.paper_height_in),
            margin_top: Some(options.margin_in),
            margin_bottom: Some(options.margin_in),
            margin_left: Some(options.margin_in),
            margin_right: Some(options.margin_in),
            prefer_css_page_size: Some(true),
            ..Default::default()
        };

        timeout(options.capture_timeout, page.pdf(params))
            .await
            .map_err(|_| BrowserError::Timeout {
                stage: "PDF capture",
                after: options.capture_timeout,
            })?
            .map_err(|e| BrowserError::Capture(e.to_string()))
    }
}

#[async_trait]
impl BrowserSession for ChromiumSession {
    async fn render_pdf(&mut self, html: &str, options: &PrintOptions) -> Result<Vec<u8>, BrowserError> {
        let page = self
            .browser
            .new_page("about:blank")
            .await
            .map_err(|e| BrowserError::Page(e.to_string()))?;

        let result = self.print(&page, html, options).await;

        if let Err(e) = page.close().await {
            debug!("Page close failed: {e}");
        }
        result
    }

    async fn close(mut self: Box<Self>) -> Result<(), BrowserError> {
        let closed = self.browser.close().await;
        if closed.is_err() {
            // The process may be wedged; make sure it is gone.
            if let Some(Err(e)) = self.browser.kill().await {
                warn!("Browser kill failed: {e}");
            }
        }
        if let Err(e) = self.browser.wait().await {
            debug!("Browser wait failed: {e}");
        }
        self.handler_task.abort();
        closed
            .map(|_| ())
            .map_err(|e| BrowserError::Close(e.to_string()))
    }
}
