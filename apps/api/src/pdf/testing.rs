//! Browser launcher test double. Counts launches and closes so tests can assert
//! that no session outlives an export.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::pdf::launcher::{BrowserError, BrowserLauncher, BrowserSession, PrintOptions};

pub const FAKE_PDF: &[u8] = b"%PDF-1.7\n%fake\n";

#[derive(Default)]
struct Shared {
    launch_calls: AtomicU32,
    launched: AtomicU32,
    closed: AtomicU32,
    renders: AtomicU32,
    html: Mutex<Vec<String>>,
}

#[derive(Clone, Default)]
pub struct FakeLauncher {
    shared: Arc<Shared>,
    /// Launch attempts that fail before any process exists.
    fail_launches: u32,
    /// Renders that fail after the session is up.
    fail_renders: u32,
}

impl FakeLauncher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_launches(mut self, count: u32) -> Self {
        self.fail_launches = count;
        self
    }

    pub fn failing_renders(mut self, count: u32) -> Self {
        self.fail_renders = count;
        self
    }

    pub fn launch_calls(&self) -> u32 {
        self.shared.launch_calls.load(Ordering::SeqCst)
    }

    pub fn renders(&self) -> u32 {
        self.shared.renders.load(Ordering::SeqCst)
    }

    /// Sessions launched and not yet closed.
    pub fn live_sessions(&self) -> u32 {
        self.shared.launched.load(Ordering::SeqCst) - self.shared.closed.load(Ordering::SeqCst)
    }

    pub fn rendered_html(&self) -> Vec<String> {
        self.shared.html.lock().map(|h| h.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl BrowserLauncher for FakeLauncher {
    async fn launch(&self) -> Result<Box<dyn BrowserSession>, BrowserError> {
        let call = self.shared.launch_calls.fetch_add(1, Ordering::SeqCst) + 1;
        if call <= self.fail_launches {
            return Err(BrowserError::Launch(format!("no executable (attempt {call})")));
        }
        self.shared.launched.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(FakeSession {
            shared: Arc::clone(&self.shared),
            fail_renders: self.fail_renders,
        }))
    }
}

struct FakeSession {
    shared: Arc<Shared>,
    fail_renders: u32,
}

#[async_trait]
impl BrowserSession for FakeSession {
    async fn render_pdf(
        &mut self,
        html: &str,
        _options: &PrintOptions,
    ) -> Result<Vec<u8>, BrowserError> {
        let render = self.shared.renders.fetch_add(1, Ordering::SeqCst) + 1;
        if let Ok(mut seen) = self.shared.html.lock() {
            seen.push(html.to_string());
        }
        if render <= self.fail_renders {
            return Err(BrowserError::Capture(format!("renderer crashed (render {render})")));
        }
        Ok(FAKE_PDF.to_vec())
    }

    async fn close(self: Box<Self>) -> Result<(), BrowserError> {
        self.shared.closed.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
