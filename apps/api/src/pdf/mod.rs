//! PDF export: assemble the document, then print it in a fresh headless
//! browser, retrying transient failures up to a fixed bound.

pub mod chromium;
pub mod handlers;
pub mod launcher;
pub mod retry;

#[cfg(test)]
pub mod testing;

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tracing::{error, info, warn};

use crate::models::{RenderSettings, Resume};
use crate::render::layout::PAGE_MARGIN_IN;
use crate::render::{assemble, TemplateId};

use launcher::{render_once, BrowserError, BrowserLauncher, PrintOptions};
use retry::{retry, Backoff, RetryPolicy};

/// Terminal export failure, raised once every attempt has failed.
#[derive(Debug, Error)]
#[error("PDF generation failed after {attempts} attempts: {last}")]
pub struct PdfGenerationError {
    pub attempts: u32,
    #[source]
    pub last: BrowserError,
}

/// Timing knobs for one capture.
#[derive(Debug, Clone, Copy)]
pub struct PdfTiming {
    pub network_idle_timeout: Duration,
    pub settle_delay: Duration,
    pub capture_timeout: Duration,
}

impl Default for PdfTiming {
    fn default() -> Self {
        Self {
            network_idle_timeout: Duration::from_secs(30),
            settle_delay: Duration::from_millis(500),
            capture_timeout: Duration::from_secs(60),
        }
    }
}

#[derive(Clone)]
pub struct PdfExporter {
    launcher: Arc<dyn BrowserLauncher>,
    policy: RetryPolicy,
    timing: PdfTiming,
}

impl PdfExporter {
    /// Three retries after the first attempt, one second apart.
    pub const DEFAULT_MAX_RETRIES: u32 = 3;
    pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(1);

    pub fn new(launcher: Arc<dyn BrowserLauncher>) -> Self {
        Self {
            launcher,
            policy: RetryPolicy {
                max_retries: Self::DEFAULT_MAX_RETRIES,
                backoff: Backoff::Fixed(Self::DEFAULT_RETRY_DELAY),
            },
            timing: PdfTiming::default(),
        }
    }

    pub fn with_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_timing(mut self, timing: PdfTiming) -> Self {
        self.timing = timing;
        self
    }

    /// Renders `resume` with `template` and prints it to PDF bytes.
    ///
    /// Every attempt launches and releases its own browser process.
    pub async fn export_pdf(
        &self,
        resume: &Resume,
        template: TemplateId,
        settings: Option<&RenderSettings>,
    ) -> Result<Vec<u8>, PdfGenerationError> {
        let html = assemble(resume, template, settings);
        let (paper_width_in, paper_height_in) = settings
            .map(|s| s.paper_size)
            .unwrap_or_default()
            .inches();
        let options = PrintOptions {
            paper_width_in,
            paper_height_in,
            margin_in: PAGE_MARGIN_IN,
            network_idle_timeout: self.timing.network_idle_timeout,
            settle_delay: self.timing.settle_delay,
            capture_timeout: self.timing.capture_timeout,
        };
        let total_attempts = self.policy.max_retries + 1;

        let result = retry(
            &self.policy,
            |attempt| {
                info!(
                    "PDF attempt {attempt}/{total_attempts} ({} template)",
                    template.as_str()
                );
                render_once(self.launcher.as_ref(), &html, &options)
            },
            |attempt, err| warn!("PDF attempt {attempt}/{total_attempts} failed: {err}"),
        )
        .await;

        match result {
            Ok(pdf) => {
                info!("PDF generated ({} bytes)", pdf.len());
                Ok(pdf)
            }
            Err(exhausted) => {
                error!(
                    "PDF generation gave up after {} attempts: {}",
                    exhausted.attempts, exhausted.last
                );
                Err(PdfGenerationError {
                    attempts: exhausted.attempts,
                    last: exhausted.last,
                })
            }
        }
    }
}
