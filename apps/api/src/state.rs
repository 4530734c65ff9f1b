use std::sync::Arc;

use crate::llm_client::LlmClient;
use crate::pdf::PdfExporter;
use crate::storage::ResumeRepository;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ResumeRepository>,
    pub pdf: PdfExporter,
    /// `None` when no API key is configured; AI endpoints then serve fallbacks.
    pub llm: Option<LlmClient>,
}
