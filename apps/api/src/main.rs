mod config;
mod errors;
mod llm_client;
mod models;
mod pdf;
mod render;
mod routes;
mod state;
mod storage;
mod suggestions;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::pdf::chromium::ChromiumLauncher;
use crate::pdf::retry::{Backoff, RetryPolicy};
use crate::pdf::{PdfExporter, PdfTiming};
use crate::routes::build_router;
use crate::state::AppState;
use crate::storage::InMemoryResumeStore;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting resume API v{}", env!("CARGO_PKG_VERSION"));

    // PDF exporter: one fresh browser per attempt
    let launcher = Arc::new(ChromiumLauncher::new(config.chrome_executable.clone()));
    let pdf = PdfExporter::new(launcher)
        .with_policy(RetryPolicy {
            max_retries: config.pdf_max_retries,
            backoff: Backoff::Fixed(Duration::from_millis(config.pdf_retry_delay_ms)),
        })
        .with_timing(PdfTiming {
            network_idle_timeout: Duration::from_millis(config.pdf_network_idle_timeout_ms),
            settle_delay: Duration::from_millis(config.pdf_settle_delay_ms),
            ..PdfTiming::default()
        });
    info!(
        "PDF exporter ready ({} retries, {}ms apart)",
        config.pdf_max_retries, config.pdf_retry_delay_ms
    );

    let llm = build_llm_client(&config);

    let state = AppState {
        store: Arc::new(InMemoryResumeStore::new()),
        pdf,
        llm,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// AI features degrade to canned suggestions when this returns `None`.
fn build_llm_client(config: &Config) -> Option<LlmClient> {
    let Some(api_key) = config.openai_api_key.clone() else {
        warn!("OPENAI_API_KEY not set; AI suggestions will use fallbacks");
        return None;
    };
    match LlmClient::new(api_key) {
        Ok(mut client) => {
            if let Some(url) = &config.openai_api_url {
                client = client.with_api_url(url.clone());
            }
            info!("LLM client initialized (model: {})", llm_client::MODEL);
            Some(client)
        }
        Err(e) => {
            warn!("LLM client unavailable, AI suggestions will use fallbacks: {e}");
            None
        }
    }
}
