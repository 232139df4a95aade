//! Call-intake service binary.
//!
//! Loads configuration, wires the in-memory adapters around the intake
//! engine, and serves the platform webhook.

use std::sync::Arc;
use std::time::Duration;

use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use call_intake::adapters::alerts::ConsoleAlertSink;
use call_intake::adapters::http::webhook::{webhook_router, WebhookAppState};
use call_intake::adapters::storage::{InMemoryCallStateStore, InMemoryLeadStore};
use call_intake::application::handlers::ProcessWebhookHandler;
use call_intake::config::AppConfig;
use call_intake::domain::intake::{EmergencyDetector, IntakeEngine};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level)),
        )
        .init();

    let keywords = config.keywords.load_set();
    tracing::info!(keywords = keywords.len(), "emergency keyword set loaded");

    let engine = Arc::new(IntakeEngine::new(EmergencyDetector::new(keywords)));
    let handler = ProcessWebhookHandler::new(
        engine,
        Arc::new(InMemoryCallStateStore::new()),
        Arc::new(InMemoryLeadStore::new()),
        Arc::new(ConsoleAlertSink::new()),
    );

    let app = webhook_router()
        .with_state(WebhookAppState::new(handler))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )));

    let addr = config.server.socket_addr()?;
    tracing::info!(%addr, "call-intake service listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
