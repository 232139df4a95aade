//! Axum routes for the platform webhook.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{handle_webhook, health, WebhookAppState};

/// Creates the webhook router.
///
/// Endpoints:
/// - POST /webhook - Answer one platform event
/// - GET /health - Liveness probe
pub fn webhook_router() -> Router<WebhookAppState> {
    Router::new()
        .route("/webhook", post(handle_webhook))
        .route("/health", get(health))
}
