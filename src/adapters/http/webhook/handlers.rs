//! HTTP handlers for the platform webhook.
//!
//! These handlers connect axum routes to the application layer. Every
//! well-formed event body gets a 200 with exactly one response envelope;
//! the only non-200 path is a malformed body rejected by the JSON
//! extractor at the boundary.

use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::ProcessWebhookHandler;

use super::dto::{WebhookEvent, WebhookResponse};

/// Shared application state for webhook handlers.
#[derive(Clone)]
pub struct WebhookAppState {
    pub webhook_handler: ProcessWebhookHandler,
}

impl WebhookAppState {
    /// Creates a new WebhookAppState.
    pub fn new(webhook_handler: ProcessWebhookHandler) -> Self {
        Self { webhook_handler }
    }
}

/// POST /webhook - Answer one platform event.
pub async fn handle_webhook(
    State(state): State<WebhookAppState>,
    Json(event): Json<WebhookEvent>,
) -> impl IntoResponse {
    let reply = state.webhook_handler.handle(event.into_command()).await;
    (StatusCode::OK, Json(WebhookResponse::text(reply)))
}

/// GET /health - Liveness probe.
pub async fn health() -> impl IntoResponse {
    StatusCode::OK
}
