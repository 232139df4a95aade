//! Platform webhook HTTP adapter.

mod dto;
mod handlers;
mod routes;

pub use dto::{WebhookEvent, WebhookResponse};
pub use handlers::{handle_webhook, health, WebhookAppState};
pub use routes::webhook_router;
