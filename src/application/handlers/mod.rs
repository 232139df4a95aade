//! Application command handlers.

mod process_webhook;

pub use process_webhook::{ProcessWebhookHandler, WebhookCommand};
