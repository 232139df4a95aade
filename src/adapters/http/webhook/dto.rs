//! HTTP DTOs for the platform webhook endpoint.
//!
//! These types mirror the telephony platform's wire format and decouple it
//! from the domain event type. Unknown event types and roles deserialize
//! rather than fail: the engine answers them with a fallback prompt.

use serde::{Deserialize, Serialize};

use crate::application::handlers::WebhookCommand;
use crate::domain::intake::{CallEvent, TranscriptEntry};

/// One inbound webhook event from the platform dispatcher.
#[derive(Debug, Clone, Deserialize)]
pub struct WebhookEvent {
    /// `call_started`, `call_ended`, `turn_ended`, or anything newer.
    pub event_type: String,
    /// Opaque platform call id.
    pub call_id: String,
    /// Transcript so far; present on `turn_ended` events.
    #[serde(default)]
    pub transcript: Option<Vec<TranscriptEntry>>,
}

impl WebhookEvent {
    /// Decodes the wire event into an application command.
    pub fn into_command(self) -> WebhookCommand {
        let event = match self.event_type.as_str() {
            "call_started" => CallEvent::CallStarted,
            "call_ended" => CallEvent::CallEnded,
            "turn_ended" => CallEvent::TurnEnded {
                transcript: self.transcript.unwrap_or_default(),
            },
            other => CallEvent::Unknown(other.to_string()),
        };
        WebhookCommand::new(self.call_id, event)
    }
}

/// The single response envelope the platform accepts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookResponse {
    /// Always `response_type_text`.
    pub response_type: String,
    /// The prompt to speak.
    pub text: String,
}

impl WebhookResponse {
    /// Wraps a prompt in the text response envelope.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            response_type: "response_type_text".to_string(),
            text: text.into(),
        }
    }
}
