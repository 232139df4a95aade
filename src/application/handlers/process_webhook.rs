//! ProcessWebhook command handler.
//!
//! Orchestrates one inbound platform event: load the call's state, run the
//! intake engine, persist or destroy the resulting state, dispatch any side
//! effect to its collaborator, and hand back the reply text.
//!
//! Phase advancement and side-effect dispatch are deliberately not
//! transactional: a sink failure is logged and the conversation proceeds,
//! so state can run ahead of persisted data. No error from this handler
//! ever reaches the protocol boundary; every event yields a reply.

use std::sync::Arc;

use crate::domain::intake::{CallEvent, IntakeEngine, SideEffect};
use crate::ports::{CallStateStore, LeadStore, TechnicianAlertSink};

/// Command to process one inbound webhook event.
#[derive(Debug, Clone)]
pub struct WebhookCommand {
    /// The platform's call id.
    pub call_id: String,
    /// The decoded event.
    pub event: CallEvent,
}

impl WebhookCommand {
    /// Creates a new webhook command.
    pub fn new(call_id: impl Into<String>, event: CallEvent) -> Self {
        Self {
            call_id: call_id.into(),
            event,
        }
    }
}

/// Handles inbound webhook events against the shared stores.
#[derive(Clone)]
pub struct ProcessWebhookHandler {
    engine: Arc<IntakeEngine>,
    states: Arc<dyn CallStateStore>,
    leads: Arc<dyn LeadStore>,
    alerts: Arc<dyn TechnicianAlertSink>,
}

impl ProcessWebhookHandler {
    /// Creates a handler over the given engine and collaborators.
    pub fn new(
        engine: Arc<IntakeEngine>,
        states: Arc<dyn CallStateStore>,
        leads: Arc<dyn LeadStore>,
        alerts: Arc<dyn TechnicianAlertSink>,
    ) -> Self {
        Self {
            engine,
            states,
            leads,
            alerts,
        }
    }

    /// Applies one event and returns the reply text.
    pub async fn handle(&self, command: WebhookCommand) -> String {
        let call_id = command.call_id.as_str();

        match &command.event {
            CallEvent::CallStarted => tracing::info!(call_id, "call started"),
            CallEvent::CallEnded => tracing::info!(call_id, "call ended"),
            CallEvent::TurnEnded { .. } => tracing::debug!(call_id, "turn ended"),
            CallEvent::Unknown(event_type) => {
                tracing::warn!(call_id, event_type, "unknown event type");
            }
        }

        let state = match self.states.find(call_id).await {
            Ok(state) => state,
            Err(err) => {
                tracing::error!(call_id, error = %err, "call state lookup failed");
                None
            }
        };

        let outcome = self.engine.apply_event(call_id, state, &command.event);

        match outcome.state {
            Some(state) => {
                tracing::debug!(call_id, phase = ?state.phase, "persisting call state");
                if let Err(err) = self.states.upsert(state).await {
                    tracing::error!(call_id, error = %err, "call state persist failed");
                }
            }
            None => {
                if let Err(err) = self.states.remove(call_id).await {
                    tracing::error!(call_id, error = %err, "call state removal failed");
                }
            }
        }

        if let Some(effect) = outcome.side_effect {
            self.dispatch(call_id, effect).await;
        }

        outcome.reply
    }

    async fn dispatch(&self, call_id: &str, effect: SideEffect) {
        match effect {
            SideEffect::StoreLead(lead) => {
                tracing::info!(call_id, name = %lead.name, "storing lead");
                if let Err(err) = self.leads.store_lead(lead).await {
                    tracing::error!(call_id, error = %err, "lead store failed");
                }
            }
            SideEffect::TriggerAlert(details) => {
                tracing::warn!(call_id, "triggering technician alert");
                if let Err(err) = self.alerts.trigger_technician_alert(details).await {
                    tracing::error!(call_id, error = %err, "alert dispatch failed");
                }
            }
        }
    }
}
