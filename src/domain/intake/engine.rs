//! The intake conversation engine.
//!
//! Applies one inbound event to one call's state and produces the next
//! prompt plus any side effect. The engine is a pure state transducer:
//! side effects (store lead, trigger alert) are returned as values for the
//! application layer to dispatch, never performed here, so collaborators
//! can be substituted around it.

use super::alert::AlertDetails;
use super::call_state::CallState;
use super::emergency::{EmergencyClassifier, EmergencyDetector};
use super::event::{latest_caller_utterance, CallEvent};
use super::extractor::{FieldExtractor, NameExtractor, PhoneExtractor};
use super::lead::Lead;
use super::phase::CallPhase;
use super::prompts;

/// A side effect the application layer must dispatch after a turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SideEffect {
    /// Append this lead to the lead store.
    StoreLead(Lead),
    /// Fire the technician alert path.
    TriggerAlert(AlertDetails),
}

/// The engine's answer to one inbound event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnOutcome {
    /// The prompt to speak back; exactly one per inbound event.
    pub reply: String,
    /// State to persist for the call id; `None` destroys the record.
    pub state: Option<CallState>,
    /// At most one side effect per turn.
    pub side_effect: Option<SideEffect>,
}

impl TurnOutcome {
    fn reply_only(reply: impl Into<String>, state: Option<CallState>) -> Self {
        Self {
            reply: reply.into(),
            state,
            side_effect: None,
        }
    }
}

/// Drives the scripted intake dialogue for every active call.
///
/// Holds the emergency detector and one extractor per extraction phase.
/// Extractors sit behind the `FieldExtractor` seam so stricter NLU can
/// replace the pattern matching without touching the transition logic.
pub struct IntakeEngine {
    classifier: Box<dyn EmergencyClassifier>,
    name_extractor: Box<dyn FieldExtractor>,
    phone_extractor: Box<dyn FieldExtractor>,
}

impl IntakeEngine {
    /// Creates an engine with the default pattern extractors.
    pub fn new(detector: EmergencyDetector) -> Self {
        Self {
            classifier: Box::new(detector),
            name_extractor: Box::new(NameExtractor),
            phone_extractor: Box::new(PhoneExtractor),
        }
    }

    /// Replaces the emergency classifier.
    pub fn with_classifier(mut self, classifier: Box<dyn EmergencyClassifier>) -> Self {
        self.classifier = classifier;
        self
    }

    /// Replaces the name extractor.
    pub fn with_name_extractor(mut self, extractor: Box<dyn FieldExtractor>) -> Self {
        self.name_extractor = extractor;
        self
    }

    /// Replaces the phone extractor.
    pub fn with_phone_extractor(mut self, extractor: Box<dyn FieldExtractor>) -> Self {
        self.phone_extractor = extractor;
        self
    }

    /// Applies one event to the call's current state.
    ///
    /// `state` is the record currently held for `call_id` (`None` when the
    /// call is unknown). The returned outcome carries the prompt, the state
    /// to persist (or `None` to destroy it), and at most one side effect.
    pub fn apply_event(
        &self,
        call_id: &str,
        state: Option<CallState>,
        event: &CallEvent,
    ) -> TurnOutcome {
        match event {
            CallEvent::CallStarted => {
                // Idempotent on replay: an existing record keeps its
                // collected fields and phase.
                let state = state.unwrap_or_else(|| CallState::new(call_id));
                TurnOutcome::reply_only(prompts::GREETING, Some(state))
            }
            CallEvent::CallEnded => TurnOutcome::reply_only(prompts::GOODBYE, None),
            CallEvent::TurnEnded { transcript } => {
                let utterance = latest_caller_utterance(transcript);
                let state = state.unwrap_or_else(|| CallState::new(call_id));
                self.handle_turn(state, utterance)
            }
            CallEvent::Unknown(_) => TurnOutcome::reply_only(prompts::FALLBACK, state),
        }
    }

    /// Handles one completed caller turn.
    ///
    /// Emergency detection runs first and pre-empts the per-phase handler
    /// for this turn. The gate is one-way: once a call is flagged, the
    /// detector is never consulted again for it.
    fn handle_turn(&self, mut state: CallState, utterance: &str) -> TurnOutcome {
        if !state.emergency_detected && self.classifier.is_emergency(utterance) {
            state.mark_emergency(utterance);
            state.advance(CallPhase::EmergencyConfirmation);
            return TurnOutcome::reply_only(prompts::EMERGENCY_CONFIRMATION, Some(state));
        }

        match state.phase {
            CallPhase::CollectName => self.collect_name(state, utterance),
            CallPhase::CollectPhone => self.collect_phone(state, utterance),
            CallPhase::CollectIssue => self.collect_issue(state, utterance),
            CallPhase::Completed => TurnOutcome::reply_only(prompts::CLOSING, Some(state)),
            CallPhase::EmergencyConfirmation => self.confirm_safety(state, utterance),
            CallPhase::EmergencyCollectAddress => self.collect_address(state, utterance),
            CallPhase::EmergencyCompleted => {
                TurnOutcome::reply_only(prompts::EMERGENCY_CLOSING, Some(state))
            }
        }
    }

    fn collect_name(&self, mut state: CallState, utterance: &str) -> TurnOutcome {
        match self.name_extractor.extract(utterance) {
            Some(name) => {
                state.record_name(name.clone());
                state.advance(CallPhase::CollectPhone);
                TurnOutcome::reply_only(prompts::ask_phone(&name), Some(state))
            }
            // Retry rather than substitute a placeholder name.
            None => TurnOutcome::reply_only(prompts::RETRY_NAME, Some(state)),
        }
    }

    fn collect_phone(&self, mut state: CallState, utterance: &str) -> TurnOutcome {
        match self.phone_extractor.extract(utterance) {
            Some(phone) => {
                state.record_phone(phone);
                state.advance(CallPhase::CollectIssue);
                TurnOutcome::reply_only(prompts::ASK_ISSUE, Some(state))
            }
            None => TurnOutcome::reply_only(prompts::RETRY_PHONE, Some(state)),
        }
    }

    fn collect_issue(&self, mut state: CallState, utterance: &str) -> TurnOutcome {
        // Raw utterance accepted verbatim, empty included.
        state.record_service_issue(utterance);
        state.advance(CallPhase::Completed);

        let name = state.name.clone().unwrap_or_default();
        let lead = Lead::new(name.clone(), state.phone.clone().unwrap_or_default(), utterance);
        TurnOutcome {
            reply: prompts::confirm_lead(&name, utterance),
            state: Some(state),
            side_effect: Some(SideEffect::StoreLead(lead)),
        }
    }

    fn confirm_safety(&self, mut state: CallState, utterance: &str) -> TurnOutcome {
        state.record_safety_confirmation(utterance);
        state.advance(CallPhase::EmergencyCollectAddress);
        TurnOutcome::reply_only(prompts::EMERGENCY_ASK_ADDRESS, Some(state))
    }

    fn collect_address(&self, mut state: CallState, utterance: &str) -> TurnOutcome {
        state.record_address(utterance);
        state.advance(CallPhase::EmergencyCompleted);

        let details = AlertDetails {
            name: state.name.clone(),
            phone: state.phone.clone(),
            // The original triggering utterance, not the address or the
            // safety reply.
            service_issue: state.emergency_reason.clone(),
            emergency_address: state.emergency_address.clone(),
            emergency_detected: true,
            safety_confirmation: state.emergency_safety_confirmation.clone(),
        };
        TurnOutcome {
            reply: prompts::confirm_dispatch(utterance),
            state: Some(state),
            side_effect: Some(SideEffect::TriggerAlert(details)),
        }
    }
}
