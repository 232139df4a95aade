//! Per-call conversation state.
//!
//! One `CallState` exists per live call id. It is created when the first
//! event referencing the id arrives and destroyed on `call_ended`.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;

use super::phase::CallPhase;

/// The conversation record for a single active call.
///
/// Fields populate progressively as the scripted dialogue advances. The
/// emergency fields follow a one-way gate: once `emergency_detected` is set,
/// it never resets within the call and `emergency_reason` is never
/// overwritten.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallState {
    /// Opaque platform-assigned key, stable for the call's lifetime.
    pub call_id: String,

    /// Current step of the scripted dialogue.
    pub phase: CallPhase,

    /// Caller name, once extracted.
    pub name: Option<String>,

    /// Callback number, stored verbatim as matched.
    pub phone: Option<String>,

    /// Service issue description, stored verbatim.
    pub service_issue: Option<String>,

    /// Sticky emergency flag; never resets within a call.
    pub emergency_detected: bool,

    /// The utterance that triggered emergency detection; captured once.
    pub emergency_reason: Option<String>,

    /// The caller's reply confirming safety, stored verbatim.
    pub emergency_safety_confirmation: Option<String>,

    /// The dispatch address, stored verbatim.
    pub emergency_address: Option<String>,
}

impl CallState {
    /// Creates a fresh state for a call, ready to collect the caller's name.
    pub fn new(call_id: impl Into<String>) -> Self {
        Self {
            call_id: call_id.into(),
            phase: CallPhase::CollectName,
            name: None,
            phone: None,
            service_issue: None,
            emergency_detected: false,
            emergency_reason: None,
            emergency_safety_confirmation: None,
            emergency_address: None,
        }
    }

    /// Moves the dialogue to `target`.
    ///
    /// The caller is responsible for picking a target the transition table
    /// allows; the debug assertion catches handler bugs in tests.
    pub fn advance(&mut self, target: CallPhase) {
        debug_assert!(
            self.phase.can_transition_to(&target),
            "invalid phase transition {:?} -> {:?}",
            self.phase,
            target
        );
        self.phase = target;
    }

    /// Records the extracted caller name.
    pub fn record_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    /// Records the callback number exactly as matched.
    pub fn record_phone(&mut self, phone: impl Into<String>) {
        self.phone = Some(phone.into());
    }

    /// Records the service issue exactly as spoken.
    pub fn record_service_issue(&mut self, issue: impl Into<String>) {
        self.service_issue = Some(issue.into());
    }

    /// Marks the call as an emergency and captures the triggering utterance.
    ///
    /// The gate is one-way: a second call leaves both the flag and the
    /// original reason untouched.
    pub fn mark_emergency(&mut self, reason: impl Into<String>) {
        if !self.emergency_detected {
            self.emergency_detected = true;
            self.emergency_reason = Some(reason.into());
        }
    }

    /// Records the caller's safety confirmation reply.
    pub fn record_safety_confirmation(&mut self, reply: impl Into<String>) {
        self.emergency_safety_confirmation = Some(reply.into());
    }

    /// Records the dispatch address.
    pub fn record_address(&mut self, address: impl Into<String>) {
        self.emergency_address = Some(address.into());
    }
}
