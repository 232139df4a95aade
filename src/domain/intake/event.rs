//! Inbound call events and transcripts.
//!
//! The telephony platform delivers three event kinds per call. Transcripts
//! arrive as ordered role/content entries; only caller entries feed
//! extraction.

use serde::{Deserialize, Serialize};

/// Speaker attribution for one transcript entry.
///
/// The platform may introduce new roles; anything unrecognized deserializes
/// to `Other` rather than failing the whole event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TranscriptRole {
    /// The caller.
    User,
    /// The voice agent.
    Agent,
    /// Any role this service does not know about.
    #[serde(other)]
    Other,
}

/// One speech segment of the call transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    pub role: TranscriptRole,
    pub content: String,
}

impl TranscriptEntry {
    /// Creates a caller entry (test and fixture convenience).
    pub fn caller(content: impl Into<String>) -> Self {
        Self {
            role: TranscriptRole::User,
            content: content.into(),
        }
    }

    /// Creates an agent entry.
    pub fn agent(content: impl Into<String>) -> Self {
        Self {
            role: TranscriptRole::Agent,
            content: content.into(),
        }
    }
}

/// Returns the most recent caller utterance in the transcript.
///
/// Later caller turns override earlier ones within the same transcript; a
/// transcript with no caller entry yields the empty string, which flows
/// through extraction as a normal mismatch.
pub fn latest_caller_utterance(transcript: &[TranscriptEntry]) -> &str {
    transcript
        .iter()
        .rev()
        .find(|entry| entry.role == TranscriptRole::User)
        .map(|entry| entry.content.as_str())
        .unwrap_or("")
}

/// An inbound event applied to one call's conversation state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallEvent {
    /// The platform connected a new call.
    CallStarted,

    /// The call hung up; state for the call id is destroyed.
    CallEnded,

    /// A dialogue turn finished; the transcript covers the call so far.
    TurnEnded { transcript: Vec<TranscriptEntry> },

    /// Any event type this service does not recognize (raw type kept for
    /// logging).
    Unknown(String),
}
