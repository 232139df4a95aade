//! The lead value produced by a completed standard intake.

use serde::{Deserialize, Serialize};

/// A completed standard-flow intake record awaiting follow-up contact.
///
/// Immutable once produced; exactly one per successful standard-branch
/// completion. Emergency-branch completions produce a technician alert
/// instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lead {
    /// Caller name as extracted from the transcript.
    pub name: String,
    /// Callback number exactly as the extractor matched it.
    pub phone: String,
    /// Service issue exactly as spoken.
    pub service_issue: String,
}

impl Lead {
    /// Creates a new lead.
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        service_issue: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            service_issue: service_issue.into(),
        }
    }
}
