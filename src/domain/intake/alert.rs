//! Technician alert payload for the emergency branch.

use serde::{Deserialize, Serialize};

/// Everything the on-call technician path needs to act on an emergency.
///
/// `service_issue` carries the original emergency-triggering utterance, not
/// a separately collected issue description. Contact fields are optional
/// because the emergency branch can pre-empt the standard flow before they
/// were collected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertDetails {
    /// Caller name, if it was collected before the emergency pre-empted.
    pub name: Option<String>,
    /// Callback number, if it was collected before the emergency pre-empted.
    pub phone: Option<String>,
    /// The utterance that triggered emergency detection.
    pub service_issue: Option<String>,
    /// The dispatch address as spoken.
    pub emergency_address: Option<String>,
    /// Always true on a dispatched alert; kept for downstream consumers.
    pub emergency_detected: bool,
    /// The caller's safety-confirmation reply as spoken.
    pub safety_confirmation: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alert_serializes_with_snake_case_fields() {
        let details = AlertDetails {
            name: Some("John Doe".to_string()),
            phone: None,
            service_issue: Some("I have a burst pipe!".to_string()),
            emergency_address: Some("12 Elm Street".to_string()),
            emergency_detected: true,
            safety_confirmation: Some("Yes, we are safe".to_string()),
        };
        let json = serde_json::to_value(&details).unwrap();
        assert_eq!(json["service_issue"], "I have a burst pipe!");
        assert_eq!(json["emergency_detected"], true);
        assert!(json["phone"].is_null());
    }
}
