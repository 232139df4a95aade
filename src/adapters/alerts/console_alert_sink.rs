//! Console Technician Alert Adapter
//!
//! Formats emergency alerts as a console block via `tracing`. Production
//! deployments replace this with SMS/email/webhook sinks behind the same
//! port.

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::intake::AlertDetails;
use crate::ports::{AlertSinkError, TechnicianAlertSink};

/// Writes alert blocks to the process log.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleAlertSink;

impl ConsoleAlertSink {
    /// Create a console sink.
    pub fn new() -> Self {
        Self
    }

    fn format_block(details: &AlertDetails) -> String {
        let unknown = || "(not collected)".to_string();
        format!(
            "EMERGENCY ALERT [{}]\n  caller:  {}\n  phone:   {}\n  issue:   {}\n  address: {}\n  safety:  {}",
            Utc::now().format("%Y-%m-%d %H:%M:%S UTC"),
            details.name.clone().unwrap_or_else(unknown),
            details.phone.clone().unwrap_or_else(unknown),
            details.service_issue.clone().unwrap_or_else(unknown),
            details.emergency_address.clone().unwrap_or_else(unknown),
            details.safety_confirmation.clone().unwrap_or_else(unknown),
        )
    }
}

#[async_trait]
impl TechnicianAlertSink for ConsoleAlertSink {
    async fn trigger_technician_alert(&self, details: AlertDetails) -> Result<(), AlertSinkError> {
        tracing::warn!(
            alert = %Self::format_block(&details),
            "dispatching technician alert"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details() -> AlertDetails {
        AlertDetails {
            name: Some("Jane".to_string()),
            phone: None,
            service_issue: Some("I have a burst pipe!".to_string()),
            emergency_address: Some("12 Elm Street".to_string()),
            emergency_detected: true,
            safety_confirmation: Some("yes".to_string()),
        }
    }

    #[test]
    fn block_includes_collected_fields() {
        let block = ConsoleAlertSink::format_block(&details());
        assert!(block.contains("Jane"));
        assert!(block.contains("I have a burst pipe!"));
        assert!(block.contains("12 Elm Street"));
    }

    #[test]
    fn block_marks_missing_fields() {
        let block = ConsoleAlertSink::format_block(&details());
        // Phone was never collected before the emergency pre-empted.
        assert!(block.contains("(not collected)"));
    }

    #[tokio::test]
    async fn dispatch_succeeds() {
        let sink = ConsoleAlertSink::new();
        assert!(sink.trigger_technician_alert(details()).await.is_ok());
    }
}
