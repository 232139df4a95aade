//! Technician alert port.
//!
//! Fire-and-forget escalation channel for emergency calls. The in-process
//! adapter formats to the console; production swaps in SMS, email, or an
//! outbound webhook behind the same trait. The engine never consumes a
//! return value from the alert path.

use async_trait::async_trait;

use crate::domain::intake::AlertDetails;

/// Errors that can occur while dispatching an alert.
#[derive(Debug, thiserror::Error)]
pub enum AlertSinkError {
    #[error("Alert dispatch failed: {0}")]
    Dispatch(String),
}

/// Port for the human/technician notification channel.
#[async_trait]
pub trait TechnicianAlertSink: Send + Sync {
    /// Dispatch an emergency alert.
    async fn trigger_technician_alert(&self, details: AlertDetails) -> Result<(), AlertSinkError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trait object safety test
    #[test]
    fn alert_sink_is_object_safe() {
        fn _accepts_dyn(_sink: &dyn TechnicianAlertSink) {}
    }
}
