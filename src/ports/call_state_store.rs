//! Call-state store port.
//!
//! Defines the contract for the per-call conversation registry. Exactly one
//! record exists per live call id; records are created when the engine
//! first sees an id and removed on `call_ended`.

use async_trait::async_trait;

use crate::domain::intake::CallState;

/// Errors that can occur during call-state store operations.
#[derive(Debug, thiserror::Error)]
pub enum CallStateStoreError {
    #[error("Call state store backend error: {0}")]
    Backend(String),
}

/// Port for the per-call state registry.
#[async_trait]
pub trait CallStateStore: Send + Sync {
    /// The current record for a call id, if any.
    async fn find(&self, call_id: &str) -> Result<Option<CallState>, CallStateStoreError>;

    /// Insert or replace the record for its call id.
    async fn upsert(&self, state: CallState) -> Result<(), CallStateStoreError>;

    /// Remove the record for a call id. Removing an absent id is not an
    /// error.
    async fn remove(&self, call_id: &str) -> Result<(), CallStateStoreError>;

    /// Number of live call records.
    async fn active_count(&self) -> Result<usize, CallStateStoreError>;

    /// Remove every record (test lifecycle hook).
    async fn clear(&self) -> Result<(), CallStateStoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trait object safety test
    #[test]
    fn call_state_store_is_object_safe() {
        fn _accepts_dyn(_store: &dyn CallStateStore) {}
    }
}
