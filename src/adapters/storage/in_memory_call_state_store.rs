//! In-Memory Call-State Store Adapter
//!
//! Holds the per-call conversation registry in a map keyed by call id.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::intake::CallState;
use crate::ports::{CallStateStore, CallStateStoreError};

/// In-memory registry of active call records.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCallStateStore {
    states: Arc<RwLock<HashMap<String, CallState>>>,
}

impl InMemoryCallStateStore {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CallStateStore for InMemoryCallStateStore {
    async fn find(&self, call_id: &str) -> Result<Option<CallState>, CallStateStoreError> {
        Ok(self.states.read().await.get(call_id).cloned())
    }

    async fn upsert(&self, state: CallState) -> Result<(), CallStateStoreError> {
        self.states.write().await.insert(state.call_id.clone(), state);
        Ok(())
    }

    async fn remove(&self, call_id: &str) -> Result<(), CallStateStoreError> {
        self.states.write().await.remove(call_id);
        Ok(())
    }

    async fn active_count(&self) -> Result<usize, CallStateStoreError> {
        Ok(self.states.read().await.len())
    }

    async fn clear(&self) -> Result<(), CallStateStoreError> {
        self.states.write().await.clear();
        Ok(())
    }
}
