//! In-Memory Lead Store Adapter
//!
//! Keeps leads in an in-process list. This is the deployment target for the
//! intake service today; a database or CRM adapter replaces it behind the
//! same port in production.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::intake::Lead;
use crate::ports::{LeadStore, LeadStoreError};

/// In-memory, insertion-ordered lead storage.
#[derive(Debug, Clone, Default)]
pub struct InMemoryLeadStore {
    leads: Arc<RwLock<Vec<Lead>>>,
}

impl InMemoryLeadStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored leads.
    pub async fn len(&self) -> usize {
        self.leads.read().await.len()
    }

    /// True when no leads are stored.
    pub async fn is_empty(&self) -> bool {
        self.leads.read().await.is_empty()
    }
}

#[async_trait]
impl LeadStore for InMemoryLeadStore {
    async fn store_lead(&self, lead: Lead) -> Result<Lead, LeadStoreError> {
        self.leads.write().await.push(lead.clone());
        Ok(lead)
    }

    async fn get_leads(&self) -> Result<Vec<Lead>, LeadStoreError> {
        Ok(self.leads.read().await.clone())
    }

    async fn clear_leads(&self) -> Result<(), LeadStoreError> {
        self.leads.write().await.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lead(n: u32) -> Lead {
        Lead::new(format!("Lead {n}"), format!("555-000-000{n}"), format!("Issue {n}"))
    }

    #[tokio::test]
    async fn store_returns_the_stored_lead() {
        let store = InMemoryLeadStore::new();
        let stored = store.store_lead(lead(1)).await.unwrap();
        assert_eq!(stored, lead(1));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn get_leads_preserves_insertion_order() {
        let store = InMemoryLeadStore::new();
        store.store_lead(lead(1)).await.unwrap();
        store.store_lead(lead(2)).await.unwrap();
        store.store_lead(lead(3)).await.unwrap();

        let leads = store.get_leads().await.unwrap();
        assert_eq!(leads, vec![lead(1), lead(2), lead(3)]);
    }

    #[tokio::test]
    async fn clear_removes_all_leads() {
        let store = InMemoryLeadStore::new();
        store.store_lead(lead(1)).await.unwrap();
        assert!(!store.is_empty().await);

        store.clear_leads().await.unwrap();
        assert!(store.is_empty().await);
        assert!(store.get_leads().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn store_is_clone_shareable_across_tasks() {
        let store = InMemoryLeadStore::new();
        let store2 = store.clone();

        let handle = tokio::spawn(async move {
            store2.store_lead(lead(1)).await.unwrap();
        });
        handle.await.unwrap();

        assert_eq!(store.len().await, 1);
    }
}
