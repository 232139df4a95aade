//! Lead store port.
//!
//! Defines the contract for persisting completed intake leads. The
//! in-process adapter keeps a list; production swaps in a database or CRM
//! behind the same trait.
//!
//! # Contract
//!
//! - **Append-only** until explicitly cleared
//! - **Ordered**: retrieval order equals insertion order equals completion
//!   order

use async_trait::async_trait;

use crate::domain::intake::Lead;

/// Errors that can occur during lead store operations.
#[derive(Debug, thiserror::Error)]
pub enum LeadStoreError {
    #[error("Lead store backend error: {0}")]
    Backend(String),
}

/// Port for persisting and retrieving leads.
#[async_trait]
pub trait LeadStore: Send + Sync {
    /// Append a lead and return it.
    async fn store_lead(&self, lead: Lead) -> Result<Lead, LeadStoreError>;

    /// All stored leads, in insertion order.
    async fn get_leads(&self) -> Result<Vec<Lead>, LeadStoreError>;

    /// Remove every stored lead.
    async fn clear_leads(&self) -> Result<(), LeadStoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trait object safety test
    #[test]
    fn lead_store_is_object_safe() {
        fn _accepts_dyn(_store: &dyn LeadStore) {}
    }
}
