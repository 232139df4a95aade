//! In-memory storage adapters.

mod in_memory_call_state_store;
mod in_memory_lead_store;

pub use in_memory_call_state_store::InMemoryCallStateStore;
pub use in_memory_lead_store::InMemoryLeadStore;
