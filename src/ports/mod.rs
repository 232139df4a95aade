//! Ports: collaborator contracts consumed by the application layer.
//!
//! Each port is an `async_trait` trait with in-memory adapters for this
//! in-process deployment and room for production backends.

mod alert_sink;
mod call_state_store;
mod lead_store;

pub use alert_sink::{AlertSinkError, TechnicianAlertSink};
pub use call_state_store::{CallStateStore, CallStateStoreError};
pub use lead_store::{LeadStore, LeadStoreError};
