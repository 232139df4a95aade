//! Foundation module: shared building blocks for the domain layer.
//!
//! Error types and the `StateMachine` trait used by lifecycle enums.

mod errors;
mod state_machine;

pub use errors::ValidationError;
pub use state_machine::StateMachine;
