//! Adapters: concrete implementations of the ports plus the HTTP boundary.

pub mod alerts;
pub mod http;
pub mod storage;
