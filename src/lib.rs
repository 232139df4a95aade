//! Call Intake - Voice-AI Phone Intake Service
//!
//! This crate answers inbound call webhook events from a voice-AI telephony
//! platform and drives a scripted intake conversation: collect the caller's
//! name, callback number, and service issue, store the result as a lead, and
//! escalate to a technician alert when the caller's speech contains
//! emergency language.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
