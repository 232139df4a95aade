//! Alert channel adapters.

mod console_alert_sink;

pub use console_alert_sink::ConsoleAlertSink;
