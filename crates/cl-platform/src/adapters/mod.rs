//! Port adapters that talk to the host rather than to a mobile OS.

pub mod alert;
pub mod push;

pub use alert::TracingAlertEmitter;
pub use push::{LoggingPushMessaging, StdoutPushListener};
