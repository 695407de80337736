//! # cl-platform
//!
//! Platform implementations of the CoLocate ports.
//!
//! The headless adapters stand in for the OS permission prompts and the
//! Bluetooth radio on hosts that have neither, driven by configuration.

pub mod adapters;
pub mod headless;
pub mod runtime;

pub use adapters::{LoggingPushMessaging, StdoutPushListener, TracingAlertEmitter};
pub use headless::{HeadlessAuthorization, HeadlessBroadcaster, HeadlessDevice, HeadlessSettings};
pub use runtime::{InlineUiQueue, MainQueue, MainQueueRunner};
