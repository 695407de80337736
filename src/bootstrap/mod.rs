//! Process start-up: configuration, tracing and dependency wiring.

pub mod config;
pub mod tracing;
pub mod wiring;

pub use config::{default_config_path, load_config, resolve_config};
pub use wiring::{build_app, wire_dependencies, WiredApp, WiringError};
