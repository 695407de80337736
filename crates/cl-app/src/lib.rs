//! CoLocate Application Orchestration Layer
//!
//! This crate contains the onboarding, permission and push notification use
//! cases. Every side effect goes through a port from `cl-core`.

pub mod app;
pub mod deps;
pub mod usecases;

pub use app::{App, AppSettings};
pub use deps::AppDeps;
