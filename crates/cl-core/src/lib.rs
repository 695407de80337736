//! # cl-core
//!
//! Core domain models and ports for the CoLocate onboarding and push flows.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

pub mod authorization;
pub mod config;
pub mod diagnosis;
pub mod lifecycle;
pub mod onboarding;
pub mod ports;
pub mod push;

// Re-export commonly used types at the crate root
pub use authorization::{AuthorizationSnapshot, AuthorizationStatus, BluetoothRadioState};
pub use config::AppConfig;
pub use diagnosis::Diagnosis;
pub use lifecycle::AppLifecycleEvent;
pub use onboarding::{
    ConsentState, OnboardingPolicy, OnboardingStateMachine, OnboardingStep, Registration,
};
pub use push::{LocalAlert, PushEvent, PushPayload};
