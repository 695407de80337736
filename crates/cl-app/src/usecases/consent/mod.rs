//! Consent use cases
//!
//! Writes behind the onboarding screens that precede the permission prompts.

pub mod update_consent;

pub use update_consent::{ConsentError, UpdateConsent};
