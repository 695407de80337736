//! Onboarding use cases
//!
//! Resolving the current onboarding step, and re-resolving it when the app
//! comes back to the foreground.

pub mod recheck_on_activation;
pub mod resolve_step;

pub use recheck_on_activation::RecheckOnActivation;
pub use resolve_step::ResolveOnboardingStep;

use cl_core::ports::PersistenceError;

#[derive(Debug, thiserror::Error)]
pub enum OnboardingError {
    #[error("failed to read consent state: {0}")]
    Persistence(#[from] PersistenceError),
}
