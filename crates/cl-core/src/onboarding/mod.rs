//! Onboarding domain models
//!
//! This module defines the inputs and output of the onboarding gate: the
//! persisted consent state, the step the user still has to complete, and the
//! pure function that maps one to the other.

mod consent;
mod state_machine;
mod step;

pub use consent::{ConsentState, Registration};
pub use state_machine::{OnboardingPolicy, OnboardingStateMachine};
pub use step::OnboardingStep;
