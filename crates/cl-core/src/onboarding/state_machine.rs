//! Onboarding state machine.
//!
//! Defines a pure decision function for the onboarding gate. Gathering the
//! inputs (including the asynchronous notification query) is the caller's job.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::authorization::{AuthorizationSnapshot, AuthorizationStatus};
use crate::onboarding::{ConsentState, OnboardingStep};

/// Tunables for the onboarding gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnboardingPolicy {
    /// When set, a device without a registration stops at
    /// [`OnboardingStep::Registration`] instead of reaching `Done`.
    pub require_registration: bool,
}

impl Default for OnboardingPolicy {
    fn default() -> Self {
        Self {
            require_registration: true,
        }
    }
}

/// Pure onboarding state machine: no side effects.
pub struct OnboardingStateMachine;

impl OnboardingStateMachine {
    /// Whether the authorization snapshot is needed to decide the step.
    ///
    /// Without data-sharing consent nothing else matters, so callers can skip
    /// the asynchronous notification query altogether.
    pub fn needs_authorization(consent: &ConsentState) -> bool {
        consent.data_sharing_allowed
    }

    /// Map consent and authorization to the next onboarding step.
    ///
    /// Checks run in order and the first match wins. "Not determined" on
    /// either axis beats "denied" on the other, and a Bluetooth denial is
    /// reported before a notification denial.
    pub fn resolve(
        consent: &ConsentState,
        auth: &AuthorizationSnapshot,
        policy: OnboardingPolicy,
    ) -> OnboardingStep {
        let step = Self::decide(consent, auth, policy);
        trace!(
            %step,
            bluetooth = %auth.bluetooth,
            notifications = %auth.notifications,
            "onboarding step resolved"
        );
        step
    }

    fn decide(
        consent: &ConsentState,
        auth: &AuthorizationSnapshot,
        policy: OnboardingPolicy,
    ) -> OnboardingStep {
        use AuthorizationStatus::*;

        if !consent.data_sharing_allowed {
            return OnboardingStep::Initial;
        }

        if consent.partial_postcode.is_none() {
            return OnboardingStep::PartialPostcode;
        }

        match (auth.bluetooth, auth.notifications) {
            (NotDetermined, _) | (_, NotDetermined) => return OnboardingStep::Permissions,
            (Denied, _) => return OnboardingStep::BluetoothDenied,
            (_, Denied) => return OnboardingStep::PermissionsDenied,
            (Allowed, Allowed) => {}
        }

        if policy.require_registration && !consent.is_registered() {
            return OnboardingStep::Registration;
        }

        OnboardingStep::Done
    }
}
