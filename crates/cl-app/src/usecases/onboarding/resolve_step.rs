use std::sync::Arc;

use tracing::{debug, info_span, Instrument};

use cl_core::ports::{AuthorizationPort, PersistencePort};
use cl_core::{
    AuthorizationSnapshot, OnboardingPolicy, OnboardingStateMachine, OnboardingStep,
};

use super::OnboardingError;

/// Use case for computing the onboarding step the user is on.
///
/// Reads the persisted consent state, then (only if data sharing was allowed)
/// awaits the notification authorization query and reads Bluetooth
/// authorization. Never writes anything.
pub struct ResolveOnboardingStep {
    persistence: Arc<dyn PersistencePort>,
    authorization: Arc<dyn AuthorizationPort>,
    policy: OnboardingPolicy,
}

impl ResolveOnboardingStep {
    pub fn new(
        persistence: Arc<dyn PersistencePort>,
        authorization: Arc<dyn AuthorizationPort>,
        policy: OnboardingPolicy,
    ) -> Self {
        Self {
            persistence,
            authorization,
            policy,
        }
    }

    pub async fn execute(&self) -> Result<OnboardingStep, OnboardingError> {
        let span = info_span!("usecase.resolve_onboarding_step.execute");
        async {
            let consent = self.persistence.consent_state()?;
            if !OnboardingStateMachine::needs_authorization(&consent) {
                debug!(step = %OnboardingStep::Initial, "data sharing not allowed");
                return Ok(OnboardingStep::Initial);
            }

            let notifications = self.authorization.notifications().await;
            let bluetooth = self.authorization.bluetooth();
            let snapshot = AuthorizationSnapshot::new(bluetooth, notifications);

            let step = OnboardingStateMachine::resolve(&consent, &snapshot, self.policy);
            debug!(
                %bluetooth,
                %notifications,
                has_postcode = consent.partial_postcode.is_some(),
                registered = consent.is_registered(),
                %step,
                "onboarding step resolved"
            );
            Ok(step)
        }
        .instrument(span)
        .await
    }
}
