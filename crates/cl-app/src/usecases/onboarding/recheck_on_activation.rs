use std::sync::Arc;

use tokio::sync::broadcast::{self, error::RecvError};
use tracing::{debug, info_span, warn, Instrument};

use cl_core::{AppLifecycleEvent, OnboardingStep};

use super::{OnboardingError, ResolveOnboardingStep};

/// Use case for re-evaluating onboarding once the app is active again.
///
/// Screens like "Bluetooth denied" send the user to the system settings; the
/// only signal that something may have changed is the app returning to the
/// foreground.
pub struct RecheckOnActivation {
    resolve_step: Arc<ResolveOnboardingStep>,
}

impl RecheckOnActivation {
    pub fn new(resolve_step: Arc<ResolveOnboardingStep>) -> Self {
        Self { resolve_step }
    }

    /// Wait for the next activation and resolve the step again.
    ///
    /// Returns `Ok(None)` when the lifecycle stream closes first.
    pub async fn execute(
        &self,
        events: &mut broadcast::Receiver<AppLifecycleEvent>,
    ) -> Result<Option<OnboardingStep>, OnboardingError> {
        let span = info_span!("usecase.recheck_on_activation.execute");
        async {
            loop {
                match events.recv().await {
                    Ok(AppLifecycleEvent::DidBecomeActive) => {
                        debug!("app became active; re-resolving onboarding step");
                        break;
                    }
                    Ok(event) => debug!(?event, "ignoring lifecycle event"),
                    // An activation may have been among the dropped events.
                    Err(RecvError::Lagged(skipped)) => {
                        warn!(skipped, "lifecycle stream lagged; re-resolving onboarding step");
                        break;
                    }
                    Err(RecvError::Closed) => return Ok(None),
                }
            }

            self.resolve_step.execute().await.map(Some)
        }
        .instrument(span)
        .await
    }
}
