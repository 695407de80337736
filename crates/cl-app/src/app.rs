//! Application facade.
//!
//! Owns the long-lived use cases (the permission flow's in-flight guard and
//! the dispatcher's listener/token must outlive a single call) and hands out
//! the short-lived ones on demand.

use std::sync::Arc;

use cl_core::{LocalAlert, OnboardingPolicy};

use crate::deps::AppDeps;
use crate::usecases::{
    PushNotificationDispatcher, RecheckOnActivation, RequestPermissions, ResolveOnboardingStep,
    UpdateConsent,
};

/// Behavior knobs resolved by the composition root.
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub onboarding_policy: OnboardingPolicy,
    pub potential_alert: LocalAlert,
}

pub struct App {
    deps: AppDeps,
    resolve_step: Arc<ResolveOnboardingStep>,
    permissions: Arc<RequestPermissions>,
    push: Arc<PushNotificationDispatcher>,
}

impl App {
    pub fn new(deps: AppDeps, settings: AppSettings) -> Self {
        let resolve_step = Arc::new(ResolveOnboardingStep::new(
            deps.persistence.clone(),
            deps.authorization.clone(),
            settings.onboarding_policy,
        ));
        let permissions = Arc::new(RequestPermissions::new(
            deps.authorization.clone(),
            deps.broadcaster.clone(),
            deps.ui_queue.clone(),
        ));
        let push = Arc::new(PushNotificationDispatcher::new(
            deps.persistence.clone(),
            deps.local_alerts.clone(),
            deps.push_messaging.clone(),
            settings.potential_alert,
        ));

        Self {
            deps,
            resolve_step,
            permissions,
            push,
        }
    }

    pub fn resolve_onboarding_step(&self) -> Arc<ResolveOnboardingStep> {
        self.resolve_step.clone()
    }

    pub fn recheck_on_activation(&self) -> RecheckOnActivation {
        RecheckOnActivation::new(self.resolve_step.clone())
    }

    pub fn request_permissions(&self) -> Arc<RequestPermissions> {
        self.permissions.clone()
    }

    pub fn push_dispatcher(&self) -> Arc<PushNotificationDispatcher> {
        self.push.clone()
    }

    pub fn update_consent(&self) -> UpdateConsent {
        UpdateConsent::new(self.deps.persistence.clone())
    }
}
