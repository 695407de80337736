//! Shared fixtures for the integration tests.
//!
//! Real in-memory and headless adapters, plus recording doubles for the
//! ports whose effects the tests assert on.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use cl_app::{App, AppDeps, AppSettings};
use cl_core::ports::{
    LocalAlertPort, PersistencePort, PushMessagingError, PushMessagingPort,
    PushNotificationListener,
};
use cl_core::{LocalAlert, OnboardingPolicy, PushPayload};
use cl_infra::InMemoryPersistence;
use cl_platform::{HeadlessDevice, HeadlessSettings, MainQueue, MainQueueRunner};

#[derive(Default)]
pub struct RecordingAlerts {
    pub emitted: Mutex<Vec<LocalAlert>>,
}

impl LocalAlertPort for RecordingAlerts {
    fn emit(&self, alert: LocalAlert) {
        self.emitted.lock().unwrap().push(alert);
    }
}

#[derive(Default)]
pub struct RecordingListener {
    pub received: Mutex<Vec<PushPayload>>,
}

impl PushNotificationListener for RecordingListener {
    fn on_notification(&self, payload: &PushPayload) {
        self.received.lock().unwrap().push(payload.clone());
    }
}

#[derive(Default)]
pub struct NoopMessaging;

impl PushMessagingPort for NoopMessaging {
    fn configure(&self) -> Result<(), PushMessagingError> {
        Ok(())
    }
}

pub struct Harness {
    pub app: App,
    pub persistence: Arc<InMemoryPersistence>,
    pub device: HeadlessDevice,
    pub alerts: Arc<RecordingAlerts>,
    pub main_queue: MainQueueRunner,
}

pub fn potential_alert() -> LocalAlert {
    LocalAlert::potential_diagnosis("Potential exposure", "Someone near you reported symptoms")
}

pub fn harness(device: HeadlessSettings, policy: OnboardingPolicy) -> Harness {
    let persistence = Arc::new(InMemoryPersistence::new());
    let device = HeadlessDevice::new(device);
    let alerts = Arc::new(RecordingAlerts::default());
    let (queue, main_queue) = MainQueue::channel();

    let deps = AppDeps {
        persistence: persistence.clone() as Arc<dyn PersistencePort>,
        authorization: Arc::new(device.authorization()),
        broadcaster: Arc::new(device.broadcaster()),
        local_alerts: alerts.clone(),
        push_messaging: Arc::new(NoopMessaging),
        ui_queue: Arc::new(queue),
    };
    let settings = AppSettings {
        onboarding_policy: policy,
        potential_alert: potential_alert(),
    };

    Harness {
        app: App::new(deps, settings),
        persistence,
        device,
        alerts,
        main_queue,
    }
}

pub fn default_harness() -> Harness {
    harness(HeadlessSettings::default(), OnboardingPolicy::default())
}
