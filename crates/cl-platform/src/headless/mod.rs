//! Headless platform simulation.
//!
//! A [`HeadlessDevice`] owns the authorization state that a real OS would
//! own. The authorization and broadcaster adapters it hands out share that
//! state, so starting the broadcaster can "answer" the Bluetooth prompt and
//! the authorization adapter sees the answer on its next read.

mod authorization;
mod broadcaster;
mod settings;

use std::sync::{Arc, Mutex, PoisonError};

use tracing::debug;

use cl_core::{AuthorizationSnapshot, AuthorizationStatus};

pub use authorization::HeadlessAuthorization;
pub use broadcaster::HeadlessBroadcaster;
pub use settings::HeadlessSettings;

#[derive(Clone)]
pub struct HeadlessDevice {
    snapshot: Arc<Mutex<AuthorizationSnapshot>>,
    settings: HeadlessSettings,
}

impl HeadlessDevice {
    pub fn new(settings: HeadlessSettings) -> Self {
        Self {
            snapshot: Arc::new(Mutex::new(AuthorizationSnapshot::new(
                settings.bluetooth,
                settings.notifications,
            ))),
            settings,
        }
    }

    pub fn settings(&self) -> &HeadlessSettings {
        &self.settings
    }

    pub fn snapshot(&self) -> AuthorizationSnapshot {
        *self.lock()
    }

    pub fn authorization(&self) -> HeadlessAuthorization {
        HeadlessAuthorization::new(self.clone())
    }

    pub fn broadcaster(&self) -> HeadlessBroadcaster {
        HeadlessBroadcaster::new(self.clone())
    }

    /// Change the Bluetooth authorization, as the user would in the system settings.
    pub fn set_bluetooth(&self, status: AuthorizationStatus) {
        debug!(%status, "headless bluetooth authorization changed");
        self.lock().bluetooth = status;
    }

    pub fn set_notifications(&self, status: AuthorizationStatus) {
        debug!(%status, "headless notification authorization changed");
        self.lock().notifications = status;
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, AuthorizationSnapshot> {
        self.snapshot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for HeadlessDevice {
    fn default() -> Self {
        Self::new(HeadlessSettings::default())
    }
}
