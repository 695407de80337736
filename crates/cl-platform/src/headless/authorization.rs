use async_trait::async_trait;
use tracing::info;

use cl_core::ports::{AuthorizationPort, NotificationAuthorizationError};
use cl_core::AuthorizationStatus;

use super::HeadlessDevice;

/// Authorization provider backed by a [`HeadlessDevice`].
///
/// The notification prompt is answered from the device settings. Once
/// answered, later prompts return the recorded answer without changing it,
/// the way the OS only ever prompts once.
pub struct HeadlessAuthorization {
    device: HeadlessDevice,
}

impl HeadlessAuthorization {
    pub fn new(device: HeadlessDevice) -> Self {
        Self { device }
    }
}

#[async_trait]
impl AuthorizationPort for HeadlessAuthorization {
    fn bluetooth(&self) -> AuthorizationStatus {
        self.device.snapshot().bluetooth
    }

    async fn notifications(&self) -> AuthorizationStatus {
        tokio::task::yield_now().await;
        self.device.snapshot().notifications
    }

    async fn request_notification_authorization(
        &self,
    ) -> Result<bool, NotificationAuthorizationError> {
        tokio::task::yield_now().await;

        let current = self.device.snapshot().notifications;
        if current.is_decided() {
            return Ok(current == AuthorizationStatus::Allowed);
        }

        let granted = self.device.settings().grant_notifications;
        let status = if granted {
            AuthorizationStatus::Allowed
        } else {
            AuthorizationStatus::Denied
        };
        self.device.set_notifications(status);
        info!(granted, "headless notification prompt answered");
        Ok(granted)
    }
}
