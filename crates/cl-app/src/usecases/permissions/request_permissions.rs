//! Permission request flow.
//!
//! Bluetooth has no direct "request authorization" call: starting the
//! broadcaster makes the OS prompt, and the answer shows up as a broadcaster
//! state change. Notifications do have an explicit request. Both prompts are
//! skipped when the user has already answered them.

use std::sync::Arc;

use tracing::{debug, error, info, info_span, warn, Instrument};

use cl_core::ports::{
    AuthorizationPort, BluetoothBroadcasterPort, BroadcasterError, NotificationAuthorizationError,
    UiQueuePort,
};
use cl_core::AuthorizationStatus;

use super::in_flight::InFlight;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionRequestOutcome {
    /// The sequence ran and the completion callback was queued.
    Completed,
    /// Another request cycle was running; nothing was done.
    AlreadyInFlight,
}

#[derive(Debug, thiserror::Error)]
pub enum PermissionRequestError {
    /// Fatal: the OS failed a request that is documented to always succeed.
    #[error(transparent)]
    NotificationAuthorization(#[from] NotificationAuthorizationError),
    #[error("bluetooth broadcaster failed: {0}")]
    Broadcaster(#[from] BroadcasterError),
}

/// Use case for walking the user through the OS permission prompts.
///
/// Completion does not mean the permissions were granted; denial completes
/// the sequence too. The caller re-resolves the onboarding step afterwards.
pub struct RequestPermissions {
    authorization: Arc<dyn AuthorizationPort>,
    broadcaster: Arc<dyn BluetoothBroadcasterPort>,
    ui_queue: Arc<dyn UiQueuePort>,
    in_flight: InFlight,
}

impl RequestPermissions {
    pub fn new(
        authorization: Arc<dyn AuthorizationPort>,
        broadcaster: Arc<dyn BluetoothBroadcasterPort>,
        ui_queue: Arc<dyn UiQueuePort>,
    ) -> Self {
        Self {
            authorization,
            broadcaster,
            ui_queue,
            in_flight: InFlight::default(),
        }
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.is_set()
    }

    /// Run one request cycle.
    ///
    /// `on_complete` is dispatched onto the UI queue exactly once when the
    /// cycle completes, and dropped without being called otherwise. A call
    /// made while another cycle is running is ignored, not queued.
    pub async fn execute<F>(
        &self,
        on_complete: F,
    ) -> Result<PermissionRequestOutcome, PermissionRequestError>
    where
        F: FnOnce() + Send + 'static,
    {
        let Some(_guard) = self.in_flight.try_acquire() else {
            debug!("permission request already in flight; ignoring");
            return Ok(PermissionRequestOutcome::AlreadyInFlight);
        };

        let span = info_span!("usecase.request_permissions.execute");
        async {
            if self.authorization.bluetooth() == AuthorizationStatus::NotDetermined {
                self.await_bluetooth_decision().await?;
            }
            self.request_notifications().await?;

            self.ui_queue.dispatch(Box::new(on_complete));
            Ok(PermissionRequestOutcome::Completed)
        }
        .instrument(span)
        .await
    }

    async fn await_bluetooth_decision(&self) -> Result<(), PermissionRequestError> {
        if !self.broadcaster.is_available() {
            info!("no bluetooth hardware; skipping bluetooth prompt");
            return Ok(());
        }

        let mut states = match self.broadcaster.start_broadcasting() {
            Ok(states) => states,
            Err(BroadcasterError::Unavailable) => {
                info!("bluetooth became unavailable; skipping bluetooth prompt");
                return Ok(());
            }
            Err(err) => {
                error!(error = %err, "failed to start bluetooth broadcaster");
                return Err(err.into());
            }
        };

        while let Some(radio_state) = states.recv().await {
            let status = self.authorization.bluetooth();
            debug!(?radio_state, %status, "bluetooth state changed");
            if status.is_decided() {
                info!(%status, "bluetooth authorization decided");
                return Ok(());
            }
        }

        warn!("bluetooth state stream closed before authorization was decided");
        Ok(())
    }

    async fn request_notifications(&self) -> Result<(), PermissionRequestError> {
        let status = self.authorization.notifications().await;

        // Already asked: re-prompting is a silent no-op on the OS side, so
        // leave it to the onboarding step to deal with the answer.
        if status.is_decided() {
            debug!(%status, "notification authorization already decided");
            return Ok(());
        }

        match self.authorization.request_notification_authorization().await {
            Ok(granted) => {
                info!(granted, "notification authorization answered");
                Ok(())
            }
            Err(err) => {
                error!(error = %err, "error requesting notification permissions");
                Err(err.into())
            }
        }
    }
}
