use tokio::sync::mpsc;
use tracing::info;

use cl_core::ports::{BluetoothBroadcasterPort, BluetoothStateStream, BroadcasterError};
use cl_core::{AuthorizationStatus, BluetoothRadioState};

use super::HeadlessDevice;

/// Broadcaster backed by a [`HeadlessDevice`].
///
/// Starting it answers a pending Bluetooth prompt with "allow", then reports
/// a single radio state matching the resulting authorization.
pub struct HeadlessBroadcaster {
    device: HeadlessDevice,
}

impl HeadlessBroadcaster {
    pub fn new(device: HeadlessDevice) -> Self {
        Self { device }
    }
}

impl BluetoothBroadcasterPort for HeadlessBroadcaster {
    fn is_available(&self) -> bool {
        self.device.settings().bluetooth_hardware
    }

    fn start_broadcasting(&self) -> Result<BluetoothStateStream, BroadcasterError> {
        if !self.is_available() {
            return Err(BroadcasterError::Unavailable);
        }

        let mut status = self.device.snapshot().bluetooth;
        if status == AuthorizationStatus::NotDetermined {
            status = AuthorizationStatus::Allowed;
            self.device.set_bluetooth(status);
        }

        let radio_state = match status {
            AuthorizationStatus::Denied => BluetoothRadioState::Unauthorized,
            _ => BluetoothRadioState::PoweredOn,
        };
        info!(?radio_state, "headless broadcaster started");

        let (tx, rx) = mpsc::unbounded_channel();
        tx.send(radio_state)
            .map_err(|e| BroadcasterError::Start(e.to_string()))?;
        Ok(rx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headless::HeadlessSettings;

    #[tokio::test]
    async fn test_start_answers_pending_prompt() {
        let device = HeadlessDevice::default();
        let broadcaster = device.broadcaster();

        let mut states = broadcaster.start_broadcasting().unwrap();

        assert_eq!(states.recv().await, Some(BluetoothRadioState::PoweredOn));
        assert_eq!(states.recv().await, None);
        assert_eq!(device.snapshot().bluetooth, AuthorizationStatus::Allowed);
    }

    #[tokio::test]
    async fn test_denied_reports_unauthorized() {
        let device = HeadlessDevice::new(HeadlessSettings {
            bluetooth: AuthorizationStatus::Denied,
            ..HeadlessSettings::default()
        });

        let mut states = device.broadcaster().start_broadcasting().unwrap();

        assert_eq!(states.recv().await, Some(BluetoothRadioState::Unauthorized));
        assert_eq!(device.snapshot().bluetooth, AuthorizationStatus::Denied);
    }

    #[test]
    fn test_no_hardware_is_unavailable() {
        let device = HeadlessDevice::new(HeadlessSettings {
            bluetooth_hardware: false,
            ..HeadlessSettings::default()
        });
        let broadcaster = device.broadcaster();

        assert!(!broadcaster.is_available());
        assert!(matches!(
            broadcaster.start_broadcasting(),
            Err(BroadcasterError::Unavailable)
        ));
    }
}
