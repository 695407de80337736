use thiserror::Error;
use tokio::sync::mpsc;

use crate::authorization::BluetoothRadioState;

/// Stream of radio state changes reported after broadcasting starts.
pub type BluetoothStateStream = mpsc::UnboundedReceiver<BluetoothRadioState>;

#[derive(Debug, Error)]
pub enum BroadcasterError {
    #[error("bluetooth hardware unavailable")]
    Unavailable,

    #[error("failed to start broadcaster: {0}")]
    Start(String),
}

/// Bluetooth broadcaster.
///
/// Starting the broadcaster is what makes the OS show the Bluetooth prompt;
/// there is no direct "request authorization" call. The outcome is observed
/// through the returned state stream.
pub trait BluetoothBroadcasterPort: Send + Sync {
    /// Whether Bluetooth hardware exists (false on simulators and headless hosts).
    fn is_available(&self) -> bool;

    /// Start advertising. The stream yields zero or more radio states.
    fn start_broadcasting(&self) -> Result<BluetoothStateStream, BroadcasterError>;
}
