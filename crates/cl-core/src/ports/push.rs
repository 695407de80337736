use thiserror::Error;

use crate::push::PushPayload;

/// Receives push payloads the dispatcher does not handle itself, plus
/// synthetic token-refresh payloads.
pub trait PushNotificationListener: Send + Sync {
    fn on_notification(&self, payload: &PushPayload);
}

#[derive(Debug, Error)]
pub enum PushMessagingError {
    #[error("push messaging configuration failed: {0}")]
    Configure(String),
}

/// Seam to the push vendor SDK.
pub trait PushMessagingPort: Send + Sync {
    /// Initialize the vendor SDK. Called once at start-up.
    fn configure(&self) -> Result<(), PushMessagingError>;
}
