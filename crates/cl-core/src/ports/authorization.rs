use async_trait::async_trait;
use thiserror::Error;

use crate::authorization::AuthorizationStatus;

/// The OS refused to even show the notification prompt.
///
/// No documented condition produces this; callers treat it as fatal.
#[derive(Debug, Clone, Error)]
#[error("notification authorization request failed: {0}")]
pub struct NotificationAuthorizationError(pub String);

/// OS-level authorization provider.
#[async_trait]
pub trait AuthorizationPort: Send + Sync {
    /// Current Bluetooth authorization. Available synchronously.
    fn bluetooth(&self) -> AuthorizationStatus;

    /// Current notification authorization. The OS only answers asynchronously.
    async fn notifications(&self) -> AuthorizationStatus;

    /// Show the notification permission prompt.
    ///
    /// Resolves with whether the user granted the permission. A refusal is a
    /// successful request.
    async fn request_notification_authorization(
        &self,
    ) -> Result<bool, NotificationAuthorizationError>;
}
