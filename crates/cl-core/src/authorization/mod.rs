//! Authorization domain models.
//!
//! Bluetooth and notification authorization are owned by the operating
//! system. The core only ever sees them as an [`AuthorizationStatus`], and
//! re-queries them on every decision instead of caching them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Coarse authorization status for a single capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthorizationStatus {
    /// The user has not been asked yet.
    NotDetermined,
    Allowed,
    Denied,
}

impl AuthorizationStatus {
    /// Whether the user has already answered the prompt, either way.
    pub fn is_decided(self) -> bool {
        !matches!(self, AuthorizationStatus::NotDetermined)
    }
}

impl fmt::Display for AuthorizationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AuthorizationStatus::NotDetermined => "not_determined",
            AuthorizationStatus::Allowed => "allowed",
            AuthorizationStatus::Denied => "denied",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown authorization status: {0}")]
pub struct ParseAuthorizationStatusError(pub String);

impl FromStr for AuthorizationStatus {
    type Err = ParseAuthorizationStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "not_determined" | "notdetermined" => Ok(AuthorizationStatus::NotDetermined),
            "allowed" => Ok(AuthorizationStatus::Allowed),
            "denied" => Ok(AuthorizationStatus::Denied),
            other => Err(ParseAuthorizationStatusError(other.to_string())),
        }
    }
}

/// Point-in-time view of both authorizations.
///
/// Never persisted. The snapshot may be stale by the time the caller acts on
/// it; callers re-query instead of holding on to one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorizationSnapshot {
    pub bluetooth: AuthorizationStatus,
    pub notifications: AuthorizationStatus,
}

impl AuthorizationSnapshot {
    pub fn new(bluetooth: AuthorizationStatus, notifications: AuthorizationStatus) -> Self {
        Self {
            bluetooth,
            notifications,
        }
    }
}

/// Radio state reported by the Bluetooth broadcaster after it starts.
///
/// The broadcaster reports radio state, not authorization. Consumers that
/// care about authorization re-read it from the authorization port whenever
/// one of these arrives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BluetoothRadioState {
    Unknown,
    Resetting,
    Unsupported,
    Unauthorized,
    PoweredOff,
    PoweredOn,
}
