//! Push notification domain models.
//!
//! Payloads arrive as flat key/value maps whose shape is chosen by the remote
//! sender. Exactly one shape is understood here (a potential-exposure status);
//! anything else is an opaque message that travels on unchanged.

mod alert;
mod payload;

pub use alert::LocalAlert;
pub use payload::{InvalidPayloadError, PushPayload, POTENTIAL_STATUS, PUSH_TOKEN_KEY, STATUS_KEY};

/// Events delivered by the push transport.
#[derive(Debug, Clone, PartialEq)]
pub enum PushEvent {
    /// A remote notification was received.
    Message(PushPayload),
    /// The transport issued a new routing token for this device.
    TokenRefreshed(String),
}
