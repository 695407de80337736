//! Port interfaces for the application layer
//!
//! Ports define the contract between the onboarding/push use cases and the
//! platform or storage implementations behind them. The operating system
//! (permission prompts, Bluetooth radio, local alerts), the push vendor SDK and
//! the key-value store are all reached through these traits only.
//!
//! ## Port Placement Guidelines
//!
//! A trait belongs here when it is implemented by `cl-infra` or `cl-platform`
//! and depended upon by at least one use case in `cl-app`.

pub mod authorization;
pub mod bluetooth;
pub mod errors;
pub mod local_alert;
pub mod persistence;
pub mod push;
mod ui_queue;

pub use authorization::{AuthorizationPort, NotificationAuthorizationError};
pub use bluetooth::{BluetoothBroadcasterPort, BluetoothStateStream, BroadcasterError};
pub use errors::PersistenceError;
pub use local_alert::LocalAlertPort;
pub use persistence::PersistencePort;
pub use push::{PushMessagingError, PushMessagingPort, PushNotificationListener};
pub use ui_queue::{UiQueuePort, UiTask};
