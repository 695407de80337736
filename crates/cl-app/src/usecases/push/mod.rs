//! Push notification use cases

pub mod dispatcher;

pub use dispatcher::{NotificationDisposition, PushNotificationDispatcher};
