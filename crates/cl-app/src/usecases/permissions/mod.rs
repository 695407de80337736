//! Permission request use cases
//!
//! Sequences the OS permission prompts: Bluetooth first, then notifications.

mod in_flight;
pub mod request_permissions;

pub use request_permissions::{
    PermissionRequestError, PermissionRequestOutcome, RequestPermissions,
};
