//! # Application Dependencies
//!
//! This module defines the dependency grouping for App construction.
//!
//! **Note**: This is NOT a Builder pattern.
//! - No build steps
//! - No default values
//! - No hidden logic
//! - Just parameter grouping

use std::sync::Arc;
use cl_core::ports::*;

/// Application dependency grouping (non-Builder, just parameter grouping)
///
/// All dependencies are required - no defaults, no optional fields.
pub struct AppDeps {
    // Storage dependencies
    pub persistence: Arc<dyn PersistencePort>,

    // OS permission dependencies
    pub authorization: Arc<dyn AuthorizationPort>,
    pub broadcaster: Arc<dyn BluetoothBroadcasterPort>,

    // Push dependencies
    pub local_alerts: Arc<dyn LocalAlertPort>,
    pub push_messaging: Arc<dyn PushMessagingPort>,

    // UI dependencies
    pub ui_queue: Arc<dyn UiQueuePort>,
}
