//! Application lifecycle events observed by the onboarding flow.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppLifecycleEvent {
    /// The app returned to the foreground, e.g. after the user visited the
    /// system settings to change a permission.
    DidBecomeActive,
    WillResignActive,
}
