use std::fmt;

use serde::{Deserialize, Serialize};

/// The onboarding screen the user has to go through next.
///
/// Computed on demand, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OnboardingStep {
    /// Data-sharing consent has not been given.
    Initial,
    /// The partial postcode has not been entered.
    PartialPostcode,
    /// At least one permission prompt has not been shown yet.
    Permissions,
    /// Bluetooth was refused; the user has to fix it in the system settings.
    BluetoothDenied,
    /// Notifications were refused.
    PermissionsDenied,
    /// Permissions are in place but the device is not registered yet.
    Registration,
    /// Onboarding is complete.
    Done,
}

impl OnboardingStep {
    pub fn is_done(self) -> bool {
        matches!(self, OnboardingStep::Done)
    }

    /// Steps that can only be left by changing a system setting.
    pub fn requires_settings_change(self) -> bool {
        matches!(
            self,
            OnboardingStep::BluetoothDenied | OnboardingStep::PermissionsDenied
        )
    }
}

impl fmt::Display for OnboardingStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OnboardingStep::Initial => "initial",
            OnboardingStep::PartialPostcode => "partial_postcode",
            OnboardingStep::Permissions => "permissions",
            OnboardingStep::BluetoothDenied => "bluetooth_denied",
            OnboardingStep::PermissionsDenied => "permissions_denied",
            OnboardingStep::Registration => "registration",
            OnboardingStep::Done => "done",
        };
        f.write_str(s)
    }
}
