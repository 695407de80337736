//! Business logic use cases
//!
//! ```text
//! [persistence] + [authorization]
//!         ↓
//! ResolveOnboardingStep  → which screen to show
//!         ↓
//! RequestPermissions     → Bluetooth prompt, then notification prompt
//!         ↓
//! ResolveOnboardingStep  → re-evaluated after every prompt / activation
//!
//! [push transport] → PushNotificationDispatcher → diagnosis + local alert
//!                                              ↘ listener
//! ```

pub mod consent;
pub mod onboarding;
pub mod permissions;
pub mod push;

pub use consent::{ConsentError, UpdateConsent};
pub use onboarding::{OnboardingError, RecheckOnActivation, ResolveOnboardingStep};
pub use permissions::{PermissionRequestError, PermissionRequestOutcome, RequestPermissions};
pub use push::{NotificationDisposition, PushNotificationDispatcher};
