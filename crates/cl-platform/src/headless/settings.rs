use anyhow::{Context, Result};

use cl_core::{AppConfig, AuthorizationStatus};

/// How the headless device behaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadlessSettings {
    pub bluetooth_hardware: bool,
    /// Initial Bluetooth authorization.
    pub bluetooth: AuthorizationStatus,
    /// Initial notification authorization.
    pub notifications: AuthorizationStatus,
    /// Answer given to the notification prompt.
    pub grant_notifications: bool,
}

impl Default for HeadlessSettings {
    fn default() -> Self {
        Self {
            bluetooth_hardware: true,
            bluetooth: AuthorizationStatus::NotDetermined,
            notifications: AuthorizationStatus::NotDetermined,
            grant_notifications: true,
        }
    }
}

impl HeadlessSettings {
    /// Apply the `[platform]` section on top of the defaults.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let defaults = Self::default();
        Ok(Self {
            bluetooth_hardware: config
                .bluetooth_hardware
                .unwrap_or(defaults.bluetooth_hardware),
            bluetooth: parse_status(config.bluetooth_status.as_deref(), "bluetooth_status")?
                .unwrap_or(defaults.bluetooth),
            notifications: parse_status(
                config.notification_status.as_deref(),
                "notification_status",
            )?
            .unwrap_or(defaults.notifications),
            grant_notifications: config
                .grant_notifications
                .unwrap_or(defaults.grant_notifications),
        })
    }
}

fn parse_status(raw: Option<&str>, key: &str) -> Result<Option<AuthorizationStatus>> {
    match raw {
        None => Ok(None),
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => s
            .parse()
            .map(Some)
            .with_context(|| format!("invalid [platform] {key}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let settings = HeadlessSettings::from_config(&AppConfig::default()).unwrap();
        assert_eq!(settings, HeadlessSettings::default());
    }

    #[test]
    fn test_config_overrides_defaults() {
        let config = AppConfig {
            bluetooth_hardware: Some(false),
            bluetooth_status: Some("denied".into()),
            notification_status: Some("allowed".into()),
            grant_notifications: Some(false),
            ..AppConfig::default()
        };

        let settings = HeadlessSettings::from_config(&config).unwrap();

        assert!(!settings.bluetooth_hardware);
        assert_eq!(settings.bluetooth, AuthorizationStatus::Denied);
        assert_eq!(settings.notifications, AuthorizationStatus::Allowed);
        assert!(!settings.grant_notifications);
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let config = AppConfig {
            bluetooth_status: Some("maybe".into()),
            ..AppConfig::default()
        };

        let err = HeadlessSettings::from_config(&config).unwrap_err();

        assert!(err.to_string().contains("bluetooth_status"));
    }
}
