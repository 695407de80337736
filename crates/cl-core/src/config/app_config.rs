use std::path::PathBuf;

/// Application configuration DTO (pure data, no logic)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Persistence file path (path info only, no existence check)
    pub persistence_path: PathBuf,

    /// Whether onboarding stops at the registration step
    pub require_registration: Option<bool>,

    /// Whether the host has Bluetooth hardware
    pub bluetooth_hardware: Option<bool>,

    /// Bluetooth authorization reported by the headless platform
    pub bluetooth_status: Option<String>,

    /// Notification authorization reported by the headless platform
    pub notification_status: Option<String>,

    /// How the headless platform answers the notification prompt
    pub grant_notifications: Option<bool>,

    /// Title of the potential-exposure alert (may be empty)
    pub potential_alert_title: String,

    /// Body of the potential-exposure alert (may be empty)
    pub potential_alert_body: String,
}

impl AppConfig {
    /// Create AppConfig from TOML value
    ///
    /// **Prohibited**: This method must NOT contain any validation
    /// or default value logic. Empty strings are valid "facts".
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        Ok(Self {
            persistence_path: PathBuf::from(
                section(toml_value, "storage", "persistence_path")
                    .and_then(|v| v.as_str())
                    .unwrap_or(""),
            ),
            require_registration: section(toml_value, "onboarding", "require_registration")
                .and_then(|v| v.as_bool()),
            bluetooth_hardware: section(toml_value, "platform", "bluetooth_hardware")
                .and_then(|v| v.as_bool()),
            bluetooth_status: section(toml_value, "platform", "bluetooth_status")
                .and_then(|v| v.as_str())
                .map(str::to_string),
            notification_status: section(toml_value, "platform", "notification_status")
                .and_then(|v| v.as_str())
                .map(str::to_string),
            grant_notifications: section(toml_value, "platform", "grant_notifications")
                .and_then(|v| v.as_bool()),
            potential_alert_title: section(toml_value, "alerts", "potential_title")
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string(),
            potential_alert_body: section(toml_value, "alerts", "potential_body")
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string(),
        })
    }
}

fn section<'a>(root: &'a toml::Value, name: &str, key: &str) -> Option<&'a toml::Value> {
    root.get(name).and_then(|s| s.get(key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_toml_reads_every_section() {
        let toml_value: toml::Value = toml::from_str(
            r#"
            [storage]
            persistence_path = "/tmp/colocate/persistence.json"

            [onboarding]
            require_registration = false

            [platform]
            bluetooth_hardware = true
            bluetooth_status = "allowed"
            notification_status = "not_determined"
            grant_notifications = true

            [alerts]
            potential_title = "Heads up"
            potential_body = "Someone you were near has symptoms"
            "#,
        )
        .unwrap();

        let config = AppConfig::from_toml(&toml_value).unwrap();

        assert_eq!(
            config.persistence_path,
            PathBuf::from("/tmp/colocate/persistence.json")
        );
        assert_eq!(config.require_registration, Some(false));
        assert_eq!(config.bluetooth_hardware, Some(true));
        assert_eq!(config.bluetooth_status.as_deref(), Some("allowed"));
        assert_eq!(config.notification_status.as_deref(), Some("not_determined"));
        assert_eq!(config.grant_notifications, Some(true));
        assert_eq!(config.potential_alert_title, "Heads up");
        assert_eq!(config.potential_alert_body, "Someone you were near has symptoms");
    }

    #[test]
    fn test_from_toml_missing_sections_are_empty_facts() {
        let toml_value: toml::Value = toml::from_str("").unwrap();

        let config = AppConfig::from_toml(&toml_value).unwrap();

        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_from_toml_wrong_types_are_treated_as_missing() {
        let toml_value: toml::Value = toml::from_str(
            r#"
            [onboarding]
            require_registration = "yes"
            "#,
        )
        .unwrap();

        let config = AppConfig::from_toml(&toml_value).unwrap();

        assert_eq!(config.require_registration, None);
    }
}
