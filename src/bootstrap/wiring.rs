//! # Dependency Injection
//!
//! Creates the infra and platform implementations and injects them into the
//! `App` through their ports. This is the only place allowed to depend on
//! `cl-infra`, `cl-platform` and `cl-app` together.
//!
//! Policy defaults for values the config left empty are applied here.
//! Business decisions are not.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;

use cl_app::{App, AppDeps, AppSettings};
use cl_core::{AppConfig, LocalAlert, OnboardingPolicy};
use cl_infra::persistence::DEFAULT_PERSISTENCE_FILE;
use cl_infra::FilePersistence;
use cl_platform::{
    HeadlessDevice, HeadlessSettings, LoggingPushMessaging, MainQueue, MainQueueRunner,
    TracingAlertEmitter,
};

use super::config::APP_DIR_NAME;

pub const DEFAULT_POTENTIAL_ALERT_TITLE: &str = "Potential exposure";
pub const DEFAULT_POTENTIAL_ALERT_BODY: &str =
    "Someone you were recently near has reported symptoms.";

pub type WiringResult<T> = Result<T, WiringError>;

#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("No data directory available; set [storage] persistence_path")]
    DataDirUnavailable,

    #[error("Persistence initialization failed: {0}")]
    PersistenceInit(String),

    #[error("Platform initialization failed: {0}")]
    PlatformInit(String),
}

/// Everything `main` needs after wiring.
pub struct WiredApp {
    pub app: App,
    /// Receiving end of the UI queue; the caller decides who drives it.
    pub main_queue: MainQueueRunner,
    pub device: HeadlessDevice,
}

/// Per-user data directory (`~/.local/share/colocate` on Linux).
pub fn default_data_dir() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join(APP_DIR_NAME))
}

fn resolve_persistence_path(config: &AppConfig) -> WiringResult<PathBuf> {
    if !config.persistence_path.as_os_str().is_empty() {
        return Ok(config.persistence_path.clone());
    }
    default_data_dir()
        .map(|dir| dir.join(DEFAULT_PERSISTENCE_FILE))
        .ok_or(WiringError::DataDirUnavailable)
}

fn non_empty_or(value: &str, default: &str) -> String {
    if value.trim().is_empty() {
        default.to_string()
    } else {
        value.to_string()
    }
}

/// Settings the use cases need beyond their ports.
pub fn app_settings(config: &AppConfig) -> AppSettings {
    let defaults = OnboardingPolicy::default();
    AppSettings {
        onboarding_policy: OnboardingPolicy {
            require_registration: config
                .require_registration
                .unwrap_or(defaults.require_registration),
        },
        potential_alert: LocalAlert::potential_diagnosis(
            non_empty_or(&config.potential_alert_title, DEFAULT_POTENTIAL_ALERT_TITLE),
            non_empty_or(&config.potential_alert_body, DEFAULT_POTENTIAL_ALERT_BODY),
        ),
    }
}

/// Wire all dependencies together
///
/// Returns the grouped ports plus the platform handles that stay with the
/// caller (the UI queue runner and the simulated device).
///
/// # Errors
///
/// Returns `WiringError` if the persistence file cannot be opened or the
/// platform settings are invalid.
pub fn wire_dependencies(
    config: &AppConfig,
) -> WiringResult<(AppDeps, MainQueueRunner, HeadlessDevice)> {
    let persistence_path = resolve_persistence_path(config)?;
    let persistence = FilePersistence::open(&persistence_path)
        .map_err(|e| WiringError::PersistenceInit(e.to_string()))?;
    info!(path = %persistence_path.display(), "persistence ready");

    let device_settings = HeadlessSettings::from_config(config)
        .map_err(|e| WiringError::PlatformInit(format!("{e:#}")))?;
    let device = HeadlessDevice::new(device_settings);

    let (main_queue, runner) = MainQueue::channel();

    let deps = AppDeps {
        persistence: Arc::new(persistence),
        authorization: Arc::new(device.authorization()),
        broadcaster: Arc::new(device.broadcaster()),
        local_alerts: Arc::new(TracingAlertEmitter),
        push_messaging: Arc::new(LoggingPushMessaging::default()),
        ui_queue: Arc::new(main_queue),
    };

    Ok((deps, runner, device))
}

/// Wire dependencies and construct the `App`.
pub fn build_app(config: &AppConfig) -> WiringResult<WiredApp> {
    let (deps, main_queue, device) = wire_dependencies(config)?;
    let app = App::new(deps, app_settings(config));
    Ok(WiredApp {
        app,
        main_queue,
        device,
    })
}
