//! Drives the wired binary commands against a throwaway data directory.

use std::path::Path;

use tempfile::TempDir;

use cl_core::ports::PersistencePort;
use cl_core::{AppConfig, AuthorizationStatus, Diagnosis, OnboardingStep};
use cl_infra::FilePersistence;
use colocate_lib::bootstrap::{build_app, WiredApp};
use colocate_lib::cli::Commands;

fn config_in(dir: &Path) -> AppConfig {
    AppConfig {
        persistence_path: dir.join("persistence.json"),
        ..AppConfig::default()
    }
}

fn wire(config: &AppConfig) -> WiredApp {
    build_app(config).unwrap()
}

async fn current_step(wired: &WiredApp) -> OnboardingStep {
    wired.app.resolve_onboarding_step().execute().await.unwrap()
}

#[tokio::test]
async fn test_onboarding_commands_persist_between_runs() {
    let dir = TempDir::new().unwrap();
    let config = config_in(dir.path());

    // Every command gets a freshly wired app, the way separate invocations do.
    Commands::Consent(parse_consent("--allow"))
        .execute(&mut wire(&config))
        .await
        .unwrap();
    Commands::Postcode {
        value: "sw1a".into(),
    }
    .execute(&mut wire(&config))
    .await
    .unwrap();

    let wired = wire(&config);
    assert_eq!(current_step(&wired).await, OnboardingStep::Permissions);

    let store = FilePersistence::open(&config.persistence_path).unwrap();
    assert!(store.allowed_data_sharing().unwrap());
    assert_eq!(store.partial_postcode().unwrap().as_deref(), Some("SW1A"));
}

#[tokio::test]
async fn test_onboard_runs_permission_prompts() {
    let dir = TempDir::new().unwrap();
    let config = config_in(dir.path());
    let mut wired = wire(&config);
    wired.app.update_consent().set_data_sharing(true).unwrap();
    wired.app.update_consent().submit_partial_postcode("AB1").unwrap();

    Commands::Onboard.execute(&mut wired).await.unwrap();

    let snapshot = wired.device.snapshot();
    assert_eq!(snapshot.bluetooth, AuthorizationStatus::Allowed);
    assert_eq!(snapshot.notifications, AuthorizationStatus::Allowed);
    assert_eq!(current_step(&wired).await, OnboardingStep::Registration);

    Commands::Register.execute(&mut wired).await.unwrap();
    assert_eq!(current_step(&wired).await, OnboardingStep::Done);
}

#[tokio::test]
async fn test_onboard_before_consent_leaves_permissions_untouched() {
    let dir = TempDir::new().unwrap();
    let mut wired = wire(&config_in(dir.path()));

    Commands::Onboard.execute(&mut wired).await.unwrap();

    assert_eq!(
        wired.device.snapshot().notifications,
        AuthorizationStatus::NotDetermined
    );
}

#[tokio::test]
async fn test_push_command_records_potential_diagnosis() {
    let dir = TempDir::new().unwrap();
    let config = config_in(dir.path());

    Commands::Push {
        payload: r#"{"status":"Potential"}"#.into(),
    }
    .execute(&mut wire(&config))
    .await
    .unwrap();

    let store = FilePersistence::open(&config.persistence_path).unwrap();
    assert_eq!(store.diagnosis().unwrap(), Diagnosis::Potential);
}

#[tokio::test]
async fn test_push_command_rejects_non_object_payload() {
    let dir = TempDir::new().unwrap();
    let mut wired = wire(&config_in(dir.path()));

    let result = Commands::Push {
        payload: "[1, 2, 3]".into(),
    }
    .execute(&mut wired)
    .await;

    assert!(result.is_err());
}

#[tokio::test]
async fn test_postcode_command_rejects_bad_input() {
    let dir = TempDir::new().unwrap();
    let mut wired = wire(&config_in(dir.path()));

    let result = Commands::Postcode {
        value: "NOT A POSTCODE".into(),
    }
    .execute(&mut wired)
    .await;

    assert!(result.is_err());
}

fn parse_consent(flag: &str) -> colocate_lib::cli::ConsentArgs {
    use clap::Parser;
    use colocate_lib::cli::Cli;

    match Cli::try_parse_from(["colocate", "consent", flag]).unwrap().command {
        Commands::Consent(args) => args,
        other => panic!("unexpected command: {other:?}"),
    }
}
