use anyhow::{Context, Result};
use clap::Args;
use tokio::sync::oneshot;
use tracing::info;
use uuid::Uuid;

use cl_app::usecases::PermissionRequestOutcome;
use cl_core::{OnboardingStep, Registration};

use crate::bootstrap::WiredApp;

/// Length of the generated registration secret.
const SECRET_KEY_LEN: usize = 32;

#[derive(Debug, Args)]
#[group(required = true, multiple = false)]
pub struct ConsentArgs {
    /// Allow sharing proximity data
    #[arg(long)]
    allow: bool,

    /// Withdraw consent
    #[arg(long)]
    revoke: bool,
}

impl ConsentArgs {
    pub fn allowed(&self) -> bool {
        self.allow && !self.revoke
    }
}

pub(super) async fn step(wired: &WiredApp) -> Result<()> {
    let step = wired.app.resolve_onboarding_step().execute().await?;
    print_step(step);
    Ok(())
}

pub(super) async fn onboard(wired: &mut WiredApp) -> Result<()> {
    let resolve = wired.app.resolve_onboarding_step();
    let mut step = resolve.execute().await?;

    if step == OnboardingStep::Permissions {
        let (done_tx, done_rx) = oneshot::channel();
        let outcome = wired
            .app
            .request_permissions()
            .execute(move || {
                let _ = done_tx.send(());
            })
            .await?;

        if outcome == PermissionRequestOutcome::Completed {
            // This process is the UI context; run what the flow queued.
            wired.main_queue.drain();
            done_rx
                .await
                .context("permission flow completed without running its callback")?;
        }

        step = resolve.execute().await?;
    }

    print_step(step);
    Ok(())
}

pub(super) fn consent(wired: &WiredApp, args: ConsentArgs) -> Result<()> {
    wired.app.update_consent().set_data_sharing(args.allowed())?;
    println!("data sharing {}", if args.allowed() { "allowed" } else { "revoked" });
    Ok(())
}

pub(super) fn postcode(wired: &WiredApp, value: &str) -> Result<()> {
    let stored = wired.app.update_consent().submit_partial_postcode(value)?;
    println!("partial postcode {stored}");
    Ok(())
}

/// Stand-in for the registration service: issue local credentials.
pub(super) fn register(wired: &WiredApp) -> Result<()> {
    let secret_key: [u8; SECRET_KEY_LEN] = rand::random();
    let registration = Registration::new(Uuid::new_v4(), secret_key.to_vec());
    let id = registration.id;

    wired.app.update_consent().store_registration(registration)?;
    info!(%id, "registered");
    println!("registered {id}");
    Ok(())
}

fn print_step(step: OnboardingStep) {
    println!("{step}");
    if step.requires_settings_change() {
        eprintln!("hint: this step can only be left by changing the system settings");
    }
}
