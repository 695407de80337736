//! `colocate` command line.
//!
//! Each subcommand stands in for one of the app's screens or for an OS
//! callback, and drives the use cases through the wired `App`.

mod onboarding;
mod push;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::bootstrap::{self, WiredApp};

pub use onboarding::ConsentArgs;
pub use push::parse_event_line;

#[derive(Debug, Parser)]
#[command(name = "colocate", version, about = "CoLocate onboarding and push notification core")]
pub struct Cli {
    /// Use alternate config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Do not write a log file
    #[arg(long, global = true)]
    pub no_log_file: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the onboarding step the app would show
    Step,
    /// Run the permission prompts if they are due, then print the step
    Onboard,
    /// Grant or revoke data-sharing consent
    Consent(ConsentArgs),
    /// Store the partial postcode
    Postcode {
        /// Outward part of the postcode, e.g. "SW1A"
        value: String,
    },
    /// Register this device
    Register,
    /// Deliver one push payload (a JSON object)
    Push {
        payload: String,
    },
    /// Deliver a push token refresh
    Token {
        token: String,
    },
    /// Deliver push events read line by line from stdin
    ///
    /// Each line is a JSON object, or `token <value>` for a token refresh.
    Listen,
}

impl Commands {
    pub async fn execute(self, wired: &mut WiredApp) -> Result<()> {
        match self {
            Commands::Step => onboarding::step(wired).await,
            Commands::Onboard => onboarding::onboard(wired).await,
            Commands::Consent(args) => onboarding::consent(wired, args),
            Commands::Postcode { value } => onboarding::postcode(wired, &value),
            Commands::Register => onboarding::register(wired),
            Commands::Push { payload } => push::push(wired, &payload),
            Commands::Token { token } => push::token(wired, token),
            Commands::Listen => push::listen(wired, tokio::io::stdin()).await,
        }
    }
}

/// Load configuration, wire the app and run the selected command.
pub async fn run(cli: Cli) -> Result<()> {
    let config = bootstrap::resolve_config(cli.config.as_deref())?;
    let mut wired = bootstrap::build_app(&config)?;
    cli.command.execute(&mut wired).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["colocate", "step", "-vv", "--config", "/tmp/c.toml"])
            .unwrap();

        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/c.toml")));
        assert!(matches!(cli.command, Commands::Step));
    }

    #[test]
    fn test_consent_requires_exactly_one_flag() {
        assert!(Cli::try_parse_from(["colocate", "consent"]).is_err());
        assert!(Cli::try_parse_from(["colocate", "consent", "--allow", "--revoke"]).is_err());

        let cli = Cli::try_parse_from(["colocate", "consent", "--revoke"]).unwrap();
        match cli.command {
            Commands::Consent(args) => assert!(!args.allowed()),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_push_takes_raw_payload() {
        let cli = Cli::try_parse_from(["colocate", "push", r#"{"status":"Potential"}"#]).unwrap();

        match cli.command {
            Commands::Push { payload } => assert_eq!(payload, r#"{"status":"Potential"}"#),
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
