use std::process::ExitCode;

use clap::Parser;
use tracing::error;

use colocate_lib::bootstrap::tracing::init_tracing_subscriber;
use colocate_lib::bootstrap::wiring::default_data_dir;
use colocate_lib::cli::{self, Cli};

const LOG_DIR_NAME: &str = "logs";

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_dir = if cli.no_log_file {
        None
    } else {
        default_data_dir().map(|dir| dir.join(LOG_DIR_NAME))
    };
    if let Err(err) = init_tracing_subscriber(cli.verbose, log_dir.as_deref()) {
        eprintln!("Failed to initialize tracing: {err}");
    }

    match cli::run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = format!("{err:#}"), "colocate failed");
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
