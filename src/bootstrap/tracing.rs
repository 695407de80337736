//! Tracing configuration for CoLocate
//!
//! Installs the global `tracing-subscriber` registry: an `EnvFilter`
//! (RUST_LOG wins over the built-in directives), a stderr `fmt` layer and,
//! when a log directory is available, a non-blocking file layer.
//!
//! Logs go to stderr because stdout carries command output.

use std::path::Path;
use std::sync::OnceLock;
use std::{fs, io};

use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{fmt, fmt::writer::BoxMakeWriter, prelude::*, registry, EnvFilter};

pub const LOG_FILE_NAME: &str = "colocate.log";

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

fn is_development() -> bool {
    cfg!(debug_assertions)
}

/// Build the default filter directives
///
/// `verbose` raises the level for the workspace crates: 0 keeps the build
/// default, 1 is debug, 2 and above is trace.
fn build_filter_directives(is_dev: bool, verbose: u8) -> Vec<String> {
    let crate_level = match verbose {
        0 if is_dev => "debug",
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let mut directives = vec![if is_dev { "debug" } else { "info" }.to_string()];
    directives.extend(
        ["colocate", "colocate_lib", "cl_core", "cl_app", "cl_infra", "cl_platform"]
            .iter()
            .map(|target| format!("{target}={crate_level}")),
    );
    directives
}

fn timer() -> fmt::time::ChronoUtc {
    fmt::time::ChronoUtc::new("%Y-%m-%d %H:%M:%S%.3f".to_string())
}

/// Initialize the tracing subscriber
///
/// Call once from `main`, before anything logs.
///
/// ## Errors
///
/// Returns `Err` if a subscriber is already registered.
pub fn init_tracing_subscriber(verbose: u8, log_dir: Option<&Path>) -> anyhow::Result<()> {
    let filter_directives = build_filter_directives(is_development(), verbose);
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directives.join(",")));

    // "2025-01-15 10:30:45.123 INFO [file.rs:42] [target] message"
    let stderr_layer = fmt::layer()
        .with_timer(timer())
        .with_level(true)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .with_ansi(cfg!(not(test)))
        .with_writer(BoxMakeWriter::new(io::stderr));

    let file_layer = match log_dir.map(build_file_writer) {
        Some(Ok(writer)) => Some(
            fmt::layer()
                .with_timer(timer())
                .with_level(true)
                .with_file(true)
                .with_line_number(true)
                .with_target(true)
                .with_ansi(false)
                .with_writer(writer),
        ),
        Some(Err(err)) => {
            eprintln!("Failed to initialize file logging, falling back to stderr: {err}");
            None
        }
        None => None,
    };

    registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()?;

    Ok(())
}

fn build_file_writer(log_dir: &Path) -> anyhow::Result<NonBlocking> {
    fs::create_dir_all(log_dir)?;

    let file_appender = tracing_appender::rolling::never(log_dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    LOG_GUARD
        .set(guard)
        .map_err(|_| anyhow::anyhow!("Tracing log guard already initialized"))?;

    Ok(non_blocking)
}
