//! CoLocate composition root.
//!
//! `bootstrap` loads configuration, installs tracing and wires the crates
//! together; `cli` maps subcommands onto the use cases.

pub mod bootstrap;
pub mod cli;
