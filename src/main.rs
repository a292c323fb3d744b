//! slim_predict CLI entrypoint.
//!
//! Thin wrapper over the `cli` module: interpret the command line, report
//! help or diagnostics, and exit with the matching status. For programmatic
//! use, prefer the library (`slim_predict::parse`).
use std::process::ExitCode;

mod cli;

fn main() -> ExitCode {
    cli::run(std::env::args_os(), cli::ExitPolicy::from_env())
}
