//! sfidenum entry point.
//!
//! Parses arguments, runs the requested mode and maps failures to the
//! documented exit statuses.

use std::process::ExitCode;

use clap::Parser;
use sfid_enum::cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let program = std::env::args().next().unwrap_or_default();

    match sfid_enum::run(&cli, &program) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            err.exit_status().into()
        }
    }
}
