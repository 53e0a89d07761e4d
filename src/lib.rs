//! # sfid-enum
//!
//! Decodes and enumerates Salesforce record IDs:
//!
//! - **Decode**: print the base-62 record counter of a 15/18-char ID as an integer
//! - **Analyze**: break an ID into prefix, instance, counter and checksum (JSON)
//! - **Enumerate**: generate neighbouring IDs from a start value or the ID's own
//!   counter, optionally with the 18-char checksum suffix
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                            sfidenum                              │
//! ├──────────────────────────────────────────────────────────────────┤
//! │  ┌──────────┐  ┌──────────┐  ┌───────────┐  ┌────────────────┐   │
//! │  │   CLI    │→ │  Domain  │→ │  Service  │→ │  Sink          │   │
//! │  │  (clap)  │  │ (ID/seq) │  │ (compose) │  │ (stdout/file)  │   │
//! │  └──────────┘  └──────────┘  └───────────┘  └────────────────┘   │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Only IDs (or the single decoded integer) are written to stdout or the
//! output file; diagnostics and logs go to stderr.

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod codec;
pub mod config;
pub mod domain;
pub mod error;
pub mod service;
pub mod sink;

use std::io::Write;

use tracing::{debug, warn};

use crate::cli::{Cli, Mode};
use crate::config::AppConfig;
use crate::domain::{EnumerationRequest, SalesforceId, StartFrom};
use crate::error::{AppError, Result, SinkError};
use crate::service::{EnumerationDriver, EnumerationOptions, analyze};
use crate::sink::{OutputTarget, default_output_path};

/// Run one invocation of the tool.
///
/// `program` is the invoked program path, used for the default output
/// filename.
///
/// # Errors
///
/// Returns an error if:
/// - Configuration cannot be loaded
/// - The ID or enumeration arguments are invalid
/// - The requested sequence is empty
/// - Results cannot be written
pub fn run(cli: &Cli, program: &str) -> Result<()> {
    let config = AppConfig::load()?;

    init_logging(&config);

    debug!(version = env!("CARGO_PKG_VERSION"), mode = ?cli.mode, "Starting sfidenum");

    let id = SalesforceId::parse(&cli.id)?;
    if !id.checksum_matches() {
        warn!(
            id = %id,
            expected = %id.expected_suffix(),
            "Checksum suffix does not match the first 15 characters"
        );
    }
    let current = id.counter_value()?;

    let start = match cli.mode {
        Mode::Decode => return print_line(&current.to_string()),
        Mode::Analyze => {
            let analysis = analyze(&id)?;
            let json = serde_json::to_string_pretty(&analysis)
                .map_err(|e| AppError::Internal(e.to_string()))?;
            return print_line(&json);
        }
        Mode::EnumFromValue => StartFrom::Value(cli.start),
        Mode::EnumFromCurrent => StartFrom::Current,
    };

    let request = EnumerationRequest::new(&id, start, cli.seq)?;
    let target = if cli.displayonly {
        OutputTarget::Console
    } else {
        OutputTarget::File(cli.outfile.clone().unwrap_or_else(|| {
            default_output_path(
                program,
                &config.output.timestamp_format,
                &chrono::Local::now(),
            )
        }))
    };

    let driver = EnumerationDriver::new(EnumerationOptions {
        threads: cli.threads.unwrap_or(config.enumeration.default_threads),
        emit_suffix: cli.to18,
        target,
        queue_capacity: config.enumeration.queue_capacity,
    });
    driver.run(&request)?;

    Ok(())
}

/// Write one line to stdout.
fn print_line(line: &str) -> Result<()> {
    let mut out = std::io::stdout().lock();
    writeln!(out, "{line}").map_err(|e| AppError::WriteFailure {
        target: "stdout".to_string(),
        source: SinkError::from(e),
    })
}

/// Initialize logging based on configuration.
///
/// Logs always go to stderr; stdout carries results only.
fn init_logging(config: &AppConfig) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.observability.log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    // A subscriber may already be installed when embedded; keep it.
    let _ = if config.observability.log_format == "json" {
        subscriber
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init()
    } else {
        subscriber
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init()
    };
}
