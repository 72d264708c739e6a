//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `spf_status` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - CSV export to a file or stdout
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use spf_status::export::export_csv;
use spf_status::initialization::init_logger_with;
use spf_status::{run_lookup, Config, RunOutcome};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments into Config
    let config = Config::parse();

    // Initialize logger based on config
    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    let output = config.output.clone();

    match run_lookup(config).await {
        Ok(report) => {
            let rows = export_csv(&report.results, output.as_deref())
                .context("Failed to export results as CSV")?;

            // Print user-friendly summary (to stderr when the CSV itself
            // goes to stdout)
            eprintln!(
                "✅ Resolved {} target{} ({} with SPF, {} without, {} errors) in {:.1}s",
                report.total,
                if report.total == 1 { "" } else { "s" },
                report.found,
                report.not_found,
                report.errors,
                report.elapsed_seconds
            );
            if let Some(path) = output {
                eprintln!("Exported {} rows to {}", rows, path.display());
            }
            if report.outcome == RunOutcome::Failed {
                eprintln!("spf_status: run degraded by an internal fault; unresolved targets are marked Error");
                process::exit(2);
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("spf_status error: {:#}", e);
            process::exit(1);
        }
    }
}
