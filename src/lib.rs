//! spf_status library: bulk SPF record lookup
//!
//! This library resolves SPF DNS TXT records for large lists of domains or
//! IPv4 addresses (up to 10,000 per run) over DNS-over-HTTPS. Targets are
//! processed in fixed-size batches with full concurrency inside a batch and
//! a throttling delay between batches; results keep the original input
//! order at every published snapshot, and one failing lookup never aborts
//! the rest of the run.
//!
//! # Example
//!
//! ```no_run
//! use spf_status::{run_lookup, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     file: std::path::PathBuf::from("domains.txt"),
//!     ..Default::default()
//! };
//!
//! let report = run_lookup(config).await?;
//! println!(
//!     "Resolved {} targets: {} with SPF, {} without, {} errors",
//!     report.total, report.found, report.not_found, report.errors
//! );
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or call library functions from an async context.

#![warn(missing_docs)]

pub mod config;
mod doh;
mod error_handling;
pub mod export;
pub mod initialization;
mod models;
mod orchestrator;
mod parse;
mod resolver;
mod sink;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use doh::{DohAnswer, DohClient, DohError, DohResponse, DohTransport};
pub use error_handling::{InitializationError, ValidationError};
pub use models::{LookupResult, RunOutcome, Status};
pub use orchestrator::{progress_percent, run_batches, LookupOptions};
pub use parse::{parse_targets, strip_comment_lines};
pub use resolver::{DohResolver, TargetResolver};
pub use run::{run_lookup, LookupReport};
pub use sink::{LogSink, ProgressSink};

// Internal run module (glues input reading, normalization, and the
// orchestrator together)
mod run {
    use anyhow::{Context, Result};
    use log::info;
    use tokio::io::AsyncReadExt;

    use crate::config::{Config, MAX_INPUT_COUNT};
    use crate::doh::DohClient;
    use crate::initialization::init_client;
    use crate::models::{LookupResult, RunOutcome, Status};
    use crate::orchestrator::{run_batches, LookupOptions};
    use crate::parse::{parse_targets, strip_comment_lines};
    use crate::resolver::DohResolver;
    use crate::sink::LogSink;

    /// Results of a completed lookup run.
    #[derive(Debug, Clone)]
    pub struct LookupReport {
        /// Final result set, one entry per unique target, in input order
        pub results: Vec<LookupResult>,
        /// Whether the run completed normally or was degraded by an
        /// orchestration fault
        pub outcome: RunOutcome,
        /// Number of unique targets processed
        pub total: usize,
        /// Targets with an SPF record
        pub found: usize,
        /// Targets that resolved but carry no SPF record
        pub not_found: usize,
        /// Targets that failed to resolve
        pub errors: usize,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    /// Runs a bulk SPF lookup with the provided configuration.
    ///
    /// Reads raw input from the configured file (or stdin for `-`),
    /// normalizes it into a deduplicated target list, and drives the
    /// batched orchestrator against the configured DoH endpoint, logging
    /// progress after every batch.
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be read, if validation fails
    /// (`empty` / `too_many`, raised before any network activity), or if
    /// the HTTP client cannot be constructed. Individual lookup failures
    /// are never errors; they appear as `Error`-status rows in the report.
    pub async fn run_lookup(config: Config) -> Result<LookupReport> {
        let raw = if config.file.as_os_str() == "-" {
            info!("Reading targets from stdin");
            let mut buf = String::new();
            tokio::io::stdin()
                .read_to_string(&mut buf)
                .await
                .context("Failed to read targets from stdin")?;
            buf
        } else {
            tokio::fs::read_to_string(&config.file)
                .await
                .with_context(|| format!("Failed to read input file: {}", config.file.display()))?
        };

        let targets = parse_targets(&strip_comment_lines(&raw), MAX_INPUT_COUNT)?;
        info!("Parsed {} unique targets", targets.len());

        let client = init_client(&config).context("Failed to initialize HTTP client")?;
        let resolver = DohResolver::new(DohClient::new(client, config.doh_endpoint.clone()));
        let options = LookupOptions::from(&config);
        let mut sink = LogSink::new();

        let start_time = std::time::Instant::now();
        let (results, outcome) = run_batches(&targets, &resolver, &options, &mut sink).await;
        let elapsed_seconds = start_time.elapsed().as_secs_f64();

        if outcome == RunOutcome::Failed {
            log::warn!("Run degraded by an orchestration fault; unresolved targets reported as errors");
        }

        let found = results.iter().filter(|r| r.status == Status::Found).count();
        let not_found = results
            .iter()
            .filter(|r| r.status == Status::NotFound)
            .count();
        let errors = results.iter().filter(|r| r.status == Status::Error).count();

        Ok(LookupReport {
            total: results.len(),
            found,
            not_found,
            errors,
            elapsed_seconds,
            results,
            outcome,
        })
    }
}
