//! Configuration types and CLI options.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::{DEFAULT_BATCH_DELAY_MS, DEFAULT_BATCH_SIZE, DEFAULT_DOH_ENDPOINT};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Command-line options and configuration.
///
/// This struct is generated by `clap` from the field attributes and doubles
/// as the library entry configuration; it can also be constructed
/// programmatically via `Default`.
///
/// # Examples
///
/// ```bash
/// # Basic usage: read targets from a file, print CSV to stdout
/// spf_status domains.txt
///
/// # Read from stdin, write CSV to a file
/// cat domains.txt | spf_status - --output spf_records.csv
///
/// # Smaller batches with a longer pause between them
/// spf_status domains.txt --batch-size 5 --batch-delay-ms 500
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "spf_status",
    about = "Bulk SPF record lookup for domains and IPv4 addresses."
)]
pub struct Config {
    /// File with domains or IPv4 addresses to look up ("-" for stdin).
    ///
    /// Entries may be separated by whitespace, commas, or semicolons.
    /// Lines starting with '#' are ignored.
    #[arg(value_parser)]
    pub file: PathBuf,

    /// Write the CSV export here instead of stdout
    #[arg(long, short, value_parser)]
    pub output: Option<PathBuf>,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Number of concurrent lookups per batch
    #[arg(long, default_value_t = DEFAULT_BATCH_SIZE)]
    pub batch_size: usize,

    /// Delay between batches in milliseconds
    ///
    /// Together with --batch-size this is the only throttle protecting the
    /// upstream resolver; it is not skipped under load.
    #[arg(long, default_value_t = DEFAULT_BATCH_DELAY_MS)]
    pub batch_delay_ms: u64,

    /// DNS-over-HTTPS JSON endpoint to query
    #[arg(long, default_value = DEFAULT_DOH_ENDPOINT)]
    pub doh_endpoint: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = crate::config::constants::DOH_TIMEOUT_SECS)]
    pub timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file: PathBuf::from("domains.txt"),
            output: None,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            batch_size: DEFAULT_BATCH_SIZE,
            batch_delay_ms: DEFAULT_BATCH_DELAY_MS,
            doh_endpoint: DEFAULT_DOH_ENDPOINT.to_string(),
            timeout_seconds: crate::config::constants::DOH_TIMEOUT_SECS,
        }
    }
}
