//! Configuration constants.
//!
//! Fixed operational parameters for the lookup pipeline. These are
//! configuration, not runtime-negotiated values: the batch size and the
//! inter-batch delay together form the only admission control protecting
//! the upstream DoH endpoint.

use std::time::Duration;

/// Number of targets dispatched concurrently per batch.
pub const DEFAULT_BATCH_SIZE: usize = 10;

/// Pause between consecutive batches.
///
/// Throttles the request rate to the upstream resolver. Applied after every
/// batch except the last, even under load.
pub const DEFAULT_BATCH_DELAY: Duration = Duration::from_millis(100);

/// Milliseconds form of [`DEFAULT_BATCH_DELAY`], used as the CLI default.
pub const DEFAULT_BATCH_DELAY_MS: u64 = 100;

/// Maximum number of unique targets accepted in a single run.
pub const MAX_INPUT_COUNT: usize = 10_000;

/// Default DNS-over-HTTPS JSON endpoint.
pub const DEFAULT_DOH_ENDPOINT: &str = "https://dns.google/resolve";

/// Per-request transport timeout in seconds.
///
/// Bounds every individual DoH query so no resolver call can suspend
/// indefinitely; a timeout surfaces as an Error-status result for that
/// target only.
pub const DOH_TIMEOUT_SECS: u64 = 10;

/// TXT record prefix that identifies an SPF record.
pub const SPF_PREFIX: &str = "v=spf1";

/// DNS response code for a successful answer in the DoH JSON `Status` field.
pub const DNS_RCODE_NOERROR: i32 = 0;

/// DNS response code for an authoritative "name does not exist" answer.
pub const DNS_RCODE_NXDOMAIN: i32 = 3;
