//! Progress/result sink.
//!
//! The orchestrator publishes a full ordered snapshot plus a progress
//! percentage after seeding the run and after every merged batch. Sinks
//! only observe; they never drive the run.

use std::time::Instant;

use log::info;

use crate::models::{LookupResult, Status};

/// Observer for run snapshots.
///
/// `publish` is called with the complete ordered result list: first with
/// every entry `Pending` at progress 0, then once per merged batch, and a
/// final time at progress 100.
pub trait ProgressSink {
    /// Receives one full ordered snapshot and the current progress (0-100).
    fn publish(&mut self, results: &[LookupResult], progress: u8);
}

/// Sink that logs progress lines, one per snapshot.
pub struct LogSink {
    start_time: Instant,
}

impl LogSink {
    /// Starts a sink clocked from now, for lookups/sec reporting.
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
        }
    }
}

impl Default for LogSink {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressSink for LogSink {
    fn publish(&mut self, results: &[LookupResult], progress: u8) {
        let resolved = results
            .iter()
            .filter(|r| r.status != Status::Pending)
            .count();
        let elapsed_secs = self.start_time.elapsed().as_secs_f64();
        let rate = if elapsed_secs > 0.0 {
            resolved as f64 / elapsed_secs
        } else {
            0.0
        };
        info!(
            "Progress {}%: resolved {}/{} targets in {:.2} seconds (~{:.2} lookups/sec)",
            progress,
            resolved,
            results.len(),
            elapsed_secs,
            rate
        );
    }
}
