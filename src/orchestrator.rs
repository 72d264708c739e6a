//! Batched lookup orchestration.
//!
//! The single sequential driver for one run: it seeds a `Pending` result
//! per target, partitions the target list into fixed-size batches, fans out
//! each batch's resolver calls concurrently, joins them, merges the
//! outcomes back into the ordered result set, recomputes progress, pushes
//! the snapshot to the sink, and throttles before the next batch.
//!
//! The result vector is only touched between joins, by this driver, so the
//! concurrent resolver calls share no mutable state and no locking is
//! needed. Batches never overlap in time: batch N is fully merged and
//! published before batch N+1 is dispatched.

use std::collections::HashMap;
use std::time::Duration;

use anyhow::{anyhow, Result};
use futures::future;

use crate::config::{Config, DEFAULT_BATCH_DELAY, DEFAULT_BATCH_SIZE};
use crate::models::{LookupResult, RunOutcome, Status};
use crate::resolver::TargetResolver;
use crate::sink::ProgressSink;

/// Orchestrator tuning, injected per run so tests can zero the delay.
#[derive(Debug, Clone)]
pub struct LookupOptions {
    /// Targets dispatched concurrently per batch.
    pub batch_size: usize,
    /// Pause between batches; skipped only after the final batch.
    pub batch_delay: Duration,
}

impl Default for LookupOptions {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            batch_delay: DEFAULT_BATCH_DELAY,
        }
    }
}

impl From<&Config> for LookupOptions {
    fn from(config: &Config) -> Self {
        Self {
            batch_size: config.batch_size,
            batch_delay: Duration::from_millis(config.batch_delay_ms),
        }
    }
}

/// Working set for one run: the ordered results, the slot index keyed by
/// original target, and the progress bookkeeping. Discarded when the run
/// ends.
struct RunState {
    results: Vec<LookupResult>,
    slots: HashMap<String, usize>,
    dispatched: usize,
    total: usize,
    progress: u8,
}

impl RunState {
    fn seed(targets: &[String]) -> Self {
        let results: Vec<LookupResult> = targets.iter().map(|t| LookupResult::pending(t)).collect();
        let slots = targets
            .iter()
            .enumerate()
            .map(|(i, t)| (t.clone(), i))
            .collect();
        Self {
            results,
            slots,
            dispatched: 0,
            total: targets.len(),
            progress: 0,
        }
    }

    /// Replaces each batch member's `Pending` entry in place, located by the
    /// *original* target string. The resolver may have relabeled the target
    /// (IP annotated with its reverse-resolved hostname), so the outcome's
    /// own label cannot be used as the key. Entries outside the batch are
    /// untouched, which keeps the overall order intact.
    fn merge_batch(&mut self, batch: &[String], outcomes: Vec<LookupResult>) -> Result<()> {
        for (target, outcome) in batch.iter().zip(outcomes) {
            let slot = *self
                .slots
                .get(target)
                .ok_or_else(|| anyhow!("no result slot for target {target}"))?;
            let entry = self
                .results
                .get_mut(slot)
                .ok_or_else(|| anyhow!("result slot {slot} out of bounds for {target}"))?;
            if entry.status != Status::Pending {
                return Err(anyhow!("target {target} already resolved"));
            }
            *entry = outcome;
        }
        Ok(())
    }

    /// Advances the cursor past a dispatched batch and recomputes progress.
    /// Progress counts dispatched targets, not received results; since a
    /// batch is fully joined before this runs, the two are equivalent.
    fn advance(&mut self, batch_len: usize) {
        self.dispatched += batch_len;
        self.progress = progress_percent(self.dispatched, self.total);
    }

    /// Rewrites every still-`Pending` entry to a generic `Error` so a
    /// degraded run still accounts for all targets.
    fn fail_pending(&mut self) {
        for entry in &mut self.results {
            if entry.status == Status::Pending {
                entry.status = Status::Error;
                entry.record = "Processing failed.".to_string();
            }
        }
    }
}

/// Fractional progress as an integer percentage, non-decreasing across a
/// run and exactly 100 only once every target has been dispatched.
///
/// Rounded to the nearest percent, except that rounding is never allowed to
/// report 100 while targets are still outstanding (e.g. 1000 of 1001
/// dispatched would otherwise round up).
pub fn progress_percent(dispatched: usize, total: usize) -> u8 {
    let capped = dispatched.min(total);
    let percent = (100.0 * capped as f64 / total as f64).round() as u8;
    if capped < total {
        percent.min(99)
    } else {
        percent
    }
}

/// Drives one full run over an already-normalized target list.
///
/// Publishes the all-`Pending` snapshot at progress 0 before any network
/// activity, then one snapshot per merged batch, and returns the final
/// ordered result set together with the run outcome.
///
/// Individual resolver failures are already absorbed into `Error`-status
/// results by the resolver contract and never abort the run. A fault in the
/// merge bookkeeping itself ends the run as `Failed`: remaining `Pending`
/// entries are rewritten to `Error` and a corrected snapshot is published,
/// so the caller always receives a fully-populated result set.
pub async fn run_batches<R, S>(
    targets: &[String],
    resolver: &R,
    options: &LookupOptions,
    sink: &mut S,
) -> (Vec<LookupResult>, RunOutcome)
where
    R: TargetResolver + ?Sized,
    S: ProgressSink,
{
    let mut state = RunState::seed(targets);
    sink.publish(&state.results, state.progress);

    // A zero batch size would make chunking panic; treat it as 1.
    let batch_size = options.batch_size.max(1);

    for batch in targets.chunks(batch_size) {
        let outcomes = future::join_all(batch.iter().map(|t| resolver.resolve(t))).await;

        if let Err(fault) = state.merge_batch(batch, outcomes) {
            log::error!("Orchestration fault, degrading run: {fault}");
            state.fail_pending();
            sink.publish(&state.results, state.progress);
            return (state.results, RunOutcome::Failed);
        }

        state.advance(batch.len());
        sink.publish(&state.results, state.progress);

        if state.dispatched < state.total {
            tokio::time::sleep(options.batch_delay).await;
        }
    }

    // The final batch's snapshot already carries 100; republish only if the
    // bookkeeping somehow fell short.
    if state.progress != 100 {
        state.progress = 100;
        sink.publish(&state.results, state.progress);
    }

    (state.results, RunOutcome::Completed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_percent_rounds_to_nearest() {
        // 25 targets in batches of 10: 40, 80, 100
        assert_eq!(progress_percent(10, 25), 40);
        assert_eq!(progress_percent(20, 25), 80);
        assert_eq!(progress_percent(25, 25), 100);
    }

    #[test]
    fn test_progress_percent_caps_at_total() {
        assert_eq!(progress_percent(30, 25), 100);
    }

    #[test]
    fn test_progress_percent_single_target() {
        assert_eq!(progress_percent(1, 1), 100);
    }

    #[test]
    fn test_progress_never_reports_100_with_targets_outstanding() {
        // 1000/1001 rounds to 100; the clamp holds it at 99
        assert_eq!(progress_percent(1000, 1001), 99);
        assert_eq!(progress_percent(990, 1000), 99);
        assert_eq!(progress_percent(1000, 1000), 100);
    }

    #[test]
    fn test_fail_pending_rewrites_only_pending() {
        let targets = vec!["a.com".to_string(), "b.com".to_string()];
        let mut state = RunState::seed(&targets);
        state.results[0] = LookupResult {
            target: "a.com".to_string(),
            record: "v=spf1 -all".to_string(),
            status: Status::Found,
        };
        state.fail_pending();
        assert_eq!(state.results[0].status, Status::Found);
        assert_eq!(state.results[1].status, Status::Error);
        assert_eq!(state.results[1].record, "Processing failed.");
    }

    #[test]
    fn test_merge_batch_rejects_unknown_target() {
        let targets = vec!["a.com".to_string()];
        let mut state = RunState::seed(&targets);
        let outcome = LookupResult {
            target: "b.com".to_string(),
            record: String::new(),
            status: Status::NotFound,
        };
        let err = state.merge_batch(&["b.com".to_string()], vec![outcome]);
        assert!(err.is_err());
    }

    #[test]
    fn test_merge_batch_keys_by_original_target_despite_relabel() {
        let targets = vec!["8.8.8.8".to_string()];
        let mut state = RunState::seed(&targets);
        let outcome = LookupResult {
            target: "8.8.8.8 -> dns.google".to_string(),
            record: "v=spf1 -all".to_string(),
            status: Status::Found,
        };
        state
            .merge_batch(&["8.8.8.8".to_string()], vec![outcome])
            .unwrap();
        assert_eq!(state.results[0].target, "8.8.8.8 -> dns.google");
        assert_eq!(state.results[0].status, Status::Found);
    }
}
