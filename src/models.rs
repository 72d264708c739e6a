//! Core data model for SPF lookup runs.

use std::fmt;
use std::str::FromStr;

/// Resolution state of a single lookup target.
///
/// Every result starts `Pending` and transitions exactly once to one of the
/// terminal states; a finished run never contains `Pending` entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Queued; no resolver output yet.
    Pending,
    /// A TXT record starting with `v=spf1` was found.
    Found,
    /// The name resolved but carries no SPF record.
    NotFound,
    /// The lookup failed (NXDOMAIN, transport failure, reverse-lookup failure).
    Error,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Status::Pending => "Pending",
            Status::Found => "Found",
            Status::NotFound => "Not Found",
            Status::Error => "Error",
        };
        f.write_str(s)
    }
}

impl FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(Status::Pending),
            "Found" => Ok(Status::Found),
            "Not Found" => Ok(Status::NotFound),
            "Error" => Ok(Status::Error),
            other => Err(format!("unknown status: {other}")),
        }
    }
}

/// One row of the ordered result set.
///
/// `target` is the label shown to the user: the normalized input, or for an
/// IPv4 input that reverse-resolved, `"<ip> -> <hostname>"`. `record` holds
/// the SPF record body on `Found` and a human-readable diagnostic otherwise;
/// it is the empty string while `Pending`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupResult {
    /// Display label for the target (identity is the normalized input).
    pub target: String,
    /// SPF record body, diagnostic text, or empty while pending.
    pub record: String,
    /// Resolution state.
    pub status: Status,
}

impl LookupResult {
    /// A fresh `Pending` entry for a normalized target.
    pub fn pending(target: &str) -> Self {
        Self {
            target: target.to_string(),
            record: String::new(),
            status: Status::Pending,
        }
    }
}

/// Terminal state of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// All batches merged normally.
    Completed,
    /// An orchestration fault degraded the run; remaining entries were
    /// rewritten to `Error` so the result set is still fully populated.
    Failed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display_round_trip() {
        for status in [Status::Pending, Status::Found, Status::NotFound, Status::Error] {
            let parsed: Status = status.to_string().parse().unwrap();
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn test_not_found_renders_with_space() {
        assert_eq!(Status::NotFound.to_string(), "Not Found");
    }

    #[test]
    fn test_unknown_status_rejected() {
        assert!("Timeout".parse::<Status>().is_err());
    }

    #[test]
    fn test_pending_result_has_empty_record() {
        let result = LookupResult::pending("example.com");
        assert_eq!(result.target, "example.com");
        assert_eq!(result.record, "");
        assert_eq!(result.status, Status::Pending);
    }
}
