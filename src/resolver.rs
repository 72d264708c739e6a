//! Single-target SPF resolution.
//!
//! One resolver call takes one normalized target (domain name or IPv4
//! address) and produces one terminal `LookupResult`. Domain names get a
//! single TXT query; IPv4 addresses get a PTR query first and, if that
//! yields a hostname, a TXT query for it. Every failure mode is absorbed
//! here and reported as an `Error`-status result; nothing propagates to
//! the orchestrator.

use std::net::Ipv4Addr;

use async_trait::async_trait;

use crate::config::{DNS_RCODE_NOERROR, DNS_RCODE_NXDOMAIN, SPF_PREFIX};
use crate::doh::{DohAnswer, DohClient, DohResponse, DohTransport};
use crate::models::{LookupResult, Status};

/// The capability the orchestrator dispatches against.
///
/// Implementations must return a terminal status (never `Pending`) and must
/// not panic or block unboundedly; the DoH implementation is bounded by the
/// HTTP client's request timeout. Alternate resolution backends plug in at
/// this seam without the orchestrator noticing.
#[async_trait]
pub trait TargetResolver: Send + Sync {
    /// Resolves one target to its SPF lookup result.
    async fn resolve(&self, target: &str) -> LookupResult;
}

/// `TargetResolver` backed by a DNS-over-HTTPS endpoint.
///
/// Generic over the transport so the PTR/TXT composition can be tested
/// against scripted responses; production code uses the `DohClient`
/// default.
#[derive(Debug, Clone)]
pub struct DohResolver<T = DohClient> {
    doh: T,
}

impl<T: DohTransport> DohResolver<T> {
    /// Wraps a DoH transport as a resolver.
    pub fn new(doh: T) -> Self {
        Self { doh }
    }

    /// TXT lookup for a domain, classified into record text plus status.
    async fn lookup_txt(&self, domain: &str) -> (String, Status) {
        match self.doh.query(domain, "TXT").await {
            Ok(response) => classify_txt_response(&response),
            Err(e) => {
                log::warn!("TXT lookup failed for {domain}: {e}");
                (e.to_string(), Status::Error)
            }
        }
    }

    /// PTR lookup for an IPv4 address. Returns the resolved hostname, or a
    /// human-readable reason why reverse resolution failed.
    async fn lookup_ptr(&self, ip: &str) -> Result<String, String> {
        let ptr_name = reverse_pointer_name(ip);
        match self.doh.query(&ptr_name, "PTR").await {
            Ok(response) => extract_ptr_hostname(&response),
            Err(e) => {
                log::warn!("PTR lookup failed for {ip}: {e}");
                Err(e.to_string())
            }
        }
    }
}

#[async_trait]
impl<T: DohTransport> TargetResolver for DohResolver<T> {
    async fn resolve(&self, target: &str) -> LookupResult {
        if !is_ipv4(target) {
            let (record, status) = self.lookup_txt(target).await;
            return LookupResult {
                target: target.to_string(),
                record,
                status,
            };
        }

        // IPv4: reverse-resolve first, then forward-resolve the discovered
        // hostname's TXT records. The original IP stays in the label.
        match self.lookup_ptr(target).await {
            Ok(hostname) => {
                let (record, status) = self.lookup_txt(&hostname).await;
                LookupResult {
                    target: format!("{target} -> {hostname}"),
                    record,
                    status,
                }
            }
            Err(reason) => LookupResult {
                target: target.to_string(),
                record: reason,
                status: Status::Error,
            },
        }
    }
}

/// Whether the input is an IPv4 literal (four octets, each 0-255).
pub fn is_ipv4(input: &str) -> bool {
    input.parse::<Ipv4Addr>().is_ok()
}

/// Builds the `in-addr.arpa` name for an IPv4 literal by reversing its
/// dot-separated octets.
pub fn reverse_pointer_name(ip: &str) -> String {
    let mut octets: Vec<&str> = ip.split('.').collect();
    octets.reverse();
    format!("{}.in-addr.arpa", octets.join("."))
}

/// Finds the SPF record in a TXT answer set.
///
/// DoH presentation data arrives quoted, and long TXT records are split
/// into multiple quoted strings; quote characters are stripped before the
/// prefix check so a split record still matches.
pub fn find_spf_record(answers: &[DohAnswer]) -> Option<String> {
    answers.iter().find_map(|answer| {
        let record = answer.data.replace('"', "");
        record.starts_with(SPF_PREFIX).then_some(record)
    })
}

/// Classifies a TXT response into `(record, status)`.
///
/// NXDOMAIN is reported as `Error` with a message distinct from the
/// `NotFound` "no SPF record" case, so "domain doesn't exist" and "domain
/// exists, no SPF" stay distinguishable.
pub fn classify_txt_response(response: &DohResponse) -> (String, Status) {
    if response.status == DNS_RCODE_NOERROR {
        if let Some(answers) = &response.answer {
            if let Some(spf) = find_spf_record(answers) {
                return (spf, Status::Found);
            }
        }
    }

    if response.status == DNS_RCODE_NXDOMAIN {
        return (
            "Domain does not exist (NXDOMAIN).".to_string(),
            Status::Error,
        );
    }

    ("No SPF record found.".to_string(), Status::NotFound)
}

/// Pulls the hostname out of a PTR response, minus the trailing root dot.
pub fn extract_ptr_hostname(response: &DohResponse) -> Result<String, String> {
    if response.status == DNS_RCODE_NOERROR {
        if let Some(first) = response
            .answer
            .as_deref()
            .and_then(|answers| answers.first())
        {
            return Ok(first.data.trim_end_matches('.').to_string());
        }
    }

    if response.status == DNS_RCODE_NXDOMAIN {
        return Err("No PTR record found (NXDOMAIN).".to_string());
    }
    Err("No PTR record found.".to_string())
}
