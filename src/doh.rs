//! DNS-over-HTTPS transport.
//!
//! Thin wrapper over a shared `reqwest::Client` speaking the DoH JSON API
//! (Google/Cloudflare dialect): HTTPS GET with `name` and `type` query
//! parameters, JSON response with `Status` and `Answer` fields.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

/// Errors from a single DoH query.
#[derive(Error, Debug)]
pub enum DohError {
    /// The endpoint answered with a non-success HTTP status.
    #[error("HTTP error! Status: {0}")]
    HttpStatus(reqwest::StatusCode),

    /// Network failure or timeout.
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The endpoint answered 2xx but the body was not valid DoH JSON.
    #[error("Malformed DoH response: {0}")]
    Decode(String),
}

/// DoH JSON response. Only the fields the lookup pipeline consumes.
#[derive(Debug, Clone, Deserialize)]
pub struct DohResponse {
    /// DNS response code: 0 = NOERROR, 3 = NXDOMAIN.
    #[serde(rename = "Status")]
    pub status: i32,

    /// Answer section; absent when the name has no records of the
    /// requested type.
    #[serde(rename = "Answer")]
    pub answer: Option<Vec<DohAnswer>>,
}

/// One answer record from the DoH response.
#[derive(Debug, Clone, Deserialize)]
pub struct DohAnswer {
    /// Record data as presentation text (TXT data arrives quoted).
    pub data: String,
}

/// The query capability the resolver is built over.
///
/// `DohClient` is the real implementation; tests script responses through
/// this seam to exercise the resolver's composition paths without a
/// network.
#[async_trait]
pub trait DohTransport: Send + Sync {
    /// Queries `name` for records of `record_type` ("TXT" or "PTR").
    async fn query(&self, name: &str, record_type: &str) -> Result<DohResponse, DohError>;
}

/// A DoH endpoint bound to a shared HTTP client.
#[derive(Debug, Clone)]
pub struct DohClient {
    client: Arc<reqwest::Client>,
    endpoint: String,
}

impl DohClient {
    /// Binds an endpoint URL to an existing HTTP client.
    pub fn new(client: Arc<reqwest::Client>, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl DohTransport for DohClient {
    /// Bounded by the client's request timeout; `reqwest` URL-encodes the
    /// query parameters.
    async fn query(&self, name: &str, record_type: &str) -> Result<DohResponse, DohError> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("name", name), ("type", record_type)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(DohError::HttpStatus(response.status()));
        }

        response.json::<DohResponse>().await.map_err(|e| {
            if e.is_decode() {
                DohError::Decode(e.to_string())
            } else {
                DohError::Transport(e)
            }
        })
    }
}
