//! Authenticated GraphQL transport

use anyhow::{Context, Result};
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use serde_json::Value;

use crate::config::CmsConfig;

/// A single GraphQL round trip: query text plus variables in, raw response out.
///
/// This is the seam between the pipeline and the network; tests substitute a
/// canned transport so the classifier, variables builder, and orchestrator
/// never open a socket.
pub trait GqlTransport {
    fn request(&self, query: &str, variables: Value) -> Result<GqlResponse>;
}

/// The raw result of one GraphQL POST, undecoded.
///
/// Interpreting the status code or a GraphQL `errors` array is the caller's
/// job; the transport only moves bytes.
#[derive(Debug, Clone)]
pub struct GqlResponse {
    pub status: u16,
    pub body: String,
}

impl GqlResponse {
    /// Decode the response body as JSON.
    pub fn json(&self) -> Result<Value> {
        serde_json::from_str(&self.body)
            .with_context(|| format!("malformed JSON in CMS response: {}", self.body))
    }

    /// Whether the body carries a GraphQL `errors` array.
    pub fn has_errors(&self) -> bool {
        serde_json::from_str::<Value>(&self.body)
            .map(|v| v.get("errors").is_some())
            .unwrap_or(false)
    }
}

/// Blocking HTTP client for the CMS GraphQL endpoint.
///
/// No retries, no rate limiting, no timeout beyond reqwest defaults: every
/// call blocks until the CMS answers, matching the sequential batch model.
pub struct GqlClient {
    endpoint: String,
    api_key: String,
    http: reqwest::blocking::Client,
}

impl GqlClient {
    pub fn new(config: &CmsConfig) -> Self {
        Self {
            endpoint: config.graphql_endpoint(),
            api_key: config.api_key.clone(),
            http: reqwest::blocking::Client::new(),
        }
    }
}

impl GqlTransport for GqlClient {
    fn request(&self, query: &str, variables: Value) -> Result<GqlResponse> {
        let response = self
            .http
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .header(AUTHORIZATION, format!("users API-Key {}", self.api_key))
            .json(&serde_json::json!({
                "query": query,
                "variables": variables,
            }))
            .send()
            .with_context(|| format!("POST {} failed", self.endpoint))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .context("failed to read CMS response body")?;

        Ok(GqlResponse { status, body })
    }
}
