//! CMS connection settings

use std::env;

/// Environment variable holding the CMS base URL
const CMS_URL_VAR: &str = "CMS_URL";
/// Environment variable holding the CMS API key
const CMS_APIKEY_VAR: &str = "CMS_APIKEY";

/// Connection settings for the remote CMS, read once at startup.
///
/// Absence of either variable is not validated here: a missing key shows up
/// as an authentication failure on the first request, which the orchestrator
/// reports like any other remote error.
#[derive(Debug, Clone)]
pub struct CmsConfig {
    /// Base URL of the CMS, e.g. `https://cms.example.com`
    pub base_url: String,
    /// API key sent as `Authorization: users API-Key <key>`
    pub api_key: String,
}

impl CmsConfig {
    /// Read the configuration from `CMS_URL` and `CMS_APIKEY`.
    pub fn from_env() -> Self {
        Self {
            base_url: env::var(CMS_URL_VAR).unwrap_or_default(),
            api_key: env::var(CMS_APIKEY_VAR).unwrap_or_default(),
        }
    }

    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// The GraphQL endpoint URL.
    pub fn graphql_endpoint(&self) -> String {
        format!("{}/api/graphql", self.base_url.trim_end_matches('/'))
    }
}
