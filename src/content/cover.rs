//! Cover resolver - maps a cover-image URL to its CMS media id

use anyhow::Result;
use serde_json::json;

use crate::error::SyncError;
use crate::gql::{self, GqlTransport};

/// Resolve a cover-image URL to the numeric id of the matching media record.
///
/// Matching is by exact filename (the trailing path component). Zero matches
/// is an explicit error, not an index fault.
pub fn resolve_cover_id(client: &dyn GqlTransport, cover_url: &str) -> Result<i64> {
    let name = cover_url
        .rsplit('/')
        .next()
        .unwrap_or(cover_url)
        .trim()
        .to_string();

    let response = client.request(gql::MEDIA_BY_FILENAME, json!({ "name": name }))?;
    let body = response.json()?;

    body["data"]["allMedia"]["docs"]
        .as_array()
        .and_then(|docs| docs.first())
        .and_then(|doc| doc["id"].as_i64())
        .ok_or_else(|| SyncError::CoverNotFound(name).into())
}
