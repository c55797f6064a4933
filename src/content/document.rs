//! Builds the mutation variables for a publishable document

use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::fs;
use std::path::Path;

use super::{resolve_cover_id, FrontMatter};
use crate::classify::{doc_id, WritingCategory};
use crate::collect::segments;
use crate::error::SyncError;
use crate::gql::GqlTransport;

/// Index of the role segment in a document path,
/// e.g. `blog/<topic>/<role>/<id>.md`.
const ROLE_SEGMENT: usize = 2;

/// Build the create/update mutation variables for a document.
///
/// Required metadata (title, dates, plus description and cover for blogs)
/// fails with a field-specific error before any network call; the cover
/// lookup is the only round trip here and only happens for blogs.
pub fn build_variables(
    path: &Path,
    category: WritingCategory,
    client: &dyn GqlTransport,
) -> Result<Value> {
    let id = doc_id(path)?;
    let role = *segments(path)
        .get(ROLE_SEGMENT)
        .ok_or_else(|| SyncError::MissingRole {
            path: path.to_path_buf(),
        })?;

    let raw = fs::read_to_string(path).with_context(|| format!("failed to read {:?}", path))?;
    let (front_matter, body) = FrontMatter::parse(&raw, path)?;

    let title = require(front_matter.title, "title", path)?;
    let created_date = require(front_matter.created_date, "created-date", path)?;
    let last_updated_date = require(front_matter.last_updated_date, "last-updated-date", path)?;

    let variables = match category {
        WritingCategory::Blog => {
            let description = require(front_matter.description, "description", path)?;
            let cover_url = require(front_matter.cover_url, "cover-url", path)?;
            let cover = resolve_cover_id(client, &cover_url)?;

            json!({
                "id": id,
                "role": role,
                "content": body.trim(),
                "title": title,
                "description": description,
                "tags": front_matter.tags,
                "createdDate": created_date.to_string(),
                "lastUpdatedDate": last_updated_date.to_string(),
                "featured": front_matter.featured,
                "cover": cover,
                "hasLinkTo": [],
            })
        }
        WritingCategory::Note => json!({
            "id": id,
            "role": role,
            "content": body.trim(),
            "title": title,
            "tags": front_matter.tags,
            "createdDate": created_date.to_string(),
            "lastUpdatedDate": last_updated_date.to_string(),
            "hasLinkTo": [],
        }),
    };

    Ok(variables)
}

fn require<T>(value: Option<T>, field: &'static str, path: &Path) -> Result<T, SyncError> {
    value.ok_or_else(|| SyncError::MissingField {
        field,
        path: path.to_path_buf(),
    })
}
