//! Front-matter parsing

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Deserialize;
use std::path::Path;

use crate::error::SyncError;

/// Front-matter delimiter line
const DELIMITER: &str = "---";

/// Metadata block at the top of a writing, delimited by `---` lines.
///
/// Required-ness is enforced at variables-building time so the error can name
/// the field and the file; here everything is optional or defaulted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FrontMatter {
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(rename = "created-date")]
    pub created_date: Option<NaiveDate>,
    #[serde(rename = "last-updated-date")]
    pub last_updated_date: Option<NaiveDate>,
    #[serde(default)]
    pub featured: bool,
    #[serde(rename = "cover-url")]
    pub cover_url: Option<String>,
}

impl FrontMatter {
    /// Split a document into front matter and markdown body.
    ///
    /// The file must open with a `---` line and close the YAML block with a
    /// second one; a publishable document without that block is an error.
    pub fn parse<'a>(raw: &'a str, path: &Path) -> Result<(Self, &'a str)> {
        let (header, body) = split_document(raw).ok_or_else(|| SyncError::MissingFrontMatter {
            path: path.to_path_buf(),
        })?;

        let front_matter = serde_yaml::from_str(header)
            .with_context(|| format!("invalid front matter in {:?}", path))?;

        Ok((front_matter, body))
    }
}

fn split_document(raw: &str) -> Option<(&str, &str)> {
    let rest = raw.strip_prefix(DELIMITER)?;
    let rest = rest.trim_start_matches(['\n', '\r']);
    let end = rest.find("\n---")?;
    let header = &rest[..end];
    // Skip the closing delimiter line.
    let body = &rest[end + 1 + DELIMITER.len()..];
    Some((header, body))
}
