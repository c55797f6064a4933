//! Per-file publishing errors

use std::path::PathBuf;
use thiserror::Error;

/// Errors that fail a single file's publish attempt.
///
/// These never abort the batch: the orchestrator logs them and moves on to
/// the next file.
#[derive(Error, Debug)]
pub enum SyncError {
    #[error("no front matter block in {path:?}")]
    MissingFrontMatter { path: PathBuf },

    #[error("missing required field `{field}` in {path:?}")]
    MissingField { field: &'static str, path: PathBuf },

    #[error("path {path:?} has no role segment (expected <category>/<...>/<role>/...)")]
    MissingRole { path: PathBuf },

    #[error("cover not found: no media record matches filename `{0}`")]
    CoverNotFound(String),
}
