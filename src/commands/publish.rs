//! Publish - the sequential per-file sync loop

use anyhow::Result;
use serde_json::json;
use std::path::{Path, PathBuf};

use crate::classify::{classify, doc_id, OperationKind};
use crate::collect::collect_paths;
use crate::content::build_variables;
use crate::gql::{self, GqlTransport};

/// Outcome counts for one run.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub published: usize,
    pub skipped: usize,
    pub failed: usize,
}

enum FileStatus {
    Published,
    Skipped,
    Rejected,
}

/// Publish every file reachable from the input paths, one at a time.
///
/// Each file's attempt is independent: classification errors, missing
/// metadata, and remote-reported failures are logged and counted, never
/// aborting the rest of the batch. Classification is recomputed from live
/// CMS state every run, so a failed file is simply retried next invocation.
pub fn run(client: &dyn GqlTransport, inputs: &[PathBuf]) -> Summary {
    let mut summary = Summary::default();

    for path in collect_paths(inputs) {
        match publish_file(client, &path) {
            Ok(FileStatus::Published) => summary.published += 1,
            Ok(FileStatus::Skipped) => summary.skipped += 1,
            Ok(FileStatus::Rejected) => summary.failed += 1,
            Err(e) => {
                tracing::error!("Failed to publish {:?}: {:#}", path, e);
                summary.failed += 1;
            }
        }
    }

    summary
}

fn publish_file(client: &dyn GqlTransport, path: &Path) -> Result<FileStatus> {
    let (operation, category) = classify(path, client)?;

    let statement = category.and_then(|c| gql::statement(c, operation));
    let (category, statement) = match (category, statement) {
        (Some(category), Some(statement)) => (category, statement),
        _ => {
            tracing::info!("Skipping {:?}", path);
            return Ok(FileStatus::Skipped);
        }
    };

    tracing::info!("{:?} {:?}: {:?}", operation, category, path);

    let variables = if operation == OperationKind::Delete {
        json!({ "id": doc_id(path)? })
    } else {
        build_variables(path, category, client)?
    };

    let response = client.request(statement, variables)?;
    if response.status != 200 || response.has_errors() {
        tracing::error!(
            "Failed to {:?} {:?} {:?}: {}",
            operation,
            category,
            path,
            response.body
        );
        return Ok(FileStatus::Rejected);
    }

    Ok(FileStatus::Published)
}
