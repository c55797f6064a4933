//! Operation classifier - decides what each path means for the CMS

use anyhow::{anyhow, bail, Result};
use serde_json::json;
use std::path::Path;

use crate::collect::segments;
use crate::gql::{self, GqlTransport};

/// Directory segment that marks unpublished work
const DRAFTS_SEGMENT: &str = "drafts";
/// The only file extension considered for publishing
const MARKDOWN_EXT: &str = "md";

/// The two kinds of writing the CMS knows about, keyed by the first path
/// segment of a document (`blog/...` or `note/...`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WritingCategory {
    Blog,
    Note,
}

impl WritingCategory {
    /// The CMS collection type name, used in queries and response data keys.
    pub fn cms_type(&self) -> &'static str {
        match self {
            WritingCategory::Blog => "Blog",
            WritingCategory::Note => "Note",
        }
    }

    fn from_segment(segment: &str) -> Option<Self> {
        match segment {
            "blog" => Some(WritingCategory::Blog),
            "note" => Some(WritingCategory::Note),
            _ => None,
        }
    }
}

/// What should happen to a file's CMS record this run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    Create,
    Update,
    Delete,
    Skip,
}

/// The stable CMS identifier of a document: its filename stem.
pub fn doc_id(path: &Path) -> Result<&str> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| anyhow!("path {:?} has no filename stem", path))
}

/// Decide the operation for one candidate path.
///
/// Skip decisions (wrong extension, drafts, unknown category) and local
/// deletes are made from the path alone. Create vs Update needs the CMS's
/// current state, so it costs one live get-by-id round trip immediately
/// before the decision; a transport or decoding failure there is this
/// file's failure, not the batch's.
pub fn classify(
    path: &Path,
    client: &dyn GqlTransport,
) -> Result<(OperationKind, Option<WritingCategory>)> {
    let parts = segments(path);

    let is_markdown = path.extension().and_then(|e| e.to_str()) == Some(MARKDOWN_EXT);
    if !is_markdown || parts.contains(&DRAFTS_SEGMENT) {
        return Ok((OperationKind::Skip, None));
    }

    let category = match parts.first().copied().and_then(WritingCategory::from_segment) {
        Some(category) => category,
        None => return Ok((OperationKind::Skip, None)),
    };

    if !path.exists() {
        // Removed locally, so remove remotely.
        return Ok((OperationKind::Delete, Some(category)));
    }

    let response = client.request(gql::get_by_id(category), json!({ "id": doc_id(path)? }))?;
    if response.status != 200 || response.has_errors() {
        // An error-shaped lookup must not read as "record absent".
        bail!(
            "existence lookup for {:?} failed ({}): {}",
            path,
            response.status,
            response.body
        );
    }
    let exists = !response.json()?["data"][category.cms_type()].is_null();

    if exists {
        Ok((OperationKind::Update, Some(category)))
    } else {
        Ok((OperationKind::Create, Some(category)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gql::GqlResponse;
    use crate::testutil::{ok_response, ContentRoot, StubTransport};

    const DOC: &str = "---\ntitle: T\n---\nbody";

    #[test]
    fn test_non_markdown_is_skipped_without_network() {
        let client = StubTransport::none();
        let (op, category) = classify(Path::new("blog/tech/engineer/a.png"), &client).unwrap();
        assert_eq!(op, OperationKind::Skip);
        assert_eq!(category, None);
        assert_eq!(client.call_count(), 0);
    }

    #[test]
    fn test_drafts_are_skipped_without_network() {
        let client = StubTransport::none();
        let (op, _) = classify(Path::new("blog/tech/drafts/wip.md"), &client).unwrap();
        assert_eq!(op, OperationKind::Skip);
        assert_eq!(client.call_count(), 0);
    }

    #[test]
    fn test_unknown_category_is_skipped() {
        let client = StubTransport::none();
        let (op, category) = classify(Path::new("talks/tech/engineer/a.md"), &client).unwrap();
        assert_eq!(op, OperationKind::Skip);
        assert_eq!(category, None);
    }

    #[test]
    fn test_missing_file_is_a_delete() {
        let _root = ContentRoot::new();
        let client = StubTransport::none();
        let (op, category) = classify(Path::new("note/tech/engineer/gone.md"), &client).unwrap();
        assert_eq!(op, OperationKind::Delete);
        assert_eq!(category, Some(WritingCategory::Note));
        assert_eq!(client.call_count(), 0);
    }

    #[test]
    fn test_existing_cms_record_means_update() {
        let root = ContentRoot::new();
        let path = root.write("blog/tech/engineer/hello.md", DOC);

        let client = StubTransport::new(vec![ok_response(
            r#"{"data": {"Blog": {"id": "hello"}}}"#,
        )]);
        let (op, category) = classify(&path, &client).unwrap();
        assert_eq!(op, OperationKind::Update);
        assert_eq!(category, Some(WritingCategory::Blog));
        assert_eq!(client.call_count(), 1);
    }

    #[test]
    fn test_absent_cms_record_means_create() {
        let root = ContentRoot::new();
        let path = root.write("blog/tech/engineer/hello.md", DOC);

        let client = StubTransport::new(vec![ok_response(r#"{"data": {"Blog": null}}"#)]);
        let (op, _) = classify(&path, &client).unwrap();
        assert_eq!(op, OperationKind::Create);
    }

    #[test]
    fn test_lookup_errors_array_is_not_read_as_absent() {
        let root = ContentRoot::new();
        let path = root.write("blog/tech/engineer/hello.md", DOC);

        let client = StubTransport::new(vec![ok_response(
            r#"{"errors": [{"message": "unauthorized"}], "data": null}"#,
        )]);
        let err = classify(&path, &client).unwrap_err();
        assert!(err.to_string().contains("existence lookup"));
    }

    #[test]
    fn test_non_200_lookup_is_an_error() {
        let root = ContentRoot::new();
        let path = root.write("note/tech/engineer/hello.md", DOC);

        let client = StubTransport::new(vec![GqlResponse {
            status: 502,
            body: "bad gateway".to_string(),
        }]);
        assert!(classify(&path, &client).is_err());
    }

    #[test]
    fn test_malformed_lookup_response_is_an_error() {
        let root = ContentRoot::new();
        let path = root.write("note/tech/engineer/hello.md", DOC);

        let client = StubTransport::new(vec![ok_response("not json")]);
        assert!(classify(&path, &client).is_err());
    }
}
