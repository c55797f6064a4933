//! Shared test fixtures: a cwd-pinned temp content root and a canned transport

use anyhow::Result;
use serde_json::Value;
use std::cell::RefCell;
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard};

use crate::gql::{GqlResponse, GqlTransport};

// The tool addresses documents by paths relative to the content root, so
// tests that touch real files must pin the process cwd. One process-wide
// lock serializes them across test modules.
static CWD_LOCK: Mutex<()> = Mutex::new(());

/// A temporary directory the process cwd points at until dropped.
pub struct ContentRoot {
    _guard: MutexGuard<'static, ()>,
    _dir: tempfile::TempDir,
    previous: PathBuf,
}

impl ContentRoot {
    pub fn new() -> Self {
        let guard = CWD_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let dir = tempfile::tempdir().unwrap();
        let previous = std::env::current_dir().unwrap();
        std::env::set_current_dir(dir.path()).unwrap();
        Self {
            _guard: guard,
            _dir: dir,
            previous,
        }
    }

    /// Create a file (and its parent directories) under the root.
    pub fn write(&self, rel: &str, contents: &str) -> PathBuf {
        let path = PathBuf::from(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, contents).unwrap();
        path
    }
}

impl Drop for ContentRoot {
    fn drop(&mut self) {
        std::env::set_current_dir(&self.previous).unwrap();
    }
}

/// Canned transport: pops one queued response per request, panics when the
/// queue runs dry so tests catch unexpected network calls.
pub struct StubTransport {
    responses: RefCell<Vec<GqlResponse>>,
    calls: RefCell<usize>,
}

impl StubTransport {
    pub fn new(responses: Vec<GqlResponse>) -> Self {
        Self {
            responses: RefCell::new(responses),
            calls: RefCell::new(0),
        }
    }

    /// A transport that must never be consulted.
    pub fn none() -> Self {
        Self::new(Vec::new())
    }

    pub fn call_count(&self) -> usize {
        *self.calls.borrow()
    }
}

impl GqlTransport for StubTransport {
    fn request(&self, _query: &str, _variables: Value) -> Result<GqlResponse> {
        *self.calls.borrow_mut() += 1;
        let mut responses = self.responses.borrow_mut();
        if responses.is_empty() {
            panic!("unexpected CMS request");
        }
        Ok(responses.remove(0))
    }
}

/// A 200 response with the given body.
pub fn ok_response(body: &str) -> GqlResponse {
    GqlResponse {
        status: 200,
        body: body.to_string(),
    }
}
