//! Shared fixtures for integration tests

use serde::{Deserialize, Serialize};
use soliton::KeyResolver;
use std::sync::Arc;
use tempfile::TempDir;

/// The canonical persisted-state fixture
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Counter {
    pub count: i64,
}

/// A temp directory plus a resolver rooted in it
pub struct TestRoot {
    pub resolver: Arc<KeyResolver>,
    // Held so the directory outlives the test body.
    _dir: TempDir,
}

impl TestRoot {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp root");
        TestRoot {
            resolver: Arc::new(KeyResolver::new(dir.path())),
            _dir: dir,
        }
    }
}
