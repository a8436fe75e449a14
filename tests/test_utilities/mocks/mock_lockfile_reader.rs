use npm_sbom::prelude::*;
use std::path::Path;

/// Mock LockfileReader returning fixed contents
#[derive(Default)]
pub struct MockLockfileReader {
    contents: Option<serde_json::Value>,
}

impl MockLockfileReader {
    pub fn new(contents: serde_json::Value) -> Self {
        Self {
            contents: Some(contents),
        }
    }

    /// A project without any lock file
    pub fn empty() -> Self {
        Self::default()
    }
}

impl LockfileReader for MockLockfileReader {
    fn read_lockfile(&self, _project_path: &Path) -> Result<LockfileContents> {
        Ok(self
            .contents
            .clone()
            .map(LockfileContents::new)
            .unwrap_or_default())
    }
}
