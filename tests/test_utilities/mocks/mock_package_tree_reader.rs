use npm_sbom::prelude::*;
use std::path::Path;

/// Mock PackageTreeReader that parses a JSON string instead of a file
pub struct MockPackageTreeReader {
    tree_json: String,
}

impl MockPackageTreeReader {
    pub fn new(tree_json: &str) -> Self {
        Self {
            tree_json: tree_json.to_string(),
        }
    }
}

impl PackageTreeReader for MockPackageTreeReader {
    fn read_package_tree(&self, _tree_path: &Path) -> Result<PackageRecord> {
        Ok(serde_json::from_str(&self.tree_json)?)
    }
}
