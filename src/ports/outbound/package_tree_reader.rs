use crate::sbom_generation::domain::PackageRecord;
use crate::shared::Result;
use std::path::Path;

/// PackageTreeReader port for reading the resolved package tree
///
/// The tree is produced ahead of time by the package resolver
/// (e.g. `npm ls --json --all --long > package-tree.json`).
pub trait PackageTreeReader {
    /// Reads and parses the resolved package tree
    ///
    /// # Arguments
    /// * `tree_path` - Path to the JSON document holding the tree
    ///
    /// # Returns
    /// The root package record with its nested dependencies
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file does not exist or cannot be read
    /// - The file is not a JSON object
    fn read_package_tree(&self, tree_path: &Path) -> Result<PackageRecord>;
}
