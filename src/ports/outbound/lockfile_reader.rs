use crate::sbom_generation::domain::LockfileContents;
use crate::shared::Result;
use std::path::Path;

/// LockfileReader port for reading lock file contents
///
/// This port abstracts the file system operations needed to read
/// the npm lock file from a project directory.
pub trait LockfileReader {
    /// Reads the lock file from the specified project directory
    ///
    /// # Arguments
    /// * `project_path` - Path to the project directory
    ///
    /// # Returns
    /// The parsed lock file, or empty contents when the project has none
    ///
    /// # Errors
    /// Returns an error if a lock file exists but cannot be read or parsed
    fn read_lockfile(&self, project_path: &Path) -> Result<LockfileContents>;
}
