use crate::sbom_generation::domain::ComponentType;
use crate::shared::error::SbomError;
use crate::shared::Result;
use std::path::{Path, PathBuf};

/// Default file name of the resolved package tree inside the project directory
pub const DEFAULT_TREE_FILE: &str = "package-tree.json";

/// SbomRequest - Internal request DTO for SBOM generation use case
///
/// This DTO represents the internal request structure used within
/// the application layer. Build it with [`SbomRequest::builder`].
#[derive(Debug, Clone, PartialEq)]
pub struct SbomRequest {
    /// Project directory holding the lock file
    pub project_path: PathBuf,
    /// Resolved package tree (`npm ls --json --all --long` output)
    pub tree_path: PathBuf,
    /// Component type assigned to the root package
    pub root_component_type: ComponentType,
    /// Whether a `urn:uuid:` serial number is generated
    pub include_serial_number: bool,
    /// Whether license texts found in package directories are embedded
    pub include_license_text: bool,
    /// Document revision, at least 1
    pub bom_version: u32,
}

impl SbomRequest {
    pub fn builder(project_path: impl Into<PathBuf>) -> SbomRequestBuilder {
        SbomRequestBuilder::new(project_path)
    }
}

/// Builder for [`SbomRequest`]
#[derive(Debug, Clone)]
pub struct SbomRequestBuilder {
    project_path: PathBuf,
    tree_path: Option<PathBuf>,
    root_component_type: ComponentType,
    include_serial_number: bool,
    include_license_text: bool,
    bom_version: u32,
}

impl SbomRequestBuilder {
    pub fn new(project_path: impl Into<PathBuf>) -> Self {
        Self {
            project_path: project_path.into(),
            tree_path: None,
            root_component_type: ComponentType::Library,
            include_serial_number: true,
            include_license_text: true,
            bom_version: 1,
        }
    }

    pub fn tree_path(mut self, tree_path: impl Into<PathBuf>) -> Self {
        self.tree_path = Some(tree_path.into());
        self
    }

    pub fn root_component_type(mut self, component_type: ComponentType) -> Self {
        self.root_component_type = component_type;
        self
    }

    pub fn include_serial_number(mut self, include: bool) -> Self {
        self.include_serial_number = include;
        self
    }

    pub fn include_license_text(mut self, include: bool) -> Self {
        self.include_license_text = include;
        self
    }

    pub fn bom_version(mut self, version: u32) -> Self {
        self.bom_version = version;
        self
    }

    /// Finishes the request
    ///
    /// The tree path defaults to `package-tree.json` in the project directory.
    ///
    /// # Errors
    /// Returns a validation error if the document version is 0
    pub fn build(self) -> Result<SbomRequest> {
        if self.bom_version == 0 {
            return Err(SbomError::validation("BOM version must be at least 1").into());
        }

        let tree_path = self
            .tree_path
            .unwrap_or_else(|| default_tree_path(&self.project_path));

        Ok(SbomRequest {
            project_path: self.project_path,
            tree_path,
            root_component_type: self.root_component_type,
            include_serial_number: self.include_serial_number,
            include_license_text: self.include_license_text,
            bom_version: self.bom_version,
        })
    }
}

fn default_tree_path(project_path: &Path) -> PathBuf {
    project_path.join(DEFAULT_TREE_FILE)
}
