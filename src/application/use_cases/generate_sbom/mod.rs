use crate::application::dto::{SbomRequest, SbomResponse};
use crate::ports::inbound::SbomGenerationPort;
use crate::ports::outbound::{LockfileReader, MetadataExtractor, PackageTreeReader, ProgressReporter};
use crate::sbom_generation::domain::{LockfileContents, PackageRecord};
use crate::sbom_generation::services::{
    AssemblyOptions, BomAssembler, ExtractedMetadata, GraphWalkOutcome, GraphWalker,
};
use crate::shared::Result;

/// GenerateSbomUseCase - Core use case for SBOM generation
///
/// This use case orchestrates the SBOM generation workflow using
/// generic dependency injection for all infrastructure dependencies.
///
/// # Type Parameters
/// * `TR` - PackageTreeReader implementation
/// * `LR` - LockfileReader implementation
/// * `ME` - MetadataExtractor implementation
/// * `PR` - ProgressReporter implementation
pub struct GenerateSbomUseCase<TR, LR, ME, PR> {
    tree_reader: TR,
    lockfile_reader: LR,
    metadata_extractor: ME,
    progress_reporter: PR,
}

impl<TR, LR, ME, PR> GenerateSbomUseCase<TR, LR, ME, PR>
where
    TR: PackageTreeReader,
    LR: LockfileReader,
    ME: MetadataExtractor,
    PR: ProgressReporter,
{
    /// Creates a new GenerateSbomUseCase with injected dependencies
    pub fn new(
        tree_reader: TR,
        lockfile_reader: LR,
        metadata_extractor: ME,
        progress_reporter: PR,
    ) -> Self {
        Self {
            tree_reader,
            lockfile_reader,
            metadata_extractor,
            progress_reporter,
        }
    }

    /// Executes the SBOM generation use case
    ///
    /// # Arguments
    /// * `request` - Paths and document options
    ///
    /// # Returns
    /// SbomResponse holding the assembled document
    pub fn execute(&self, request: SbomRequest) -> Result<SbomResponse> {
        // Step 1: Read the resolved package tree
        let root = self.read_package_tree(&request)?;

        // Step 2: Read the lock file used for hash lookups
        let lockfile = self.lockfile_reader.read_lockfile(&request.project_path)?;
        if lockfile.is_empty() {
            tracing::debug!("no lock file contents, hashes come from the package tree only");
        }

        // Step 3: Walk the tree into components and edges
        let outcome = self.walk(&root, &lockfile, &request)?;
        self.progress_reporter.report(&format!(
            "✅ Resolved {} component(s) and {} dependency relationship(s)",
            outcome.components.len(),
            outcome.dependencies.len()
        ));

        // Step 4: Assemble the document
        let bom = BomAssembler::assemble(
            outcome,
            AssemblyOptions {
                include_serial_number: request.include_serial_number,
                version: request.bom_version,
            },
        )?;

        Ok(SbomResponse::new(bom))
    }

    fn read_package_tree(&self, request: &SbomRequest) -> Result<PackageRecord> {
        self.progress_reporter.report(&format!(
            "📖 Loading resolved package tree from: {}",
            request.tree_path.display()
        ));
        self.tree_reader.read_package_tree(&request.tree_path)
    }

    fn walk(
        &self,
        root: &PackageRecord,
        lockfile: &LockfileContents,
        request: &SbomRequest,
    ) -> Result<GraphWalkOutcome> {
        let extractor = &self.metadata_extractor;
        let include_text = request.include_license_text;

        GraphWalker::walk(root, request.root_component_type, |record| {
            ExtractedMetadata {
                licenses: extractor.licenses(record, include_text),
                hashes: extractor.hashes(record, lockfile),
                external_references: extractor.external_references(record),
            }
        })
    }
}

impl<TR, LR, ME, PR> SbomGenerationPort for GenerateSbomUseCase<TR, LR, ME, PR>
where
    TR: PackageTreeReader,
    LR: LockfileReader,
    ME: MetadataExtractor,
    PR: ProgressReporter,
{
    fn generate_sbom(&self, request: SbomRequest) -> Result<SbomResponse> {
        self.execute(request)
    }
}
