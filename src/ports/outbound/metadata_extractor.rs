use crate::sbom_generation::domain::{
    ExternalReference, Hash, LicenseChoice, LockfileContents, PackageRecord,
};

/// MetadataExtractor port for deriving component metadata from a package
///
/// Extraction never fails: anything that cannot be understood is left out.
pub trait MetadataExtractor {
    /// License information, optionally with the license text embedded
    fn licenses(&self, record: &PackageRecord, include_text: bool) -> Option<LicenseChoice>;

    /// Integrity hashes from the record, falling back to the lock file
    fn hashes(&self, record: &PackageRecord, lockfile: &LockfileContents) -> Vec<Hash>;

    /// Website, repository, issue tracker and distribution URLs
    fn external_references(&self, record: &PackageRecord) -> Vec<ExternalReference>;
}
