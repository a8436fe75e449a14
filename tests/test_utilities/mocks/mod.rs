/// Mock implementations for testing
mod mock_bom_document_reader;
mod mock_lockfile_reader;
mod mock_metadata_extractor;
mod mock_package_tree_reader;
mod mock_progress_reporter;

pub use mock_bom_document_reader::MockBomDocumentReader;
pub use mock_lockfile_reader::MockLockfileReader;
pub use mock_metadata_extractor::MockMetadataExtractor;
pub use mock_package_tree_reader::MockPackageTreeReader;
pub use mock_progress_reporter::MockProgressReporter;
