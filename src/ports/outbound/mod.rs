/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, console, etc.).
pub mod bom_document_reader;
pub mod formatter;
pub mod lockfile_reader;
pub mod metadata_extractor;
pub mod output_presenter;
pub mod package_tree_reader;
pub mod progress_reporter;

pub use bom_document_reader::BomDocumentReader;
pub use formatter::{MarkupRenderer, RenderOptions, SbomFormatter};
pub use lockfile_reader::LockfileReader;
pub use metadata_extractor::MetadataExtractor;
pub use output_presenter::OutputPresenter;
pub use package_tree_reader::PackageTreeReader;
pub use progress_reporter::ProgressReporter;
