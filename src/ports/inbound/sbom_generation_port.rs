use crate::application::dto::{SbomRequest, SbomResponse};
use crate::shared::Result;

/// SbomGenerationPort - Inbound port for the SBOM generation use case
///
/// This port defines the interface that driving adapters (the CLI) use to
/// turn a resolved package tree into an assembled document.
pub trait SbomGenerationPort {
    /// Generates a BOM for the project described by the request
    ///
    /// # Errors
    /// Returns an error if:
    /// - The resolved package tree cannot be read or parsed
    /// - The lock file exists but cannot be parsed
    /// - The requested document version is invalid
    fn generate_sbom(&self, request: SbomRequest) -> Result<SbomResponse>;
}
