use crate::sbom_generation::domain::MarkupElement;
use crate::shared::Result;
use std::path::Path;

/// BomDocumentReader port for reading externally supplied BOM documents
pub trait BomDocumentReader {
    /// Reads a CycloneDX XML document into an element tree
    ///
    /// # Arguments
    /// * `path` - Path to the XML document
    ///
    /// # Returns
    /// The document's root element
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not well-formed XML
    fn read_bom_document(&self, path: &Path) -> Result<MarkupElement>;
}
