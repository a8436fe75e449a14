use crate::sbom_generation::domain::{Bom, MarkupElement};
use crate::shared::Result;

/// Rendering options shared by every formatter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Omit the serial number and timestamp, sort components and edges
    pub reproducible: bool,
}

impl RenderOptions {
    pub fn reproducible() -> Self {
        Self { reproducible: true }
    }
}

/// SbomFormatter port for formatting SBOM output
///
/// This port abstracts the formatting logic for the CycloneDX
/// representations (JSON, XML). Both must encode the same fields.
pub trait SbomFormatter {
    /// Formats the document
    ///
    /// # Arguments
    /// * `bom` - The assembled document
    /// * `options` - Rendering options
    ///
    /// # Returns
    /// Formatted SBOM content as a string
    ///
    /// # Errors
    /// Returns an error if formatting or serialization fails
    fn format(&self, bom: &Bom, options: &RenderOptions) -> Result<String>;
}

/// MarkupRenderer port for formatters that build an element tree first
///
/// Splitting tree construction from writing lets additional BOM documents
/// be spliced into the tree before it is serialized.
pub trait MarkupRenderer {
    /// Builds the document's element tree
    fn build_tree(&self, bom: &Bom, options: &RenderOptions) -> MarkupElement;

    /// Serializes an element tree
    ///
    /// # Errors
    /// Returns an error if the tree cannot be written
    fn write_tree(&self, tree: &MarkupElement) -> Result<String>;
}
