use crate::sbom_generation::domain::Bom;

/// SbomResponse - Internal response DTO from SBOM generation use case
///
/// Carries the assembled document; rendering happens in a separate step so
/// the same document can be written in either format.
#[derive(Debug, Clone)]
pub struct SbomResponse {
    /// The assembled CycloneDX document
    pub bom: Bom,
}

impl SbomResponse {
    pub fn new(bom: Bom) -> Self {
        Self { bom }
    }

    pub fn component_count(&self) -> usize {
        self.bom.components().len()
    }
}
