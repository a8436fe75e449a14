use npm_sbom::adapters::outbound::formatters::xml_codec;
use npm_sbom::prelude::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Mock BomDocumentReader serving XML documents from memory
#[derive(Default)]
pub struct MockBomDocumentReader {
    documents: HashMap<PathBuf, String>,
}

impl MockBomDocumentReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(mut self, path: &str, xml: &str) -> Self {
        self.documents.insert(PathBuf::from(path), xml.to_string());
        self
    }
}

impl BomDocumentReader for MockBomDocumentReader {
    fn read_bom_document(&self, path: &Path) -> Result<MarkupElement> {
        let xml = self
            .documents
            .get(path)
            .ok_or_else(|| anyhow::anyhow!("BOM document not found: {}", path.display()))?;
        xml_codec::parse_document(xml)
    }
}
