use crate::application::dto::OutputFormat;
use crate::application::factories::FormatterFactory;
use crate::ports::outbound::{BomDocumentReader, ProgressReporter, RenderOptions};
use crate::sbom_generation::domain::Bom;
use crate::sbom_generation::services::BomMerger;
use crate::shared::error::SbomError;
use crate::shared::Result;
use std::path::PathBuf;

/// RenderSbomUseCase - turns an assembled document into its final text
///
/// Additional BOM documents are read and spliced into the rendered element
/// tree before it is written, which is only possible for XML output.
///
/// # Type Parameters
/// * `BR` - BomDocumentReader implementation
/// * `PR` - ProgressReporter implementation
pub struct RenderSbomUseCase<BR, PR> {
    document_reader: BR,
    progress_reporter: PR,
}

impl<BR, PR> RenderSbomUseCase<BR, PR>
where
    BR: BomDocumentReader,
    PR: ProgressReporter,
{
    pub fn new(document_reader: BR, progress_reporter: PR) -> Self {
        Self {
            document_reader,
            progress_reporter,
        }
    }

    /// Renders the document
    ///
    /// # Arguments
    /// * `bom` - The assembled document
    /// * `format` - Output format
    /// * `options` - Rendering options (deterministic mode)
    /// * `additional_boms` - XML documents whose components are merged in
    ///
    /// # Errors
    /// Returns an error if additional BOMs are given for JSON output, or if
    /// any of them cannot be read or merged
    pub fn execute(
        &self,
        bom: &Bom,
        format: OutputFormat,
        options: RenderOptions,
        additional_boms: &[PathBuf],
    ) -> Result<String> {
        if !additional_boms.is_empty() && format != OutputFormat::Xml {
            return Err(SbomError::validation(format!(
                "Additional BOMs can only be merged into XML output (requested format: {})",
                format
            ))
            .into());
        }

        self.progress_reporter
            .report(FormatterFactory::progress_message(format));

        if additional_boms.is_empty() {
            return FormatterFactory::create(format).format(bom, &options);
        }

        let renderer = FormatterFactory::create_markup_renderer(format).ok_or_else(|| {
            SbomError::validation(format!("Format {} cannot merge additional BOMs", format))
        })?;
        let mut tree = renderer.build_tree(bom, &options);

        let total = additional_boms.len();
        let mut merged = 0;
        for (index, path) in additional_boms.iter().enumerate() {
            let mut document = self.document_reader.read_bom_document(path)?;
            let moved = BomMerger::merge(&mut tree, &mut document)?;
            tracing::debug!("merged {} component(s) from {}", moved, path.display());
            merged += moved;

            let label = path.display().to_string();
            self.progress_reporter
                .report_progress(index + 1, total, Some(&label));
        }

        self.progress_reporter.report(&format!(
            "🔗 Merged {} component(s) from {} additional BOM(s)",
            merged, total
        ));

        renderer.write_tree(&tree)
    }
}
