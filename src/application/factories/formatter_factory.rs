use crate::adapters::outbound::formatters::{CycloneDxJsonFormatter, CycloneDxXmlFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::{MarkupRenderer, SbomFormatter};

/// Factory for creating SBOM formatters
///
/// This factory encapsulates the creation logic for different formatter implementations,
/// following the Factory Pattern. It belongs in the application layer as it orchestrates
/// the selection of infrastructure adapters based on application needs.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output format
    ///
    /// # Examples
    /// ```
    /// use npm_sbom::application::dto::OutputFormat;
    /// use npm_sbom::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Xml);
    /// ```
    pub fn create(format: OutputFormat) -> Box<dyn SbomFormatter> {
        match format {
            OutputFormat::Json => Box::new(CycloneDxJsonFormatter::new()),
            OutputFormat::Xml => Box::new(CycloneDxXmlFormatter::new()),
        }
    }

    /// Creates a tree-building renderer, available for markup formats only
    ///
    /// Returns `None` for JSON, which cannot take part in a document merge.
    pub fn create_markup_renderer(format: OutputFormat) -> Option<Box<dyn MarkupRenderer>> {
        match format {
            OutputFormat::Json => None,
            OutputFormat::Xml => Some(Box::new(CycloneDxXmlFormatter::new())),
        }
    }

    /// Returns the progress message for the specified output format
    ///
    /// # Examples
    /// ```
    /// use npm_sbom::application::dto::OutputFormat;
    /// use npm_sbom::application::factories::FormatterFactory;
    ///
    /// let message = FormatterFactory::progress_message(OutputFormat::Json);
    /// assert_eq!(message, "📝 Generating CycloneDX JSON format output...");
    /// ```
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Json => "📝 Generating CycloneDX JSON format output...",
            OutputFormat::Xml => "📝 Generating CycloneDX XML format output...",
        }
    }
}
