/// Formatter adapters for the CycloneDX output formats
mod cyclonedx_json_formatter;
mod cyclonedx_xml_formatter;
pub mod xml_codec;

pub use cyclonedx_json_formatter::CycloneDxJsonFormatter;
pub use cyclonedx_xml_formatter::CycloneDxXmlFormatter;
