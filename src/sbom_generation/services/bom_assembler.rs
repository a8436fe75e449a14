use super::graph_walker::GraphWalkOutcome;
use crate::sbom_generation::domain::{Bom, Metadata, Tool};
use crate::shared::Result;
use chrono::{SecondsFormat, Utc};

/// Vendor recorded in the tool provenance
pub const TOOL_VENDOR: &str = "CycloneDX";

/// Tool name recorded in the tool provenance
pub const TOOL_NAME: &str = "npm-sbom";

/// Options controlling document assembly
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssemblyOptions {
    /// Generate a fresh `urn:uuid:` serial number
    pub include_serial_number: bool,
    /// Document revision, at least 1
    pub version: u32,
}

impl Default for AssemblyOptions {
    fn default() -> Self {
        Self {
            include_serial_number: true,
            version: 1,
        }
    }
}

/// BomAssembler service combining a walked tree into one document
///
/// This service contains pure business logic for BOM assembly.
/// It generates the timestamp, tool provenance and serial number.
pub struct BomAssembler;

impl BomAssembler {
    /// Assembles a BOM from the graph walker's outcome
    ///
    /// # Arguments
    /// * `outcome` - Root component, components and edges from the walk
    /// * `options` - Serial number and version settings
    ///
    /// # Returns
    /// The assembled document with components and edges in walk order
    pub fn assemble(outcome: GraphWalkOutcome, options: AssemblyOptions) -> Result<Bom> {
        let metadata = Metadata::new(
            Some(Self::timestamp()),
            vec![Self::default_tool()],
            Some(outcome.root),
        );

        let mut bom = Bom::new(metadata);
        bom.set_version(options.version)?;
        if options.include_serial_number {
            bom.set_serial_number(Some(&Bom::generate_serial_number()))?;
        }

        for component in outcome.components {
            bom.add_component(component);
        }
        for dependency in outcome.dependencies {
            bom.add_dependency(dependency);
        }

        Ok(bom)
    }

    /// Current time in RFC 3339 with millisecond precision
    pub fn timestamp() -> String {
        Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    /// Tool provenance using the compile-time version from Cargo.toml
    pub fn default_tool() -> Tool {
        Tool::new(TOOL_VENDOR, TOOL_NAME, env!("CARGO_PKG_VERSION"))
    }
}
