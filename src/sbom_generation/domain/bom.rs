use super::{Component, Dependency, Metadata};
use crate::shared::error::SbomError;
use crate::shared::Result;
use uuid::Uuid;

/// CycloneDX schema version written by every formatter
pub const SCHEMA_VERSION: &str = "1.3";

const SERIAL_NUMBER_PREFIX: &str = "urn:uuid:";

/// Bom - the assembled software bill of materials
///
/// Holds components in discovery order and dependency edges in the order the
/// graph walker closed them. Formatters may reorder both for reproducible
/// output, the aggregate itself never does.
#[derive(Debug, Clone, PartialEq)]
pub struct Bom {
    version: u32,
    serial_number: Option<String>,
    metadata: Metadata,
    components: Vec<Component>,
    dependencies: Vec<Dependency>,
}

impl Bom {
    pub fn new(metadata: Metadata) -> Self {
        Self {
            version: 1,
            serial_number: None,
            metadata,
            components: Vec::new(),
            dependencies: Vec::new(),
        }
    }

    /// Generates a fresh random serial number
    pub fn generate_serial_number() -> String {
        format!("{}{}", SERIAL_NUMBER_PREFIX, Uuid::new_v4())
    }

    pub fn schema_version(&self) -> &'static str {
        SCHEMA_VERSION
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    /// Sets the document revision; revisions start at 1
    pub fn set_version(&mut self, version: u32) -> Result<()> {
        if version < 1 {
            return Err(SbomError::validation("BOM version must be at least 1").into());
        }
        self.version = version;
        Ok(())
    }

    pub fn serial_number(&self) -> Option<&str> {
        self.serial_number.as_deref()
    }

    /// Sets or clears the serial number
    ///
    /// A serial number must be a UUID URN (`urn:uuid:<uuid>`).
    pub fn set_serial_number(&mut self, serial_number: Option<&str>) -> Result<()> {
        if let Some(serial) = serial_number {
            let valid = serial
                .strip_prefix(SERIAL_NUMBER_PREFIX)
                .is_some_and(|uuid| Uuid::parse_str(uuid).is_ok());
            if !valid {
                return Err(SbomError::validation(format!(
                    "Invalid serial number: {}. Expected format: urn:uuid:<uuid>",
                    serial
                ))
                .into());
            }
        }
        self.serial_number = serial_number.map(str::to_string);
        Ok(())
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    pub fn metadata_mut(&mut self) -> &mut Metadata {
        &mut self.metadata
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn dependencies(&self) -> &[Dependency] {
        &self.dependencies
    }

    pub fn add_component(&mut self, component: Component) {
        self.components.push(component);
    }

    pub fn add_dependency(&mut self, dependency: Dependency) {
        self.dependencies.push(dependency);
    }
}
