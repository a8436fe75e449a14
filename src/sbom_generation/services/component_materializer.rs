use crate::sbom_generation::domain::validation;
use crate::sbom_generation::domain::{
    Component, ComponentType, ExternalReference, Hash, LicenseChoice, PackageRecord, PackageUrl,
};
use crate::shared::Result;

/// Keyword that upgrades a package from library to framework
const FRAMEWORK_KEYWORD: &str = "framework";

/// Finished metadata value objects produced by the metadata extractors
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractedMetadata {
    pub licenses: Option<LicenseChoice>,
    pub hashes: Vec<Hash>,
    pub external_references: Vec<ExternalReference>,
}

/// ComponentMaterializer service turning one package record into a Component
///
/// Descriptive fields that fail validation are dropped instead of failing
/// the conversion. Only a record without any usable name is rejected.
pub struct ComponentMaterializer;

impl ComponentMaterializer {
    /// Materializes a component from a package record
    ///
    /// # Arguments
    /// * `record` - The resolved package record
    /// * `metadata` - Licenses, hashes and references extracted for the record
    ///
    /// # Returns
    /// The component, or an error if the record has no valid name
    pub fn materialize(record: &PackageRecord, metadata: ExtractedMetadata) -> Result<Component> {
        let (group, name) = record.split_name().unwrap_or((None, ""));
        let mut component = Component::new(Self::component_type(record), name)?;

        if let Some(group) = group {
            tolerate(record, "group", component.set_group(group));
        }
        if let Some(version) = record.version.as_deref() {
            tolerate(record, "version", component.set_version(version));
        }
        if let Some(description) = record.description.as_deref() {
            tolerate(record, "description", component.set_description(description));
        }
        if let Some(author) = record.author_name() {
            tolerate(record, "author", component.set_author(author));
        }

        if let Some(purl) = Self::identify(record) {
            component.set_package_url(purl);
        }

        component.set_licenses(metadata.licenses);
        component.set_hashes(metadata.hashes);
        component.set_external_references(metadata.external_references);

        Ok(component)
    }

    /// Package URL of the record, if its name and version are usable
    ///
    /// Applies the same field validation as [`Self::materialize`], so a
    /// record gets an identifier exactly when its component would.
    pub fn identify(record: &PackageRecord) -> Option<PackageUrl> {
        let (group, name) = record.split_name()?;
        let version = record.version.as_deref()?;

        validation::validate("Name", name, validation::NAME).ok()?;
        if let Some(group) = group {
            validation::validate("Group", group, validation::GROUP).ok()?;
        }
        validation::validate("Version", version, validation::VERSION).ok()?;

        PackageUrl::npm(group, Some(name), Some(version))
    }

    /// Framework when a keyword says so, library otherwise
    pub fn component_type(record: &PackageRecord) -> ComponentType {
        if record
            .keywords()
            .any(|keyword| keyword.eq_ignore_ascii_case(FRAMEWORK_KEYWORD))
        {
            ComponentType::Framework
        } else {
            ComponentType::Library
        }
    }
}

fn tolerate(record: &PackageRecord, field: &str, outcome: Result<()>) {
    if let Err(e) = outcome {
        tracing::warn!(
            package = record.name.as_deref().unwrap_or_default(),
            field,
            "ignoring invalid package field: {}",
            e
        );
    }
}
