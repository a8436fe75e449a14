use super::validation::{self, FieldValidator};
use super::{ExternalReference, Hash, LicenseChoice, OrganizationalEntity, PackageUrl, Swid};
use crate::shared::error::SbomError;
use crate::shared::Result;
use std::fmt;
use std::str::FromStr;

/// Component types supported by the CycloneDX 1.3 schema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum ComponentType {
    Application,
    Framework,
    #[default]
    Library,
    Container,
    OperatingSystem,
    Device,
    Firmware,
    File,
}

impl ComponentType {
    pub const ALL: [ComponentType; 8] = [
        ComponentType::Application,
        ComponentType::Framework,
        ComponentType::Library,
        ComponentType::Container,
        ComponentType::OperatingSystem,
        ComponentType::Device,
        ComponentType::Firmware,
        ComponentType::File,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentType::Application => "application",
            ComponentType::Framework => "framework",
            ComponentType::Library => "library",
            ComponentType::Container => "container",
            ComponentType::OperatingSystem => "operating-system",
            ComponentType::Device => "device",
            ComponentType::Firmware => "firmware",
            ComponentType::File => "file",
        }
    }
}

impl FromStr for ComponentType {
    type Err = SbomError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        ComponentType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| {
                SbomError::validation(format!(
                    "Invalid component type: {}. Supported types: {}",
                    s,
                    ComponentType::ALL.map(|t| t.as_str()).join(", ")
                ))
            })
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Component scopes supported by the CycloneDX 1.3 schema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentScope {
    Required,
    Optional,
    Excluded,
}

impl ComponentScope {
    pub const ALL: [ComponentScope; 3] = [
        ComponentScope::Required,
        ComponentScope::Optional,
        ComponentScope::Excluded,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentScope::Required => "required",
            ComponentScope::Optional => "optional",
            ComponentScope::Excluded => "excluded",
        }
    }
}

impl FromStr for ComponentScope {
    type Err = SbomError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        ComponentScope::ALL
            .into_iter()
            .find(|scope| scope.as_str() == s)
            .ok_or_else(|| {
                SbomError::validation(format!(
                    "Invalid component scope: {}. Supported scopes: required, optional, excluded",
                    s
                ))
            })
    }
}

impl fmt::Display for ComponentScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Component - one inventoried unit of the BOM
///
/// Fields are private; every string field goes through its validators when
/// it is set, so an invalid component can never reach a formatter.
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    component_type: ComponentType,
    supplier: Option<OrganizationalEntity>,
    name: String,
    group: Option<String>,
    version: Option<String>,
    description: Option<String>,
    author: Option<String>,
    publisher: Option<String>,
    copyright: Option<String>,
    cpe: Option<String>,
    scope: Option<ComponentScope>,
    purl: Option<PackageUrl>,
    swid: Option<Swid>,
    bom_ref: Option<String>,
    hashes: Vec<Hash>,
    licenses: Option<LicenseChoice>,
    external_references: Option<Vec<ExternalReference>>,
}

fn checked(field: &str, value: &str, validators: &[FieldValidator]) -> Result<String> {
    validation::validate(field, value, validators)?;
    Ok(value.to_string())
}

impl Component {
    pub fn new(component_type: ComponentType, name: &str) -> Result<Self> {
        Ok(Self {
            component_type,
            supplier: None,
            name: checked("Name", name, validation::NAME)?,
            group: None,
            version: None,
            description: None,
            author: None,
            publisher: None,
            copyright: None,
            cpe: None,
            scope: None,
            purl: None,
            swid: None,
            bom_ref: None,
            hashes: Vec::new(),
            licenses: None,
            external_references: None,
        })
    }

    pub fn set_component_type(&mut self, component_type: ComponentType) {
        self.component_type = component_type;
    }

    pub fn set_name(&mut self, name: &str) -> Result<()> {
        self.name = checked("Name", name, validation::NAME)?;
        Ok(())
    }

    pub fn set_group(&mut self, group: &str) -> Result<()> {
        self.group = Some(checked("Group", group, validation::GROUP)?);
        Ok(())
    }

    pub fn set_version(&mut self, version: &str) -> Result<()> {
        self.version = Some(checked("Version", version, validation::VERSION)?);
        Ok(())
    }

    pub fn set_description(&mut self, description: &str) -> Result<()> {
        self.description = Some(checked("Description", description, validation::TEXT)?);
        Ok(())
    }

    pub fn set_author(&mut self, author: &str) -> Result<()> {
        self.author = Some(checked("Author", author, validation::TEXT)?);
        Ok(())
    }

    pub fn set_publisher(&mut self, publisher: &str) -> Result<()> {
        self.publisher = Some(checked("Publisher", publisher, validation::TEXT)?);
        Ok(())
    }

    pub fn set_copyright(&mut self, copyright: &str) -> Result<()> {
        self.copyright = Some(checked("Copyright", copyright, validation::TEXT)?);
        Ok(())
    }

    pub fn set_cpe(&mut self, cpe: &str) -> Result<()> {
        let cpe = checked("CPE", cpe, validation::REFERENCE)?;
        if !cpe.starts_with("cpe:") {
            return Err(SbomError::validation("CPE must start with 'cpe:'").into());
        }
        self.cpe = Some(cpe);
        Ok(())
    }

    pub fn set_scope(&mut self, scope: Option<ComponentScope>) {
        self.scope = scope;
    }

    pub fn set_bom_ref(&mut self, bom_ref: &str) -> Result<()> {
        self.bom_ref = Some(checked("bom-ref", bom_ref, validation::REFERENCE)?);
        Ok(())
    }

    /// Publishes the package URL both as `purl` and as the public `bom-ref`
    pub fn set_package_url(&mut self, purl: PackageUrl) {
        self.bom_ref = Some(purl.as_str().to_string());
        self.purl = Some(purl);
    }

    /// A supplier without any field is stored as absent
    pub fn set_supplier(&mut self, supplier: Option<OrganizationalEntity>) {
        self.supplier = supplier.filter(|entity| !entity.is_empty());
    }

    pub fn set_swid(&mut self, swid: Option<Swid>) {
        self.swid = swid;
    }

    pub fn set_hashes(&mut self, hashes: Vec<Hash>) {
        self.hashes = hashes;
    }

    pub fn set_licenses(&mut self, licenses: Option<LicenseChoice>) {
        self.licenses = licenses.filter(|choice| !choice.is_empty());
    }

    /// An empty list is stored as absent
    pub fn set_external_references(&mut self, references: Vec<ExternalReference>) {
        self.external_references = if references.is_empty() {
            None
        } else {
            Some(references)
        };
    }

    pub fn component_type(&self) -> ComponentType {
        self.component_type
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn group(&self) -> Option<&str> {
        self.group.as_deref()
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    pub fn publisher(&self) -> Option<&str> {
        self.publisher.as_deref()
    }

    pub fn copyright(&self) -> Option<&str> {
        self.copyright.as_deref()
    }

    pub fn cpe(&self) -> Option<&str> {
        self.cpe.as_deref()
    }

    pub fn scope(&self) -> Option<ComponentScope> {
        self.scope
    }

    pub fn purl(&self) -> Option<&PackageUrl> {
        self.purl.as_ref()
    }

    pub fn supplier(&self) -> Option<&OrganizationalEntity> {
        self.supplier.as_ref()
    }

    pub fn swid(&self) -> Option<&Swid> {
        self.swid.as_ref()
    }

    pub fn bom_ref(&self) -> Option<&str> {
        self.bom_ref.as_deref()
    }

    pub fn hashes(&self) -> &[Hash] {
        &self.hashes
    }

    pub fn licenses(&self) -> Option<&LicenseChoice> {
        self.licenses.as_ref()
    }

    pub fn external_references(&self) -> Option<&[ExternalReference]> {
        self.external_references.as_deref()
    }
}
