use crate::ports::outbound::{RenderOptions, SbomFormatter};
use crate::sbom_generation::domain::{
    AttachedText, Bom, Component, Dependency, ExternalReference, Hash, LicenseChoice, LicenseId,
    OrganizationalContact, OrganizationalEntity, Swid, Tool,
};
use crate::sbom_generation::policies::ReproducibleOrdering;
use crate::shared::Result;
use serde::Serialize;

/// Value of the `bomFormat` key
const BOM_FORMAT: &str = "CycloneDX";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BomDocument<'a> {
    bom_format: &'static str,
    spec_version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    serial_number: Option<&'a str>,
    version: u32,
    metadata: MetadataDocument<'a>,
    components: Vec<ComponentDocument<'a>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    dependencies: Vec<DependencyDocument<'a>>,
}

#[derive(Debug, Serialize)]
struct MetadataDocument<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    timestamp: Option<&'a str>,
    tools: Vec<ToolDocument<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    component: Option<ComponentDocument<'a>>,
}

#[derive(Debug, Serialize)]
struct ToolDocument<'a> {
    vendor: &'a str,
    name: &'a str,
    version: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ComponentDocument<'a> {
    #[serde(rename = "type")]
    component_type: &'static str,
    #[serde(rename = "bom-ref", skip_serializing_if = "Option::is_none")]
    bom_ref: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    supplier: Option<OrganizationalEntityDocument<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    author: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    publisher: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    group: Option<&'a str>,
    name: &'a str,
    version: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    scope: Option<&'static str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    hashes: Vec<HashDocument<'a>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    licenses: Vec<LicenseChoiceDocument<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    copyright: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cpe: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    purl: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    swid: Option<SwidDocument<'a>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    external_references: Vec<ExternalReferenceDocument<'a>>,
}

#[derive(Debug, Serialize)]
struct OrganizationalEntityDocument<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
    #[serde(skip_serializing_if = "<[String]>::is_empty")]
    url: &'a [String],
    #[serde(skip_serializing_if = "Vec::is_empty")]
    contact: Vec<OrganizationalContactDocument<'a>>,
}

#[derive(Debug, Serialize)]
struct OrganizationalContactDocument<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    phone: Option<&'a str>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SwidDocument<'a> {
    tag_id: &'a str,
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    version: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tag_version: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    patch: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<AttachedTextDocument<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct HashDocument<'a> {
    alg: &'static str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
enum LicenseChoiceDocument<'a> {
    License(LicenseDocument<'a>),
    Expression(&'a str),
}

#[derive(Debug, Serialize)]
struct LicenseDocument<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<AttachedTextDocument<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<&'a str>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AttachedTextDocument<'a> {
    content_type: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ExternalReferenceDocument<'a> {
    #[serde(rename = "type")]
    reference_type: &'static str,
    url: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    comment: Option<&'a str>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DependencyDocument<'a> {
    #[serde(rename = "ref")]
    reference: &'a str,
    depends_on: Vec<&'a str>,
}

/// CycloneDxJsonFormatter adapter for CycloneDX 1.3 JSON output
///
/// Key order follows the CycloneDX JSON examples. The document is
/// pretty-printed with two-space indentation.
pub struct CycloneDxJsonFormatter;

impl CycloneDxJsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CycloneDxJsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl SbomFormatter for CycloneDxJsonFormatter {
    fn format(&self, bom: &Bom, options: &RenderOptions) -> Result<String> {
        let sorted_dependencies;
        let (components, dependencies): (Vec<&Component>, &[Dependency]) = if options.reproducible
        {
            sorted_dependencies = ReproducibleOrdering::sorted_dependencies(bom.dependencies());
            (
                ReproducibleOrdering::sorted_components(bom.components()),
                sorted_dependencies.as_slice(),
            )
        } else {
            (bom.components().iter().collect(), bom.dependencies())
        };

        let metadata = bom.metadata();
        let document = BomDocument {
            bom_format: BOM_FORMAT,
            spec_version: bom.schema_version(),
            serial_number: bom.serial_number().filter(|_| !options.reproducible),
            version: bom.version(),
            metadata: MetadataDocument {
                timestamp: metadata.timestamp().filter(|_| !options.reproducible),
                tools: metadata.tools().iter().map(tool_document).collect(),
                component: metadata.component().map(component_document),
            },
            components: components.into_iter().map(component_document).collect(),
            dependencies: dependencies.iter().map(dependency_document).collect(),
        };

        Ok(serde_json::to_string_pretty(&document)?)
    }
}

fn tool_document(tool: &Tool) -> ToolDocument<'_> {
    ToolDocument {
        vendor: tool.vendor(),
        name: tool.name(),
        version: tool.version(),
    }
}

fn component_document(component: &Component) -> ComponentDocument<'_> {
    ComponentDocument {
        component_type: component.component_type().as_str(),
        bom_ref: component.bom_ref(),
        supplier: component.supplier().map(organizational_entity_document),
        author: component.author(),
        publisher: component.publisher(),
        group: component.group(),
        name: component.name(),
        version: component.version().unwrap_or_default(),
        description: component.description(),
        scope: component.scope().map(|scope| scope.as_str()),
        hashes: component.hashes().iter().map(hash_document).collect(),
        licenses: component
            .licenses()
            .map(license_documents)
            .unwrap_or_default(),
        copyright: component.copyright(),
        cpe: component.cpe(),
        purl: component.purl().map(|purl| purl.as_str()),
        swid: component.swid().map(swid_document),
        external_references: component
            .external_references()
            .unwrap_or_default()
            .iter()
            .map(external_reference_document)
            .collect(),
    }
}

fn organizational_entity_document(entity: &OrganizationalEntity) -> OrganizationalEntityDocument<'_> {
    OrganizationalEntityDocument {
        name: entity.name(),
        url: entity.urls(),
        contact: entity.contacts().iter().map(contact_document).collect(),
    }
}

fn contact_document(contact: &OrganizationalContact) -> OrganizationalContactDocument<'_> {
    OrganizationalContactDocument {
        name: contact.name(),
        email: contact.email(),
        phone: contact.phone(),
    }
}

fn swid_document(swid: &Swid) -> SwidDocument<'_> {
    SwidDocument {
        tag_id: swid.tag_id(),
        name: swid.name(),
        version: swid.version(),
        tag_version: swid.tag_version(),
        patch: swid.patch(),
        text: swid.text().map(attached_text_document),
        url: swid.url(),
    }
}

fn hash_document(hash: &Hash) -> HashDocument<'_> {
    HashDocument {
        alg: hash.algorithm().as_str(),
        content: hash.content(),
    }
}

fn license_documents(choice: &LicenseChoice) -> Vec<LicenseChoiceDocument<'_>> {
    match choice {
        LicenseChoice::Expression(expression) => {
            vec![LicenseChoiceDocument::Expression(expression)]
        }
        LicenseChoice::Licenses(licenses) => licenses
            .iter()
            .map(|license| {
                let (id, name) = match license.id() {
                    LicenseId::Spdx(id) => (Some(id.as_str()), None),
                    LicenseId::Name(name) => (None, Some(name.as_str())),
                };
                LicenseChoiceDocument::License(LicenseDocument {
                    id,
                    name,
                    text: license.text().map(attached_text_document),
                    url: license.url(),
                })
            })
            .collect(),
    }
}

fn attached_text_document(text: &AttachedText) -> AttachedTextDocument<'_> {
    AttachedTextDocument {
        content_type: text.content_type(),
        content: text.content(),
    }
}

fn external_reference_document(reference: &ExternalReference) -> ExternalReferenceDocument<'_> {
    ExternalReferenceDocument {
        reference_type: reference.reference_type().as_str(),
        url: reference.url(),
        comment: reference.comment(),
    }
}

fn dependency_document(dependency: &Dependency) -> DependencyDocument<'_> {
    DependencyDocument {
        reference: dependency.reference().as_str(),
        depends_on: dependency
            .depends_on()
            .iter()
            .map(|target| target.as_str())
            .collect(),
    }
}
