use super::xml_codec;
use crate::ports::outbound::{MarkupRenderer, RenderOptions, SbomFormatter};
use crate::sbom_generation::domain::{
    AttachedText, Bom, Component, Dependency, ExternalReference, Hash, LicenseChoice, LicenseId,
    MarkupElement, Metadata, OrganizationalEntity, Swid, Tool,
};
use crate::sbom_generation::policies::ReproducibleOrdering;
use crate::shared::Result;

/// Namespace URI of a CycloneDX document, templated with the schema version
fn namespace(schema_version: &str) -> String {
    format!("http://cyclonedx.org/schema/bom/{}", schema_version)
}

/// CycloneDxXmlFormatter adapter for CycloneDX 1.3 XML output
///
/// Builds a [`MarkupElement`] tree mirroring the JSON formatter field for
/// field, then writes it with two-space indentation.
pub struct CycloneDxXmlFormatter;

impl CycloneDxXmlFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CycloneDxXmlFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkupRenderer for CycloneDxXmlFormatter {
    fn build_tree(&self, bom: &Bom, options: &RenderOptions) -> MarkupElement {
        let mut root = MarkupElement::new("bom")
            .with_attribute("xmlns", namespace(bom.schema_version()));
        if let Some(serial) = bom.serial_number().filter(|_| !options.reproducible) {
            root = root.with_attribute("serialNumber", serial);
        }
        root = root.with_attribute("version", bom.version().to_string());

        root.push_child(metadata_element(bom.metadata(), options));

        let mut components = MarkupElement::new("components");
        if options.reproducible {
            for component in ReproducibleOrdering::sorted_components(bom.components()) {
                components.push_child(component_element(component));
            }
        } else {
            for component in bom.components() {
                components.push_child(component_element(component));
            }
        }
        root.push_child(components);

        if !bom.dependencies().is_empty() {
            let mut dependencies = MarkupElement::new("dependencies");
            if options.reproducible {
                for dependency in ReproducibleOrdering::sorted_dependencies(bom.dependencies()) {
                    dependencies.push_child(dependency_element(&dependency));
                }
            } else {
                for dependency in bom.dependencies() {
                    dependencies.push_child(dependency_element(dependency));
                }
            }
            root.push_child(dependencies);
        }

        root
    }

    fn write_tree(&self, tree: &MarkupElement) -> Result<String> {
        xml_codec::write_document(tree)
    }
}

impl SbomFormatter for CycloneDxXmlFormatter {
    fn format(&self, bom: &Bom, options: &RenderOptions) -> Result<String> {
        self.write_tree(&self.build_tree(bom, options))
    }
}

fn metadata_element(metadata: &Metadata, options: &RenderOptions) -> MarkupElement {
    let mut element = MarkupElement::new("metadata");
    if let Some(timestamp) = metadata.timestamp().filter(|_| !options.reproducible) {
        element.push_child(MarkupElement::text_element("timestamp", timestamp));
    }

    let mut tools = MarkupElement::new("tools");
    for tool in metadata.tools() {
        tools.push_child(tool_element(tool));
    }
    element.push_child(tools);

    if let Some(component) = metadata.component() {
        element.push_child(component_element(component));
    }
    element
}

fn tool_element(tool: &Tool) -> MarkupElement {
    MarkupElement::new("tool")
        .with_child(MarkupElement::text_element("vendor", tool.vendor()))
        .with_child(MarkupElement::text_element("name", tool.name()))
        .with_child(MarkupElement::text_element("version", tool.version()))
}

fn component_element(component: &Component) -> MarkupElement {
    let mut element =
        MarkupElement::new("component").with_attribute("type", component.component_type().as_str());
    if let Some(bom_ref) = component.bom_ref() {
        element = element.with_attribute("bom-ref", bom_ref);
    }

    if let Some(supplier) = component.supplier() {
        element.push_child(supplier_element(supplier));
    }
    push_optional(&mut element, "author", component.author());
    push_optional(&mut element, "publisher", component.publisher());
    push_optional(&mut element, "group", component.group());
    element.push_child(MarkupElement::text_element("name", component.name()));
    element.push_child(MarkupElement::text_element(
        "version",
        component.version().unwrap_or_default(),
    ));
    if let Some(description) = component.description() {
        element.push_child(MarkupElement::new("description").with_cdata(description));
    }
    push_optional(&mut element, "scope", component.scope().map(|s| s.as_str()));

    if !component.hashes().is_empty() {
        let mut hashes = MarkupElement::new("hashes");
        for hash in component.hashes() {
            hashes.push_child(hash_element(hash));
        }
        element.push_child(hashes);
    }

    if let Some(licenses) = component.licenses() {
        element.push_child(licenses_element(licenses));
    }

    push_optional(&mut element, "copyright", component.copyright());
    push_optional(&mut element, "cpe", component.cpe());
    push_optional(&mut element, "purl", component.purl().map(|p| p.as_str()));
    if let Some(swid) = component.swid() {
        element.push_child(swid_element(swid));
    }

    if let Some(references) = component.external_references() {
        let mut container = MarkupElement::new("externalReferences");
        for reference in references {
            container.push_child(reference_element(reference));
        }
        element.push_child(container);
    }

    element
}

fn push_optional(parent: &mut MarkupElement, name: &str, value: Option<&str>) {
    if let Some(value) = value {
        parent.push_child(MarkupElement::text_element(name, value));
    }
}

fn text_element(text: &AttachedText) -> MarkupElement {
    MarkupElement::text_element("text", text.content())
        .with_attribute("content-type", text.content_type())
}

fn supplier_element(supplier: &OrganizationalEntity) -> MarkupElement {
    let mut element = MarkupElement::new("supplier");
    push_optional(&mut element, "name", supplier.name());
    for url in supplier.urls() {
        element.push_child(MarkupElement::text_element("url", url.as_str()));
    }
    for contact in supplier.contacts() {
        let mut contact_element = MarkupElement::new("contact");
        push_optional(&mut contact_element, "name", contact.name());
        push_optional(&mut contact_element, "email", contact.email());
        push_optional(&mut contact_element, "phone", contact.phone());
        element.push_child(contact_element);
    }
    element
}

fn swid_element(swid: &Swid) -> MarkupElement {
    let mut element = MarkupElement::new("swid")
        .with_attribute("tagId", swid.tag_id())
        .with_attribute("name", swid.name());
    if let Some(version) = swid.version() {
        element = element.with_attribute("version", version);
    }
    if let Some(tag_version) = swid.tag_version() {
        element = element.with_attribute("tagVersion", tag_version.to_string());
    }
    if let Some(patch) = swid.patch() {
        element = element.with_attribute("patch", patch.to_string());
    }
    if let Some(text) = swid.text() {
        element.push_child(text_element(text));
    }
    push_optional(&mut element, "url", swid.url());
    element
}

fn hash_element(hash: &Hash) -> MarkupElement {
    MarkupElement::text_element("hash", hash.content())
        .with_attribute("alg", hash.algorithm().as_str())
}

fn licenses_element(choice: &LicenseChoice) -> MarkupElement {
    let mut element = MarkupElement::new("licenses");
    match choice {
        LicenseChoice::Expression(expression) => {
            element.push_child(MarkupElement::text_element("expression", expression.as_str()));
        }
        LicenseChoice::Licenses(licenses) => {
            for license in licenses {
                let mut license_element = MarkupElement::new("license");
                license_element.push_child(match license.id() {
                    LicenseId::Spdx(id) => MarkupElement::text_element("id", id.as_str()),
                    LicenseId::Name(name) => MarkupElement::text_element("name", name.as_str()),
                });
                if let Some(text) = license.text() {
                    license_element.push_child(text_element(text));
                }
                push_optional(&mut license_element, "url", license.url());
                element.push_child(license_element);
            }
        }
    }
    element
}

fn reference_element(reference: &ExternalReference) -> MarkupElement {
    let mut element = MarkupElement::new("reference")
        .with_attribute("type", reference.reference_type().as_str())
        .with_child(MarkupElement::text_element("url", reference.url()));
    push_optional(&mut element, "comment", reference.comment());
    element
}

fn dependency_element(dependency: &Dependency) -> MarkupElement {
    let mut element = MarkupElement::new("dependency")
        .with_attribute("ref", dependency.reference().as_str());
    for target in dependency.depends_on() {
        element.push_child(MarkupElement::new("dependency").with_attribute("ref", target.as_str()));
    }
    element
}
