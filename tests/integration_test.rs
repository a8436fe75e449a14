/// Integration tests for the application layer
mod test_utilities;

use npm_sbom::prelude::*;
use serde_json::{json, Value};
use std::path::PathBuf;
use test_utilities::mocks::*;

const SIMPLE_TREE: &str = r#"{
  "name": "my-app",
  "version": "1.0.0",
  "keywords": ["web"],
  "dependencies": {
    "foo": {
      "name": "foo",
      "version": "1.0.0",
      "homepage": "https://foo.example.com",
      "dependencies": {}
    }
  }
}"#;

const DIAMOND_TREE: &str = r#"{
  "name": "app",
  "version": "1.0.0",
  "dependencies": {
    "left": {
      "name": "left",
      "version": "1.0.0",
      "dependencies": {
        "@scope/shared": {"name": "@scope/shared", "version": "2.0.0", "dependencies": {}}
      }
    },
    "right": {
      "name": "right",
      "version": "1.0.0",
      "dependencies": {
        "@scope/shared": {"name": "@scope/shared", "version": "2.0.0", "dependencies": {}}
      }
    }
  }
}"#;

const CYCLE_TREE: &str = r#"{
  "name": "app",
  "version": "1.0.0",
  "dependencies": {
    "a": {
      "name": "a",
      "version": "1.0.0",
      "dependencies": {
        "b": {
          "name": "b",
          "version": "1.0.0",
          "dependencies": {
            "a": "a@1.0.0 (cycle)"
          }
        }
      }
    }
  }
}"#;

const EXTRANEOUS_TREE: &str = r#"{
  "name": "app",
  "version": "1.0.0",
  "dependencies": {
    "dev-only": {"name": "dev-only", "version": "1.0.0", "extraneous": true},
    "lint": {"name": "lint", "version": "2.0.0", "extraneous": true}
  }
}"#;

fn generate(
    tree: &str,
    lockfile: MockLockfileReader,
) -> (SbomResponse, MockProgressReporter) {
    let progress_reporter = MockProgressReporter::new();
    let use_case = GenerateSbomUseCase::new(
        MockPackageTreeReader::new(tree),
        lockfile,
        MockMetadataExtractor::new().with_license("foo", "MIT"),
        progress_reporter.clone(),
    );

    let request = SbomRequest::builder(PathBuf::from("."))
        .build()
        .unwrap();
    (use_case.execute(request).unwrap(), progress_reporter)
}

fn render(bom: &Bom, format: OutputFormat, options: RenderOptions) -> String {
    RenderSbomUseCase::new(MockBomDocumentReader::new(), MockProgressReporter::new())
        .execute(bom, format, options, &[])
        .unwrap()
}

#[test]
fn test_generate_sbom_empty_package() {
    let (response, _) = generate(r#"{"name": "app", "version": "1.0.0"}"#, MockLockfileReader::empty());

    assert!(response.bom.components().is_empty());
    assert!(response.bom.dependencies().is_empty());
    assert_eq!(
        response.bom.metadata().component().unwrap().name(),
        "app"
    );
}

#[test]
fn test_generate_sbom_single_dependency() {
    let (response, _) = generate(SIMPLE_TREE, MockLockfileReader::empty());
    let bom = &response.bom;

    assert_eq!(bom.components().len(), 1);
    let foo = &bom.components()[0];
    assert_eq!(foo.purl().unwrap().as_str(), "pkg:npm/foo@1.0.0");
    assert_eq!(foo.bom_ref(), Some("pkg:npm/foo@1.0.0"));

    let root_edge = bom
        .dependencies()
        .iter()
        .find(|d| d.reference().as_str() == "pkg:npm/my-app@1.0.0")
        .unwrap();
    assert_eq!(root_edge.depends_on().len(), 1);
    assert_eq!(root_edge.depends_on()[0].as_str(), "pkg:npm/foo@1.0.0");
}

#[test]
fn test_generate_sbom_diamond_dependency() {
    let (response, _) = generate(DIAMOND_TREE, MockLockfileReader::empty());
    let bom = &response.bom;

    let shared: Vec<_> = bom
        .components()
        .iter()
        .filter(|c| c.name() == "shared")
        .collect();
    assert_eq!(shared.len(), 1);
    assert_eq!(shared[0].group(), Some("@scope"));

    let shared_purl = "pkg:npm/%40scope/shared@2.0.0";
    for parent in ["pkg:npm/left@1.0.0", "pkg:npm/right@1.0.0"] {
        let edge = bom
            .dependencies()
            .iter()
            .find(|d| d.reference().as_str() == parent)
            .unwrap();
        assert_eq!(edge.depends_on()[0].as_str(), shared_purl);
    }
}

#[test]
fn test_generate_sbom_cycle_terminates() {
    let (response, _) = generate(CYCLE_TREE, MockLockfileReader::empty());
    let bom = &response.bom;

    assert_eq!(bom.components().len(), 2);
    let b_edge = bom
        .dependencies()
        .iter()
        .find(|d| d.reference().as_str() == "pkg:npm/b@1.0.0")
        .unwrap();
    assert!(b_edge.depends_on().is_empty());
}

#[test]
fn test_generate_sbom_all_extraneous() {
    let (response, _) = generate(EXTRANEOUS_TREE, MockLockfileReader::empty());
    let bom = &response.bom;

    assert!(bom.components().is_empty());
    assert_eq!(bom.dependencies().len(), 1);
    assert_eq!(bom.dependencies()[0].reference().as_str(), "pkg:npm/app@1.0.0");
    assert!(bom.dependencies()[0].depends_on().is_empty());
}

#[test]
fn test_generate_sbom_uses_lockfile_hashes() {
    let lockfile = MockLockfileReader::new(json!({
        "lockfileVersion": 3,
        "packages": {
            "node_modules/foo": {"version": "1.0.0", "integrity": "0123456789abcdef0123456789abcdef01234567"}
        }
    }));

    let (response, _) = generate(SIMPLE_TREE, lockfile);

    let foo = &response.bom.components()[0];
    assert_eq!(foo.hashes().len(), 1);
    assert_eq!(
        foo.hashes()[0].content(),
        "0123456789abcdef0123456789abcdef01234567"
    );
}

#[test]
fn test_generate_sbom_reports_progress() {
    let (_, progress_reporter) = generate(SIMPLE_TREE, MockLockfileReader::empty());

    let messages = progress_reporter.get_messages();
    assert_eq!(progress_reporter.message_count(), messages.len());
    assert!(progress_reporter.message_count() >= 2);
    assert!(messages
        .iter()
        .any(|m| m.contains("Loading resolved package tree")));
    assert!(messages.iter().any(|m| m.contains("1 component(s)")));
}

#[test]
fn test_json_output_fields() {
    let (response, _) = generate(SIMPLE_TREE, MockLockfileReader::empty());
    let output = render(&response.bom, OutputFormat::Json, RenderOptions::default());

    let value: Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["bomFormat"], "CycloneDX");
    assert_eq!(value["specVersion"], "1.3");
    assert_eq!(value["version"], 1);
    assert!(value["serialNumber"]
        .as_str()
        .unwrap()
        .starts_with("urn:uuid:"));
    assert_eq!(value["metadata"]["component"]["name"], "my-app");
    assert_eq!(value["components"][0]["purl"], "pkg:npm/foo@1.0.0");
    assert_eq!(value["components"][0]["licenses"][0]["license"]["id"], "MIT");
    assert_eq!(
        value["components"][0]["externalReferences"][0]["type"],
        "website"
    );
}

#[test]
fn test_default_mode_output_differs_only_by_serial_number() {
    let (first, _) = generate(SIMPLE_TREE, MockLockfileReader::empty());
    let (second, _) = generate(SIMPLE_TREE, MockLockfileReader::empty());

    let normalize = |bom: &Bom| {
        let mut value: Value =
            serde_json::from_str(&render(bom, OutputFormat::Json, RenderOptions::default()))
                .unwrap();
        value.as_object_mut().unwrap().remove("serialNumber");
        value["metadata"].as_object_mut().unwrap().remove("timestamp");
        value
    };

    assert_ne!(first.bom.serial_number(), second.bom.serial_number());
    assert_eq!(normalize(&first.bom), normalize(&second.bom));
}

#[test]
fn test_reproducible_output_is_byte_identical_across_runs() {
    let (first, _) = generate(DIAMOND_TREE, MockLockfileReader::empty());
    let (second, _) = generate(DIAMOND_TREE, MockLockfileReader::empty());

    for format in [OutputFormat::Json, OutputFormat::Xml] {
        let a = render(&first.bom, format, RenderOptions::reproducible());
        let b = render(&second.bom, format, RenderOptions::reproducible());
        assert_eq!(a, b);
        assert!(!a.contains("urn:uuid:"));
    }
}

#[test]
fn test_xml_and_json_encode_same_components() {
    let (response, _) = generate(DIAMOND_TREE, MockLockfileReader::empty());

    let json_output = render(&response.bom, OutputFormat::Json, RenderOptions::default());
    let xml_output = render(&response.bom, OutputFormat::Xml, RenderOptions::default());

    let value: Value = serde_json::from_str(&json_output).unwrap();
    for component in value["components"].as_array().unwrap() {
        let purl = component["purl"].as_str().unwrap();
        assert!(xml_output.contains(&format!("<purl>{}</purl>", purl)));
    }
    assert!(xml_output.contains("<dependencies>"));
}

#[test]
fn test_merge_into_empty_primary_keeps_duplicates() {
    let external = r#"<?xml version="1.0" encoding="UTF-8"?>
<bom xmlns="http://cyclonedx.org/schema/bom/1.3" version="1">
  <components>
    <component type="library"><name>vendored</name><version>1.0.0</version></component>
  </components>
</bom>"#;
    let reader = MockBomDocumentReader::new()
        .with_document("ext1.xml", external)
        .with_document("ext2.xml", external);
    let progress_reporter = MockProgressReporter::new();
    let (response, _) = generate(r#"{"name": "app", "version": "1.0.0"}"#, MockLockfileReader::empty());

    let output = RenderSbomUseCase::new(reader, progress_reporter.clone())
        .execute(
            &response.bom,
            OutputFormat::Xml,
            RenderOptions::default(),
            &[PathBuf::from("ext1.xml"), PathBuf::from("ext2.xml")],
        )
        .unwrap();

    assert_eq!(output.matches("<name>vendored</name>").count(), 2);
    assert_eq!(progress_reporter.progress_updates().len(), 2);
}

#[test]
fn test_merge_rejected_for_json_output() {
    let (response, _) = generate(SIMPLE_TREE, MockLockfileReader::empty());

    let result = RenderSbomUseCase::new(MockBomDocumentReader::new(), MockProgressReporter::new())
        .execute(
            &response.bom,
            OutputFormat::Json,
            RenderOptions::default(),
            &[PathBuf::from("ext.xml")],
        );

    assert!(result.is_err());
}

#[test]
fn test_merge_prefixed_document_keeps_names_bound() {
    use quick_xml::events::Event;
    use quick_xml::name::{Namespace, ResolveResult};
    use quick_xml::NsReader;

    let external = r#"<?xml version="1.0" encoding="UTF-8"?>
<bom:bom xmlns:bom="http://cyclonedx.org/schema/bom/1.3" xmlns:ext="urn:example:ext" version="1">
  <bom:components>
    <bom:component type="library" ext:origin="vendor">
      <bom:name>prefixed</bom:name>
      <bom:version>2.0.0</bom:version>
      <ext:note>kept</ext:note>
    </bom:component>
  </bom:components>
</bom:bom>"#;
    let reader = MockBomDocumentReader::new().with_document("prefixed.xml", external);
    let (response, _) = generate(SIMPLE_TREE, MockLockfileReader::empty());

    let output = RenderSbomUseCase::new(reader, MockProgressReporter::new())
        .execute(
            &response.bom,
            OutputFormat::Xml,
            RenderOptions::default(),
            &[PathBuf::from("prefixed.xml")],
        )
        .unwrap();

    const CYCLONEDX_1_3: &[u8] = b"http://cyclonedx.org/schema/bom/1.3";
    let mut xml = NsReader::from_str(&output);
    let mut component_names = Vec::new();
    let mut inside_name = false;
    loop {
        let (resolved, event) = xml.read_resolved_event().unwrap();
        let namespace = match resolved {
            ResolveResult::Bound(Namespace(uri)) => Ok(Some(uri.to_vec())),
            ResolveResult::Unbound => Ok(None),
            ResolveResult::Unknown(prefix) => Err(prefix),
        };
        match event {
            Event::Eof => break,
            Event::Start(start) => {
                let namespace = namespace.unwrap_or_else(|prefix| {
                    panic!(
                        "unbound prefix {} on <{}>",
                        String::from_utf8_lossy(&prefix),
                        String::from_utf8_lossy(start.name().as_ref())
                    )
                });
                for attribute in start.attributes() {
                    let attribute = attribute.unwrap();
                    let (resolved, _) = xml.resolve_attribute(attribute.key);
                    assert!(!matches!(resolved, ResolveResult::Unknown(_)));
                }
                let local = start.local_name();
                if local.as_ref() == b"component" || local.as_ref() == b"name" {
                    assert_eq!(namespace.as_deref(), Some(CYCLONEDX_1_3));
                }
                inside_name = local.as_ref() == b"name";
            }
            Event::Text(text) if inside_name => {
                component_names.push(text.unescape().unwrap().into_owned());
                inside_name = false;
            }
            Event::End(_) => inside_name = false,
            _ => {}
        }
    }

    assert!(component_names.contains(&"prefixed".to_string()));
    assert!(component_names.contains(&"foo".to_string()));
    assert!(output.contains("xmlns:ext=\"urn:example:ext\""));
}
