use super::Component;

/// Tool value object - the program that produced the BOM
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tool {
    vendor: String,
    name: String,
    version: String,
}

impl Tool {
    pub fn new(vendor: &str, name: &str, version: &str) -> Self {
        Self {
            vendor: vendor.to_string(),
            name: name.to_string(),
            version: version.to_string(),
        }
    }

    pub fn vendor(&self) -> &str {
        &self.vendor
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }
}

/// Metadata - generation time, tooling and the subject of the BOM
#[derive(Debug, Clone, PartialEq)]
pub struct Metadata {
    timestamp: Option<String>,
    tools: Vec<Tool>,
    component: Option<Component>,
}

impl Metadata {
    pub fn new(timestamp: Option<String>, tools: Vec<Tool>, component: Option<Component>) -> Self {
        Self {
            timestamp,
            tools,
            component,
        }
    }

    pub fn timestamp(&self) -> Option<&str> {
        self.timestamp.as_deref()
    }

    pub fn tools(&self) -> &[Tool] {
        &self.tools
    }

    pub fn component(&self) -> Option<&Component> {
        self.component.as_ref()
    }

    pub fn set_timestamp(&mut self, timestamp: Option<String>) {
        self.timestamp = timestamp;
    }

    pub fn set_component(&mut self, component: Option<Component>) {
        self.component = component;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sbom_generation::domain::ComponentType;

    #[test]
    fn test_metadata_new() {
        let tool = Tool::new("CycloneDX", "npm-sbom", "1.0.0");
        let root = Component::new(ComponentType::Application, "my-app").unwrap();
        let metadata = Metadata::new(
            Some("2024-01-01T00:00:00.000Z".to_string()),
            vec![tool.clone()],
            Some(root),
        );

        assert_eq!(metadata.timestamp(), Some("2024-01-01T00:00:00.000Z"));
        assert_eq!(metadata.tools(), &[tool]);
        assert_eq!(metadata.component().unwrap().name(), "my-app");
    }

    #[test]
    fn test_metadata_clear_timestamp() {
        let mut metadata = Metadata::new(Some("2024-01-01T00:00:00.000Z".to_string()), vec![], None);
        metadata.set_timestamp(None);
        assert!(metadata.timestamp().is_none());
    }
}
