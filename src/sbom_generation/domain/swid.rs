use super::{validation, AttachedText};
use crate::shared::Result;

/// Swid - ISO/IEC 19770-2 software identification tag of a component
#[derive(Debug, Clone, PartialEq)]
pub struct Swid {
    tag_id: String,
    name: String,
    version: Option<String>,
    tag_version: Option<u32>,
    patch: Option<bool>,
    text: Option<AttachedText>,
    url: Option<String>,
}

impl Swid {
    /// Both the tag id and the name are required by the schema
    pub fn new(tag_id: &str, name: &str) -> Result<Self> {
        validation::validate("SWID tagId", tag_id, validation::REFERENCE)?;
        validation::validate("SWID name", name, validation::NAME)?;
        Ok(Self {
            tag_id: tag_id.to_string(),
            name: name.to_string(),
            version: None,
            tag_version: None,
            patch: None,
            text: None,
            url: None,
        })
    }

    pub fn with_version(mut self, version: &str) -> Result<Self> {
        validation::validate("SWID version", version, validation::VERSION)?;
        self.version = Some(version.to_string());
        Ok(self)
    }

    pub fn with_tag_version(mut self, tag_version: u32) -> Self {
        self.tag_version = Some(tag_version);
        self
    }

    pub fn with_patch(mut self, patch: bool) -> Self {
        self.patch = Some(patch);
        self
    }

    pub fn with_text(mut self, text: AttachedText) -> Self {
        self.text = Some(text);
        self
    }

    pub fn with_url(mut self, url: &str) -> Result<Self> {
        validation::validate("SWID url", url, validation::REFERENCE)?;
        self.url = Some(url.to_string());
        Ok(self)
    }

    pub fn tag_id(&self) -> &str {
        &self.tag_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn tag_version(&self) -> Option<u32> {
        self.tag_version
    }

    pub fn patch(&self) -> Option<bool> {
        self.patch
    }

    pub fn text(&self) -> Option<&AttachedText> {
        self.text.as_ref()
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }
}
