/// AttachedText - a license text embedded in the BOM
#[derive(Debug, Clone, PartialEq)]
pub struct AttachedText {
    content_type: String,
    content: String,
}

impl AttachedText {
    pub fn new(content_type: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            content_type: content_type.into(),
            content: content.into(),
        }
    }

    pub fn plain(content: impl Into<String>) -> Self {
        Self::new("text/plain", content)
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// How a single license is identified
#[derive(Debug, Clone, PartialEq)]
pub enum LicenseId {
    /// A recognised SPDX license identifier
    Spdx(String),
    /// Free-form license name
    Name(String),
}

/// License value object
#[derive(Debug, Clone, PartialEq)]
pub struct License {
    id: LicenseId,
    text: Option<AttachedText>,
    url: Option<String>,
}

impl License {
    pub fn spdx(id: impl Into<String>) -> Self {
        Self {
            id: LicenseId::Spdx(id.into()),
            text: None,
            url: None,
        }
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: LicenseId::Name(name.into()),
            text: None,
            url: None,
        }
    }

    pub fn with_text(mut self, text: AttachedText) -> Self {
        self.text = Some(text);
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn id(&self) -> &LicenseId {
        &self.id
    }

    pub fn text(&self) -> Option<&AttachedText> {
        self.text.as_ref()
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }
}

/// LicenseChoice - either a list of licenses or one SPDX expression
#[derive(Debug, Clone, PartialEq)]
pub enum LicenseChoice {
    Licenses(Vec<License>),
    Expression(String),
}

impl LicenseChoice {
    /// An empty license list carries no information
    pub fn is_empty(&self) -> bool {
        match self {
            LicenseChoice::Licenses(licenses) => licenses.is_empty(),
            LicenseChoice::Expression(expression) => expression.trim().is_empty(),
        }
    }
}
