use crate::shared::error::SbomError;
use crate::sbom_generation::domain::validation;
use crate::shared::Result;
use std::fmt;
use std::str::FromStr;

/// External reference types defined by CycloneDX 1.3
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExternalReferenceType {
    Vcs,
    IssueTracker,
    Website,
    Advisories,
    Bom,
    MailingList,
    Social,
    Chat,
    Documentation,
    Support,
    Distribution,
    License,
    BuildMeta,
    BuildSystem,
    Other,
}

impl ExternalReferenceType {
    pub const ALL: [ExternalReferenceType; 15] = [
        ExternalReferenceType::Vcs,
        ExternalReferenceType::IssueTracker,
        ExternalReferenceType::Website,
        ExternalReferenceType::Advisories,
        ExternalReferenceType::Bom,
        ExternalReferenceType::MailingList,
        ExternalReferenceType::Social,
        ExternalReferenceType::Chat,
        ExternalReferenceType::Documentation,
        ExternalReferenceType::Support,
        ExternalReferenceType::Distribution,
        ExternalReferenceType::License,
        ExternalReferenceType::BuildMeta,
        ExternalReferenceType::BuildSystem,
        ExternalReferenceType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExternalReferenceType::Vcs => "vcs",
            ExternalReferenceType::IssueTracker => "issue-tracker",
            ExternalReferenceType::Website => "website",
            ExternalReferenceType::Advisories => "advisories",
            ExternalReferenceType::Bom => "bom",
            ExternalReferenceType::MailingList => "mailing-list",
            ExternalReferenceType::Social => "social",
            ExternalReferenceType::Chat => "chat",
            ExternalReferenceType::Documentation => "documentation",
            ExternalReferenceType::Support => "support",
            ExternalReferenceType::Distribution => "distribution",
            ExternalReferenceType::License => "license",
            ExternalReferenceType::BuildMeta => "build-meta",
            ExternalReferenceType::BuildSystem => "build-system",
            ExternalReferenceType::Other => "other",
        }
    }
}

impl FromStr for ExternalReferenceType {
    type Err = SbomError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        ExternalReferenceType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| SbomError::validation(format!("Unknown external reference type: {}", s)))
    }
}

impl fmt::Display for ExternalReferenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// ExternalReference value object - a typed URL pointing outside the BOM
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalReference {
    reference_type: ExternalReferenceType,
    url: String,
    comment: Option<String>,
}

impl ExternalReference {
    pub fn new(reference_type: ExternalReferenceType, url: &str) -> Result<Self> {
        validation::validate("External reference URL", url, validation::REFERENCE)?;
        Ok(Self {
            reference_type,
            url: url.to_string(),
            comment: None,
        })
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn reference_type(&self) -> ExternalReferenceType {
        self.reference_type
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }
}
