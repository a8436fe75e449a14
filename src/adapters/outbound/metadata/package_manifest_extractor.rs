use crate::ports::outbound::MetadataExtractor;
use crate::sbom_generation::domain::{
    AttachedText, ExternalReference, ExternalReferenceType, Hash, HashAlgorithm, License,
    LicenseChoice, LockfileContents, PackageRecord,
};
use crate::shared::security::{read_checked, MAX_LICENSE_TEXT_SIZE};
use base64::prelude::*;
use serde_json::Value;
use std::path::Path;

/// License files looked up in a package directory, in order
const LICENSE_FILE_NAMES: [&str; 7] = [
    "LICENSE",
    "LICENSE.md",
    "LICENSE.txt",
    "LICENCE",
    "LICENCE.md",
    "LICENCE.txt",
    "COPYING",
];

/// PackageManifestExtractor adapter reading metadata from package records
///
/// Works on the fields the package resolver copies from each `package.json`
/// (`license`, `_integrity`, `homepage`, ...). License texts are read from
/// the installed package directory when one is known.
pub struct PackageManifestExtractor;

impl PackageManifestExtractor {
    pub fn new() -> Self {
        Self
    }

    fn license_from_str(value: &str) -> Option<License> {
        let value = value.trim();
        if value.is_empty() {
            return None;
        }
        Some(match spdx::license_id(value) {
            Some(id) => License::spdx(id.name),
            None => License::named(value),
        })
    }

    /// Legacy `{ "type": "MIT", "url": "..." }` form
    fn license_from_object(value: &Value) -> Option<License> {
        let license = Self::license_from_str(value.get("type")?.as_str()?)?;
        match value.get("url").and_then(Value::as_str) {
            Some(url) if !url.trim().is_empty() => Some(license.with_url(url.trim())),
            _ => Some(license),
        }
    }

    fn license_from_value(value: &Value) -> Option<License> {
        match value {
            Value::String(s) => Self::license_from_str(s),
            Value::Object(_) => Self::license_from_object(value),
            _ => None,
        }
    }

    fn is_expression(value: &str) -> bool {
        value.contains(" OR ")
            || value.contains(" AND ")
            || value.contains(" WITH ")
            || value.contains('(')
            || value.contains(')')
    }

    /// First license file found in the package directory
    fn license_text(package_dir: &Path) -> Option<AttachedText> {
        LICENSE_FILE_NAMES.iter().find_map(|file_name| {
            let path = package_dir.join(file_name);
            if !path.is_file() {
                return None;
            }
            match read_checked(&path, "license file", MAX_LICENSE_TEXT_SIZE) {
                Ok(content) if file_name.ends_with(".md") => {
                    Some(AttachedText::new("text/markdown", content))
                }
                Ok(content) => Some(AttachedText::plain(content)),
                Err(e) => {
                    tracing::warn!("Skipping license file {}: {}", path.display(), e);
                    None
                }
            }
        })
    }

    /// Parses one Subresource Integrity token such as `sha512-<base64>`
    fn parse_sri(token: &str) -> Option<Hash> {
        let (prefix, digest) = token.split_once('-')?;
        let algorithm = match prefix.to_ascii_lowercase().as_str() {
            "sha1" => HashAlgorithm::Sha1,
            "sha256" => HashAlgorithm::Sha256,
            "sha384" => HashAlgorithm::Sha384,
            "sha512" => HashAlgorithm::Sha512,
            _ => return None,
        };
        // SRI allows `?option` suffixes after the digest
        let digest = digest.split('?').next().unwrap_or_default();
        let bytes = BASE64_STANDARD.decode(digest).ok()?;
        Hash::new(algorithm, &hex::encode(bytes)).ok()
    }

    fn parse_integrity(integrity: &str) -> Vec<Hash> {
        let mut hashes: Vec<Hash> = Vec::new();
        for token in integrity.split_whitespace() {
            match Self::parse_sri(token) {
                Some(hash) if !hashes.contains(&hash) => hashes.push(hash),
                Some(_) => {}
                None => tracing::debug!("Skipping unrecognised integrity entry: {}", token),
            }
        }
        hashes
    }

    /// A URL given either as a plain string or as `{ "url": ... }`
    fn url_of(value: &Value) -> Option<&str> {
        match value {
            Value::String(url) => Some(url.as_str()),
            Value::Object(_) => value.get("url").and_then(Value::as_str),
            _ => None,
        }
    }
}

impl Default for PackageManifestExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl MetadataExtractor for PackageManifestExtractor {
    fn licenses(&self, record: &PackageRecord, include_text: bool) -> Option<LicenseChoice> {
        if let Some(Value::String(license)) = &record.license {
            if Self::is_expression(license) {
                return Some(LicenseChoice::Expression(license.trim().to_string()));
            }
        }

        let mut licenses: Vec<License> = Vec::new();
        if let Some(license) = record.license.as_ref().and_then(Self::license_from_value) {
            licenses.push(license);
        }
        match &record.licenses {
            Some(Value::Array(entries)) => {
                licenses.extend(entries.iter().filter_map(Self::license_from_value))
            }
            Some(entry) => licenses.extend(Self::license_from_value(entry)),
            None => {}
        }

        if licenses.is_empty() {
            return None;
        }

        if include_text {
            if let Some(text) = record.path.as_deref().and_then(Self::license_text) {
                licenses = licenses
                    .into_iter()
                    .map(|license| license.with_text(text.clone()))
                    .collect();
            }
        }

        Some(LicenseChoice::Licenses(licenses))
    }

    fn hashes(&self, record: &PackageRecord, lockfile: &LockfileContents) -> Vec<Hash> {
        if let Some(integrity) = record.integrity.as_deref() {
            return Self::parse_integrity(integrity);
        }

        match (record.name.as_deref(), record.version.as_deref()) {
            (Some(name), Some(version)) => lockfile
                .integrity(name, version)
                .map(Self::parse_integrity)
                .unwrap_or_default(),
            _ => Vec::new(),
        }
    }

    fn external_references(&self, record: &PackageRecord) -> Vec<ExternalReference> {
        let candidates = [
            (ExternalReferenceType::Website, record.homepage.as_deref()),
            (
                ExternalReferenceType::Vcs,
                record.repository.as_ref().and_then(Self::url_of),
            ),
            (
                ExternalReferenceType::IssueTracker,
                record.bugs.as_ref().and_then(Self::url_of),
            ),
            (ExternalReferenceType::Distribution, record.resolved.as_deref()),
        ];

        candidates
            .into_iter()
            .filter_map(|(reference_type, url)| {
                let url = url?.trim();
                if url.is_empty() {
                    return None;
                }
                ExternalReference::new(reference_type, url)
                    .map_err(|e| tracing::warn!("Skipping {} reference {}: {}", reference_type, url, e))
                    .ok()
            })
            .collect()
    }
}
