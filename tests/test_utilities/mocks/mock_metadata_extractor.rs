use npm_sbom::prelude::*;
use npm_sbom::sbom_generation::domain::{
    ExternalReference, ExternalReferenceType, Hash, HashAlgorithm, License, LicenseChoice,
};
use std::collections::HashMap;

/// Mock MetadataExtractor with per-package licenses
///
/// Hashes are taken from the lock file `integrity` field as plain SHA-1 hex,
/// and every package with a homepage gets a website reference.
#[derive(Default)]
pub struct MockMetadataExtractor {
    licenses: HashMap<String, String>,
}

impl MockMetadataExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_license(mut self, package: &str, spdx_id: &str) -> Self {
        self.licenses
            .insert(package.to_string(), spdx_id.to_string());
        self
    }
}

impl MetadataExtractor for MockMetadataExtractor {
    fn licenses(&self, record: &PackageRecord, _include_text: bool) -> Option<LicenseChoice> {
        let name = record.name.as_deref()?;
        self.licenses
            .get(name)
            .map(|id| LicenseChoice::Licenses(vec![License::spdx(id.clone())]))
    }

    fn hashes(&self, record: &PackageRecord, lockfile: &LockfileContents) -> Vec<Hash> {
        let (Some(name), Some(version)) = (record.name.as_deref(), record.version.as_deref())
        else {
            return Vec::new();
        };
        lockfile
            .integrity(name, version)
            .and_then(|digest| Hash::new(HashAlgorithm::Sha1, digest).ok())
            .into_iter()
            .collect()
    }

    fn external_references(&self, record: &PackageRecord) -> Vec<ExternalReference> {
        record
            .homepage
            .as_deref()
            .and_then(|url| ExternalReference::new(ExternalReferenceType::Website, url).ok())
            .into_iter()
            .collect()
    }
}
