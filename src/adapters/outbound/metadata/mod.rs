/// Metadata adapters - licenses, hashes and external references of a package
mod package_manifest_extractor;

pub use package_manifest_extractor::PackageManifestExtractor;
