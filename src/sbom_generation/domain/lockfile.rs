use serde_json::Value;

/// LockfileContents - the parsed project lock file
///
/// Kept as an untyped JSON document: lock files differ between npm versions
/// and only a couple of lookups are ever made against them.
#[derive(Debug, Clone, PartialEq)]
pub struct LockfileContents(Value);

impl LockfileContents {
    pub fn new(document: Value) -> Self {
        Self(document)
    }

    /// Contents used when the project has no lock file
    pub fn empty() -> Self {
        Self(Value::Object(serde_json::Map::new()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.as_object().map_or(true, |map| map.is_empty())
    }

    pub fn lockfile_version(&self) -> Option<u64> {
        self.0.get("lockfileVersion").and_then(Value::as_u64)
    }

    /// Lock entry for an installed package, if one matches name and version
    ///
    /// Lock files from version 2 on key packages by install path under
    /// `packages`; older ones nest them under `dependencies`.
    pub fn entry(&self, name: &str, version: &str) -> Option<&Value> {
        let from_packages = self
            .0
            .get("packages")
            .and_then(|packages| packages.get(format!("node_modules/{}", name)));
        let from_dependencies = self
            .0
            .get("dependencies")
            .and_then(|dependencies| dependencies.get(name));

        from_packages
            .into_iter()
            .chain(from_dependencies)
            .find(|entry| entry.get("version").and_then(Value::as_str) == Some(version))
    }

    /// SRI integrity string recorded for the package
    pub fn integrity(&self, name: &str, version: &str) -> Option<&str> {
        self.entry(name, version)?
            .get("integrity")
            .and_then(Value::as_str)
    }
}

impl Default for LockfileContents {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_contents() {
        let contents = LockfileContents::empty();
        assert!(contents.is_empty());
        assert!(contents.integrity("lodash", "4.17.21").is_none());
    }

    #[test]
    fn test_integrity_from_packages_section() {
        let contents = LockfileContents::new(json!({
            "lockfileVersion": 3,
            "packages": {
                "": {"name": "app"},
                "node_modules/@babel/core": {"version": "7.23.0", "integrity": "sha512-abc"}
            }
        }));
        assert_eq!(contents.lockfile_version(), Some(3));
        assert_eq!(contents.integrity("@babel/core", "7.23.0"), Some("sha512-abc"));
    }

    #[test]
    fn test_integrity_from_legacy_dependencies_section() {
        let contents = LockfileContents::new(json!({
            "lockfileVersion": 1,
            "dependencies": {
                "lodash": {"version": "4.17.21", "integrity": "sha1-xyz"}
            }
        }));
        assert_eq!(contents.integrity("lodash", "4.17.21"), Some("sha1-xyz"));
    }

    #[test]
    fn test_integrity_requires_matching_version() {
        let contents = LockfileContents::new(json!({
            "packages": {
                "node_modules/lodash": {"version": "4.17.20", "integrity": "sha512-old"}
            }
        }));
        assert!(contents.integrity("lodash", "4.17.21").is_none());
    }
}
