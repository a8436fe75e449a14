use crate::adapters::outbound::formatters::xml_codec;
use crate::ports::outbound::{BomDocumentReader, LockfileReader, PackageTreeReader};
use crate::sbom_generation::domain::{LockfileContents, MarkupElement, PackageRecord};
use crate::sbom_generation::services::GraphWalker;
use crate::shared::error::SbomError;
use crate::shared::security::{read_checked, MAX_FILE_SIZE};
use crate::shared::Result;
use serde::Deserialize;
use std::path::Path;

/// Lock files understood by the hash lookup, in order of preference
pub const LOCKFILE_NAMES: [&str; 2] = ["package-lock.json", "npm-shrinkwrap.json"];

/// Yarn lock file, detected only to warn about it
pub const YARN_LOCKFILE: &str = "yarn.lock";

/// Deepest JSON nesting accepted in a package tree
///
/// Each tree level takes two nesting levels (the record and its
/// `dependencies` object), so this leaves room for every level the graph
/// walker follows plus the leaf objects below them.
pub const MAX_TREE_NESTING: usize = 2 * GraphWalker::MAX_DEPTH + 64;

/// Deepest `{`/`[` nesting in a JSON text, ignoring brackets inside strings
fn nesting_depth(content: &str) -> usize {
    let mut depth = 0usize;
    let mut deepest = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for byte in content.bytes() {
        if in_string {
            match byte {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match byte {
            b'"' => in_string = true,
            b'{' | b'[' => {
                depth += 1;
                deepest = deepest.max(depth);
            }
            b'}' | b']' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    deepest
}

/// FileSystemReader adapter for reading inputs from the file system
///
/// This adapter implements the PackageTreeReader, LockfileReader and
/// BomDocumentReader ports. Every read goes through the shared security
/// checks (no symbolic links, regular files only, size limit).
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl PackageTreeReader for FileSystemReader {
    fn read_package_tree(&self, tree_path: &Path) -> Result<PackageRecord> {
        if !tree_path.exists() {
            return Err(SbomError::PackageTreeNotFound {
                path: tree_path.to_path_buf(),
                suggestion: format!(
                    "Generate it with `npm ls --json --all --long > {}`, or pass its location with --tree.",
                    tree_path.display()
                ),
            }
            .into());
        }

        let content = read_checked(tree_path, "package tree", MAX_FILE_SIZE)?;
        let parse_error = |details: String| SbomError::PackageTreeParseError {
            path: tree_path.to_path_buf(),
            details,
        };

        if !content.trim_start().starts_with('{') {
            return Err(parse_error("top-level value is not a JSON object".to_string()).into());
        }

        let nesting = nesting_depth(&content);
        if nesting > MAX_TREE_NESTING {
            return Err(parse_error(format!(
                "JSON nesting of {} levels exceeds the limit of {}",
                nesting, MAX_TREE_NESTING
            ))
            .into());
        }

        // Nesting is bounded above, so serde_json's own recursion limit of
        // 128 is lifted to let real trees deeper than 64 levels through
        let mut deserializer = serde_json::Deserializer::from_str(&content);
        deserializer.disable_recursion_limit();
        let record = PackageRecord::deserialize(&mut deserializer)
            .and_then(|record| deserializer.end().map(|()| record))
            .map_err(|e| parse_error(e.to_string()))?;

        Ok(record)
    }
}

impl LockfileReader for FileSystemReader {
    fn read_lockfile(&self, project_path: &Path) -> Result<LockfileContents> {
        let lockfile_path = LOCKFILE_NAMES
            .iter()
            .map(|name| project_path.join(name))
            .find(|path| path.exists());
        let has_yarn_lock = project_path.join(YARN_LOCKFILE).exists();

        let Some(lockfile_path) = lockfile_path else {
            if has_yarn_lock {
                tracing::warn!(
                    "{} is not supported; hashes are taken from the package tree only",
                    YARN_LOCKFILE
                );
            } else {
                tracing::debug!("no lock file in {}", project_path.display());
            }
            return Ok(LockfileContents::empty());
        };

        if has_yarn_lock {
            tracing::warn!(
                "Both {} and {} exist; using {}",
                lockfile_path.display(),
                YARN_LOCKFILE,
                lockfile_path.display()
            );
        }

        let content = read_checked(&lockfile_path, "lock file", MAX_FILE_SIZE)?;
        let document = serde_json::from_str(&content).map_err(|e| SbomError::LockfileParseError {
            path: lockfile_path.clone(),
            details: e.to_string(),
        })?;

        Ok(LockfileContents::new(document))
    }
}

impl BomDocumentReader for FileSystemReader {
    fn read_bom_document(&self, path: &Path) -> Result<MarkupElement> {
        let content = read_checked(path, "BOM document", MAX_FILE_SIZE)?;
        xml_codec::parse_document(&content).map_err(|e| {
            SbomError::BomDocumentParseError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}
