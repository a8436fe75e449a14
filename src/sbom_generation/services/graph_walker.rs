use super::component_materializer::{ComponentMaterializer, ExtractedMetadata};
use crate::sbom_generation::domain::validation;
use crate::sbom_generation::domain::{
    Component, ComponentType, Dependency, DependencyEntry, PackageRecord, PackageUrl,
};
use crate::shared::Result;
use indexmap::IndexSet;
use std::borrow::Cow;
use std::collections::HashSet;

/// Name given to a root package that has none
pub const NO_NAME_PACKAGE: &str = "NO-NAME-PACKAGE";

/// Result of walking a resolved package tree
#[derive(Debug, Clone)]
pub struct GraphWalkOutcome {
    /// The root package, destined for the document metadata
    pub root: Component,
    /// Every other reachable package, in order of first visit
    pub components: Vec<Component>,
    /// Edge lists, each recorded once the node's children are known
    pub dependencies: Vec<Dependency>,
}

/// GraphWalker service for depth-first traversal of a resolved package tree
///
/// Components are deduplicated by package URL, so a package shared by several
/// parents (a diamond) appears once and every parent's edge list points at the
/// same identifier. Extraneous packages and cycle markers are pruned.
pub struct GraphWalker;

impl GraphWalker {
    /// Maximum nesting depth followed below the root
    /// This limits deeply nested trees from exhausting the stack
    pub const MAX_DEPTH: usize = 256;

    /// Walks the tree below `root`
    ///
    /// # Arguments
    /// * `root` - The root package record
    /// * `root_type` - Component type assigned to the root
    /// * `extract` - Produces licenses, hashes and references for a record
    ///
    /// # Returns
    /// The root component plus the deduplicated components and edges
    pub fn walk<F>(
        root: &PackageRecord,
        root_type: ComponentType,
        extract: F,
    ) -> Result<GraphWalkOutcome>
    where
        F: FnMut(&PackageRecord) -> ExtractedMetadata,
    {
        let root = Self::named_root(root);
        let mut traversal = Traversal {
            extract,
            visited: HashSet::new(),
            path: Vec::new(),
            components: Vec::new(),
            dependencies: Vec::new(),
        };

        let metadata = (traversal.extract)(&root);
        let mut root_component = ComponentMaterializer::materialize(&root, metadata)?;
        root_component.set_component_type(root_type);

        let root_purl = ComponentMaterializer::identify(&root);
        if let Some(purl) = &root_purl {
            traversal.visited.insert(purl.clone());
        }

        if root.extraneous {
            tracing::debug!("root package is extraneous, dependencies not traversed");
        } else {
            traversal.descend(&root, root_purl.as_ref(), 0);
        }

        Ok(GraphWalkOutcome {
            root: root_component,
            components: traversal.components,
            dependencies: traversal.dependencies,
        })
    }

    /// Substitutes a placeholder when the root has no usable name
    fn named_root(root: &PackageRecord) -> Cow<'_, PackageRecord> {
        let usable = root
            .name
            .as_deref()
            .is_some_and(|name| validation::validate("Name", name, validation::NAME).is_ok());
        if usable {
            Cow::Borrowed(root)
        } else {
            tracing::debug!("root package has no name, using {}", NO_NAME_PACKAGE);
            Cow::Owned(PackageRecord {
                name: Some(NO_NAME_PACKAGE.to_string()),
                ..root.clone()
            })
        }
    }
}

/// Mutable state of one walk, owned exclusively by the call to `walk`
struct Traversal<F> {
    extract: F,
    visited: HashSet<PackageUrl>,
    /// Identifiers of the nodes currently being descended, root first
    path: Vec<PackageUrl>,
    components: Vec<Component>,
    dependencies: Vec<Dependency>,
}

impl<F> Traversal<F>
where
    F: FnMut(&PackageRecord) -> ExtractedMetadata,
{
    /// Visits a non-root record and returns its identifier, if it has one
    fn visit(&mut self, record: &PackageRecord, depth: usize) -> Option<PackageUrl> {
        if record.extraneous {
            tracing::debug!(
                package = record.name.as_deref().unwrap_or_default(),
                "skipping extraneous package"
            );
            return None;
        }

        let Some(purl) = ComponentMaterializer::identify(record) else {
            tracing::debug!(
                package = record.name.as_deref().unwrap_or_default(),
                "package has no name or version, no component recorded"
            );
            self.descend(record, None, depth);
            return None;
        };

        if !self.visited.insert(purl.clone()) {
            return Some(purl);
        }

        let metadata = (self.extract)(record);
        match ComponentMaterializer::materialize(record, metadata) {
            Ok(component) => self.components.push(component),
            Err(e) => tracing::warn!("skipping package {}: {}", purl, e),
        }

        self.descend(record, Some(&purl), depth);
        Some(purl)
    }

    /// Visits the children of a record and records its edge list
    ///
    /// A record without a `dependencies` field gets no edge. A record whose
    /// children were all pruned still gets an edge with no targets.
    fn descend(&mut self, record: &PackageRecord, anchor: Option<&PackageUrl>, depth: usize) {
        let Some(dependencies) = record.dependencies.as_ref() else {
            return;
        };

        if depth >= GraphWalker::MAX_DEPTH {
            tracing::warn!(
                "Maximum nesting depth ({}) reached at package '{}'. Dependencies below it are not recorded.",
                GraphWalker::MAX_DEPTH,
                record.name.as_deref().unwrap_or_default()
            );
            return;
        }

        if let Some(anchor) = anchor {
            self.path.push(anchor.clone());
        }

        let mut targets = IndexSet::new();
        for (key, entry) in dependencies {
            match entry {
                DependencyEntry::CycleMarker(marker) => {
                    tracing::debug!(dependency = key.as_str(), marker = marker.as_str(), "skipping cycle marker");
                }
                DependencyEntry::Package(child) => {
                    if let Some(purl) = self.visit(child, depth + 1) {
                        if self.path.contains(&purl) {
                            tracing::debug!("dropping cyclic edge to {}", purl);
                        } else {
                            targets.insert(purl);
                        }
                    }
                }
            }
        }

        if let Some(anchor) = anchor {
            self.path.pop();
            self.dependencies
                .push(Dependency::new(anchor.clone(), targets.into_iter().collect()));
        }
    }
}
