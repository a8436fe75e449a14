use crate::sbom_generation::domain::{Component, Dependency};
use std::cmp::Ordering;

/// ReproducibleOrdering policy for byte-stable document output
///
/// Components are ordered by group, name and version (absent before present,
/// case-sensitive lexicographic), with the component type as final tie-break.
/// Edges are ordered by their reference, and each edge's targets are sorted
/// too, so the traversal order of the input cannot leak into the output.
pub struct ReproducibleOrdering;

impl ReproducibleOrdering {
    /// Total order over the identifying fields of two components
    pub fn compare_components(a: &Component, b: &Component) -> Ordering {
        a.group()
            .cmp(&b.group())
            .then_with(|| a.name().cmp(b.name()))
            .then_with(|| a.version().cmp(&b.version()))
            .then_with(|| a.component_type().cmp(&b.component_type()))
    }

    /// Components in reproducible order
    pub fn sorted_components(components: &[Component]) -> Vec<&Component> {
        let mut sorted: Vec<&Component> = components.iter().collect();
        sorted.sort_by(|a, b| Self::compare_components(a, b));
        sorted
    }

    /// Edges in reproducible order, each with sorted targets
    pub fn sorted_dependencies(dependencies: &[Dependency]) -> Vec<Dependency> {
        let mut sorted: Vec<Dependency> = dependencies
            .iter()
            .cloned()
            .map(|mut dependency| {
                dependency.sort_depends_on();
                dependency
            })
            .collect();
        sorted.sort_by(|a, b| a.reference().cmp(b.reference()));
        sorted
    }
}
