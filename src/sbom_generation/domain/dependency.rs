use super::PackageUrl;

/// Dependency - one edge list of the dependency graph
///
/// `depends_on` keeps first-seen order and never holds the same target twice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
    reference: PackageUrl,
    depends_on: Vec<PackageUrl>,
}

impl Dependency {
    pub fn new(reference: PackageUrl, depends_on: Vec<PackageUrl>) -> Self {
        let mut unique = Vec::with_capacity(depends_on.len());
        for target in depends_on {
            if !unique.contains(&target) {
                unique.push(target);
            }
        }
        Self {
            reference,
            depends_on: unique,
        }
    }

    pub fn reference(&self) -> &PackageUrl {
        &self.reference
    }

    pub fn depends_on(&self) -> &[PackageUrl] {
        &self.depends_on
    }

    /// Sorts the targets by their package URL
    pub fn sort_depends_on(&mut self) {
        self.depends_on.sort();
    }
}
