use std::fmt;

/// Ecosystem tag used for every package URL this tool produces
pub const NPM_ECOSYSTEM: &str = "npm";

/// Scope marker prefixed to npm groups
const SCOPE_MARKER: char = '@';

/// PackageUrl - stable dependency-graph key for a component
///
/// Built as `pkg:<type>/<namespace>/<name>@<version>` with each segment
/// percent-encoded. Equal inputs always produce equal output, which is what
/// the graph walker relies on for deduplication.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PackageUrl(String);

impl PackageUrl {
    /// Builds the package URL for a package, if it has enough identity
    ///
    /// Returns `None` when the name or the version is absent (or empty):
    /// such a node cannot be referenced by a dependency edge.
    /// A group without its scope marker gets one prepended.
    pub fn build(
        ecosystem: &str,
        group: Option<&str>,
        name: Option<&str>,
        version: Option<&str>,
    ) -> Option<Self> {
        let name = name.filter(|n| !n.is_empty())?;
        let version = version.filter(|v| !v.is_empty())?;

        let mut purl = format!("pkg:{}/", ecosystem);
        if let Some(group) = group.filter(|g| !g.is_empty()) {
            let namespace = if group.starts_with(SCOPE_MARKER) {
                group.to_string()
            } else {
                format!("{}{}", SCOPE_MARKER, group)
            };
            purl.push_str(&urlencoding::encode(&namespace));
            purl.push('/');
        }
        purl.push_str(&urlencoding::encode(name));
        purl.push('@');
        purl.push_str(&urlencoding::encode(version));

        Some(Self(purl))
    }

    /// Shorthand for an npm package URL
    pub fn npm(group: Option<&str>, name: Option<&str>, version: Option<&str>) -> Option<Self> {
        Self::build(NPM_ECOSYSTEM, group, name, version)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PackageUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for PackageUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
