use crate::sbom_generation::domain::{MarkupElement, MarkupNode};
use crate::shared::error::SbomError;
use crate::shared::Result;

/// Local name of the container that receives merged components
const COMPONENTS: &str = "components";

/// Every CycloneDX schema version lives under this namespace URI prefix
const CYCLONEDX_NAMESPACE: &str = "http://cyclonedx.org/schema/bom/";

/// In-scope `xmlns:prefix` bindings, innermost last
type Bindings = Vec<(String, String)>;

/// BomMerger service splicing external BOM documents into a primary one
///
/// The merge is structural: component elements are moved, never compared, so
/// two documents describing the same package yield two entries.
pub struct BomMerger;

impl BomMerger {
    /// Moves every component of `secondary` into the primary's container
    ///
    /// The secondary's components container is removed afterwards.
    /// A secondary without a components container contributes nothing.
    /// Names qualified with a CycloneDX prefix are unqualified so the moved
    /// elements fall into the primary's default namespace, and other
    /// prefixes declared outside a moved component are redeclared on it.
    ///
    /// # Returns
    /// The number of component elements moved
    ///
    /// # Errors
    /// Returns an error if the primary document has no components container
    pub fn merge(primary: &mut MarkupElement, secondary: &mut MarkupElement) -> Result<usize> {
        let root_name = primary.name().to_string();
        let target = primary
            .find_child_mut(COMPONENTS)
            .ok_or_else(|| SbomError::MergeError {
                details: format!(
                    "primary document <{}> has no <{}> container",
                    root_name, COMPONENTS
                ),
            })?;

        let root_bindings: Bindings = declarations(secondary).collect();
        let mut moved = 0;
        for mut container in secondary.take_children(COMPONENTS) {
            let mut outer = root_bindings.clone();
            outer.extend(declarations(&container));
            for node in container.drain_children() {
                if let MarkupNode::Element(mut component) = node {
                    Self::rebind(&mut component, &outer);
                    target.push_child(component);
                    moved += 1;
                }
            }
        }

        Ok(moved)
    }

    fn rebind(component: &mut MarkupElement, outer: &Bindings) {
        let mut scope = outer.clone();
        let mut inherited = Bindings::new();
        localize(component, &mut scope, outer.len(), &mut inherited);
        for (prefix, uri) in inherited {
            let key = format!("xmlns:{}", prefix);
            if component.attribute(&key).is_none() {
                component.set_attribute(key, uri);
            }
        }
    }

    /// Applies [`Self::merge`] for each secondary document in argument order
    pub fn merge_all(
        primary: &mut MarkupElement,
        secondaries: impl IntoIterator<Item = MarkupElement>,
    ) -> Result<usize> {
        let mut moved = 0;
        for mut secondary in secondaries {
            moved += Self::merge(primary, &mut secondary)?;
        }
        Ok(moved)
    }
}

fn declarations(element: &MarkupElement) -> impl Iterator<Item = (String, String)> + '_ {
    element.attributes().iter().filter_map(|(key, uri)| {
        key.strip_prefix("xmlns:")
            .map(|prefix| (prefix.to_string(), uri.clone()))
    })
}

fn is_cyclonedx(uri: &str) -> bool {
    uri.starts_with(CYCLONEDX_NAMESPACE)
}

/// Resolves `prefix:local` against `scope`
///
/// Returns the unqualified name when the prefix is bound to CycloneDX. A
/// foreign prefix bound at or above the container (index below `outer_len`)
/// is recorded in `inherited`.
fn unqualify(
    qualified: &str,
    scope: &Bindings,
    outer_len: usize,
    inherited: &mut Bindings,
) -> Option<String> {
    let (prefix, local) = qualified.split_once(':')?;
    let (index, (_, uri)) = scope
        .iter()
        .enumerate()
        .rev()
        .find(|(_, (bound, _))| bound == prefix)?;
    if is_cyclonedx(uri) {
        return Some(local.to_string());
    }
    if index < outer_len && !inherited.iter().any(|(bound, _)| bound == prefix) {
        inherited.push((prefix.to_string(), uri.clone()));
    }
    None
}

fn localize(
    element: &mut MarkupElement,
    scope: &mut Bindings,
    outer_len: usize,
    inherited: &mut Bindings,
) {
    let mark = scope.len();
    scope.extend(declarations(element).collect::<Vec<_>>());

    if let Some(local) = unqualify(element.name(), scope, outer_len, inherited) {
        element.set_name(local);
    }
    for (key, _) in element.attributes_mut().iter_mut() {
        if key.starts_with("xmlns") {
            continue;
        }
        if let Some(local) = unqualify(key, scope, outer_len, inherited) {
            *key = local;
        }
    }
    element
        .attributes_mut()
        .retain(|(key, uri)| !(key.starts_with("xmlns:") && is_cyclonedx(uri)));

    for child in element.child_elements_mut() {
        localize(child, scope, outer_len, inherited);
    }
    scope.truncate(mark);
}
