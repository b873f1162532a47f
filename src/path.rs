//! Ownership-path resolution: parent pointers, ancestor chains and the
//! prefix chains that produce DOM ids, nested form names and localization
//! keys.
//!
//! A [`ParentMap`] is built fresh for each traversal session; a
//! [`PrefixChain`] derived from it renders the three artifacts the form
//! layer needs, e.g. for a `Country` nested under an `Address` under a
//! `Person`:
//!
//! - DOM id: `person_address_attributes_country_attributes_name`
//! - form name: `person[address_attributes][country_attributes][name]`
//! - localization key: `person[address_attributes][country_attributes].name`

use std::collections::{HashMap, HashSet};
use std::fmt::{self, Display};

use crate::naming::underscore;
use crate::resource::{Resource, ResourceKey};

/// Suffix appended to non-root segments of a prefix chain, matching the
/// nested-attributes naming convention of nested form submissions.
const ATTRIBUTES_SUFFIX: &str = "_attributes";

/// Mapping from child identity to parent reference for one traversal
/// session.
///
/// Built by a guarded pre-order walk over declared children. When an object
/// is reachable via more than one attribute path, the first-discovered
/// parent wins; discovery order is pre-order over declaration order, so the
/// outcome is deterministic for a given set of `children()` implementations.
pub struct ParentMap<'a> {
    parents: HashMap<ResourceKey, &'a dyn Resource>,
}

impl<'a> ParentMap<'a> {
    /// Builds parent pointers for every resource reachable from `root`.
    ///
    /// Uses a fresh visited set; cycles and shared references are recorded
    /// once and otherwise skipped.
    pub fn build(root: Option<&'a dyn Resource>) -> Self {
        let mut parents = HashMap::new();
        if let Some(root) = root {
            let mut visited = HashSet::new();
            visited.insert(ResourceKey::of(root));
            record_parents(root, &mut visited, &mut parents);
        }
        ParentMap { parents }
    }

    /// Returns the discovered parent of `object`, or `None` for the root and
    /// for objects outside this session's tree.
    pub fn parent_of(&self, object: &dyn Resource) -> Option<&'a dyn Resource> {
        self.parents.get(&ResourceKey::of(object)).copied()
    }

    /// Number of child-to-parent entries recorded.
    pub fn len(&self) -> usize {
        self.parents.len()
    }

    /// Returns true if no parent entries were recorded.
    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }
}

fn record_parents<'a>(
    object: &'a dyn Resource,
    visited: &mut HashSet<ResourceKey>,
    parents: &mut HashMap<ResourceKey, &'a dyn Resource>,
) {
    for child in object.children() {
        if !visited.insert(ResourceKey::of(child)) {
            continue;
        }
        parents.insert(ResourceKey::of(child), object);
        record_parents(child, visited, parents);
    }
}

/// Reconstructs the ordered ancestor chain from the root down to `object`,
/// inclusive.
///
/// Walks parent pointers upward, prepending each ancestor. Stops when no
/// parent is found (the root was reached) or when an ancestor repeats; in
/// the cycle case the chain built so far is returned rather than looping.
/// An orphan object yields a chain containing only itself.
pub fn ancestor_chain<'a>(
    object: &'a dyn Resource,
    parents: &ParentMap<'a>,
) -> Vec<&'a dyn Resource> {
    let mut chain: Vec<&'a dyn Resource> = vec![object];
    let mut seen = HashSet::new();
    seen.insert(ResourceKey::of(object));

    let mut current = object;
    while let Some(parent) = parents.parent_of(current) {
        if !seen.insert(ResourceKey::of(parent)) {
            log::warn!(
                "cycle detected while resolving ancestors of {}; truncating chain",
                object.type_name()
            );
            break;
        }
        chain.insert(0, parent);
        current = parent;
    }
    chain
}

/// Ordered string segments representing an object's ownership path.
///
/// The chain always starts with the root's underscored type name and ends
/// with the target's own segment; its length equals the target's depth in
/// the ownership tree plus one. Intermediate and final segments carry the
/// `_attributes` suffix.
///
/// # Example
///
/// ```rust
/// use signpost::PrefixChain;
///
/// let prefixes = PrefixChain::from_segments(vec![
///     "person".to_string(),
///     "address_attributes".to_string(),
/// ]);
///
/// assert_eq!(prefixes.dom_id("postcode"), "person_address_attributes_postcode");
/// assert_eq!(
///     prefixes.field_name("postcode"),
///     "person[address_attributes][postcode]"
/// );
/// assert_eq!(
///     prefixes.localization_key("postcode"),
///     "person[address_attributes].postcode"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PrefixChain {
    segments: Vec<String>,
}

impl PrefixChain {
    /// Derives the prefix chain for `object` within a traversal session.
    ///
    /// An object with no discoverable parent (the root itself, or an orphan)
    /// yields a single segment: its own underscored type name.
    pub fn derive(object: &dyn Resource, parents: &ParentMap<'_>) -> Self {
        let chain = ancestor_chain(object, parents);
        let mut ancestors = chain.iter();

        let Some(root) = ancestors.next() else {
            return PrefixChain {
                segments: Vec::new(),
            };
        };

        let mut segments = vec![underscore(root.type_name())];
        for ancestor in ancestors {
            segments.push(format!(
                "{}{}",
                underscore(ancestor.type_name()),
                ATTRIBUTES_SUFFIX
            ));
        }
        PrefixChain { segments }
    }

    /// Builds a chain directly from pre-computed segments.
    pub fn from_segments(segments: Vec<String>) -> Self {
        PrefixChain { segments }
    }

    /// The segments of this chain, root first.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Number of segments; equals the target's depth plus one.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns true if the chain has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Joins segments and the field name with underscores, producing the
    /// DOM id used for inputs and error-summary link targets.
    pub fn dom_id(&self, field: &str) -> String {
        let mut parts: Vec<&str> = self.segments.iter().map(String::as_str).collect();
        parts.push(field);
        parts.join("_")
    }

    /// Produces the nested form-submission name: first segment bare, every
    /// later segment and the field wrapped in brackets.
    pub fn field_name(&self, field: &str) -> String {
        let mut segments = self.segments.iter();
        let Some(first) = segments.next() else {
            return field.to_string();
        };

        let mut name = first.clone();
        for segment in segments {
            name.push('[');
            name.push_str(segment);
            name.push(']');
        }
        name.push('[');
        name.push_str(field);
        name.push(']');
        name
    }

    /// Produces the localization lookup key: bracket-wrapped prefixes with
    /// `.{field}` appended, resolved under the `helpers.label` scope.
    pub fn localization_key(&self, field: &str) -> String {
        let mut segments = self.segments.iter();
        let Some(first) = segments.next() else {
            return field.to_string();
        };

        let mut key = first.clone();
        for segment in segments {
            key.push('[');
            key.push_str(segment);
            key.push(']');
        }
        key.push('.');
        key.push_str(field);
        key
    }
}

impl Display for PrefixChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("_"))
    }
}
