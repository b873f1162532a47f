//! Object graph traversal: discovering nested resources and the ones
//! carrying validation errors.
//!
//! Every entry point allocates its own visited set, so concurrent renders
//! never observe each other's traversal state, and reference cycles in the
//! object graph truncate instead of looping.

use std::collections::HashSet;

use crate::resource::{Resource, ResourceKey};

/// Returns the direct child resources of an object, in declaration order.
///
/// Does not recurse. A missing object yields an empty sequence.
pub fn enumerate_children(object: Option<&dyn Resource>) -> Vec<&dyn Resource> {
    match object {
        Some(object) => object.children(),
        None => Vec::new(),
    }
}

/// Returns every resource reachable from `object`, excluding `object`
/// itself, in deterministic pre-order.
///
/// An identity already visited in this call is skipped, so a child reachable
/// via multiple attributes appears once and cycles terminate. A missing
/// object yields an empty sequence.
pub fn descendants(object: Option<&dyn Resource>) -> Vec<&dyn Resource> {
    let mut visited = HashSet::new();
    let mut collected = Vec::new();
    if let Some(object) = object {
        visited.insert(ResourceKey::of(object));
        collect_descendants(object, &mut visited, &mut collected);
    }
    collected
}

fn collect_descendants<'a>(
    object: &'a dyn Resource,
    visited: &mut HashSet<ResourceKey>,
    collected: &mut Vec<&'a dyn Resource>,
) {
    for child in object.children() {
        if !visited.insert(ResourceKey::of(child)) {
            continue;
        }
        collected.push(child);
        collect_descendants(child, visited, collected);
    }
}

/// Returns true if the object or any resource in its transitive attribute
/// closure carries at least one validation error.
///
/// Cycle-safe; `None` has no errors.
pub fn has_errors(object: Option<&dyn Resource>) -> bool {
    let Some(object) = object else {
        return false;
    };
    object.has_own_errors()
        || descendants(Some(object))
            .iter()
            .any(|child| child.has_own_errors())
}

/// Returns the descendants of `object` whose own error mapping is non-empty,
/// in traversal order. The root itself is excluded; callers that want it
/// query [`Resource::has_own_errors`] separately.
pub fn objects_with_errors(object: Option<&dyn Resource>) -> Vec<&dyn Resource> {
    descendants(object)
        .into_iter()
        .filter(|child| child.has_own_errors())
        .collect()
}
