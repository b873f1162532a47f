//! The resource data model: bound objects with fields, nested children and
//! validation errors.
//!
//! This module provides the [`Resource`] trait that form builders and the
//! error summary consume, plus [`ResourceKey`] for reference-identity
//! bookkeeping during traversal.

use std::any::{Any, TypeId};

use indexmap::IndexMap;

/// Ordered mapping from field name to validation messages.
///
/// Field order is preserved so rendered error summaries are reproducible.
/// An entry with an empty message list counts as "no error" for that field.
pub type ErrorMap = IndexMap<String, Vec<String>>;

/// Day/month/year parts of a date-valued field, each rendered verbatim into
/// its own input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateParts {
    pub day: Option<String>,
    pub month: Option<String>,
    pub year: Option<String>,
}

/// A data-bearing object that forms can be bound to.
///
/// Resources are arranged in an ownership tree: a root resource owns nested
/// child resources via object composition. The library never owns resources,
/// it only reads them through this trait.
///
/// Child resources are declared explicitly by implementing [`children`]
/// rather than discovered by reflection, so traversal order is the
/// declaration order chosen by the implementor and is deterministic across
/// calls. List-valued child fields contribute their elements in sequence
/// order.
///
/// # Example
///
/// ```rust
/// use signpost::{ErrorMap, Resource};
///
/// struct Address {
///     postcode: Option<String>,
///     errors: ErrorMap,
/// }
///
/// impl Resource for Address {
///     fn type_name(&self) -> &str {
///         "Address"
///     }
///
///     fn errors(&self) -> Option<&ErrorMap> {
///         Some(&self.errors)
///     }
///
///     fn value(&self, field: &str) -> Option<String> {
///         match field {
///             "postcode" => self.postcode.clone(),
///             _ => None,
///         }
///     }
/// }
/// ```
///
/// The `Any` supertrait gives every resource a dynamic type identity;
/// [`ResourceKey`] relies on it to tell a wrapper apart from a child stored
/// at the same address.
///
/// [`children`]: Resource::children
pub trait Resource: Any {
    /// The declared type name of this resource, e.g. `"Person"`.
    ///
    /// Converted to a lowercase underscored form when building ids, form
    /// names and localization keys.
    fn type_name(&self) -> &str;

    /// Child resources reachable from this object, in declaration order.
    ///
    /// Implementations must not recurse into grandchildren; traversal is the
    /// walker's responsibility.
    fn children(&self) -> Vec<&dyn Resource> {
        Vec::new()
    }

    /// The validation errors carried by this object, if any.
    fn errors(&self) -> Option<&ErrorMap> {
        None
    }

    /// The current value of a field, used to populate rendered inputs.
    fn value(&self, _field: &str) -> Option<String> {
        None
    }

    /// The split parts of a date-valued field.
    fn date_parts(&self, _field: &str) -> Option<DateParts> {
        None
    }
}

impl dyn Resource + '_ {
    /// Returns true if this object's own error mapping contains at least one
    /// field with at least one message. Does not look at children.
    pub fn has_own_errors(&self) -> bool {
        self.errors()
            .map(|map| map.values().any(|messages| !messages.is_empty()))
            .unwrap_or(false)
    }
}

/// Reference identity of a resource: its data address paired with its
/// dynamic type.
///
/// Two structurally equal resources at different addresses compare unequal;
/// the same object viewed through different borrows compares equal. The
/// address alone is not enough: a child stored as the first field of its
/// parent starts at the parent's address, and the two may only be told apart
/// by type (a struct cannot contain itself by value, so equal address plus
/// equal type means the same object). Keys are only meaningful within a
/// single traversal, while the borrows they were taken from are still alive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResourceKey(usize, TypeId);

impl ResourceKey {
    /// Derives the identity key for a resource.
    pub fn of(resource: &dyn Resource) -> Self {
        ResourceKey(
            resource as *const dyn Resource as *const () as usize,
            resource.type_id(),
        )
    }
}
