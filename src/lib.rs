//! # Signpost
//!
//! Accessible form markup helpers that link validation errors, labels and
//! inputs across nested resources.
//!
//! ## Overview
//!
//! Given a bound data object (a "resource") with fields and possibly nested
//! child resources, signpost emits structured markup for labeled inputs,
//! radio/checkbox groups, date inputs, and a consolidated validation error
//! summary. Every piece is cross-referenced by generated identifiers —
//! DOM ids, nested form names and localization keys all derive from the
//! object's ownership path — so error messages, labels and inputs stay
//! linked for assistive technology.
//!
//! ## Core Types
//!
//! - [`Resource`]: the trait bound objects implement (declared children,
//!   ordered error mapping, field values)
//! - [`PrefixChain`]: an ownership path rendered as DOM id, form name or
//!   localization key
//! - [`ParentMap`]: parent pointers for one traversal session
//! - [`FormBuilder`]: renders labeled inputs, fieldsets and date inputs
//! - [`error_summary`]: the consolidated error block
//!
//! ## Example
//!
//! ```rust
//! use signpost::{error_summary, ErrorMap, HtmlBuilder, NullTranslator, Resource};
//!
//! struct Person {
//!     errors: ErrorMap,
//! }
//!
//! impl Resource for Person {
//!     fn type_name(&self) -> &str {
//!         "Person"
//!     }
//!
//!     fn errors(&self) -> Option<&ErrorMap> {
//!         Some(&self.errors)
//!     }
//! }
//!
//! let mut errors = ErrorMap::new();
//! errors.insert("name".to_string(), vec!["is required".to_string()]);
//! let person = Person { errors };
//!
//! let html = error_summary(
//!     Some(&person),
//!     "There is a problem",
//!     "Check the following",
//!     &HtmlBuilder,
//!     &NullTranslator,
//! )
//! .unwrap();
//!
//! assert!(html.contains(r##"href="#error_person_name""##));
//! assert!(html.contains("Name is required"));
//! ```

pub mod form;
pub mod markup;
pub mod naming;
pub mod path;
pub mod resource;
pub mod summary;
pub mod translate;
pub mod walker;

pub use form::{
    Choice, ChoiceOptions, DateOptions, DateSegment, FieldOptions, FieldsetOptions, FormBuilder,
    LabelOptions, PanelBuffer, PanelKind, Width,
};
pub use markup::{escape, AttrValue, Attrs, HtmlBuilder, MarkupBuilder};
pub use path::{ancestor_chain, ParentMap, PrefixChain};
pub use resource::{DateParts, ErrorMap, Resource, ResourceKey};
pub use summary::{error_summary, summary_entries, SummaryEntry};
pub use translate::{CatalogError, NullTranslator, TranslationCatalog, Translator};
pub use walker::{descendants, enumerate_children, has_errors, objects_with_errors};
