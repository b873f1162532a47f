//! Localization lookup: the [`Translator`] seam and an in-memory
//! [`TranslationCatalog`].
//!
//! Lookup follows the convention that a key suffixed `_html` may hold a
//! trusted-markup override: the plain key is tried first, then the `_html`
//! key, then the caller's default.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

/// Localization seam consumed by labels, legends, hints and the error
/// summary.
pub trait Translator: Send + Sync {
    /// Resolves `{scope}.{key}`, falling back to `{scope}.{key}_html` and
    /// finally to `default`. An empty stored value counts as absent.
    fn translate(&self, key: &str, default: &str, scope: &str) -> String;
}

/// Type alias for the shared translation storage.
type EntryMap = Arc<RwLock<HashMap<String, String>>>;

/// A thread-safe, in-memory translation store.
///
/// Entries are keyed by their fully scoped key, e.g.
/// `helpers.label.person.name`. Multiple renders may read concurrently;
/// registration takes the write lock.
///
/// # Example
///
/// ```rust
/// use signpost::{TranslationCatalog, Translator};
///
/// let catalog = TranslationCatalog::new();
/// catalog
///     .add("helpers.label.person.name", "Full name")
///     .unwrap();
///
/// assert_eq!(
///     catalog.translate("person.name", "Name", "helpers.label"),
///     "Full name"
/// );
/// assert_eq!(
///     catalog.translate("person.email", "Email", "helpers.label"),
///     "Email"
/// );
/// ```
pub struct TranslationCatalog {
    entries: EntryMap,
}

impl TranslationCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Registers a translation under its fully scoped key.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::DuplicateKey` if the key is already
    /// registered.
    pub fn add(
        &self,
        key: impl Into<String>,
        text: impl Into<String>,
    ) -> Result<(), CatalogError> {
        let key = key.into();
        let mut entries = self.entries.write();

        if entries.contains_key(&key) {
            return Err(CatalogError::DuplicateKey(key));
        }

        entries.insert(key, text.into());
        Ok(())
    }

    /// Looks up a fully scoped key. Empty stored values count as absent.
    pub fn get(&self, key: &str) -> Option<String> {
        self.entries
            .read()
            .get(key)
            .filter(|text| !text.is_empty())
            .cloned()
    }
}

impl Default for TranslationCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for TranslationCatalog {
    fn clone(&self) -> Self {
        Self {
            entries: Arc::clone(&self.entries),
        }
    }
}

impl Translator for TranslationCatalog {
    fn translate(&self, key: &str, default: &str, scope: &str) -> String {
        let scoped = format!("{scope}.{key}");
        if let Some(text) = self.get(&scoped) {
            return text;
        }
        if let Some(text) = self.get(&format!("{scoped}_html")) {
            return text;
        }
        default.to_string()
    }
}

/// A translator with no entries; every lookup yields the default.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullTranslator;

impl Translator for NullTranslator {
    fn translate(&self, _key: &str, default: &str, _scope: &str) -> String {
        default.to_string()
    }
}

/// Errors that can occur when registering translations.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Attempted to register a key that already exists.
    #[error("translation '{0}' already registered")]
    DuplicateKey(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_key_wins() {
        let catalog = TranslationCatalog::new();
        catalog.add("helpers.label.person.name", "Full name").unwrap();
        catalog
            .add("helpers.label.person.name_html", "<em>Full name</em>")
            .unwrap();

        assert_eq!(
            catalog.translate("person.name", "Name", "helpers.label"),
            "Full name"
        );
    }

    #[test]
    fn test_html_key_fallback() {
        let catalog = TranslationCatalog::new();
        catalog
            .add("helpers.label.person.name_html", "<em>Full name</em>")
            .unwrap();

        assert_eq!(
            catalog.translate("person.name", "Name", "helpers.label"),
            "<em>Full name</em>"
        );
    }

    #[test]
    fn test_default_when_absent() {
        let catalog = TranslationCatalog::new();
        assert_eq!(
            catalog.translate("person.name", "Name", "helpers.label"),
            "Name"
        );
    }

    #[test]
    fn test_empty_entry_counts_as_absent() {
        let catalog = TranslationCatalog::new();
        catalog.add("helpers.label.person.name", "").unwrap();
        assert_eq!(
            catalog.translate("person.name", "Name", "helpers.label"),
            "Name"
        );
    }

    #[test]
    fn test_duplicate_key_rejected() {
        let catalog = TranslationCatalog::new();
        catalog.add("helpers.hint.person.name", "hint").unwrap();
        assert!(catalog.add("helpers.hint.person.name", "other").is_err());
    }

    #[test]
    fn test_null_translator_returns_default() {
        assert_eq!(
            NullTranslator.translate("anything", "Default", "helpers.label"),
            "Default"
        );
    }
}
