//! Identifier normalization for type names, field names and DOM ids.
//!
//! Type names like `BillingAddress` become `billing_address` when used in
//! ids and form names; field names like `ni_number` become `"Ni number"`
//! when no translation is available.

use once_cell::sync::Lazy;
use regex::Regex;

static ACRONYM_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([A-Z\d]+)([A-Z][a-z])").expect("static pattern"));
static CASE_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([a-z\d])([A-Z])").expect("static pattern"));

/// Converts a declared type name to a lowercase, underscore-separated form.
///
/// Acronym runs stay together: `NINumber` becomes `ni_number`, not
/// `n_i_number`.
///
/// # Example
///
/// ```rust
/// use signpost::naming::underscore;
///
/// assert_eq!(underscore("Person"), "person");
/// assert_eq!(underscore("BillingAddress"), "billing_address");
/// assert_eq!(underscore("NINumber"), "ni_number");
/// ```
pub fn underscore(name: &str) -> String {
    let name = name.rsplit("::").next().unwrap_or(name);
    let spaced = ACRONYM_BOUNDARY.replace_all(name, "${1}_${2}");
    let spaced = CASE_BOUNDARY.replace_all(&spaced, "${1}_${2}");
    spaced.replace('-', "_").to_lowercase()
}

/// Produces the default human-readable label for a field name.
///
/// Underscores become spaces, the whole string is lowercased, and the first
/// character is upper-cased: `ni_number` becomes `"Ni number"`.
pub fn humanize(field: &str) -> String {
    let spaced = field.replace('_', " ").to_lowercase();
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => spaced,
    }
}

/// Sanitizes a choice value for embedding in a DOM id.
///
/// Whitespace becomes underscores, characters other than alphanumerics,
/// hyphens and underscores are dropped, and the result is lowercased.
pub fn sanitize_to_id(value: &str) -> String {
    value
        .chars()
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .filter(|c| c.is_alphanumeric() || *c == '-' || *c == '_')
        .collect::<String>()
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_underscore_simple() {
        assert_eq!(underscore("Person"), "person");
    }

    #[test]
    fn test_underscore_compound() {
        assert_eq!(underscore("BillingAddress"), "billing_address");
    }

    #[test]
    fn test_underscore_acronym() {
        assert_eq!(underscore("NINumber"), "ni_number");
        assert_eq!(underscore("HTMLDocument"), "html_document");
    }

    #[test]
    fn test_underscore_digits() {
        assert_eq!(underscore("Address2Line"), "address2_line");
    }

    #[test]
    fn test_underscore_module_path() {
        assert_eq!(underscore("steps::appeal::Penalty"), "penalty");
    }

    #[test]
    fn test_underscore_already_lower() {
        assert_eq!(underscore("person"), "person");
    }

    #[test]
    fn test_humanize() {
        assert_eq!(humanize("ni_number"), "Ni number");
        assert_eq!(humanize("name"), "Name");
        assert_eq!(humanize("date_of_birth"), "Date of birth");
    }

    #[test]
    fn test_humanize_empty() {
        assert_eq!(humanize(""), "");
    }

    #[test]
    fn test_sanitize_to_id() {
        assert_eq!(sanitize_to_id("Mines & quarries"), "mines__quarries");
        assert_eq!(sanitize_to_id("yes"), "yes");
        assert_eq!(sanitize_to_id("one-half"), "one-half");
    }
}
