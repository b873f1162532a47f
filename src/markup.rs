//! Markup construction: ordered attribute maps and the serialization seam.
//!
//! Tags are described structurally as a name, an [`Attrs`] map and optional
//! content, then handed to a [`MarkupBuilder`] for serialization. Error and
//! aria annotations are composed into the attribute map before any
//! serialization happens, so no post-hoc string surgery is ever needed on
//! rendered tags.

use std::fmt::Write as _;

use indexmap::IndexMap;

/// An attribute value: a single string or a space-joined list (classes,
/// autocomplete tokens).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
    Str(String),
    List(Vec<String>),
}

impl AttrValue {
    /// Renders the value as it appears inside the attribute quotes,
    /// unescaped.
    pub fn to_text(&self) -> String {
        match self {
            AttrValue::Str(s) => s.clone(),
            AttrValue::List(items) => items.join(" "),
        }
    }

    fn is_blank(&self) -> bool {
        match self {
            AttrValue::Str(_) => false,
            AttrValue::List(items) => items.is_empty(),
        }
    }
}

/// An insertion-ordered attribute map for a single tag.
///
/// Order is preserved so the same inputs always serialize to the same
/// markup. Unrecognized keys pass through verbatim; the map imposes no
/// vocabulary.
///
/// # Example
///
/// ```rust
/// use signpost::{Attrs, HtmlBuilder, MarkupBuilder};
///
/// let mut attrs = Attrs::new();
/// attrs.set_list("class", vec!["govuk-label".to_string()]);
/// attrs.set("for", "person_name");
///
/// let html = HtmlBuilder.render_tag("label", &attrs, Some("Full name"));
/// assert_eq!(html, r#"<label class="govuk-label" for="person_name">Full name</label>"#);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attrs {
    entries: IndexMap<String, AttrValue>,
}

impl Attrs {
    /// Creates an empty attribute map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a string-valued attribute, replacing any existing value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), AttrValue::Str(value.into()));
    }

    /// Sets a list-valued attribute, replacing any existing value.
    pub fn set_list(&mut self, key: impl Into<String>, values: Vec<String>) {
        self.entries.insert(key.into(), AttrValue::List(values));
    }

    /// Chaining variant of [`set`](Attrs::set).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Chaining variant of [`set_list`](Attrs::set_list).
    pub fn with_list(mut self, key: impl Into<String>, values: Vec<String>) -> Self {
        self.set_list(key, values);
        self
    }

    /// Appends a value to a list-valued attribute, promoting an existing
    /// string value to a list.
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.get_mut(&key) {
            Some(AttrValue::List(items)) => items.push(value),
            Some(AttrValue::Str(existing)) => {
                let existing = existing.clone();
                self.entries
                    .insert(key, AttrValue::List(vec![existing, value]));
            }
            None => {
                self.entries.insert(key, AttrValue::List(vec![value]));
            }
        }
    }

    /// Merges default values into an attribute, keeping caller-supplied
    /// values after the defaults. Creates the key when absent.
    pub fn merge_default(&mut self, key: impl Into<String>, defaults: &[&str]) {
        let key = key.into();
        let mut merged: Vec<String> = defaults.iter().map(|d| d.to_string()).collect();
        match self.entries.get(&key) {
            Some(AttrValue::Str(existing)) => merged.push(existing.clone()),
            Some(AttrValue::List(existing)) => merged.extend(existing.iter().cloned()),
            None => {}
        }
        self.entries.insert(key, AttrValue::List(merged));
    }

    /// Returns the value for `key`, if set.
    pub fn get(&self, key: &str) -> Option<&AttrValue> {
        self.entries.get(key)
    }

    /// Removes and returns the value for `key`.
    pub fn remove(&mut self, key: &str) -> Option<AttrValue> {
        self.entries.shift_remove(key)
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &AttrValue)> {
        self.entries.iter()
    }

    /// Returns true if no attributes are set.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Serialization seam: given a tag name, attributes and optional content,
/// produce a markup string.
///
/// Content is treated as already-rendered markup and passed through
/// verbatim; callers escape user-visible text with [`escape`] before
/// embedding it.
pub trait MarkupBuilder {
    fn render_tag(&self, name: &str, attrs: &Attrs, content: Option<&str>) -> String;
}

/// The default HTML serializer.
///
/// Attribute values are escaped; blank list values are skipped; `input` tags
/// self-close.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlBuilder;

impl MarkupBuilder for HtmlBuilder {
    fn render_tag(&self, name: &str, attrs: &Attrs, content: Option<&str>) -> String {
        let mut out = String::new();
        out.push('<');
        out.push_str(name);
        for (key, value) in attrs.iter() {
            if value.is_blank() {
                continue;
            }
            let _ = write!(out, " {}=\"{}\"", key, escape(&value.to_text()));
        }
        match content {
            Some(content) => {
                out.push('>');
                out.push_str(content);
                out.push_str("</");
                out.push_str(name);
                out.push('>');
            }
            None if name == "input" => out.push_str(" />"),
            None => {
                out.push('>');
                out.push_str("</");
                out.push_str(name);
                out.push('>');
            }
        }
        out
    }
}

/// Escapes text for embedding in markup content or attribute values.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
