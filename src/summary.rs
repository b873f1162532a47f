//! The consolidated validation error summary.
//!
//! Walks the whole resource tree, derives an ownership-path prefix for every
//! object carrying errors, and assembles a heading, description and flat
//! list of links — one per failing field message, each href targeting the
//! field's DOM id so assistive technology can jump straight to the input.

use crate::markup::{escape, Attrs, MarkupBuilder};
use crate::naming::humanize;
use crate::path::{ParentMap, PrefixChain};
use crate::resource::Resource;
use crate::translate::Translator;
use crate::walker::{has_errors, objects_with_errors};

/// Localization scope for field labels.
const LABEL_SCOPE: &str = "helpers.label";

/// One error-summary line: a link target and its message text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryEntry {
    /// Anchor href, e.g. `#error_person_address_attributes_postcode`.
    pub href: String,
    /// Full message text, e.g. `Postcode is required`.
    pub text: String,
}

/// Collects one entry per failing field message across the whole tree.
///
/// The root's own errors come first, then each descendant with errors in
/// traversal order. Field order within an object follows its error mapping;
/// message order follows each field's message list. Labels resolve through
/// the translator under the `helpers.label` scope, falling back to the
/// humanized field name.
pub fn summary_entries(
    object: Option<&dyn Resource>,
    translator: &dyn Translator,
) -> Vec<SummaryEntry> {
    let Some(root) = object else {
        return Vec::new();
    };

    let parents = ParentMap::build(Some(root));
    let mut entries = Vec::new();

    if root.has_own_errors() {
        push_entries_for(root, &parents, translator, &mut entries);
    }
    for child in objects_with_errors(Some(root)) {
        push_entries_for(child, &parents, translator, &mut entries);
    }
    entries
}

fn push_entries_for(
    object: &dyn Resource,
    parents: &ParentMap<'_>,
    translator: &dyn Translator,
    entries: &mut Vec<SummaryEntry>,
) {
    let Some(errors) = object.errors() else {
        return;
    };

    let prefixes = PrefixChain::derive(object, parents);
    for (field, messages) in errors {
        let label = localized_label(&prefixes, field, translator);
        for message in messages {
            entries.push(SummaryEntry {
                href: format!("#error_{}", prefixes.dom_id(field)),
                text: format!("{label} {message}"),
            });
        }
    }
}

fn localized_label(prefixes: &PrefixChain, field: &str, translator: &dyn Translator) -> String {
    translator.translate(
        &prefixes.localization_key(field),
        &humanize(field),
        LABEL_SCOPE,
    )
}

/// Renders the error summary block, or `None` when no object in the tree
/// carries errors.
///
/// The block is a `div` with `role="group"`, labelled by its heading and
/// focusable via `tabindex="-1"`, containing the heading, the description
/// and a list of links. Link text is escaped before embedding.
pub fn error_summary(
    object: Option<&dyn Resource>,
    heading: &str,
    description: &str,
    markup: &dyn MarkupBuilder,
    translator: &dyn Translator,
) -> Option<String> {
    if !has_errors(object) {
        return None;
    }

    let entries = summary_entries(object, translator);

    let items: String = entries
        .iter()
        .map(|entry| {
            let link = markup.render_tag(
                "a",
                &Attrs::new().with("href", entry.href.clone()),
                Some(&escape(&entry.text)),
            );
            markup.render_tag("li", &Attrs::new(), Some(&link))
        })
        .collect();

    let heading_tag = markup.render_tag(
        "h1",
        &Attrs::new()
            .with("id", "error-summary-heading")
            .with_list(
                "class",
                vec![
                    "heading-medium".to_string(),
                    "error-summary-heading".to_string(),
                ],
            ),
        Some(&escape(heading)),
    );
    let description_tag = markup.render_tag("p", &Attrs::new(), Some(&escape(description)));
    let list_tag = markup.render_tag(
        "ul",
        &Attrs::new().with("class", "error-summary-list"),
        Some(&items),
    );

    let content = format!("{heading_tag}{description_tag}{list_tag}");
    Some(markup.render_tag(
        "div",
        &Attrs::new()
            .with("class", "error-summary")
            .with("role", "group")
            .with("aria-labelledby", "error-summary-heading")
            .with("tabindex", "-1"),
        Some(&content),
    ))
}
