//! The form builder: labeled inputs, fieldsets and date inputs bound to a
//! resource.
//!
//! A [`FormBuilder`] is created per render with the bound object's name
//! (e.g. `person`, or `person[address_attributes]` for a nested builder),
//! the resource itself, and the markup/translator collaborators. Every
//! helper returns a markup string; all mutable state (the current-fieldset
//! slot) lives on the builder, so concurrent renders each get their own.

mod date;
mod fieldset;
mod options;

pub use date::{DateOptions, DateSegment};
pub use fieldset::{PanelBuffer, PanelKind};
pub use options::{Choice, ChoiceOptions, FieldOptions, FieldsetOptions, LabelOptions, Width};

use crate::markup::{escape, Attrs, MarkupBuilder};
use crate::naming::humanize;
use crate::resource::Resource;
use crate::translate::Translator;

pub(crate) const LABEL_SCOPE: &str = "helpers.label";
pub(crate) const FIELDSET_SCOPE: &str = "helpers.fieldset";
pub(crate) const HINT_SCOPE: &str = "helpers.hint";

/// Renders design-system form controls for one bound resource.
///
/// # Example
///
/// ```rust
/// use signpost::{ErrorMap, FieldOptions, FormBuilder, HtmlBuilder, NullTranslator, Resource};
///
/// struct Person;
///
/// impl Resource for Person {
///     fn type_name(&self) -> &str {
///         "Person"
///     }
/// }
///
/// let person = Person;
/// let markup = HtmlBuilder;
/// let translator = NullTranslator;
/// let builder = FormBuilder::new("person", &person, &markup, &translator);
///
/// let html = builder.text_field("name", &FieldOptions::new());
/// assert!(html.contains(r#"name="person[name]""#));
/// assert!(html.contains(r#"id="person_name""#));
/// ```
pub struct FormBuilder<'a> {
    object_name: String,
    object: &'a dyn Resource,
    markup: &'a dyn MarkupBuilder,
    translator: &'a dyn Translator,
    current_fieldset_attribute: Option<String>,
}

macro_rules! input_fields {
    ($($(#[$meta:meta])* $name:ident => $input_type:literal),+ $(,)?) => {
        $(
            $(#[$meta])*
            pub fn $name(&self, attribute: &str, options: &FieldOptions) -> String {
                self.labelled_input(attribute, $input_type, options)
            }
        )+
    };
}

impl<'a> FormBuilder<'a> {
    /// Creates a builder bound to `object` under the given form name.
    pub fn new(
        object_name: impl Into<String>,
        object: &'a dyn Resource,
        markup: &'a dyn MarkupBuilder,
        translator: &'a dyn Translator,
    ) -> Self {
        FormBuilder {
            object_name: object_name.into(),
            object,
            markup,
            translator,
            current_fieldset_attribute: None,
        }
    }

    /// The bound resource.
    pub fn object(&self) -> &'a dyn Resource {
        self.object
    }

    /// The form name of the bound resource, brackets included for nested
    /// builders.
    pub fn object_name(&self) -> &str {
        &self.object_name
    }

    /// Yields a nested builder for a child resource.
    ///
    /// The nested object name follows the nested-attributes convention:
    /// `fields_for("address", …)` on a `person` builder produces names like
    /// `person[address_attributes][postcode]` and ids like
    /// `person_address_attributes_postcode`.
    pub fn fields_for<F>(&self, record_name: &str, child: &'a dyn Resource, block: F) -> String
    where
        F: FnOnce(&mut FormBuilder<'a>) -> String,
    {
        let mut nested = FormBuilder::new(
            format!("{}[{}_attributes]", self.object_name, record_name),
            child,
            self.markup,
            self.translator,
        );
        block(&mut nested)
    }

    input_fields! {
        text_field => "text",
        email_field => "email",
        number_field => "number",
        password_field => "password",
        phone_field => "tel",
        telephone_field => "tel",
        range_field => "range",
        search_field => "search",
        url_field => "url",
    }

    /// Renders a labeled textarea inside its form group.
    pub fn text_area(&self, attribute: &str, options: &FieldOptions) -> String {
        let label = self.label_tag(attribute, &options.label);
        let value = self.object.value(attribute).unwrap_or_default();

        let mut attrs = options.attrs.clone();
        attrs.set_list("class", self.field_classes(attribute, "govuk-textarea", options));
        attrs.set("name", self.field_name_for(attribute));
        attrs.set("id", self.field_id(attribute));
        self.describe_errors(attribute, &mut attrs);

        let textarea = self.markup.render_tag("textarea", &attrs, Some(&escape(&value)));
        self.form_group(attribute, &format!("{label}{textarea}"))
    }

    /// Renders a textarea wrapped in a character-count container that
    /// enforces a word limit client-side.
    pub fn text_area_with_maxwords(
        &self,
        attribute: &str,
        maxwords: usize,
        options: &FieldOptions,
    ) -> String {
        let inner = self.text_area(attribute, &options.clone().class("js-character-count"));

        let mut attrs = Attrs::new();
        attrs.set_list("class", vec!["govuk-character-count".to_string()]);
        attrs.set("data-module", "character-count");
        attrs.set("data-maxwords", maxwords.to_string());
        self.markup.render_tag("div", &attrs, Some(&inner))
    }

    /// Renders a currency input: a pound symbol beside a number input.
    pub fn pounds_field(&self, attribute: &str, options: &FieldOptions) -> String {
        let label = self.label_tag(attribute, &options.label);
        let input = self.input_tag(attribute, "number", options);

        let symbol = self.markup.render_tag(
            "div",
            &Attrs::new().with("class", "govuk-currency-input__symbol"),
            Some("£"),
        );
        let container = self.markup.render_tag(
            "div",
            &Attrs::new().with("class", "govuk-currency-input"),
            Some(&format!("{symbol}{input}")),
        );
        self.form_group(attribute, &format!("{label}{container}"))
    }

    /// Renders the submit button.
    pub fn submit(&self, value: &str) -> String {
        let mut attrs = Attrs::new();
        attrs.set_list("class", vec!["govuk-button".to_string()]);
        attrs.set("type", "submit");
        attrs.set("value", value);
        self.markup.render_tag("input", &attrs, None)
    }

    /// Marks `attribute` as the fieldset currently being rendered, so
    /// nested choice helpers can derive panel ids without restating it.
    ///
    /// The slot is overwritten by each fieldset call; its value is only
    /// meaningful within the dynamic extent of that call.
    pub fn begin_fieldset(&mut self, attribute: &str) {
        self.current_fieldset_attribute = Some(attribute.to_string());
    }

    /// The attribute of the fieldset currently being rendered, if any.
    pub fn current_fieldset_attribute(&self) -> Option<&str> {
        self.current_fieldset_attribute.as_deref()
    }

    // ---- shared rendering internals ----

    /// A labeled input of the given type inside its form group.
    fn labelled_input(&self, attribute: &str, input_type: &str, options: &FieldOptions) -> String {
        let label = self.label_tag(attribute, &options.label);
        let input = self.input_tag(attribute, input_type, options);
        self.form_group(attribute, &format!("{label}{input}"))
    }

    fn input_tag(&self, attribute: &str, input_type: &str, options: &FieldOptions) -> String {
        let mut attrs = options.attrs.clone();
        attrs.set_list("class", self.field_classes(attribute, "govuk-input", options));
        attrs.set("type", input_type);
        attrs.set("name", self.field_name_for(attribute));
        if let Some(value) = self.object.value(attribute) {
            attrs.set("value", value);
        }
        attrs.set("id", self.field_id(attribute));
        self.describe_errors(attribute, &mut attrs);
        self.markup.render_tag("input", &attrs, None)
    }

    fn field_classes(
        &self,
        attribute: &str,
        default_class: &str,
        options: &FieldOptions,
    ) -> Vec<String> {
        let mut classes = vec![default_class.to_string()];
        if self.error_for(attribute) {
            classes.push(format!("{default_class}--error"));
        }
        if let Some(width) = options.width {
            classes.push(width.class().to_string());
        }
        classes.extend(options.classes.iter().cloned());
        classes
    }

    /// Points assistive technology at the field's error message.
    pub(crate) fn describe_errors(&self, attribute: &str, attrs: &mut Attrs) {
        if self.error_for(attribute) {
            attrs.set(
                "aria-describedby",
                format!("error_message_{}", self.field_id(attribute)),
            );
        }
    }

    /// The label tag, with hint and error-message spans composed into its
    /// content.
    pub(crate) fn label_tag(&self, attribute: &str, options: &LabelOptions) -> String {
        let text = options
            .text
            .clone()
            .unwrap_or_else(|| self.localized_label(attribute));

        let mut content = text;
        if let Some(hint) = self.hint_span(attribute) {
            content.push_str(&hint);
        }
        if let Some(error) = self.error_span(attribute) {
            content.push_str(&error);
        }

        let mut attrs = options.attrs.clone();
        let mut classes = vec!["govuk-label".to_string()];
        classes.extend(options.classes.iter().cloned());
        attrs.set_list("class", classes);
        attrs.set("for", self.field_id(attribute));
        self.markup.render_tag("label", &attrs, Some(&content))
    }

    pub(crate) fn hint_span(&self, attribute: &str) -> Option<String> {
        let hint = self.hint_text(attribute)?;
        Some(self.markup.render_tag(
            "span",
            &Attrs::new().with("class", "govuk-hint"),
            Some(&hint),
        ))
    }

    pub(crate) fn error_span(&self, attribute: &str) -> Option<String> {
        let message = self.error_full_message_for(attribute)?;
        Some(self.markup.render_tag(
            "span",
            &Attrs::new()
                .with("class", "govuk-error-message")
                .with("id", format!("error_message_{}", self.field_id(attribute))),
            Some(&message),
        ))
    }

    /// Wraps content in the form group for `attribute`.
    pub(crate) fn form_group(&self, attribute: &str, content: &str) -> String {
        let mut attrs = Attrs::new();
        attrs.set_list("class", self.form_group_classes(&[attribute]));
        attrs.set("id", self.form_group_id(attribute));
        self.markup.render_tag("div", &attrs, Some(content))
    }

    pub(crate) fn form_group_classes(&self, attributes: &[&str]) -> Vec<String> {
        let mut classes = vec!["govuk-form-group".to_string()];
        if attributes.iter().any(|a| self.error_for(a)) {
            classes.push("govuk-form-group--error".to_string());
        }
        classes
    }

    /// The id of the group wrapper. Groups whose field has errors take the
    /// `error_`-prefixed id so error-summary anchors land on them.
    pub(crate) fn form_group_id(&self, attribute: &str) -> String {
        if self.error_for(attribute) {
            format!("error_{}", self.field_id(attribute))
        } else {
            format!("{}_container", self.field_id(attribute))
        }
    }

    // ---- naming ----

    /// The DOM id of a field: the flattened object name plus the attribute.
    pub fn field_id(&self, attribute: &str) -> String {
        format!("{}_{}", self.attribute_prefix(), attribute)
    }

    /// The submitted name of a field: `object_name[attribute]`.
    pub fn field_name_for(&self, attribute: &str) -> String {
        format!("{}[{}]", self.object_name, attribute)
    }

    /// The object name flattened for use in DOM ids: brackets become
    /// underscores, runs collapse, trailing separators drop.
    pub(crate) fn attribute_prefix(&self) -> String {
        let mut prefix = String::with_capacity(self.object_name.len());
        for c in self.object_name.chars() {
            let c = if c == '[' || c == ']' { '_' } else { c };
            if c == '_' && prefix.ends_with('_') {
                continue;
            }
            prefix.push(c);
        }
        prefix.trim_end_matches('_').to_string()
    }

    // ---- errors ----

    /// Returns true if the bound object carries an error for `attribute`.
    pub fn error_for(&self, attribute: &str) -> bool {
        self.object
            .errors()
            .and_then(|errors| errors.get(attribute))
            .map(|messages| !messages.is_empty())
            .unwrap_or(false)
    }

    /// The first error for `attribute` as a full sentence: localized label
    /// plus the raw message, e.g. `Full name is required`.
    pub fn error_full_message_for(&self, attribute: &str) -> Option<String> {
        let message = self
            .object
            .errors()
            .and_then(|errors| errors.get(attribute))
            .and_then(|messages| messages.first())?;
        Some(format!(
            "{} {}",
            self.localized_label(attribute),
            escape(message)
        ))
    }

    // ---- localization ----

    /// The label text for `attribute`, localized under `helpers.label` with
    /// the humanized attribute as fallback.
    pub(crate) fn localized_label(&self, attribute: &str) -> String {
        self.localized(LABEL_SCOPE, attribute, &Self::default_label(attribute))
    }

    pub(crate) fn fieldset_text(&self, attribute: &str) -> String {
        self.localized(FIELDSET_SCOPE, attribute, &Self::default_label(attribute))
    }

    pub(crate) fn hint_text(&self, attribute: &str) -> Option<String> {
        let hint = self.localized(HINT_SCOPE, attribute, "");
        if hint.is_empty() {
            None
        } else {
            Some(hint)
        }
    }

    fn localized(&self, scope: &str, attribute: &str, default: &str) -> String {
        let key = format!("{}.{}", self.object_name, attribute);
        self.translator.translate(&key, default, scope)
    }

    /// The humanized fallback label; dotted keys use their last segment.
    fn default_label(attribute: &str) -> String {
        humanize(attribute.rsplit('.').next().unwrap_or(attribute))
    }

    pub(crate) fn markup(&self) -> &'a dyn MarkupBuilder {
        self.markup
    }

    pub(crate) fn translator(&self) -> &'a dyn Translator {
        self.translator
    }
}
