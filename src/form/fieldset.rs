//! Radio and checkbox fieldsets, including revealing panels for
//! conditionally-shown follow-up fields.

use crate::markup::Attrs;
use crate::naming::{humanize, sanitize_to_id};

use super::options::{Choice, ChoiceOptions, FieldOptions, FieldsetOptions};
use super::{FormBuilder, LABEL_SCOPE};

/// The kind of choice group a revealing panel belongs to; it selects the
/// conditional-reveal class family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelKind {
    Radios,
    Checkboxes,
}

impl PanelKind {
    fn as_str(self) -> &'static str {
        match self {
            PanelKind::Radios => "radios",
            PanelKind::Checkboxes => "checkboxes",
        }
    }
}

impl<'a> FormBuilder<'a> {
    /// Renders a fieldset of radio inputs for `attribute`.
    ///
    /// Choices come from the options; an empty choice list renders the
    /// yes/no pair. The legend renders as a heading unless the options say
    /// otherwise.
    pub fn radio_button_fieldset(&mut self, attribute: &str, options: &FieldsetOptions) -> String {
        self.begin_fieldset(attribute);
        let inputs = self.radio_inputs(attribute, options).join("\n");
        self.radio_fieldset_shell(attribute, options, &inputs)
    }

    /// Block form of [`radio_button_fieldset`]: the closure renders the
    /// choice inputs itself, typically via [`radio_input`] so revealing
    /// panels can be attached.
    ///
    /// [`radio_button_fieldset`]: FormBuilder::radio_button_fieldset
    /// [`radio_input`]: FormBuilder::radio_input
    pub fn radio_button_fieldset_with<F>(
        &mut self,
        attribute: &str,
        options: &FieldsetOptions,
        block: F,
    ) -> String
    where
        F: FnOnce(&mut Self) -> String,
    {
        self.begin_fieldset(attribute);
        let content = block(self);
        self.radio_fieldset_shell(attribute, options, &content)
    }

    fn radio_fieldset_shell(
        &mut self,
        attribute: &str,
        options: &FieldsetOptions,
        content: &str,
    ) -> String {
        let mut group_classes = vec!["govuk-radios".to_string()];
        group_classes.push(
            if options.small {
                "govuk-radios--small"
            } else {
                "govuk-radios--conditional"
            }
            .to_string(),
        );
        if options.inline {
            group_classes.push("govuk-radios--inline".to_string());
        }

        let legend = self.fieldset_legend(attribute, options, true);
        self.fieldset_shell(attribute, &[attribute], options, group_classes, "radios", &legend, content)
    }

    /// Renders a fieldset of checkbox inputs, one per attribute.
    ///
    /// `legend_key` names the legend/hint localization entry and the group
    /// wrapper; each attribute is its own boolean field.
    pub fn check_box_fieldset(
        &mut self,
        legend_key: &str,
        attributes: &[&str],
        options: &FieldsetOptions,
    ) -> String {
        self.begin_fieldset(legend_key);
        let inputs = self.check_box_inputs(attributes, options).join("\n");
        self.check_box_fieldset_shell(legend_key, attributes, options, &inputs)
    }

    /// Block form of [`check_box_fieldset`], for attaching revealing panels
    /// via [`check_box_input`].
    ///
    /// [`check_box_fieldset`]: FormBuilder::check_box_fieldset
    /// [`check_box_input`]: FormBuilder::check_box_input
    pub fn check_box_fieldset_with<F>(
        &mut self,
        legend_key: &str,
        attributes: &[&str],
        options: &FieldsetOptions,
        block: F,
    ) -> String
    where
        F: FnOnce(&mut Self) -> String,
    {
        self.begin_fieldset(legend_key);
        let content = block(self);
        self.check_box_fieldset_shell(legend_key, attributes, options, &content)
    }

    fn check_box_fieldset_shell(
        &mut self,
        legend_key: &str,
        attributes: &[&str],
        options: &FieldsetOptions,
        content: &str,
    ) -> String {
        let legend = self.fieldset_legend(legend_key, options, true);
        self.fieldset_shell(
            legend_key,
            attributes,
            options,
            vec!["govuk-checkboxes".to_string()],
            "checkboxes",
            &legend,
            content,
        )
    }

    #[allow(clippy::too_many_arguments)]
    fn fieldset_shell(
        &mut self,
        group_attribute: &str,
        error_attributes: &[&str],
        options: &FieldsetOptions,
        group_classes: Vec<String>,
        module: &str,
        legend: &str,
        content: &str,
    ) -> String {
        let group = {
            let mut attrs = Attrs::new();
            attrs.set_list("class", self.form_group_classes(error_attributes));
            attrs.set("id", self.form_group_id(group_attribute));
            attrs
        };
        let inner = {
            let mut attrs = Attrs::new();
            attrs.set_list("class", group_classes);
            attrs.set("data-module", module);
            attrs
        };
        let fieldset_attrs = self.fieldset_attrs(options);

        let choices = self
            .markup()
            .render_tag("div", &inner, Some(&format!("{legend}\n{content}")));
        let fieldset = self
            .markup()
            .render_tag("fieldset", &fieldset_attrs, Some(&choices));
        self.markup().render_tag("div", &group, Some(&fieldset))
    }

    pub(crate) fn fieldset_attrs(&self, options: &FieldsetOptions) -> Attrs {
        let mut classes = vec!["govuk-fieldset".to_string()];
        if options.inline {
            classes.push("inline".to_string());
        }
        let mut attrs = Attrs::new();
        attrs.set_list("class", classes);
        attrs
    }

    /// Renders the legend for a fieldset: its localized text as a span, an
    /// `h2` heading, or the `h1` page heading, followed by the field's error
    /// message and hint when present.
    pub(crate) fn fieldset_legend(
        &self,
        attribute: &str,
        options: &FieldsetOptions,
        default_heading: bool,
    ) -> String {
        let heading = options.heading.unwrap_or(default_heading);

        let mut legend_classes = vec!["govuk-fieldset__legend".to_string()];
        if options.page_heading {
            legend_classes.push("govuk-fieldset__legend--l".to_string());
        } else if heading {
            legend_classes.push("govuk-fieldset__legend--m".to_string());
        }

        let text = self.fieldset_text(attribute);
        let mut title_attrs = options.legend_attrs.clone();
        let mut content = if options.page_heading {
            title_attrs.merge_default("class", &["govuk-fieldset__heading"]);
            self.markup().render_tag("h1", &title_attrs, Some(&text))
        } else if heading {
            title_attrs.merge_default("class", &["govuk-fieldset__heading"]);
            self.markup().render_tag("h2", &title_attrs, Some(&text))
        } else {
            title_attrs.merge_default("class", &["govuk-label"]);
            self.markup().render_tag("span", &title_attrs, Some(&text))
        };

        if let Some(error) = self.error_span(attribute) {
            content.push_str(&error);
        }
        if let Some(hint) = self.hint_span(attribute) {
            content.push_str(&hint);
        }

        let mut attrs = Attrs::new();
        attrs.set_list("class", legend_classes);
        self.markup().render_tag("legend", &attrs, Some(&content))
    }

    /// Renders one radio item per choice: the input plus its label, wrapped
    /// in an item div. Defaults to the yes/no pair when no choices are
    /// given.
    pub(crate) fn radio_inputs(
        &self,
        attribute: &str,
        options: &FieldsetOptions,
    ) -> Vec<String> {
        let default_choices = vec![Choice::new("yes"), Choice::new("no")];
        let choices = if options.choices.is_empty() {
            &default_choices
        } else {
            &options.choices
        };

        choices
            .iter()
            .map(|choice| {
                let input_id =
                    format!("{}_{}", self.field_id(attribute), sanitize_to_id(&choice.value));

                let mut input_attrs = options.input_attrs.clone();
                input_attrs.set_list("class", vec!["govuk-radios__input".to_string()]);
                input_attrs.set("type", "radio");
                input_attrs.set("value", choice.value.clone());
                input_attrs.set("name", self.field_name_for(attribute));
                input_attrs.set("id", input_id.clone());
                if self.object().value(attribute).as_deref() == Some(choice.value.as_str()) {
                    input_attrs.set("checked", "checked");
                }
                let input = self.markup().render_tag("input", &input_attrs, None);

                let text = self.choice_text(attribute, choice);
                let mut label_attrs = Attrs::new();
                label_attrs.set_list(
                    "class",
                    vec!["govuk-label".to_string(), "govuk-radios__label".to_string()],
                );
                label_attrs.set("for", input_id);
                let label = self.markup().render_tag("label", &label_attrs, Some(&text));

                self.markup().render_tag(
                    "div",
                    &Attrs::new().with("class", "govuk-radios__item"),
                    Some(&format!("{input}{label}")),
                )
            })
            .collect()
    }

    /// Renders one checkbox item per attribute.
    pub(crate) fn check_box_inputs(
        &self,
        attributes: &[&str],
        options: &FieldsetOptions,
    ) -> Vec<String> {
        attributes
            .iter()
            .map(|attribute| {
                let input_id = self.field_id(attribute);

                let mut input_attrs = options.input_attrs.clone();
                input_attrs.set_list("class", vec!["govuk-checkboxes__input".to_string()]);
                input_attrs.set("type", "checkbox");
                input_attrs.set("value", "1");
                input_attrs.set("name", self.field_name_for(attribute));
                input_attrs.set("id", input_id.clone());
                if matches!(
                    self.object().value(attribute).as_deref(),
                    Some("1") | Some("true")
                ) {
                    input_attrs.set("checked", "checked");
                }
                let input = self.markup().render_tag("input", &input_attrs, None);

                let mut label_attrs = Attrs::new();
                label_attrs.set_list(
                    "class",
                    vec![
                        "govuk-label".to_string(),
                        "govuk-checkboxes__label".to_string(),
                    ],
                );
                label_attrs.set("for", input_id);
                let label = self.markup().render_tag(
                    "label",
                    &label_attrs,
                    Some(&self.localized_label(attribute)),
                );

                self.markup().render_tag(
                    "div",
                    &Attrs::new().with("class", "govuk-checkboxes__item"),
                    Some(&format!("{input}{label}")),
                )
            })
            .collect()
    }

    fn choice_text(&self, attribute: &str, choice: &Choice) -> String {
        match &choice.text {
            Some(text) => text.clone(),
            None => {
                let key = format!("{}.{}.{}", self.object_name(), attribute, choice.value);
                self.translator()
                    .translate(&key, &humanize(&choice.value), LABEL_SCOPE)
            }
        }
    }

    /// Renders one radio input for the fieldset currently being rendered,
    /// wiring `data-aria-controls` when a panel id is supplied.
    ///
    /// Only meaningful inside a fieldset block; the fieldset attribute comes
    /// from the builder's current-fieldset slot.
    pub fn radio_input(&mut self, choice: impl Into<Choice>, options: &ChoiceOptions) -> String {
        let choice = choice.into();
        let fieldset_attribute = self.fieldset_attribute_or_warn();

        let mut fieldset_options = FieldsetOptions::new().choices([choice.clone()]);
        fieldset_options.input_attrs = options.input_attrs.clone();
        if let Some(panel_id) = &options.panel_id {
            fieldset_options
                .input_attrs
                .set("data-aria-controls", panel_id.clone());
        }

        let mut option = self
            .radio_inputs(&fieldset_attribute, &fieldset_options)
            .into_iter()
            .next()
            .unwrap_or_default();
        option.push('\n');
        option
    }

    /// Like [`radio_input`], but also renders a revealing panel and wires
    /// the input to it. The panel id defaults to
    /// `{fieldset_attribute}_{choice}_panel`.
    ///
    /// [`radio_input`]: FormBuilder::radio_input
    pub fn radio_input_with_panel<F>(
        &mut self,
        choice: impl Into<Choice>,
        options: &ChoiceOptions,
        block: F,
    ) -> String
    where
        F: FnOnce(&mut PanelBuffer<'_, 'a>),
    {
        let choice = choice.into();
        let fieldset_attribute = self.fieldset_attribute_or_warn();
        let panel_id = options.panel_id.clone().unwrap_or_else(|| {
            format!(
                "{}_{}_panel",
                fieldset_attribute,
                sanitize_to_id(&choice.value)
            )
        });

        let wired = ChoiceOptions {
            panel_id: Some(panel_id.clone()),
            input_attrs: options.input_attrs.clone(),
        };
        let option = self.radio_input(choice, &wired);
        let panel = self.revealing_panel(&panel_id, PanelKind::Radios, block);
        format!("{option}{panel}")
    }

    /// Renders one checkbox input, wiring `data-aria-controls` when a panel
    /// id is supplied.
    pub fn check_box_input(&mut self, attribute: &str, options: &ChoiceOptions) -> String {
        let mut fieldset_options = FieldsetOptions::new();
        fieldset_options.input_attrs = options.input_attrs.clone();
        if let Some(panel_id) = &options.panel_id {
            fieldset_options
                .input_attrs
                .set("data-aria-controls", panel_id.clone());
        }

        let mut checkbox = self
            .check_box_inputs(&[attribute], &fieldset_options)
            .into_iter()
            .next()
            .unwrap_or_default();
        checkbox.push('\n');
        checkbox
    }

    /// Like [`check_box_input`], but also renders a revealing panel. The
    /// panel id defaults to `{attribute}_panel`.
    ///
    /// [`check_box_input`]: FormBuilder::check_box_input
    pub fn check_box_input_with_panel<F>(
        &mut self,
        attribute: &str,
        options: &ChoiceOptions,
        block: F,
    ) -> String
    where
        F: FnOnce(&mut PanelBuffer<'_, 'a>),
    {
        let panel_id = options
            .panel_id
            .clone()
            .unwrap_or_else(|| format!("{attribute}_panel"));

        let wired = ChoiceOptions {
            panel_id: Some(panel_id.clone()),
            input_attrs: options.input_attrs.clone(),
        };
        let checkbox = self.check_box_input(attribute, &wired);
        let panel = self.revealing_panel(&panel_id, PanelKind::Checkboxes, block);
        format!("{checkbox}{panel}")
    }

    /// Renders a hidden conditional panel whose content is produced by the
    /// block through a [`PanelBuffer`]. Client behavior reveals the panel
    /// when its controlling input is chosen.
    pub fn revealing_panel<F>(&mut self, panel_id: &str, kind: PanelKind, block: F) -> String
    where
        F: FnOnce(&mut PanelBuffer<'_, 'a>),
    {
        let content = {
            let mut buffer = PanelBuffer::new(self);
            block(&mut buffer);
            buffer.finish()
        };

        let mut attrs = Attrs::new();
        attrs.set_list(
            "class",
            vec![
                format!("govuk-{}__conditional", kind.as_str()),
                format!("govuk-{}__conditional--hidden", kind.as_str()),
            ],
        );
        attrs.set("id", panel_id);
        self.markup().render_tag("div", &attrs, Some(&content))
    }

    /// Renders a labeled select inside its form group.
    pub fn collection_select(
        &self,
        attribute: &str,
        choices: &[Choice],
        include_blank: Option<&str>,
        options: &FieldOptions,
    ) -> String {
        let label = self.label_tag(attribute, &options.label);

        let mut items = String::new();
        if let Some(blank) = include_blank {
            items.push_str(&self.markup().render_tag(
                "option",
                &Attrs::new().with("value", ""),
                Some(blank),
            ));
        }
        let selected = self.object().value(attribute);
        for choice in choices {
            let mut attrs = Attrs::new().with("value", choice.value.clone());
            if selected.as_deref() == Some(choice.value.as_str()) {
                attrs.set("selected", "selected");
            }
            let text = choice.text.clone().unwrap_or_else(|| choice.value.clone());
            items.push_str(&self.markup().render_tag("option", &attrs, Some(&text)));
        }

        let mut select_attrs = options.attrs.clone();
        select_attrs.set_list("class", self.select_classes(attribute, options));
        select_attrs.set("name", self.field_name_for(attribute));
        select_attrs.set("id", self.field_id(attribute));
        self.describe_errors(attribute, &mut select_attrs);
        let select = self.markup().render_tag("select", &select_attrs, Some(&items));

        self.form_group(attribute, &format!("{label}{select}"))
    }

    /// Renders a fieldset of radios from a collection of value/text pairs.
    pub fn collection_radio_buttons(
        &mut self,
        attribute: &str,
        choices: &[Choice],
        options: &FieldsetOptions,
    ) -> String {
        self.begin_fieldset(attribute);
        let fieldset_options = FieldsetOptions {
            choices: choices.to_vec(),
            ..options.clone()
        };
        let inputs = self.radio_inputs(attribute, &fieldset_options).join("\n");
        let legend = self.fieldset_legend(attribute, options, false);
        self.fieldset_shell(
            attribute,
            &[attribute],
            options,
            vec!["govuk-radios".to_string()],
            "radios",
            &legend,
            &inputs,
        )
    }

    /// Renders a fieldset of checkboxes for one multi-valued field; the
    /// submitted name takes the `[]` suffix.
    pub fn collection_check_boxes(
        &mut self,
        attribute: &str,
        choices: &[Choice],
        options: &FieldsetOptions,
    ) -> String {
        self.begin_fieldset(attribute);
        let selected = self.object().value(attribute);

        let items: Vec<String> = choices
            .iter()
            .map(|choice| {
                let input_id =
                    format!("{}_{}", self.field_id(attribute), sanitize_to_id(&choice.value));

                let mut input_attrs = options.input_attrs.clone();
                input_attrs.set_list("class", vec!["govuk-checkboxes__input".to_string()]);
                input_attrs.set("type", "checkbox");
                input_attrs.set("value", choice.value.clone());
                input_attrs.set("name", format!("{}[]", self.field_name_for(attribute)));
                input_attrs.set("id", input_id.clone());
                if selected.as_deref() == Some(choice.value.as_str()) {
                    input_attrs.set("checked", "checked");
                }
                let input = self.markup().render_tag("input", &input_attrs, None);

                let mut label_attrs = Attrs::new();
                label_attrs.set_list(
                    "class",
                    vec![
                        "govuk-label".to_string(),
                        "govuk-checkboxes__label".to_string(),
                    ],
                );
                label_attrs.set("for", input_id);
                let text = choice.text.clone().unwrap_or_else(|| humanize(&choice.value));
                let label = self.markup().render_tag("label", &label_attrs, Some(&text));

                self.markup().render_tag(
                    "div",
                    &Attrs::new().with("class", "govuk-checkboxes__item"),
                    Some(&format!("{input}{label}")),
                )
            })
            .collect();

        let legend = self.fieldset_legend(attribute, options, false);
        self.fieldset_shell(
            attribute,
            &[attribute],
            options,
            vec!["govuk-checkboxes".to_string()],
            "checkboxes",
            &legend,
            &items.join("\n"),
        )
    }

    fn select_classes(&self, attribute: &str, options: &FieldOptions) -> Vec<String> {
        let mut classes = vec!["govuk-select".to_string()];
        if self.error_for(attribute) {
            classes.push("govuk-select--error".to_string());
        }
        if let Some(width) = options.width {
            classes.push(width.class().to_string());
        }
        classes.extend(options.classes.iter().cloned());
        classes
    }

    fn fieldset_attribute_or_warn(&self) -> String {
        match self.current_fieldset_attribute() {
            Some(attribute) => attribute.to_string(),
            None => {
                log::warn!("choice input rendered outside a fieldset; panel ids will be partial");
                String::new()
            }
        }
    }
}

/// Accumulates form fields rendered inside a revealing-panel block.
///
/// This is an explicit forwarding wrapper around the form builder: each
/// supported helper renders through the builder and appends the result to
/// the panel's buffer. Arbitrary pre-rendered markup can be appended with
/// [`raw`](PanelBuffer::raw).
pub struct PanelBuffer<'f, 'a> {
    form: &'f mut FormBuilder<'a>,
    buffer: String,
}

impl<'f, 'a> PanelBuffer<'f, 'a> {
    fn new(form: &'f mut FormBuilder<'a>) -> Self {
        PanelBuffer {
            form,
            buffer: String::new(),
        }
    }

    pub fn text_field(&mut self, attribute: &str, options: &FieldOptions) {
        let html = self.form.text_field(attribute, options);
        self.buffer.push_str(&html);
    }

    pub fn email_field(&mut self, attribute: &str, options: &FieldOptions) {
        let html = self.form.email_field(attribute, options);
        self.buffer.push_str(&html);
    }

    pub fn number_field(&mut self, attribute: &str, options: &FieldOptions) {
        let html = self.form.number_field(attribute, options);
        self.buffer.push_str(&html);
    }

    pub fn password_field(&mut self, attribute: &str, options: &FieldOptions) {
        let html = self.form.password_field(attribute, options);
        self.buffer.push_str(&html);
    }

    pub fn phone_field(&mut self, attribute: &str, options: &FieldOptions) {
        let html = self.form.phone_field(attribute, options);
        self.buffer.push_str(&html);
    }

    pub fn url_field(&mut self, attribute: &str, options: &FieldOptions) {
        let html = self.form.url_field(attribute, options);
        self.buffer.push_str(&html);
    }

    pub fn text_area(&mut self, attribute: &str, options: &FieldOptions) {
        let html = self.form.text_area(attribute, options);
        self.buffer.push_str(&html);
    }

    pub fn collection_select(
        &mut self,
        attribute: &str,
        choices: &[Choice],
        include_blank: Option<&str>,
        options: &FieldOptions,
    ) {
        let html = self
            .form
            .collection_select(attribute, choices, include_blank, options);
        self.buffer.push_str(&html);
    }

    pub fn date_field(&mut self, attribute: &str, options: &super::DateOptions) {
        let html = self.form.date_field(attribute, options);
        self.buffer.push_str(&html);
    }

    /// Appends pre-rendered markup verbatim.
    pub fn raw(&mut self, markup: &str) {
        self.buffer.push_str(markup);
    }

    fn finish(self) -> String {
        self.buffer
    }
}
