//! The split date input: a fieldset of separate day, month and year number
//! inputs.
//!
//! Segment names follow the multiparameter convention expected by
//! server-side date binding: day is `(3i)`, month `(2i)`, year `(1i)`.

use crate::markup::Attrs;

use super::options::{FieldsetOptions, Width};
use super::FormBuilder;

/// One segment of a split date input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateSegment {
    Day,
    Month,
    Year,
}

impl DateSegment {
    /// The multiparameter code used in the submitted name and the DOM id.
    fn code(self) -> &'static str {
        match self {
            DateSegment::Day => "3i",
            DateSegment::Month => "2i",
            DateSegment::Year => "1i",
        }
    }

    fn label(self) -> &'static str {
        match self {
            DateSegment::Day => "Day",
            DateSegment::Month => "Month",
            DateSegment::Year => "Year",
        }
    }

    fn autocomplete(self) -> &'static str {
        match self {
            DateSegment::Day => "bday-day",
            DateSegment::Month => "bday-month",
            DateSegment::Year => "bday-year",
        }
    }

    fn width(self) -> Width {
        match self {
            DateSegment::Year => Width::Char4,
            _ => Width::Char2,
        }
    }
}

/// Options for [`FormBuilder::date_field`].
#[derive(Debug, Clone, Default)]
pub struct DateOptions {
    /// Adds `bday` autocomplete hints to the segments.
    pub date_of_birth: bool,
    pub readonly: bool,
    pub disabled: bool,
    /// Legend and fieldset options.
    pub fieldset: FieldsetOptions,
}

impl DateOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn date_of_birth(mut self) -> Self {
        self.date_of_birth = true;
        self
    }

    pub fn readonly(mut self) -> Self {
        self.readonly = true;
        self
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    pub fn fieldset(mut self, fieldset: FieldsetOptions) -> Self {
        self.fieldset = fieldset;
        self
    }
}

impl<'a> FormBuilder<'a> {
    /// Renders a date field as a fieldset containing separate number inputs
    /// for day, month and year.
    ///
    /// Values come from
    /// [`Resource::date_parts`](crate::resource::Resource::date_parts);
    /// names take the form
    /// `person[date_of_birth(3i)]` and ids `person_date_of_birth_3i`.
    pub fn date_field(&mut self, attribute: &str, options: &DateOptions) -> String {
        self.begin_fieldset(attribute);

        let segments = [DateSegment::Day, DateSegment::Month, DateSegment::Year]
            .into_iter()
            .map(|segment| self.date_input_group(attribute, segment, options))
            .collect::<Vec<_>>()
            .join("");

        let date_inputs = self.markup().render_tag(
            "div",
            &Attrs::new().with("class", "govuk-date-input"),
            Some(&segments),
        );

        let legend = self.fieldset_legend(attribute, &options.fieldset, false);
        let fieldset_attrs = self.fieldset_attrs(&options.fieldset);
        let fieldset = self.markup().render_tag(
            "fieldset",
            &fieldset_attrs,
            Some(&format!("{legend}{date_inputs}")),
        );
        self.form_group(attribute, &fieldset)
    }

    fn date_input_group(
        &self,
        attribute: &str,
        segment: DateSegment,
        options: &DateOptions,
    ) -> String {
        let input_id = format!("{}_{}_{}", self.attribute_prefix(), attribute, segment.code());
        let input_name = format!("{}[{}({})]", self.object_name(), attribute, segment.code());
        let value = self.object().date_parts(attribute).and_then(|parts| match segment {
            DateSegment::Day => parts.day,
            DateSegment::Month => parts.month,
            DateSegment::Year => parts.year,
        });

        let label = self.markup().render_tag(
            "label",
            &Attrs::new()
                .with_list(
                    "class",
                    vec![
                        "govuk-label".to_string(),
                        "govuk-date-input__label".to_string(),
                    ],
                )
                .with("for", input_id.clone()),
            Some(segment.label()),
        );

        let mut input_attrs = Attrs::new();
        input_attrs.set_list(
            "class",
            vec![
                "govuk-input".to_string(),
                "govuk-date-input__input".to_string(),
                segment.width().class().to_string(),
            ],
        );
        input_attrs.set("type", "number");
        input_attrs.set("pattern", "[0-9]*");
        if options.date_of_birth {
            input_attrs.set_list(
                "autocomplete",
                vec!["bday".to_string(), segment.autocomplete().to_string()],
            );
        }
        input_attrs.set("name", input_name);
        if let Some(value) = value {
            input_attrs.set("value", value);
        }
        input_attrs.set("id", input_id);
        if options.readonly {
            input_attrs.set("readonly", "readonly");
        }
        if options.disabled {
            input_attrs.set("disabled", "disabled");
        }
        let input = self.markup().render_tag("input", &input_attrs, None);

        self.markup().render_tag(
            "div",
            &Attrs::new().with("class", "govuk-date-input__item"),
            Some(&format!("{label}{input}")),
        )
    }
}
