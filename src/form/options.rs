//! Typed rendering options for form helpers.
//!
//! These are the structured counterparts of the option maps a template
//! passes alongside an attribute: label overrides, width modifiers, extra
//! classes and passthrough attributes.

use crate::markup::Attrs;

/// Options for the label rendered above an input.
#[derive(Debug, Clone, Default)]
pub struct LabelOptions {
    /// Explicit label text, overriding the localized lookup.
    pub text: Option<String>,
    /// Extra classes appended after the default label class.
    pub classes: Vec<String>,
    /// Passthrough attributes for the label tag.
    pub attrs: Attrs,
}

/// Options for a single labeled input or textarea.
///
/// # Example
///
/// ```rust
/// use signpost::{FieldOptions, Width};
///
/// let options = FieldOptions::new()
///     .class("postcode-input")
///     .width(Width::OneQuarter)
///     .label_text("Postcode");
/// ```
#[derive(Debug, Clone, Default)]
pub struct FieldOptions {
    pub label: LabelOptions,
    /// Width modifier class for the input.
    pub width: Option<Width>,
    /// Extra classes appended after the default input class.
    pub classes: Vec<String>,
    /// Passthrough attributes for the input tag.
    pub attrs: Attrs,
}

impl FieldOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an extra class to the input.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Sets the input width modifier.
    pub fn width(mut self, width: Width) -> Self {
        self.width = Some(width);
        self
    }

    /// Overrides the localized label text.
    pub fn label_text(mut self, text: impl Into<String>) -> Self {
        self.label.text = Some(text.into());
        self
    }

    /// Appends an extra class to the label.
    pub fn label_class(mut self, class: impl Into<String>) -> Self {
        self.label.classes.push(class.into());
        self
    }

    /// Sets a passthrough attribute on the label tag.
    pub fn label_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.label.attrs.set(key, value);
        self
    }

    /// Sets a passthrough attribute on the input tag.
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.set(key, value);
        self
    }
}

/// Input width modifiers: fixed character widths and fluid fractions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Width {
    Char20,
    Char10,
    Char5,
    Char4,
    Char3,
    Char2,
    Full,
    ThreeQuarters,
    TwoThirds,
    OneHalf,
    OneThird,
    OneQuarter,
}

impl Width {
    /// The CSS class for this width.
    pub fn class(self) -> &'static str {
        match self {
            Width::Char20 => "govuk-input--width-20",
            Width::Char10 => "govuk-input--width-10",
            Width::Char5 => "govuk-input--width-5",
            Width::Char4 => "govuk-input--width-4",
            Width::Char3 => "govuk-input--width-3",
            Width::Char2 => "govuk-input--width-2",
            Width::Full => "govuk-!-width-full",
            Width::ThreeQuarters => "govuk-!-width-three-quarters",
            Width::TwoThirds => "govuk-!-width-two-thirds",
            Width::OneHalf => "govuk-!-width-one-half",
            Width::OneThird => "govuk-!-width-one-third",
            Width::OneQuarter => "govuk-!-width-one-quarter",
        }
    }
}

/// One selectable choice in a radio group, checkbox collection or select.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    /// Submitted value.
    pub value: String,
    /// Visible text; when absent the localized label for
    /// `{attribute}.{value}` is used, falling back to the humanized value.
    pub text: Option<String>,
}

impl Choice {
    pub fn new(value: impl Into<String>) -> Self {
        Choice {
            value: value.into(),
            text: None,
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }
}

impl From<&str> for Choice {
    fn from(value: &str) -> Self {
        Choice::new(value)
    }
}

impl From<String> for Choice {
    fn from(value: String) -> Self {
        Choice::new(value)
    }
}

impl From<(&str, &str)> for Choice {
    fn from((value, text): (&str, &str)) -> Self {
        Choice::new(value).with_text(text)
    }
}

/// Options for a fieldset of radios or checkboxes.
#[derive(Debug, Clone, Default)]
pub struct FieldsetOptions {
    /// Choices to render; radios default to yes/no when empty.
    pub choices: Vec<Choice>,
    /// Lay the inputs out inline.
    pub inline: bool,
    /// Use the small input variant.
    pub small: bool,
    /// Render the legend as an `h2` heading; each helper has its own
    /// default when unset.
    pub heading: Option<bool>,
    /// Render the legend as the `h1` page heading.
    pub page_heading: bool,
    /// Passthrough attributes for the legend's heading element.
    pub legend_attrs: Attrs,
    /// Passthrough attributes applied to each choice input.
    pub input_attrs: Attrs,
}

impl FieldsetOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn choices<I>(mut self, choices: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Choice>,
    {
        self.choices = choices.into_iter().map(Into::into).collect();
        self
    }

    pub fn inline(mut self) -> Self {
        self.inline = true;
        self
    }

    pub fn small(mut self) -> Self {
        self.small = true;
        self
    }

    pub fn heading(mut self, heading: bool) -> Self {
        self.heading = Some(heading);
        self
    }

    pub fn page_heading(mut self) -> Self {
        self.page_heading = true;
        self
    }

    pub fn legend_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.legend_attrs.set(key, value);
        self
    }

    pub fn input_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.input_attrs.set(key, value);
        self
    }
}

/// Options for a single choice input rendered inside a fieldset block.
#[derive(Debug, Clone, Default)]
pub struct ChoiceOptions {
    /// Explicit revealing-panel id, overriding the derived one.
    pub panel_id: Option<String>,
    /// Passthrough attributes for the choice input.
    pub input_attrs: Attrs,
}

impl ChoiceOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn panel_id(mut self, id: impl Into<String>) -> Self {
        self.panel_id = Some(id.into());
        self
    }

    pub fn input_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.input_attrs.set(key, value);
        self
    }
}
