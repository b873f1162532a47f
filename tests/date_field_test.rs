//! The split date input: segment naming, values, autocomplete and state
//! flags.

mod common;

use common::Person;
use signpost::{DateOptions, DateParts, FormBuilder, HtmlBuilder, NullTranslator};

fn birth_date() -> DateParts {
    DateParts {
        day: Some("1".to_string()),
        month: Some("2".to_string()),
        year: Some("1999".to_string()),
    }
}

#[test]
fn test_date_field_segment_names_and_ids() {
    let person = Person::new();
    let markup = HtmlBuilder;
    let translator = NullTranslator;
    let mut builder = FormBuilder::new("person", &person, &markup, &translator);

    let html = builder.date_field("date_of_birth", &DateOptions::new());
    assert!(html.contains(r#"name="person[date_of_birth(3i)]""#));
    assert!(html.contains(r#"name="person[date_of_birth(2i)]""#));
    assert!(html.contains(r#"name="person[date_of_birth(1i)]""#));
    assert!(html.contains(r#"id="person_date_of_birth_3i""#));
    assert!(html.contains(r#"id="person_date_of_birth_2i""#));
    assert!(html.contains(r#"id="person_date_of_birth_1i""#));
}

#[test]
fn test_date_field_structure_and_labels() {
    let person = Person::new();
    let markup = HtmlBuilder;
    let translator = NullTranslator;
    let mut builder = FormBuilder::new("person", &person, &markup, &translator);

    let html = builder.date_field("date_of_birth", &DateOptions::new());
    assert!(html.contains(r#"id="person_date_of_birth_container""#));
    assert!(html.contains(r#"<div class="govuk-date-input">"#));
    assert!(html.contains(r#"<div class="govuk-date-input__item">"#));
    assert!(html.contains(
        r#"<label class="govuk-label govuk-date-input__label" for="person_date_of_birth_3i">Day</label>"#
    ));
    assert!(html.contains(">Month</label>"));
    assert!(html.contains(">Year</label>"));
    // Legend stays plain text rather than a heading.
    assert!(html.contains(
        r#"<legend class="govuk-fieldset__legend"><span class="govuk-label">Date of birth</span></legend>"#
    ));
}

#[test]
fn test_date_field_widths_and_pattern() {
    let person = Person::new();
    let markup = HtmlBuilder;
    let translator = NullTranslator;
    let mut builder = FormBuilder::new("person", &person, &markup, &translator);

    let html = builder.date_field("date_of_birth", &DateOptions::new());
    assert!(html.contains(
        r#"class="govuk-input govuk-date-input__input govuk-input--width-2" type="number" pattern="[0-9]*""#
    ));
    assert!(html.contains(
        r#"class="govuk-input govuk-date-input__input govuk-input--width-4""#
    ));
}

#[test]
fn test_date_field_values_from_date_parts() {
    let person = Person::new().with_date_of_birth(birth_date());
    let markup = HtmlBuilder;
    let translator = NullTranslator;
    let mut builder = FormBuilder::new("person", &person, &markup, &translator);

    let html = builder.date_field("date_of_birth", &DateOptions::new());
    assert!(html.contains(r#"value="1" id="person_date_of_birth_3i""#));
    assert!(html.contains(r#"value="2" id="person_date_of_birth_2i""#));
    assert!(html.contains(r#"value="1999" id="person_date_of_birth_1i""#));
}

#[test]
fn test_date_of_birth_autocomplete_hints() {
    let person = Person::new();
    let markup = HtmlBuilder;
    let translator = NullTranslator;
    let mut builder = FormBuilder::new("person", &person, &markup, &translator);

    let plain = builder.date_field("date_of_birth", &DateOptions::new());
    assert!(!plain.contains("autocomplete"));

    let birthday = builder.date_field("date_of_birth", &DateOptions::new().date_of_birth());
    assert!(birthday.contains(r#"autocomplete="bday bday-day""#));
    assert!(birthday.contains(r#"autocomplete="bday bday-month""#));
    assert!(birthday.contains(r#"autocomplete="bday bday-year""#));
}

#[test]
fn test_date_field_readonly_and_disabled() {
    let person = Person::new();
    let markup = HtmlBuilder;
    let translator = NullTranslator;
    let mut builder = FormBuilder::new("person", &person, &markup, &translator);

    let html = builder.date_field(
        "date_of_birth",
        &DateOptions::new().readonly().disabled(),
    );
    assert!(html.contains(r#"readonly="readonly""#));
    assert!(html.contains(r#"disabled="disabled""#));
}

#[test]
fn test_nested_date_field_ids() {
    let person = Person::new();
    let markup = HtmlBuilder;
    let translator = NullTranslator;
    let mut builder = FormBuilder::new(
        "person[address_attributes]",
        &person,
        &markup,
        &translator,
    );

    let html = builder.date_field("moved_in", &DateOptions::new());
    assert!(html.contains(r#"name="person[address_attributes][moved_in(3i)]""#));
    assert!(html.contains(r#"id="person_address_attributes_moved_in_3i""#));
}
