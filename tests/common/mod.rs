//! Shared fixtures: a Person/Address/Country ownership tree and a
//! link-based node graph for cycle scenarios.
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;

use signpost::{DateParts, ErrorMap, Resource};

/// Builds an error mapping from `(field, messages)` pairs.
pub fn errors_of(pairs: &[(&str, &[&str])]) -> ErrorMap {
    let mut errors = ErrorMap::new();
    for (field, messages) in pairs {
        errors.insert(
            field.to_string(),
            messages.iter().map(|m| m.to_string()).collect(),
        );
    }
    errors
}

#[derive(Default)]
pub struct Country {
    pub values: HashMap<String, String>,
    pub errors: ErrorMap,
}

impl Country {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_error(mut self, field: &str, message: &str) -> Self {
        self.errors
            .entry(field.to_string())
            .or_default()
            .push(message.to_string());
        self
    }
}

impl Resource for Country {
    fn type_name(&self) -> &str {
        "Country"
    }

    fn errors(&self) -> Option<&ErrorMap> {
        Some(&self.errors)
    }

    fn value(&self, field: &str) -> Option<String> {
        self.values.get(field).cloned()
    }
}

#[derive(Default)]
pub struct Address {
    pub values: HashMap<String, String>,
    pub country: Option<Country>,
    pub errors: ErrorMap,
}

impl Address {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_error(mut self, field: &str, message: &str) -> Self {
        self.errors
            .entry(field.to_string())
            .or_default()
            .push(message.to_string());
        self
    }

    pub fn with_country(mut self, country: Country) -> Self {
        self.country = Some(country);
        self
    }
}

impl Resource for Address {
    fn type_name(&self) -> &str {
        "Address"
    }

    fn children(&self) -> Vec<&dyn Resource> {
        self.country
            .iter()
            .map(|c| c as &dyn Resource)
            .collect()
    }

    fn errors(&self) -> Option<&ErrorMap> {
        Some(&self.errors)
    }

    fn value(&self, field: &str) -> Option<String> {
        self.values.get(field).cloned()
    }
}

#[derive(Default)]
pub struct Person {
    pub values: HashMap<String, String>,
    pub date_of_birth: Option<DateParts>,
    pub address: Option<Address>,
    pub errors: ErrorMap,
}

impl Person {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_error(mut self, field: &str, message: &str) -> Self {
        self.errors
            .entry(field.to_string())
            .or_default()
            .push(message.to_string());
        self
    }

    pub fn with_value(mut self, field: &str, value: &str) -> Self {
        self.values.insert(field.to_string(), value.to_string());
        self
    }

    pub fn with_address(mut self, address: Address) -> Self {
        self.address = Some(address);
        self
    }

    pub fn with_date_of_birth(mut self, parts: DateParts) -> Self {
        self.date_of_birth = Some(parts);
        self
    }
}

impl Resource for Person {
    fn type_name(&self) -> &str {
        "Person"
    }

    fn children(&self) -> Vec<&dyn Resource> {
        self.address
            .iter()
            .map(|a| a as &dyn Resource)
            .collect()
    }

    fn errors(&self) -> Option<&ErrorMap> {
        Some(&self.errors)
    }

    fn value(&self, field: &str) -> Option<String> {
        self.values.get(field).cloned()
    }

    fn date_parts(&self, field: &str) -> Option<DateParts> {
        if field == "date_of_birth" {
            self.date_of_birth.clone()
        } else {
            None
        }
    }
}

/// A wrapper resource whose child is its only field, so the child starts at
/// the wrapper's own address.
pub struct Application {
    pub applicant: Applicant,
}

impl Application {
    pub fn new(applicant: Applicant) -> Self {
        Application { applicant }
    }
}

impl Resource for Application {
    fn type_name(&self) -> &str {
        "Application"
    }

    fn children(&self) -> Vec<&dyn Resource> {
        vec![&self.applicant]
    }
}

#[derive(Default)]
pub struct Applicant {
    pub errors: ErrorMap,
}

impl Applicant {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_error(mut self, field: &str, message: &str) -> Self {
        self.errors
            .entry(field.to_string())
            .or_default()
            .push(message.to_string());
        self
    }
}

impl Resource for Applicant {
    fn type_name(&self) -> &str {
        "Applicant"
    }

    fn errors(&self) -> Option<&ErrorMap> {
        Some(&self.errors)
    }
}

/// A graph node whose links are set after construction, so tests can build
/// shared references and cycles. Nodes are leaked; resources must not carry
/// borrowed data, and the graphs here are a handful of nodes per test.
pub struct Node {
    pub name: String,
    pub errors: ErrorMap,
    links: RefCell<Vec<&'static Node>>,
}

impl Node {
    pub fn new(name: &str) -> &'static Node {
        Box::leak(Box::new(Node {
            name: name.to_string(),
            errors: ErrorMap::new(),
            links: RefCell::new(Vec::new()),
        }))
    }

    pub fn with_error(name: &str, field: &str, message: &str) -> &'static Node {
        let mut errors = ErrorMap::new();
        errors.insert(field.to_string(), vec![message.to_string()]);
        Box::leak(Box::new(Node {
            name: name.to_string(),
            errors,
            links: RefCell::new(Vec::new()),
        }))
    }

    pub fn link(&self, other: &'static Node) {
        self.links.borrow_mut().push(other);
    }
}

impl Resource for Node {
    fn type_name(&self) -> &str {
        &self.name
    }

    fn children(&self) -> Vec<&dyn Resource> {
        self.links
            .borrow()
            .iter()
            .map(|node| *node as &dyn Resource)
            .collect()
    }

    fn errors(&self) -> Option<&ErrorMap> {
        Some(&self.errors)
    }
}
