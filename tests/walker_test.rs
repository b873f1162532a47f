//! Traversal over nested resources: child enumeration, pre-order
//! descendants, error discovery, and termination on cyclic graphs.

mod common;

use common::{Address, Applicant, Application, Country, Node, Person};
use signpost::{descendants, enumerate_children, has_errors, objects_with_errors};

#[test]
fn test_enumerate_children_of_missing_object() {
    assert!(enumerate_children(None).is_empty());
}

#[test]
fn test_enumerate_children_returns_direct_children_only() {
    let person = Person::new().with_address(Address::new().with_country(Country::new()));

    let children = enumerate_children(Some(&person));
    assert_eq!(children.len(), 1);
    assert_eq!(children[0].type_name(), "Address");
}

#[test]
fn test_enumerate_children_preserves_declaration_order() {
    let first = Node::new("First");
    let second = Node::new("Second");
    let root = Node::new("Root");
    root.link(first);
    root.link(second);

    let names: Vec<&str> = enumerate_children(Some(root))
        .iter()
        .map(|child| child.type_name())
        .collect();
    assert_eq!(names, vec!["First", "Second"]);
}

#[test]
fn test_descendants_of_missing_object() {
    assert!(descendants(None).is_empty());
}

#[test]
fn test_descendants_excludes_root_and_walks_pre_order() {
    let d = Node::new("D");
    let b = Node::new("B");
    b.link(d);
    let c = Node::new("C");
    let a = Node::new("A");
    a.link(b);
    a.link(c);

    let names: Vec<&str> = descendants(Some(a))
        .iter()
        .map(|node| node.type_name())
        .collect();
    assert_eq!(names, vec!["B", "D", "C"]);
}

#[test]
fn test_descendants_terminates_on_two_node_cycle() {
    let a = Node::new("A");
    let b = Node::new("B");
    a.link(b);
    b.link(a);

    let names: Vec<&str> = descendants(Some(a))
        .iter()
        .map(|node| node.type_name())
        .collect();
    assert_eq!(names, vec!["B"]);
}

#[test]
fn test_descendants_terminates_on_self_reference() {
    let a = Node::new("A");
    a.link(a);

    assert!(descendants(Some(a)).is_empty());
}

#[test]
fn test_shared_child_appears_once() {
    let shared = Node::new("Shared");
    let left = Node::new("Left");
    left.link(shared);
    let right = Node::new("Right");
    right.link(shared);
    let root = Node::new("Root");
    root.link(left);
    root.link(right);

    let names: Vec<&str> = descendants(Some(root))
        .iter()
        .map(|node| node.type_name())
        .collect();
    assert_eq!(names, vec!["Left", "Shared", "Right"]);
}

#[test]
fn test_child_at_same_address_is_still_visited() {
    let application = Application::new(Applicant::new().with_error("name", "is required"));

    let children = descendants(Some(&application));
    assert_eq!(children.len(), 1);
    assert_eq!(children[0].type_name(), "Applicant");
    assert!(has_errors(Some(&application)));

    let failing = objects_with_errors(Some(&application));
    assert_eq!(failing.len(), 1);
    assert_eq!(failing[0].type_name(), "Applicant");
}

#[test]
fn test_has_errors_is_false_without_errors() {
    let person = Person::new().with_address(Address::new());
    assert!(!has_errors(Some(&person)));
    assert!(!has_errors(None));
}

#[test]
fn test_has_errors_sees_root_errors() {
    let person = Person::new().with_error("name", "is required");
    assert!(has_errors(Some(&person)));
}

#[test]
fn test_has_errors_sees_deeply_nested_errors() {
    let person = Person::new().with_address(
        Address::new().with_country(Country::new().with_error("name", "is required")),
    );
    assert!(has_errors(Some(&person)));
}

#[test]
fn test_has_errors_terminates_on_cyclic_graph() {
    let a = Node::new("A");
    let b = Node::with_error("B", "name", "is required");
    a.link(b);
    b.link(a);

    assert!(has_errors(Some(a)));
}

#[test]
fn test_objects_with_errors_excludes_root_and_clean_objects() {
    let person = Person::new().with_error("name", "is required").with_address(
        Address::new()
            .with_error("postcode", "is required")
            .with_country(Country::new()),
    );

    let failing = objects_with_errors(Some(&person));
    assert_eq!(failing.len(), 1);
    assert_eq!(failing[0].type_name(), "Address");
}

#[test]
fn test_objects_with_errors_keeps_traversal_order() {
    let person = Person::new().with_address(
        Address::new()
            .with_error("postcode", "is required")
            .with_country(Country::new().with_error("name", "is required")),
    );

    let names: Vec<&str> = objects_with_errors(Some(&person))
        .iter()
        .map(|object| object.type_name())
        .collect();
    assert_eq!(names, vec!["Address", "Country"]);
}
