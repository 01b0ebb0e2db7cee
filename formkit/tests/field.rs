//! Tests for headless text field state.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use formkit::field::TextField;

#[test]
fn test_new_field_is_empty() {
    let field = TextField::new();
    assert!(field.is_empty());
    assert_eq!(field.value(), "");
    assert_eq!(field.error(), None);
}

#[test]
fn test_with_value_and_placeholder() {
    let field = TextField::with_value("hello");
    assert_eq!(field.value(), "hello");

    let field = TextField::with_placeholder("Enter your email");
    assert!(field.is_empty());
    assert_eq!(field.placeholder(), "Enter your email");
}

#[test]
fn test_set_value_replaces() {
    let field = TextField::with_value("old");
    field.set_value("new");
    assert_eq!(field.value(), "new");
}

#[test]
fn test_push_str_appends() {
    let field = TextField::new();
    field.push_str("user");
    field.push_str("@example.com");
    assert_eq!(field.value(), "user@example.com");
}

#[test]
fn test_len_counts_code_points() {
    let field = TextField::with_value("héllo");
    assert_eq!(field.len(), 5);
}

#[test]
fn test_editing_leaves_error_in_place() {
    let field = TextField::with_value("bad");
    field.set_error("Email input is invalid");

    field.set_value("better@example.com");
    assert!(field.has_error());
    assert_eq!(field.error().as_deref(), Some("Email input is invalid"));

    field.clear_error();
    assert!(!field.has_error());
}

#[test]
fn test_clear_resets_value_only() {
    let field = TextField::with_value("something");
    field.set_error("nope");
    field.clear();

    assert!(field.is_empty());
    assert!(field.has_error());
}

#[test]
fn test_ids_are_unique() {
    let a = TextField::new();
    let b = TextField::new();
    assert_ne!(a.id(), b.id());
    assert_ne!(a.id_string(), b.id_string());
}

#[test]
fn test_clone_shares_state() {
    let field = TextField::new();
    let alias = field.clone();

    alias.set_value("shared");
    assert_eq!(field.value(), "shared");
    assert_eq!(field.id(), alias.id());
}

#[test]
fn test_dirty_flag_and_watch() {
    let field = TextField::new();
    assert!(!field.is_dirty());

    let fired = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&fired);
    field.watch(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    field.set_value("a");
    field.set_error("e");
    field.clear_error();

    assert!(field.is_dirty());
    assert_eq!(fired.load(Ordering::SeqCst), 3);

    field.clear_dirty();
    assert!(!field.is_dirty());
}
