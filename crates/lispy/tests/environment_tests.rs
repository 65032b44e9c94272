//! Environment tests

use lispy::*;
use pretty_assertions::assert_eq;

// ═══════════════════════════════════════════════════════════════════════
// Basic Operations
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_environment_new_is_empty() {
    let env = Environment::new();
    assert!(env.is_empty());
    assert_eq!(env.len(), 0);
}

#[test]
fn test_environment_put_and_get() {
    let mut env = Environment::new();
    env.put("x", Value::Number(42.0));

    assert_eq!(env.get("x"), Value::Number(42.0));
    assert_eq!(env.lookup("x"), Some(&Value::Number(42.0)));
    assert_eq!(env.lookup("y"), None);
    assert!(env.contains("x"));
    assert!(!env.contains("y"));
}

#[test]
fn test_environment_put_multiple_keeps_order() {
    let mut env = Environment::new();
    env.put("c", Value::Number(3.0));
    env.put("a", Value::Number(1.0));
    env.put("b", Value::Number(2.0));

    assert_eq!(env.len(), 3);
    assert_eq!(env.names(), vec!["c", "a", "b"]);
}

// ═══════════════════════════════════════════════════════════════════════
// Overwrite in Place
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_environment_overwrite_keeps_slot() {
    let mut env = Environment::new();
    env.put("a", Value::Number(1.0));
    env.put("b", Value::Number(2.0));
    env.put("a", Value::symbol("replaced"));

    assert_eq!(env.len(), 2);
    let bindings: Vec<(&str, &Value)> = env.iter().collect();
    assert_eq!(bindings[0], ("a", &Value::symbol("replaced")));
    assert_eq!(bindings[1], ("b", &Value::Number(2.0)));
}

#[test]
fn test_environment_overwrite_changes_type() {
    let mut env = Environment::new();
    env.put("v", Value::Number(1.0));
    env.put("v", Value::number_list([1.0, 2.0]));
    assert_eq!(env.get("v").kind(), ValueKind::QExpr);
}

// ═══════════════════════════════════════════════════════════════════════
// Copy Semantics
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_environment_put_does_not_alias_caller() {
    let mut env = Environment::new();
    let mut original = Value::number_list([1.0, 2.0]);
    env.put("xs", original.clone());

    if let Value::QExpr(cells) = &mut original {
        cells.push(Value::Number(3.0));
    }

    assert_eq!(env.get("xs"), Value::number_list([1.0, 2.0]));
}

#[test]
fn test_environment_get_twice_gives_independent_copies() {
    let mut env = Environment::new();
    env.put("xs", Value::number_list([1.0]));

    let first = env.get("xs").push(Value::Number(9.0));
    let second = env.get("xs");

    assert_eq!(first.count(), 2);
    assert_eq!(second.count(), 1);
}

// ═══════════════════════════════════════════════════════════════════════
// Unbound Symbols
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_environment_unbound_message() {
    let env = Environment::new();
    assert_eq!(env.get("foo").to_string(), "Error: Unbound Symbol 'foo'");
}

#[test]
fn test_environment_unbound_lookup_never_mutates() {
    let env = Environment::with_prelude();
    let before = env.len();
    for name in ["a", "b", "head2", ""] {
        assert!(env.get(name).is_error());
    }
    assert_eq!(env.len(), before);
}

// ═══════════════════════════════════════════════════════════════════════
// Prelude
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_prelude_binds_functions_by_name() {
    let env = Environment::with_prelude();
    for name in [
        "list", "head", "tail", "eval", "join", "def", "+", "-", "*", "/", "%", "^", "add",
        "sub", "mult", "div", "mod", "pow", "min", "max",
    ] {
        match env.get(name) {
            Value::Function(builtin) => assert_eq!(builtin.name, name),
            other => panic!("{} bound to {:?}", name, other),
        }
    }
}

#[test]
fn test_prelude_order_starts_with_list_functions() {
    let env = Environment::with_prelude();
    assert_eq!(&env.names()[..3], &["list", "head", "tail"]);
}
