//! Runtime environment managing symbol bindings

mod prelude;

use indexmap::IndexMap;
use tracing::debug;

use crate::error::EvalError;
use crate::value::{Builtin, Value};

/// The runtime environment: one flat, insertion-ordered table of bindings.
///
/// There is exactly one scope. Defining a name that already exists
/// overwrites the binding in place. Values go in and come out as deep
/// copies, so mutating a looked-up value never affects the stored one.
///
/// # Example
///
/// ```
/// use lispy::{Environment, Value};
///
/// let mut env = Environment::new();
/// env.put("x", Value::Number(1.0));
/// env.put("x", Value::Number(10.0)); // Overwrites in place
///
/// assert_eq!(env.get("x"), Value::Number(10.0));
/// assert_eq!(env.len(), 1);
/// assert!(env.get("y").is_error());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Environment {
    bindings: IndexMap<String, Value>,
}

impl Environment {
    /// Create a new empty environment (no builtins).
    pub fn new() -> Self {
        Self::default()
    }

    // ═══════════════════════════════════════════════════════════════════
    // Binding Definition
    // ═══════════════════════════════════════════════════════════════════

    /// Bind `name` to `value`.
    ///
    /// An existing binding is replaced in place and keeps its position;
    /// otherwise a new binding is appended.
    pub fn put(&mut self, name: impl Into<String>, value: Value) {
        let name = name.into();
        debug!(symbol = %name, value = %value, "binding symbol");
        self.bindings.insert(name, value);
    }

    /// Register a built-in function under its own name.
    pub fn define_builtin(&mut self, builtin: Builtin) {
        self.put(builtin.name, Value::Function(builtin));
    }

    // ═══════════════════════════════════════════════════════════════════
    // Binding Lookup
    // ═══════════════════════════════════════════════════════════════════

    /// Look up `name`, returning a copy of the bound value.
    ///
    /// Unbound names produce an `Unbound Symbol` error value.
    pub fn get(&self, name: &str) -> Value {
        match self.bindings.get(name) {
            Some(value) => value.clone(),
            None => Value::Error(EvalError::UnboundSymbol {
                name: name.to_string(),
            }),
        }
    }

    /// Borrow the value bound to `name`, if any.
    pub fn lookup(&self, name: &str) -> Option<&Value> {
        self.bindings.get(name)
    }

    /// Check if a binding exists.
    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    // ═══════════════════════════════════════════════════════════════════
    // Iteration and Inspection
    // ═══════════════════════════════════════════════════════════════════

    /// Iterate over all bindings in definition order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.bindings.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Get all binding names in definition order.
    pub fn names(&self) -> Vec<&str> {
        self.bindings.keys().map(String::as_str).collect()
    }

    /// Get the number of bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Check if the environment is empty.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
