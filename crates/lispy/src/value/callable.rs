//! Callable value type: native builtins

use crate::environment::Environment;
use crate::error::EvalError;

use super::Value;

/// Signature shared by every native builtin.
///
/// The builtin takes ownership of its already-evaluated argument list and
/// either turns it into a result or drops it before returning an error.
pub type BuiltinFnPtr = fn(&mut Environment, Vec<Value>) -> Result<Value, EvalError>;

/// A built-in native function.
///
/// Builtins carry no captured environment; the evaluator hands them the one
/// global [`Environment`] on each call.
#[derive(Clone, Copy)]
pub struct Builtin {
    /// Name the builtin is registered under (for display/debugging)
    pub name: &'static str,

    /// The actual function pointer
    pub func: BuiltinFnPtr,
}

impl Builtin {
    /// Create a new builtin.
    pub fn new(name: &'static str, func: BuiltinFnPtr) -> Self {
        Self { name, func }
    }

    /// Invoke the builtin with an owned argument list.
    pub fn call(&self, env: &mut Environment, args: Vec<Value>) -> Result<Value, EvalError> {
        (self.func)(env, args)
    }
}

impl PartialEq for Builtin {
    fn eq(&self, other: &Self) -> bool {
        // Registry names are unique, so the name identifies the operation.
        self.name == other.name
    }
}

impl std::fmt::Debug for Builtin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Builtin({})", self.name)
    }
}
