//! Expression evaluation

pub mod call;
pub mod sexpr;

pub use call::call_value;
pub use sexpr::eval_sexpr;

use crate::ast::AstNode;
use crate::reader::read;
use crate::{Environment, Value};

/// Trait for things that can be reduced to a value.
///
/// Evaluation consumes its input: the tree is rewritten in place as it is
/// reduced, and whatever is not returned is dropped.
pub trait Evaluate {
    /// Evaluate in the given environment.
    fn eval(self, env: &mut Environment) -> Value;
}

impl Evaluate for Value {
    fn eval(self, env: &mut Environment) -> Value {
        eval(env, self)
    }
}

impl Evaluate for &AstNode {
    fn eval(self, env: &mut Environment) -> Value {
        eval(env, read(self))
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Main Dispatcher
// ═══════════════════════════════════════════════════════════════════════

/// Reduce a value to its final form.
///
/// Symbols resolve through the environment and S-expressions are applied.
/// Everything else evaluates to itself.
pub fn eval(env: &mut Environment, value: Value) -> Value {
    match value {
        Value::Symbol(name) => env.get(&name),
        Value::SExpr(cells) => eval_sexpr(env, cells),
        other => other,
    }
}
