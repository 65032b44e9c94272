//! Native built-in operations and their argument guards
//!
//! Every builtin takes ownership of its evaluated argument list. Validation
//! runs before any work is done, in the order arity, type, emptiness, and
//! stops at the first failing check. Because the argument list is owned,
//! returning early drops it; nothing is committed on an error path.

mod def;
mod list;
mod math;

pub use math::{fold, NumOp};

use tracing::debug;

use crate::environment::Environment;
use crate::error::EvalError;
use crate::value::{BuiltinFnPtr, Value, ValueKind};

/// Every builtin, in registration order.
pub const REGISTRY: &[(&str, BuiltinFnPtr)] = &[
    // List functions
    ("list", list::builtin_list),
    ("head", list::builtin_head),
    ("tail", list::builtin_tail),
    ("init", list::builtin_init),
    ("len", list::builtin_len),
    ("eval", list::builtin_eval),
    ("join", list::builtin_join),
    ("def", def::builtin_def),
    // Mathematical functions
    ("+", math::builtin_add),
    ("-", math::builtin_sub),
    ("*", math::builtin_mul),
    ("/", math::builtin_div),
    ("%", math::builtin_rem),
    ("^", math::builtin_pow),
    ("add", math::builtin_add_word),
    ("sub", math::builtin_sub_word),
    ("mult", math::builtin_mul_word),
    ("div", math::builtin_div_word),
    ("mod", math::builtin_rem_word),
    ("pow", math::builtin_pow_word),
    ("min", math::builtin_min),
    ("max", math::builtin_max),
];

/// Find a builtin in the registry by name.
pub fn find(name: &str) -> Option<BuiltinFnPtr> {
    REGISTRY
        .iter()
        .find(|(registered, _)| *registered == name)
        .map(|&(_, func)| func)
}

/// Call a builtin by name rather than through a bound function value.
///
/// Arithmetic names go straight to the numeric fold. Unrecognized names
/// yield an `Unkown Function!` error and the argument list is dropped.
pub fn dispatch(env: &mut Environment, name: &str, args: Vec<Value>) -> Value {
    debug!(builtin = name, argc = args.len(), "dispatching by name");
    if let Some(op) = NumOp::from_name(name) {
        return fold(name, op, args).unwrap_or_else(Value::Error);
    }
    match find(name) {
        Some(func) => func(env, args).unwrap_or_else(Value::Error),
        None => Value::Error(EvalError::UnknownFunction),
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Argument Guards
// ═══════════════════════════════════════════════════════════════════════

/// Require exactly `expected` arguments.
pub fn check_count(func: &str, args: &[Value], expected: usize) -> Result<(), EvalError> {
    if args.len() != expected {
        return Err(EvalError::IncorrectArgCount {
            func: func.to_string(),
            got: args.len(),
            expected,
        });
    }
    Ok(())
}

/// Require at least `minimum` arguments.
pub fn check_min_count(func: &str, args: &[Value], minimum: usize) -> Result<(), EvalError> {
    if args.len() < minimum {
        return Err(EvalError::IncorrectArgCount {
            func: func.to_string(),
            got: args.len(),
            expected: minimum,
        });
    }
    Ok(())
}

/// Require argument `index` to have the `expected` type.
///
/// A missing argument is reported as an arity failure.
pub fn check_type(
    func: &str,
    args: &[Value],
    index: usize,
    expected: ValueKind,
) -> Result<(), EvalError> {
    let arg = args.get(index).ok_or_else(|| EvalError::IncorrectArgCount {
        func: func.to_string(),
        got: args.len(),
        expected: index + 1,
    })?;
    if arg.kind() != expected {
        return Err(EvalError::IncorrectType {
            func: func.to_string(),
            index,
            got: arg.kind(),
            expected,
        });
    }
    Ok(())
}

/// Require argument `index` to be a list with at least one element.
pub fn check_not_empty(func: &str, args: &[Value], index: usize) -> Result<(), EvalError> {
    match args.get(index) {
        Some(arg) if arg.count() > 0 => Ok(()),
        _ => Err(EvalError::EmptyList {
            func: func.to_string(),
        }),
    }
}

/// Extract the number at `index`, or fail with a type error.
pub fn expect_number(func: &str, index: usize, arg: &Value) -> Result<f64, EvalError> {
    arg.as_number().ok_or_else(|| EvalError::IncorrectType {
        func: func.to_string(),
        index,
        got: arg.kind(),
        expected: ValueKind::Number,
    })
}

/// Take ownership of the elements of the list argument at `index`.
///
/// Callers validate the argument first; anything that is not a list
/// yields no elements.
fn take_cells(args: Vec<Value>, index: usize) -> Vec<Value> {
    match args.into_iter().nth(index) {
        Some(Value::QExpr(cells)) | Some(Value::SExpr(cells)) => cells,
        _ => Vec::new(),
    }
}
