//! List-processing builtins

use super::{check_count, check_min_count, check_not_empty, check_type, take_cells};
use crate::environment::Environment;
use crate::error::EvalError;
use crate::eval::eval;
use crate::value::{Value, ValueKind};

/// `list`: the whole argument list becomes a Q-expression.
pub(super) fn builtin_list(_env: &mut Environment, args: Vec<Value>) -> Result<Value, EvalError> {
    Ok(Value::QExpr(args))
}

/// `head`: a Q-expression holding only the first element.
pub(super) fn builtin_head(_env: &mut Environment, args: Vec<Value>) -> Result<Value, EvalError> {
    check_count("head", &args, 1)?;
    check_type("head", &args, 0, ValueKind::QExpr)?;
    check_not_empty("head", &args, 0)?;

    let mut cells = take_cells(args, 0);
    cells.truncate(1);
    Ok(Value::QExpr(cells))
}

/// `tail`: the Q-expression without its first element.
pub(super) fn builtin_tail(_env: &mut Environment, args: Vec<Value>) -> Result<Value, EvalError> {
    check_count("tail", &args, 1)?;
    check_type("tail", &args, 0, ValueKind::QExpr)?;
    check_not_empty("tail", &args, 0)?;

    let mut cells = take_cells(args, 0);
    cells.remove(0);
    Ok(Value::QExpr(cells))
}

/// `init`: the Q-expression without its last element.
pub(super) fn builtin_init(_env: &mut Environment, args: Vec<Value>) -> Result<Value, EvalError> {
    check_count("init", &args, 1)?;
    check_type("init", &args, 0, ValueKind::QExpr)?;
    check_not_empty("init", &args, 0)?;

    let mut cells = take_cells(args, 0);
    cells.pop();
    Ok(Value::QExpr(cells))
}

/// `len`: number of elements in a Q-expression.
pub(super) fn builtin_len(_env: &mut Environment, args: Vec<Value>) -> Result<Value, EvalError> {
    check_count("len", &args, 1)?;
    check_type("len", &args, 0, ValueKind::QExpr)?;

    Ok(Value::Number(args[0].count() as f64))
}

/// `eval`: evaluate a Q-expression as if it were an S-expression.
pub(super) fn builtin_eval(env: &mut Environment, args: Vec<Value>) -> Result<Value, EvalError> {
    check_count("eval", &args, 1)?;
    check_type("eval", &args, 0, ValueKind::QExpr)?;

    Ok(eval(env, Value::SExpr(take_cells(args, 0))))
}

/// `join`: concatenate Q-expressions left to right.
pub(super) fn builtin_join(_env: &mut Environment, args: Vec<Value>) -> Result<Value, EvalError> {
    check_min_count("join", &args, 1)?;
    for index in 0..args.len() {
        check_type("join", &args, index, ValueKind::QExpr)?;
    }

    let joined = args
        .into_iter()
        .flat_map(|arg| match arg {
            Value::QExpr(cells) => cells,
            _ => Vec::new(),
        })
        .collect();
    Ok(Value::QExpr(joined))
}
