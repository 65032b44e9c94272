//! Arithmetic builtins sharing a single left fold

use super::{check_min_count, expect_number};
use crate::environment::Environment;
use crate::error::EvalError;
use crate::value::Value;

/// A binary numeric operator applied by [`fold`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumOp {
    /// `+` / `add`
    Add,
    /// `-` / `sub`
    Sub,
    /// `*` / `mult`
    Mul,
    /// `/` / `div`
    Div,
    /// `%` / `mod` (floating-point remainder)
    Rem,
    /// `^` / `pow`
    Pow,
    /// `min`
    Min,
    /// `max`
    Max,
}

impl NumOp {
    /// Resolve an operator from its symbolic or word name.
    pub fn from_name(name: &str) -> Option<Self> {
        let op = match name {
            "+" | "add" => NumOp::Add,
            "-" | "sub" => NumOp::Sub,
            "*" | "mult" => NumOp::Mul,
            "/" | "div" => NumOp::Div,
            "%" | "mod" => NumOp::Rem,
            "^" | "pow" => NumOp::Pow,
            "min" => NumOp::Min,
            "max" => NumOp::Max,
            _ => return None,
        };
        Some(op)
    }

    /// Apply the operator to an accumulator and the next operand.
    pub fn apply(self, x: f64, y: f64) -> Result<f64, EvalError> {
        Ok(match self {
            NumOp::Add => x + y,
            NumOp::Sub => x - y,
            NumOp::Mul => x * y,
            NumOp::Div | NumOp::Rem if y == 0.0 => return Err(EvalError::DivisionByZero),
            NumOp::Div => x / y,
            NumOp::Rem => x % y,
            NumOp::Pow => x.powf(y),
            NumOp::Min => {
                if x < y {
                    x
                } else {
                    y
                }
            }
            NumOp::Max => {
                if x > y {
                    x
                } else {
                    y
                }
            }
        })
    }
}

/// Fold `args` left to right with `op`, reporting errors under `func`.
///
/// A lone argument to subtraction is negated. A zero divisor aborts the
/// fold and discards the partial result.
pub fn fold(func: &str, op: NumOp, args: Vec<Value>) -> Result<Value, EvalError> {
    check_min_count(func, &args, 1)?;
    let numbers = args
        .iter()
        .enumerate()
        .map(|(index, arg)| expect_number(func, index, arg))
        .collect::<Result<Vec<_>, _>>()?;

    if op == NumOp::Sub && numbers.len() == 1 {
        return Ok(Value::Number(-numbers[0]));
    }

    let mut operands = numbers.into_iter();
    let mut acc = operands.next().unwrap_or_default();
    for y in operands {
        acc = op.apply(acc, y)?;
    }
    Ok(Value::Number(acc))
}

macro_rules! numeric_builtin {
    ($fn_name:ident, $name:literal, $op:expr) => {
        pub(super) fn $fn_name(
            _env: &mut Environment,
            args: Vec<Value>,
        ) -> Result<Value, EvalError> {
            fold($name, $op, args)
        }
    };
}

numeric_builtin!(builtin_add, "+", NumOp::Add);
numeric_builtin!(builtin_sub, "-", NumOp::Sub);
numeric_builtin!(builtin_mul, "*", NumOp::Mul);
numeric_builtin!(builtin_div, "/", NumOp::Div);
numeric_builtin!(builtin_rem, "%", NumOp::Rem);
numeric_builtin!(builtin_pow, "^", NumOp::Pow);
numeric_builtin!(builtin_add_word, "add", NumOp::Add);
numeric_builtin!(builtin_sub_word, "sub", NumOp::Sub);
numeric_builtin!(builtin_mul_word, "mult", NumOp::Mul);
numeric_builtin!(builtin_div_word, "div", NumOp::Div);
numeric_builtin!(builtin_rem_word, "mod", NumOp::Rem);
numeric_builtin!(builtin_pow_word, "pow", NumOp::Pow);
numeric_builtin!(builtin_min, "min", NumOp::Min);
numeric_builtin!(builtin_max, "max", NumOp::Max);
