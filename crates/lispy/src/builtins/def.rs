//! The `def` builtin: global variable definition

use tracing::debug;

use super::{check_min_count, check_type};
use crate::environment::Environment;
use crate::error::EvalError;
use crate::value::{Value, ValueKind};

/// `def {a b ...} va vb ...`: bind each symbol to the matching value.
///
/// The whole call is validated before the first binding is written, so a
/// failing `def` leaves the environment exactly as it was.
pub(super) fn builtin_def(env: &mut Environment, args: Vec<Value>) -> Result<Value, EvalError> {
    check_min_count("def", &args, 2)?;
    check_type("def", &args, 0, ValueKind::QExpr)?;

    let names = symbol_names(&args[0])?;
    let values = args.len() - 1;
    if names.len() != values {
        return Err(EvalError::DefinitionCountMismatch {
            func: "def".to_string(),
            symbols: names.len(),
            values,
        });
    }

    debug!(count = values, "defining symbols");
    for (name, value) in names.into_iter().zip(args.into_iter().skip(1)) {
        env.put(name, value);
    }
    Ok(Value::sexpr())
}

/// Collect the names from a definition list, rejecting non-symbols.
fn symbol_names(list: &Value) -> Result<Vec<String>, EvalError> {
    list.cells()
        .unwrap_or_default()
        .iter()
        .map(|cell| match cell {
            Value::Symbol(name) => Ok(name.clone()),
            _ => Err(EvalError::NonSymbolDefinition {
                func: "def".to_string(),
            }),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_def_binds_pairwise() {
        let mut env = Environment::new();
        let syms = Value::QExpr(vec![Value::symbol("a"), Value::symbol("b")]);
        let result = builtin_def(&mut env, vec![syms, Value::Number(1.0), Value::Number(2.0)]);

        assert_eq!(result, Ok(Value::sexpr()));
        assert_eq!(env.get("a"), Value::Number(1.0));
        assert_eq!(env.get("b"), Value::Number(2.0));
    }

    #[test]
    fn test_def_count_mismatch_commits_nothing() {
        let mut env = Environment::new();
        let syms = Value::QExpr(vec![Value::symbol("a"), Value::symbol("b")]);
        let result = builtin_def(&mut env, vec![syms, Value::Number(1.0)]);

        assert!(matches!(
            result,
            Err(EvalError::DefinitionCountMismatch {
                symbols: 2,
                values: 1,
                ..
            })
        ));
        assert!(env.is_empty());
    }

    #[test]
    fn test_def_rejects_non_symbol() {
        let mut env = Environment::new();
        let syms = Value::QExpr(vec![Value::symbol("a"), Value::Number(2.0)]);
        let result = builtin_def(&mut env, vec![syms, Value::Number(1.0), Value::Number(2.0)]);

        assert_eq!(
            result,
            Err(EvalError::NonSymbolDefinition {
                func: "def".to_string()
            })
        );
        assert!(env.is_empty());
    }
}
