use lispy::builtins::{dispatch, find, fold, NumOp, REGISTRY};
use lispy::*;
use pretty_assertions::assert_eq;

fn nums(items: &[f64]) -> Vec<Value> {
    items.iter().copied().map(Value::Number).collect()
}

// ═══════════════════════════════════════════════════════════════════════
// Name-based Dispatch
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_dispatch_by_name_matches_bound_function() {
    let mut env = Environment::with_prelude();
    for (name, _) in REGISTRY.iter().filter(|(n, _)| NumOp::from_name(n).is_some()) {
        let by_name = dispatch(&mut env, name, nums(&[8.0, 2.0]));
        let bound = match env.get(name) {
            Value::Function(f) => f.call(&mut env, nums(&[8.0, 2.0])).unwrap_or_else(Value::Error),
            other => panic!("{} bound to {:?}", name, other),
        };
        assert_eq!(by_name, bound, "{}", name);
    }
}

#[test]
fn test_dispatch_unknown_function() {
    let mut env = Environment::with_prelude();
    assert_eq!(
        dispatch(&mut env, "cons", vec![Value::Number(1.0), Value::qexpr()]).to_string(),
        "Error: Unkown Function!"
    );
    assert!(find("cons").is_none());
    assert!(find("join").is_some());
}

#[test]
fn test_dispatch_def_mutates_env() {
    let mut env = Environment::with_prelude();
    let args = vec![Value::QExpr(vec![Value::symbol("z")]), Value::Number(4.0)];
    assert_eq!(dispatch(&mut env, "def", args), Value::sexpr());
    assert_eq!(env.get("z"), Value::Number(4.0));
}

// ═══════════════════════════════════════════════════════════════════════
// Validation Order
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_arity_checked_before_type() {
    let mut env = Environment::with_prelude();
    let result = dispatch(&mut env, "tail", vec![Value::Number(1.0), Value::Number(2.0)]);
    assert_eq!(
        result.to_string(),
        "Error: Function 'tail' passed incorrect number of arguments. Got 2, Expected 1"
    );
}

#[test]
fn test_type_checked_before_emptiness() {
    let mut env = Environment::with_prelude();
    let result = dispatch(&mut env, "head", vec![Value::sexpr()]);
    assert_eq!(
        result.to_string(),
        "Error: Function 'head' passed incorrect type for argument 0. Got S-Expression, Expected Q-Expression"
    );
}

#[test]
fn test_join_checks_every_index() {
    let mut env = Environment::with_prelude();
    let args = vec![Value::qexpr(), Value::qexpr(), Value::symbol("s")];
    assert_eq!(
        dispatch(&mut env, "join", args),
        Value::Error(EvalError::IncorrectType {
            func: "join".to_string(),
            index: 2,
            got: ValueKind::Symbol,
            expected: ValueKind::QExpr,
        })
    );
}

#[test]
fn test_eval_requires_qexpr() {
    let mut env = Environment::with_prelude();
    assert_eq!(
        dispatch(&mut env, "eval", nums(&[1.0])).to_string(),
        "Error: Function 'eval' passed incorrect type for argument 0. Got Number, Expected Q-Expression"
    );
}

// ═══════════════════════════════════════════════════════════════════════
// Zero-argument Calls
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_variadic_builtins_need_one_argument() {
    let mut env = Environment::with_prelude();
    assert_eq!(
        dispatch(&mut env, "join", vec![]).to_string(),
        "Error: Function 'join' passed incorrect number of arguments. Got 0, Expected 1"
    );
    assert_eq!(
        fold("max", NumOp::Max, vec![]),
        Err(EvalError::IncorrectArgCount {
            func: "max".to_string(),
            got: 0,
            expected: 1,
        })
    );
}

#[test]
fn test_def_needs_symbols_and_values() {
    let mut env = Environment::with_prelude();
    assert_eq!(
        dispatch(&mut env, "def", vec![Value::QExpr(vec![Value::symbol("a")])]).to_string(),
        "Error: Function 'def' passed incorrect number of arguments. Got 1, Expected 2"
    );
    assert_eq!(
        dispatch(&mut env, "def", nums(&[1.0, 2.0])).to_string(),
        "Error: Function 'def' passed incorrect type for argument 0. Got Number, Expected Q-Expression"
    );
    assert!(!env.contains("a"));
}

#[test]
fn test_list_accepts_anything() {
    let mut env = Environment::with_prelude();
    assert_eq!(dispatch(&mut env, "list", vec![]), Value::qexpr());
    let args = vec![Value::symbol("a"), Value::sexpr(), Value::Number(1.0)];
    assert_eq!(dispatch(&mut env, "list", args).to_string(), "{a () 1}");
}
