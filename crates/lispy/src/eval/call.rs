//! Function call evaluation

use tracing::debug;

use crate::{Environment, EvalError, Value};

/// Call a value as a function with an owned argument list.
///
/// Builtin failures come back as error values. A non-function callee
/// drops the arguments and yields `first element is not a function`.
pub fn call_value(env: &mut Environment, func: Value, args: Vec<Value>) -> Value {
    match func {
        Value::Function(builtin) => {
            debug!(builtin = builtin.name, argc = args.len(), "calling builtin");
            builtin.call(env, args).unwrap_or_else(Value::Error)
        }
        _ => Value::Error(EvalError::NotAFunction),
    }
}
