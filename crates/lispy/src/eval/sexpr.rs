//! S-expression reduction

use tracing::trace;

use super::{call_value, eval};
use crate::{Environment, Value};

/// Reduce the elements of an S-expression.
///
/// Every child is evaluated left to right before anything else happens.
/// The first error among the results wins and the rest are dropped. An
/// empty expression is returned as-is and a single child is unwrapped;
/// otherwise the first child is called with the remaining ones.
pub fn eval_sexpr(env: &mut Environment, cells: Vec<Value>) -> Value {
    trace!(len = cells.len(), "reducing s-expression");

    let mut cells: Vec<Value> = cells.into_iter().map(|cell| eval(env, cell)).collect();

    if let Some(pos) = cells.iter().position(Value::is_error) {
        return cells.swap_remove(pos);
    }

    match cells.len() {
        0 => Value::SExpr(cells),
        1 => cells.remove(0),
        _ => {
            let func = cells.remove(0);
            call_value(env, func, cells)
        }
    }
}
