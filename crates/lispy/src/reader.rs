//! Conversion from the parse tree to runtime values

use tracing::trace;

use crate::ast::{AstNode, ROOT_TAG};
use crate::error::EvalError;
use crate::value::Value;

/// Read one parse-tree node into a value.
///
/// Number and symbol leaves become atoms. The root and `sexpr` nodes
/// become S-expressions, `qexpr` nodes become Q-expressions, with children
/// read left to right and delimiters and markers skipped.
pub fn read(node: &AstNode) -> Value {
    let tag = node.tag.as_str();
    trace!(tag, contents = %node.contents, "reading node");

    if tag.contains("number") {
        return read_number(&node.contents);
    }
    if tag.contains("symbol") {
        return Value::Symbol(node.contents.clone());
    }

    let list = if tag == ROOT_TAG || tag.contains("sexpr") {
        Value::sexpr()
    } else if tag.contains("qexpr") {
        Value::qexpr()
    } else {
        return Value::Error(EvalError::UnknownSyntax {
            tag: tag.to_string(),
        });
    };

    node.children
        .iter()
        .filter(|child| !child.is_syntax_only())
        .fold(list, |list, child| list.push(read(child)))
}

/// Parse a number literal from its longest valid prefix.
///
/// Trailing text after the fraction (as in `1..5`) is ignored. A result
/// that overflows to infinity, or underflows to zero from a literal with a
/// non-zero digit, is out of range.
fn read_number(text: &str) -> Value {
    let literal = float_prefix(text);
    match literal.parse::<f64>() {
        Ok(n) if n.is_finite() && !underflowed(literal, n) => Value::Number(n),
        _ => Value::Error(EvalError::InvalidNumber),
    }
}

/// An optional `-`, the integer digits, then at most one `.` and its digits.
fn float_prefix(text: &str) -> &str {
    let bytes = text.as_bytes();
    let digits_from = |start: usize| {
        start
            + bytes[start..]
                .iter()
                .take_while(|b| b.is_ascii_digit())
                .count()
    };

    let mut end = usize::from(bytes.first() == Some(&b'-'));
    end = digits_from(end);
    if bytes.get(end) == Some(&b'.') {
        end = digits_from(end + 1);
    }
    &text[..end]
}

fn underflowed(literal: &str, n: f64) -> bool {
    n == 0.0 && literal.bytes().any(|b| matches!(b, b'1'..=b'9'))
}
