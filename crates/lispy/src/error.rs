//! Error types for Lispy reading and evaluation

use thiserror::Error;

use crate::frontend::ParseError;
use crate::value::ValueKind;

/// Errors raised while reading or evaluating an expression.
///
/// These travel through the interpreter as ordinary [`Value::Error`]
/// values. The `Display` output is the exact message shown to the user.
///
/// [`Value::Error`]: crate::Value::Error
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    /// A number literal could not be represented as a finite float
    #[error("invalid number")]
    InvalidNumber,

    /// Symbol lookup failed
    #[error("Unbound Symbol '{name}'")]
    UnboundSymbol {
        /// The symbol that was looked up
        name: String,
    },

    /// Wrong number of arguments passed to a builtin
    #[error("Function '{func}' passed incorrect number of arguments. Got {got}, Expected {expected}")]
    IncorrectArgCount {
        /// Builtin name
        func: String,
        /// Number of arguments received
        got: usize,
        /// Number of arguments required (the minimum for variadic builtins)
        expected: usize,
    },

    /// Argument of the wrong type passed to a builtin
    #[error("Function '{func}' passed incorrect type for argument {index}. Got {got}, Expected {expected}")]
    IncorrectType {
        /// Builtin name
        func: String,
        /// Zero-based argument position
        index: usize,
        /// Type actually received
        got: ValueKind,
        /// Type required
        expected: ValueKind,
    },

    /// An empty Q-expression was passed where elements are required
    #[error("Function '{func}' passed {{}}!")]
    EmptyList {
        /// Builtin name
        func: String,
    },

    /// The head of an S-expression did not evaluate to a function
    #[error("first element is not a function")]
    NotAFunction,

    /// Division or remainder with a zero divisor
    #[error("Division By Zero!")]
    DivisionByZero,

    /// Name-based dispatch found no builtin
    #[error("Unkown Function!")]
    UnknownFunction,

    /// `def` symbol list contained something other than a symbol
    #[error("Function '{func}' cannot define non-symbol")]
    NonSymbolDefinition {
        /// Builtin name
        func: String,
    },

    /// `def` received a different number of values than symbols
    #[error("Function '{func}' cannot define incorrect number of values to symbols")]
    DefinitionCountMismatch {
        /// Builtin name
        func: String,
        /// Number of symbols in the definition list
        symbols: usize,
        /// Number of values supplied
        values: usize,
    },

    /// The reader met a syntax node it does not know how to convert
    #[error("unrecognized syntax node '{tag}'")]
    UnknownSyntax {
        /// Tag of the offending node
        tag: String,
    },
}

/// Top-level error for operations that go beyond evaluation.
#[derive(Error, Debug)]
pub enum LispyError {
    /// Source text did not match the grammar
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// I/O failure while reading input
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for Lispy operations
pub type Result<T> = std::result::Result<T, LispyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incorrect_type_message() {
        let err = EvalError::IncorrectType {
            func: "join".to_string(),
            index: 1,
            got: ValueKind::Number,
            expected: ValueKind::QExpr,
        };
        assert_eq!(
            err.to_string(),
            "Function 'join' passed incorrect type for argument 1. Got Number, Expected Q-Expression"
        );
    }

    #[test]
    fn test_empty_list_message() {
        let err = EvalError::EmptyList {
            func: "head".to_string(),
        };
        assert_eq!(err.to_string(), "Function 'head' passed {}!");
    }
}
