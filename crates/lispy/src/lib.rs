//! # Lispy
//!
//! A tree-walking interpreter for a small Lisp built around S-expressions
//! (evaluated lists) and Q-expressions (quoted lists).
//!
//! ## Architecture
//!
//! - **Frontend**: Parse source text into an untyped syntax tree
//! - **Reader**: Convert the syntax tree into a [`Value`] tree
//! - **Evaluator**: Reduce values against the global [`Environment`]
//! - **Builtins**: Native list, arithmetic and definition operations
//! - **REPL**: Interactive session management
//!
//! ## Example
//!
//! ```
//! use lispy::Repl;
//!
//! let mut repl = Repl::default();
//! assert_eq!(repl.eval_line("+ 1 2 3"), "6");
//! assert_eq!(repl.eval_line("def {x} 5"), "()");
//! assert_eq!(repl.eval_line("head (list x 2 3)"), "{5}");
//! assert_eq!(repl.eval_line("/ 10 0"), "Error: Division By Zero!");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod ast;
pub mod builtins;
pub mod environment;
pub mod error;
pub mod eval;
pub mod frontend;
pub mod reader;
pub mod repl;
pub mod value;

// Re-export main types
pub use ast::AstNode;
pub use environment::Environment;
pub use error::{EvalError, LispyError, Result};
pub use eval::{eval, eval_sexpr, Evaluate};
pub use frontend::{parse, ParseError, SourceLocation};
pub use reader::read;
pub use repl::{Repl, ReplConfig};
pub use value::{Builtin, BuiltinFnPtr, Value, ValueKind};

/// Lispy version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
