//! Value representation for runtime values

mod callable;
mod display;

pub use callable::{Builtin, BuiltinFnPtr};

use crate::error::EvalError;

/// Runtime value representation for the Lispy interpreter.
///
/// Each variant carries only its own payload. List variants own their
/// elements outright, so `Clone` is a deep copy and no two containers can
/// ever share a child.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Double-precision number
    Number(f64),

    /// An error raised during reading or evaluation
    Error(EvalError),

    /// An identifier, resolved through the environment when evaluated
    Symbol(String),

    /// A native builtin operation
    Function(Builtin),

    /// An S-expression: evaluated as a call when reduced
    SExpr(Vec<Value>),

    /// A Q-expression: a quoted list that is never evaluated automatically
    QExpr(Vec<Value>),
}

/// The variant tag of a [`Value`], used for type checks and messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// [`Value::Number`]
    Number,
    /// [`Value::Error`]
    Error,
    /// [`Value::Symbol`]
    Symbol,
    /// [`Value::Function`]
    Function,
    /// [`Value::SExpr`]
    SExpr,
    /// [`Value::QExpr`]
    QExpr,
}

impl ValueKind {
    /// Human-readable type name as it appears in error messages.
    pub fn name(self) -> &'static str {
        match self {
            ValueKind::Number => "Number",
            ValueKind::Error => "Error",
            ValueKind::Symbol => "Symbol",
            ValueKind::Function => "Function",
            ValueKind::SExpr => "S-Expression",
            ValueKind::QExpr => "Q-Expression",
        }
    }
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Value {
    // ═══════════════════════════════════════════════════════════════════
    // Constructors
    // ═══════════════════════════════════════════════════════════════════

    /// Create a symbol value.
    pub fn symbol(name: impl Into<String>) -> Self {
        Value::Symbol(name.into())
    }

    /// Create an empty S-expression.
    pub fn sexpr() -> Self {
        Value::SExpr(Vec::new())
    }

    /// Create an empty Q-expression.
    pub fn qexpr() -> Self {
        Value::QExpr(Vec::new())
    }

    /// Create a Q-expression from a list of numbers.
    pub fn number_list(items: impl IntoIterator<Item = f64>) -> Self {
        Value::QExpr(items.into_iter().map(Value::Number).collect())
    }

    // ═══════════════════════════════════════════════════════════════════
    // Inspection
    // ═══════════════════════════════════════════════════════════════════

    /// The variant tag of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Number(_) => ValueKind::Number,
            Value::Error(_) => ValueKind::Error,
            Value::Symbol(_) => ValueKind::Symbol,
            Value::Function(_) => ValueKind::Function,
            Value::SExpr(_) => ValueKind::SExpr,
            Value::QExpr(_) => ValueKind::QExpr,
        }
    }

    /// Human-readable type name.
    pub fn type_name(&self) -> &'static str {
        self.kind().name()
    }

    /// Returns true if this value is an error.
    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    /// Get the number payload, if this is a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get the symbol name, if this is a symbol.
    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            Value::Symbol(s) => Some(s),
            _ => None,
        }
    }

    /// Borrow the elements of an S- or Q-expression.
    pub fn cells(&self) -> Option<&[Value]> {
        match self {
            Value::SExpr(cells) | Value::QExpr(cells) => Some(cells),
            _ => None,
        }
    }

    /// Number of elements in an S- or Q-expression (zero for anything else).
    pub fn count(&self) -> usize {
        self.cells().map_or(0, <[Value]>::len)
    }

    // ═══════════════════════════════════════════════════════════════════
    // List manipulation
    // ═══════════════════════════════════════════════════════════════════

    /// Append a value to an S- or Q-expression, returning the list.
    ///
    /// Non-list values are returned unchanged and `item` is dropped.
    pub fn push(mut self, item: Value) -> Self {
        if let Value::SExpr(cells) | Value::QExpr(cells) = &mut self {
            cells.push(item);
        }
        self
    }

    /// Reclassify an S-expression as a Q-expression. Other values pass through.
    pub fn into_qexpr(self) -> Self {
        match self {
            Value::SExpr(cells) => Value::QExpr(cells),
            other => other,
        }
    }

    /// Reclassify a Q-expression as an S-expression. Other values pass through.
    pub fn into_sexpr(self) -> Self {
        match self {
            Value::QExpr(cells) => Value::SExpr(cells),
            other => other,
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<EvalError> for Value {
    fn from(err: EvalError) -> Self {
        Value::Error(err)
    }
}

impl From<Builtin> for Value {
    fn from(builtin: Builtin) -> Self {
        Value::Function(builtin)
    }
}
