//! Source text frontend for Lispy
//!
//! Parses source text with a `pest` grammar and lowers the parse tree into
//! the untyped [`AstNode`] shape the reader consumes:
//!
//! ```text
//! Source → [pest grammar] → AstNode → [Reader] → Value
//! ```
//!
//! The lowered tree keeps the punctuation and start/end markers of the
//! original parse so the reader sees the full rule structure.

use std::fmt;

use pest::error::LineColLocation;
use pest::iterators::Pair;
use pest::Parser;

use crate::ast::{AstNode, ROOT_TAG};

use grammar::{LispyParser, Rule};

mod grammar {
    #[derive(pest_derive::Parser)]
    #[grammar = "lispy.pest"]
    pub struct LispyParser;
}

// ═══════════════════════════════════════════════════════════════════════
// ERROR TYPES
// ═══════════════════════════════════════════════════════════════════════

/// Error that occurred during parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// Human-readable error message
    pub message: String,

    /// Optional source location
    pub location: Option<SourceLocation>,
}

impl ParseError {
    /// Create a new parse error with just a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            location: None,
        }
    }

    /// Add location information to the error.
    pub fn with_location(mut self, location: SourceLocation) -> Self {
        self.location = Some(location);
        self
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(loc) = &self.location {
            write!(f, "{}:{}:{}: ", loc.file, loc.line, loc.column)?;
        }
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ParseError {}

/// Source code location for error reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    /// File name or identifier
    pub file: String,

    /// Line number (1-indexed)
    pub line: usize,

    /// Column number (1-indexed)
    pub column: usize,
}

impl SourceLocation {
    /// Create a new source location.
    pub fn new(file: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            file: file.into(),
            line,
            column,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// PARSING
// ═══════════════════════════════════════════════════════════════════════

/// Parse source text read from standard input.
pub fn parse(source: &str) -> Result<AstNode, ParseError> {
    parse_named("<stdin>", source)
}

/// Parse source text, naming `file` in error locations.
pub fn parse_named(file: &str, source: &str) -> Result<AstNode, ParseError> {
    let mut pairs = LispyParser::parse(Rule::lispy, source).map_err(|e| {
        let (line, column) = match e.line_col {
            LineColLocation::Pos(pos) => pos,
            LineColLocation::Span(start, _) => start,
        };
        ParseError::new(e.variant.message().into_owned())
            .with_location(SourceLocation::new(file, line, column))
    })?;

    match pairs.next() {
        Some(root) => Ok(lower(root)),
        None => Err(ParseError::new("empty parse")),
    }
}

/// Lower a pest pair into an [`AstNode`].
fn lower(pair: Pair<Rule>) -> AstNode {
    match pair.as_rule() {
        Rule::lispy => {
            let mut children = vec![AstNode::marker()];
            children.extend(pair.into_inner().map(lower));
            AstNode::branch(ROOT_TAG, children)
        }
        Rule::sexpr => lower_list("expr|sexpr|>", '(', ')', pair),
        Rule::qexpr => lower_list("expr|qexpr|>", '{', '}', pair),
        Rule::number => AstNode::leaf("expr|number|regex", pair.as_str()),
        Rule::symbol => AstNode::leaf("expr|symbol|regex", pair.as_str()),
        // End of input is the only remaining pair the grammar emits.
        _ => AstNode::marker(),
    }
}

fn lower_list(tag: &str, open: char, close: char, pair: Pair<Rule>) -> AstNode {
    let mut children = vec![AstNode::delimiter(open)];
    children.extend(pair.into_inner().map(lower));
    children.push(AstNode::delimiter(close));
    AstNode::branch(tag, children)
}
