//! Abstract syntax tree handed from the frontend to the reader
//!
//! The tree is deliberately untyped: each node carries the grammar rule that
//! produced it as a `|`-separated tag string (for example
//! `expr|number|regex`), the matched text for leaves, and ordered children
//! for internal nodes. The reader classifies nodes by tag substrings.

/// Tag of the root node of a parsed program.
pub const ROOT_TAG: &str = ">";

/// Tag of start/end-of-input marker leaves.
pub const MARKER_TAG: &str = "regex";

/// Tag of delimiter leaves such as `(` and `}`.
pub const CHAR_TAG: &str = "char";

/// A node of the parse tree.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AstNode {
    /// Grammar rule tag
    pub tag: String,

    /// Matched source text (leaves only)
    pub contents: String,

    /// Child nodes in source order
    pub children: Vec<AstNode>,
}

impl AstNode {
    /// Create a leaf node.
    pub fn leaf(tag: impl Into<String>, contents: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            contents: contents.into(),
            children: Vec::new(),
        }
    }

    /// Create an internal node.
    pub fn branch(tag: impl Into<String>, children: Vec<AstNode>) -> Self {
        Self {
            tag: tag.into(),
            contents: String::new(),
            children,
        }
    }

    /// A start/end-of-input marker leaf.
    pub fn marker() -> Self {
        Self::leaf(MARKER_TAG, "")
    }

    /// A delimiter leaf.
    pub fn delimiter(c: char) -> Self {
        Self::leaf(CHAR_TAG, c.to_string())
    }

    /// Returns true if this node is punctuation or a marker the reader skips.
    pub fn is_syntax_only(&self) -> bool {
        self.tag == MARKER_TAG || matches!(self.contents.as_str(), "(" | ")" | "{" | "}")
    }
}
