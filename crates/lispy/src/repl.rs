//! Interactive session: read, evaluate, print
//!
//! A [`Repl`] owns the single global [`Environment`] for its lifetime, so
//! definitions made on one line are visible on the next. Line editing lives
//! in the binary; this type only turns lines of text into printed results.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::Result;
use crate::eval::Evaluate;
use crate::frontend::parse_named;
use crate::{Environment, Value, VERSION};

/// Default input prompt.
pub const DEFAULT_PROMPT: &str = "lispy> ";

/// Configuration for a REPL session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplConfig {
    /// Prompt printed before each input line
    pub prompt: String,

    /// Whether to print the banner on startup
    pub banner: bool,

    /// File to load and save line-editing history
    pub history_file: Option<PathBuf>,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            banner: true,
            history_file: None,
        }
    }
}

/// A REPL session with its own environment.
#[derive(Debug, Clone)]
pub struct Repl {
    env: Environment,
    config: ReplConfig,
}

impl Default for Repl {
    fn default() -> Self {
        Self::new(ReplConfig::default())
    }
}

impl Repl {
    /// Create a session with every builtin registered.
    pub fn new(config: ReplConfig) -> Self {
        Self {
            env: Environment::with_prelude(),
            config,
        }
    }

    /// The session configuration.
    pub fn config(&self) -> &ReplConfig {
        &self.config
    }

    /// The session environment.
    pub fn env(&self) -> &Environment {
        &self.env
    }

    /// Startup banner text.
    pub fn banner(&self) -> String {
        format!("Lispy version {}\nPress Ctrl+c to Exit\n", VERSION)
    }

    /// Parse and evaluate one line of source.
    ///
    /// Language-level errors come back as `Ok(Value::Error(..))`; only a
    /// parse failure is an `Err`.
    pub fn eval_source(&mut self, source: &str) -> Result<Value> {
        let ast = parse_named("<stdin>", source)?;
        Ok((&ast).eval(&mut self.env))
    }

    /// Evaluate one line and render the result, or the parse error, as text.
    pub fn eval_line(&mut self, line: &str) -> String {
        match self.eval_source(line) {
            Ok(value) => value.to_string(),
            Err(e) => e.to_string(),
        }
    }

    /// Run a file line by line, as if each line were typed at the prompt.
    ///
    /// Blank lines are skipped. Returns the printed result of every line.
    pub fn run_file(&mut self, path: impl AsRef<Path>) -> Result<Vec<String>> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)?;
        let file = path.display().to_string();
        debug!(file = %file, "running file");

        let mut output = Vec::new();
        for (index, line) in source.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let rendered = match parse_named(&file, line) {
                Ok(ast) => (&ast).eval(&mut self.env).to_string(),
                Err(mut e) => {
                    if let Some(loc) = e.location.as_mut() {
                        loc.line = index + 1;
                    }
                    warn!(error = %e, "parse failure in file");
                    e.to_string()
                }
            };
            output.push(rendered);
        }
        Ok(output)
    }
}
