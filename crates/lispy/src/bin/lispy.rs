//! Lispy interactive REPL

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::{debug, warn};

use lispy::repl::DEFAULT_PROMPT;
use lispy::{Repl, ReplConfig};

#[derive(Parser)]
#[command(name = "lispy")]
#[command(version, about = "A tiny Lisp with S- and Q-expressions")]
struct Args {
    /// Run these files line by line, then exit
    files: Vec<PathBuf>,

    /// Evaluate a single expression, print the result and exit
    #[arg(short, long, value_name = "EXPR")]
    eval: Option<String>,

    /// Prompt shown before each input line
    #[arg(long, default_value = DEFAULT_PROMPT)]
    prompt: String,

    /// Do not print the startup banner
    #[arg(short, long)]
    quiet: bool,

    /// Load and save line-editing history from this file
    #[arg(long, value_name = "PATH")]
    history: Option<PathBuf>,
}

impl Args {
    fn config(&self) -> ReplConfig {
        ReplConfig {
            prompt: self.prompt.clone(),
            banner: !self.quiet,
            history_file: self.history.clone(),
        }
    }
}

/// Initialize tracing output, only when `RUST_LOG` is set.
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_level(true).with_writer(std::io::stderr))
            .with(EnvFilter::from_default_env())
            .init();
    }
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();
    let mut repl = Repl::new(args.config());

    if let Some(expr) = &args.eval {
        println!("{}", repl.eval_line(expr));
        return Ok(());
    }

    if !args.files.is_empty() {
        for path in &args.files {
            let output = repl
                .run_file(path)
                .with_context(|| format!("failed to run {}", path.display()))?;
            for line in output {
                println!("{}", line);
            }
        }
        return Ok(());
    }

    run_interactive(&mut repl)
}

fn run_interactive(repl: &mut Repl) -> Result<()> {
    let config = repl.config().clone();
    let mut rl = DefaultEditor::new().context("failed to create line editor")?;

    if let Some(path) = &config.history_file {
        if let Err(e) = rl.load_history(path) {
            debug!(error = %e, path = %path.display(), "no history loaded");
        }
    }

    if config.banner {
        println!("{}", repl.banner());
    }

    loop {
        match rl.readline(&config.prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = rl.add_history_entry(line.as_str());
                }
                println!("{}", repl.eval_line(&line));
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e).context("failed to read line"),
        }
    }

    if let Some(path) = &config.history_file {
        if let Err(e) = rl.save_history(path) {
            warn!(error = %e, path = %path.display(), "failed to save history");
        }
    }
    Ok(())
}
