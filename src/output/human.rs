//! Styled one-line status messages for terminal output.

use console::{style, StyledObject};

fn mark(symbol: &'static str) -> StyledObject<&'static str> {
    style(symbol).bold()
}

pub fn success(msg: &str) {
    println!("{} {msg}", mark("✓").green());
}

pub fn info(msg: &str) {
    println!("{} {msg}", mark("ℹ").blue());
}

pub fn warning(msg: &str) {
    println!("{} {msg}", mark("⚠").yellow());
}

/// Errors go to stderr so they never mix with `--json` output.
pub fn error(msg: &str) {
    eprintln!("{} {msg}", mark("✗").red());
}
