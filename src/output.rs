//! Status output for the identicon CLI.
//!
//! Lines look like Cargo's: a right-aligned, coloured verb followed by a
//! message. Status goes to stderr so stdout stays clean for codes and JSON.

use std::io::{self, IsTerminal, Write};
use std::path::Path;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";

/// Width of the right-aligned verb column.
const VERB_WIDTH: usize = 12;

/// Prints status lines to stderr, coloured when stderr is a terminal.
pub struct Printer {
    color: bool,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

impl Printer {
    pub fn new() -> Self {
        Self {
            color: io::stderr().is_terminal(),
        }
    }

    /// A printer that never emits escape codes.
    pub fn plain() -> Self {
        Self { color: false }
    }

    /// Progress, e.g. `   Rendering alice (0a0acea7400daa59)`.
    pub fn status(&self, verb: &str, message: &str) {
        self.emit(GREEN, verb, message);
    }

    /// Completion of a command.
    pub fn success(&self, verb: &str, message: &str) {
        self.emit(GREEN, verb, message);
    }

    pub fn warning(&self, verb: &str, message: &str) {
        self.emit(YELLOW, verb, message);
    }

    /// Secondary detail such as a code next to its identifier.
    pub fn dim(&self, text: &str) -> String {
        self.paint(DIM, text)
    }

    /// Paths and addresses.
    pub fn cyan(&self, text: &str) -> String {
        self.paint(CYAN, text)
    }

    fn paint(&self, code: &str, text: &str) -> String {
        if self.color {
            format!("{code}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    fn line(&self, color: &str, verb: &str, message: &str) -> String {
        if self.color {
            format!("{BOLD}{color}{verb:>VERB_WIDTH$}{RESET} {message}")
        } else {
            format!("{verb:>VERB_WIDTH$} {message}")
        }
    }

    fn emit(&self, color: &str, verb: &str, message: &str) {
        let _ = writeln!(io::stderr().lock(), "{}", self.line(color, verb, message));
    }
}

/// `plural(1, "identicon", "identicons")` is "1 identicon".
pub fn plural(n: usize, singular: &str, pluralized: &str) -> String {
    let word = if n == 1 { singular } else { pluralized };
    format!("{} {}", n, word)
}

/// Path relative to the working directory when it lies inside it.
pub fn display_path(path: &Path) -> String {
    let relative = std::env::current_dir()
        .ok()
        .and_then(|cwd| path.strip_prefix(cwd).ok().map(Path::to_path_buf));

    match relative {
        Some(p) if p.as_os_str().is_empty() => ".".to_string(),
        Some(p) => p.display().to_string(),
        None => path.display().to_string(),
    }
}
