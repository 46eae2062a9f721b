//! Centralized warning and error messages for CLI output.

use crate::terminal::{RED, YELLOW, paint_stderr};

/// Print a warning message to stderr (yellow on a terminal).
pub fn warn(msg: &str) {
    eprintln!("{}", paint_stderr(YELLOW, msg));
}

/// Print an error message to stderr (red on a terminal).
pub fn error(msg: &str) {
    eprintln!("{}", paint_stderr(RED, msg));
}

pub fn seed_ignored() {
    warn("Warning: --sha1 is ignored with --secure; secure passwords are never reproducible.");
}
