//! Terminal detection and ANSI helpers.

use crate::pass::output::SCREEN_WIDTH;

pub const RESET: &str = "\x1b[0m";
pub const RED: &str = "\x1b[31m";
pub const YELLOW: &str = "\x1b[33m";

pub const STDOUT: libc::c_int = 1;
pub const STDERR: libc::c_int = 2;

/// Check if a file descriptor is a terminal.
pub fn is_tty(fd: libc::c_int) -> bool {
    unsafe { libc::isatty(fd) == 1 }
}

/// Width of the terminal on stdout, or the classic 80 columns when stdout is
/// not a terminal or its size cannot be read.
pub fn width() -> usize {
    if !is_tty(STDOUT) {
        return SCREEN_WIDTH;
    }
    match crossterm::terminal::size() {
        Ok((cols, _)) if cols > 0 => cols as usize,
        _ => SCREEN_WIDTH,
    }
}

/// Wrap `msg` in `color` when stderr is a terminal.
pub fn paint_stderr(color: &str, msg: &str) -> String {
    if is_tty(STDERR) {
        format!("{color}{msg}{RESET}")
    } else {
        msg.to_string()
    }
}
