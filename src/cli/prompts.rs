//! Warning, error and prompt messages for CLI output.

use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};

// ANSI color codes
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

static QUIET: AtomicBool = AtomicBool::new(false);

/// Suppress warnings and confirmations.
pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::SeqCst);
}

pub fn quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// No prompts when quiet or when stdin is not a tty.
fn skip_prompt() -> bool {
    quiet() || unsafe { libc::isatty(0) != 1 }
}

/// Print a warning message to stderr (yellow) - suppressed in quiet mode
pub fn warn(msg: &str) {
    if !quiet() {
        eprintln!("{YELLOW}{msg}{RESET}");
    }
}

/// Print an error message to stderr (red) - errors are always shown
pub fn error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

/// Warn when the request cannot produce anything.
pub fn empty_pool() {
    warn("Warning: every character category is disabled, the password is empty.");
}

/// Print clipboard copied confirmation - suppressed in quiet mode
pub fn clipboard_copied(count: usize) {
    if !quiet() {
        println!("*** -{count} COPIED TO CLIPBOARD- ***");
    }
}

/// Ask whether to print secrets when the clipboard is unavailable.
/// Quiet or non-interactive runs fall back to printing.
pub fn clipboard_fallback_prompt() -> bool {
    if skip_prompt() {
        return true;
    }

    eprint!("Clipboard unavailable. Print to terminal instead? [Y/n]: ");
    let _ = std::io::stderr().flush();

    let mut input = String::new();
    if std::io::stdin().read_line(&mut input).is_ok() {
        let input = input.trim().to_lowercase();
        if input.is_empty() || input == "y" || input == "yes" {
            eprintln!();
            return true;
        }
    } else {
        return true;
    }

    eprintln!("\nAborted.");
    false
}
