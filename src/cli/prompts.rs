//! Warnings, errors and y/N prompts on stderr; stdout stays reserved for the record.

use std::io::Write;

use super::quiet;

const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Yellow, suppressed in quiet mode.
pub fn warn(msg: &str) {
    if !quiet::enabled() {
        eprintln!("{YELLOW}{msg}{RESET}");
    }
}

/// Red, always shown.
pub fn error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

pub fn mlock_failed() {
    warn("meetpass: could not mlock the /dev/urandom buffer; it may be swapped to disk.");
    warn("Raise the limit with `ulimit -l`, or grant cap_ipc_lock to the binary.");
}

/// Whether to keep using an unlocked urandom buffer. Quiet or piped: yes.
pub fn mlock_continue_prompt() -> bool {
    if quiet::skip_prompt() {
        return true;
    }

    eprint!("{YELLOW}Use the unlocked buffer anyway? [y/N]: {RESET}");
    let _ = std::io::stderr().flush();

    if confirm(false) {
        return true;
    }

    eprintln!("Falling back to the CPU cycle counter.");
    false
}

pub fn urandom_unavailable() {
    warn("meetpass: /dev/urandom unavailable, using the CPU cycle counter");
}

/// Suppressed in quiet mode.
pub fn clipboard_copied() {
    if !quiet::enabled() {
        println!("Meeting password copied to clipboard.");
    }
}

pub fn clipboard_error(err: &str) {
    error(&format!("meetpass: clipboard write failed: {err}"));
}

/// True to print the record instead, false to stop. Quiet or piped: print.
pub fn clipboard_fallback_prompt() -> bool {
    if quiet::skip_prompt() {
        return true;
    }

    eprint!("No clipboard available. Print the meeting password instead? [Y/n]: ");
    let _ = std::io::stderr().flush();

    if confirm(true) {
        eprintln!();
        return true;
    }

    eprintln!("\nNothing generated.");
    false
}

/// One y/n answer from stdin. Empty input or a read error yields `default`.
fn confirm(default: bool) -> bool {
    let mut input = String::new();
    if std::io::stdin().read_line(&mut input).is_err() {
        return default;
    }
    answer(&input, default)
}

fn answer(input: &str, default: bool) -> bool {
    match input.trim().to_lowercase().as_str() {
        "" => default,
        "y" | "yes" => true,
        _ => false,
    }
}
