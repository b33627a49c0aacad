//! Global quiet mode state for CLI.

use std::sync::atomic::{AtomicBool, Ordering};

use crossterm::tty::IsTty;

/// Global quiet mode flag - suppresses labels, notices and prompts
static QUIET: AtomicBool = AtomicBool::new(false);

pub fn set(quiet: bool) {
    QUIET.store(quiet, Ordering::SeqCst);
}

pub fn enabled() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// Check if stdin is a tty (interactive)
pub fn is_interactive() -> bool {
    std::io::stdin().is_tty()
}

/// Returns true if we should skip interactive prompts.
/// True when quiet mode is enabled OR stdin is not a tty.
pub fn skip_prompt() -> bool {
    enabled() || !is_interactive()
}
