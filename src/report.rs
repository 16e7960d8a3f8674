//! Status output for the generation pipeline.
//!
//! An explicit `Reporter` value is handed to the orchestrator instead of a
//! process-wide logging switch. All status lines go to stderr; stdout stays
//! free for machine-readable use.

use std::io::{self, IsTerminal, Write};

const RESET: &str = "\x1b[0m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const BLUE: &str = "\x1b[34m";

/// Terminal-aware status printer.
///
/// Colour is enabled when stderr is a terminal; `silent` suppresses
/// everything, which is the default for library use.
#[derive(Debug, Clone, Copy)]
pub struct Reporter {
    silent: bool,
    color: bool,
}

impl Reporter {
    pub fn new(quiet: bool) -> Self {
        Self {
            silent: quiet,
            color: io::stderr().is_terminal(),
        }
    }

    /// A reporter that prints nothing.
    pub fn silent() -> Self {
        Self {
            silent: true,
            color: false,
        }
    }

    pub fn info(&self, message: &str) {
        self.print_line(BLUE, message);
    }

    pub fn success(&self, message: &str) {
        self.print_line(GREEN, message);
    }

    pub fn error(&self, message: &str) {
        self.print_line(RED, message);
    }

    fn print_line(&self, color: &str, message: &str) {
        if self.silent {
            return;
        }
        let mut stderr = io::stderr().lock();
        let _ = if self.color {
            writeln!(stderr, "{color}{message}{RESET}")
        } else {
            writeln!(stderr, "{message}")
        };
    }
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new(false)
    }
}
