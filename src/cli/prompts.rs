//! Centralized messages and prompts for CLI output.

use std::io::{self, Write};
use std::path::Path;

use crossterm::style::Color;

use crate::pass::{Password, StrengthScore};
use crate::terminal;

/// Console writer honouring quiet mode and TTY styling.
#[derive(Debug, Clone, Copy)]
pub struct Console {
    quiet: bool,
    color_out: bool,
    color_err: bool,
}

impl Console {
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            color_out: terminal::stdout_is_tty(),
            color_err: terminal::stderr_is_tty(),
        }
    }

    /// Yellow warning on stderr. Suppressed in quiet mode.
    pub fn warn(&self, msg: &str) {
        if !self.quiet {
            eprintln!("{}", terminal::paint(msg, Color::Yellow, self.color_err));
        }
    }

    /// Red error on stderr. Always shown.
    pub fn error(&self, msg: &str) {
        eprintln!("{}", terminal::paint(msg, Color::Red, self.color_err));
    }

    pub fn password(&self, pass: &Password, score: StrengthScore) {
        if self.quiet {
            println!("{}", pass.as_str());
        } else {
            println!("Generated Password: {}", pass.as_str());
            self.strength(score);
        }
    }

    pub fn strength(&self, score: StrengthScore) {
        if !self.quiet {
            println!(
                "Password Strength: {}",
                terminal::format_strength(score, self.color_out)
            );
        }
    }

    pub fn saved(&self, count: usize, path: &Path) {
        if self.quiet {
            return;
        }
        if count == 1 {
            println!("Password saved to {}", path.display());
        } else {
            println!("{count} passwords saved to {}", path.display());
        }
    }

    pub fn clipboard_copied(&self) {
        if !self.quiet {
            println!("*** -COPIED TO CLIPBOARD- ***");
        }
    }

    pub fn remembered(&self, path: &Path) {
        if !self.quiet {
            println!("Defaults stored in {}", path.display());
        }
    }

    /// Ask whether to print when the clipboard is unavailable.
    /// Quiet and non-interactive runs fall back to printing without asking.
    pub fn clipboard_fallback_prompt(&self) -> bool {
        if self.quiet || !terminal::stdin_is_tty() {
            return true;
        }

        eprint!("Clipboard unavailable. Print to terminal instead? [Y/n]: ");
        let _ = io::stderr().flush();

        let mut input = String::new();
        if io::stdin().read_line(&mut input).is_err() {
            return true;
        }
        let input = input.trim().to_lowercase();
        if input.is_empty() || input == "y" || input == "yes" {
            eprintln!();
            return true;
        }

        eprintln!("\nAborted.");
        false
    }
}
