//! Terminal output utilities.
//!
//! TTY detection, colour styling, entropy estimates.

use crossterm::style::{Color, Stylize};

use crate::pass::StrengthScore;

// ============================================================================
// TTY Detection
// ============================================================================

pub fn stdin_is_tty() -> bool {
    unsafe { libc::isatty(0) == 1 }
}

pub fn stdout_is_tty() -> bool {
    unsafe { libc::isatty(1) == 1 }
}

pub fn stderr_is_tty() -> bool {
    unsafe { libc::isatty(2) == 1 }
}

// ============================================================================
// Styled Output Helpers
// ============================================================================

/// Colour `text` when `styled`, otherwise return it untouched.
pub fn paint(text: &str, color: Color, styled: bool) -> String {
    if styled {
        text.with(color).to_string()
    } else {
        text.to_string()
    }
}

pub fn strength_color(score: StrengthScore) -> Color {
    match score.value() {
        0..=2 => Color::Red,
        3 => Color::Yellow,
        _ => Color::Green,
    }
}

/// `4 (Strong)`, coloured by score when `styled`.
pub fn format_strength(score: StrengthScore, styled: bool) -> String {
    let text = format!("{} ({})", score, score.label());
    paint(&text, strength_color(score), styled)
}

// ============================================================================
// Entropy
// ============================================================================

/// Bits of entropy for a uniformly random password over `charset_size` symbols.
pub fn calculate_entropy(password_length: usize, charset_size: usize) -> f64 {
    if charset_size == 0 {
        return 0.0;
    }
    password_length as f64 * (charset_size as f64).log2()
}

pub fn entropy_strength(bits: f64) -> &'static str {
    match bits as u32 {
        0..=35 => "Weak",
        36..=59 => "Fair",
        60..=127 => "Strong",
        _ => "Very Strong",
    }
}
