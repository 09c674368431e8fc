//! Coarse password strength score.
//!
//! One point per satisfied rule, no weighting: at least 8 characters, an uppercase
//! letter, a lowercase letter, a digit and a special character.

use std::fmt;

use super::charset::CharacterClass;

/// Length from which a password earns the length point.
pub const STRONG_LENGTH: usize = 8;

pub const MAX_SCORE: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StrengthScore(u8);

impl StrengthScore {
    pub fn value(self) -> u8 {
        self.0
    }

    pub fn label(self) -> &'static str {
        match self.0 {
            0..=1 => "Very Weak",
            2 => "Weak",
            3 => "Fair",
            4 => "Strong",
            MAX_SCORE.. => "Very Strong",
        }
    }
}

impl fmt::Display for StrengthScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<StrengthScore> for u8 {
    fn from(score: StrengthScore) -> u8 {
        score.0
    }
}

pub fn score(password: &str) -> StrengthScore {
    let rules = [
        password.chars().count() >= STRONG_LENGTH,
        password.chars().any(char::is_uppercase),
        password.chars().any(char::is_lowercase),
        password.chars().any(|c| c.is_ascii_digit()),
        password.chars().any(|c| CharacterClass::Special.contains(c)),
    ];
    StrengthScore(rules.iter().filter(|&&met| met).count() as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_examples() {
        assert_eq!(score("abcd").value(), 1);
        assert_eq!(score("Abcdefgh").value(), 3);
        assert_eq!(score("Abcdefg1!").value(), 5);
        assert_eq!(score("12345678").value(), 2);
    }

    #[test]
    fn short_password_with_every_class_misses_length_point() {
        assert_eq!(score("aB3$").value(), 4);
    }

    #[test]
    fn empty_password_scores_zero() {
        assert_eq!(score("").value(), 0);
        assert_eq!(score("").label(), "Very Weak");
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        // 4 chars, 8 bytes
        assert_eq!(score("ééé1").value(), 2);
    }

    #[test]
    fn whitespace_is_not_special() {
        assert_eq!(score("        ").value(), 1);
    }

    #[test]
    fn score_is_deterministic() {
        for pass in ["", "abcd", "Abcdefg1!", "p@ss W0rd", "ZZZZZZZZZZ"] {
            assert_eq!(score(pass), score(pass));
        }
    }

    #[test]
    fn score_never_exceeds_max() {
        assert_eq!(score("Aa1!Aa1!Aa1!Aa1!").value(), MAX_SCORE);
        assert_eq!(score("Aa1!Aa1!").label(), "Very Strong");
    }

    #[test]
    fn labels_follow_score() {
        assert_eq!(score("abcd").label(), "Very Weak");
        assert_eq!(score("12345678").label(), "Weak");
        assert_eq!(score("Abcdefgh").label(), "Fair");
        assert_eq!(score("Abcdefg1").label(), "Strong");
    }
}
