//! Generation defaults and their persistence.

mod file;

use std::path::Path;

use crate::pass::ClassSet;

pub use file::default_path;

/// Defaults applied before command-line flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Include `A-Z`. Default: on.
    pub uppercase: bool,
    /// Include `a-z`. Default: on.
    pub lowercase: bool,
    /// Include `0-9`. Default: on.
    pub digits: bool,
    /// Include ASCII punctuation. Default: on.
    pub special: bool,
    /// Passwords generated per run. Default: 1.
    pub count: usize,
    /// File that `--save` appends to. Default: `passwords.txt`.
    pub output_file_path: String,
}

impl Settings {
    pub fn classes(&self) -> ClassSet {
        ClassSet::from_flags(self.uppercase, self.lowercase, self.digits, self.special)
    }

    /// Load from `path`, falling back to defaults when it is absent.
    pub fn load_from(path: &Path) -> Result<Self, std::io::Error> {
        let mut settings = Settings::default();
        file::load(&mut settings, path)?;
        Ok(settings)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), std::io::Error> {
        file::save(self, path)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            uppercase: true,
            lowercase: true,
            digits: true,
            special: true,
            count: 1,
            output_file_path: String::from("passwords.txt"),
        }
    }
}
