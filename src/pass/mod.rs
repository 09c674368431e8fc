//! Password generation, scoring and output.

pub mod charset;
mod generate;
pub mod output;
pub mod strength;

pub use charset::{CharacterClass, ClassSet};
pub use generate::{MIN_LENGTH, Password, generate, generate_with};
pub use output::PasswordSink;
pub use strength::{StrengthScore, score};
