//! Password generation with guaranteed character classes and a coarse strength score.
//!
//! ```
//! use passgen::pass::{self, ClassSet};
//!
//! let password = pass::generate(16, ClassSet::all()).unwrap();
//! assert_eq!(password.len(), 16);
//! assert!(pass::score(password.as_str()).value() >= 4);
//! ```

pub mod cli;
pub mod error;
pub mod pass;
pub mod settings;
pub mod terminal;

pub use error::{AppError, GenerateError};
