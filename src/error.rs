//! Error types.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Rejected generation requests. The generator never clamps or corrects its input.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GenerateError {
    #[error("Password length should be at least {min} to include all character types.")]
    LengthTooShort { length: usize, min: usize },

    #[error("At least one character type must be selected.")]
    NoClassesSelected,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Generate(#[from] GenerateError),

    #[error("failed to write {}: {source}", .path.display())]
    Sink {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("settings: {0}")]
    Settings(#[from] io::Error),

    #[error("clipboard unavailable: {0}")]
    Clipboard(String),
}

pub type Result<T> = std::result::Result<T, AppError>;
