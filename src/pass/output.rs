//! Plaintext password sink.

use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use zeroize::Zeroize;

use super::Password;
use crate::error::{AppError, Result};

/// Append-only text file receiving one password per line.
#[derive(Debug, Clone)]
pub struct PasswordSink {
    path: PathBuf,
}

impl PasswordSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append each password followed by `\n`. The file is created if missing.
    pub fn append(&self, passwords: &[Password]) -> Result<()> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| self.error(source))?;

        let mut out = BufWriter::new(file);
        write_lines(&mut out, passwords).map_err(|source| self.error(source))?;
        out.flush().map_err(|source| self.error(source))
    }

    fn error(&self, source: std::io::Error) -> AppError {
        AppError::Sink {
            path: self.path.clone(),
            source,
        }
    }
}

/// Write passwords one per line. The line buffer is wiped after every write.
pub fn write_lines<W: Write>(out: &mut W, passwords: &[Password]) -> std::io::Result<()> {
    let mut buf = Vec::new();
    for pass in passwords {
        buf.extend_from_slice(pass.as_bytes());
        buf.push(b'\n');
        let written = out.write_all(&buf);
        buf.zeroize();
        written?;
    }
    Ok(())
}
