//! Password generation.

use std::fmt;

use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use rand::{CryptoRng, Rng};
use zeroize::Zeroize;

use super::charset::{self, ClassSet};
use crate::error::GenerateError;

/// Shortest password accepted, whatever the number of enabled classes.
pub const MIN_LENGTH: usize = 4;

/// A generated password. The buffer is wiped when dropped.
pub struct Password(String);

impl Password {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<str> for Password {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Password(<{} chars>)", self.0.len())
    }
}

impl Drop for Password {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

/// Generate a password from the operating system's CSPRNG.
pub fn generate(length: usize, classes: ClassSet) -> Result<Password, GenerateError> {
    generate_with(&mut OsRng, length, classes)
}

/// Generate a password drawing every character and the final shuffle from `rng`.
///
/// One character is drawn from each enabled class (in canonical class order), the rest
/// are drawn with replacement from the pooled alphabet, then the whole sequence is
/// shuffled so the guaranteed characters have no fixed position.
pub fn generate_with<R>(rng: &mut R, length: usize, classes: ClassSet) -> Result<Password, GenerateError>
where
    R: Rng + CryptoRng + ?Sized,
{
    if classes.is_empty() {
        return Err(GenerateError::NoClassesSelected);
    }
    if length < MIN_LENGTH {
        return Err(GenerateError::LengthTooShort {
            length,
            min: MIN_LENGTH,
        });
    }

    let mut buf = Vec::with_capacity(length);
    buf.extend(classes.iter().map(|class| random_byte(rng, class.chars())));

    let pool = charset::build(classes);
    for _ in buf.len()..length {
        buf.push(random_byte(rng, &pool));
    }

    buf.shuffle(rng);

    // Safety: every alphabet is ASCII
    Ok(Password(unsafe { String::from_utf8_unchecked(buf) }))
}

#[inline]
fn random_byte<R: Rng + ?Sized>(rng: &mut R, chars: &[u8]) -> u8 {
    chars[rng.gen_range(0..chars.len())]
}
