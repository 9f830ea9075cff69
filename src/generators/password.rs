// src/generators/password.rs
use rand::distributions::{Distribution, Uniform};
use rand::Rng;

use super::GeneratorError;
use crate::models::CharsetSelection;

// The fixed alphabets, concatenated in this order when enabled.
pub const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const NUMBERS: &[u8] = b"1234567890";
pub const SYMBOLS: &[u8] = b"+!?@#%&().:-_";

pub struct PasswordGenerator;

impl PasswordGenerator {
    pub fn new() -> Self {
        PasswordGenerator
    }

    /// Generate a random password using the process-wide RNG.
    ///
    /// Uses a non-cryptographic uniform PRNG; suitable for convenience
    /// passwords, not for key material.
    pub fn generate_password(
        &self,
        length: usize,
        selection: &CharsetSelection,
    ) -> Result<String, GeneratorError> {
        generate_with_rng(&mut rand::thread_rng(), length, selection)
    }
}

// Build the sampling pool from the enabled classes, in fixed class order.
pub fn build_charset(selection: &CharsetSelection) -> Vec<u8> {
    let mut chars = Vec::new();

    if selection.include_lowercase {
        chars.extend_from_slice(LOWERCASE);
    }
    if selection.include_uppercase {
        chars.extend_from_slice(UPPERCASE);
    }
    if selection.include_numbers {
        chars.extend_from_slice(NUMBERS);
    }
    if selection.include_symbols {
        chars.extend_from_slice(SYMBOLS);
    }

    chars
}

/// Generate a password with an explicit RNG so callers can seed one.
///
/// Each character is drawn independently and uniformly from the charset,
/// with replacement. A `length` of 0 yields `Ok("")`; an empty selection
/// yields `GeneratorError::EmptyCharset`.
pub fn generate_with_rng<R: Rng>(
    rng: &mut R,
    length: usize,
    selection: &CharsetSelection,
) -> Result<String, GeneratorError> {
    let chars = build_charset(selection);

    if chars.is_empty() {
        return Err(GeneratorError::EmptyCharset);
    }

    let dist = Uniform::from(0..chars.len());
    let password = (0..length)
        .map(|_| chars[dist.sample(rng)] as char)
        .collect();

    Ok(password)
}
