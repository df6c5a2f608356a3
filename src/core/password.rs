// src/core/password.rs
//! Password normalization and strength checks
//!
//! Every password goes through [`validate_password`] before it may be turned
//! into a key. Validation normalizes to Unicode NFC first, so `ñ` typed as one
//! code point and `n` + combining tilde produce the same key.

use unicode_normalization::UnicodeNormalization;

use crate::consts::{DEFAULT_ENTROPY_LEVEL, MAX_CHARSPACE, MIN_ENTROPY_LEVEL};
use crate::error::{CoreError, WeakPassword};

use super::Result;

/// Normalize `raw` to NFC and check it against the default 80-bit level
pub fn validate_password(raw: &str) -> Result<String> {
    validate_password_with_level(raw, DEFAULT_ENTROPY_LEVEL)
}

pub fn validate_password_with_level(raw: &str, level: u32) -> Result<String> {
    let normalized: String = raw.nfc().collect();
    has_enough_entropy(&normalized, level)?;
    Ok(normalized)
}

/// Same as [`validate_password`] for input that has not been decoded yet
pub fn validate_password_bytes(raw: &[u8]) -> Result<String> {
    let text = std::str::from_utf8(raw).map_err(|e| CoreError::Type {
        argument: "password",
        received: format!("{} bytes of non-UTF-8 data ({e})", raw.len()),
    })?;
    validate_password(text)
}

/// Check `input` carries at least `level` bits of estimated entropy.
///
/// The estimate is `length * log2(charspace)`, where the charspace only counts
/// the character classes actually present. Length is measured in UTF-16 code
/// units so that a password outside the BMP scores what it always has. Levels below 64 are a caller bug and
/// fail with [`CoreError::Type`] rather than a strength error.
pub fn has_enough_entropy(input: &str, level: u32) -> Result<()> {
    if level < MIN_ENTROPY_LEVEL {
        return Err(CoreError::Type {
            argument: "level",
            received: format!(
                "{level} bits, below the {MIN_ENTROPY_LEVEL}-bit floor; refusing to check against it"
            ),
        });
    }

    let length = utf16_length(input);
    let min_length = min_length_for(level);
    if length < min_length {
        return Err(WeakPassword::TooShort { min_length, length }.into());
    }

    let entropy_bits = estimate_entropy(input);
    if entropy_bits < f64::from(level) {
        return Err(WeakPassword::LowEntropy {
            entropy_bits,
            required_bits: level,
        }
        .into());
    }

    Ok(())
}

/// Shortest password that could reach `level` bits with every character class present
pub fn min_length_for(level: u32) -> usize {
    (f64::from(level) / f64::from(MAX_CHARSPACE).log2()).ceil() as usize
}

/// Size of the alphabet `input` appears to be drawn from
pub fn charspace(input: &str) -> u32 {
    let classes: [(fn(&char) -> bool, u32); 4] = [
        (char::is_ascii_digit, 10),
        (char::is_ascii_lowercase, 26),
        (char::is_ascii_uppercase, 26),
        (char::is_ascii_punctuation, 32),
    ];

    classes
        .iter()
        .filter(|(matches, _)| input.chars().any(|c| matches(&c)))
        .map(|(_, size)| size)
        .sum()
}

pub fn estimate_entropy(input: &str) -> f64 {
    match charspace(input) {
        0 => 0.0,
        space => utf16_length(input) as f64 * f64::from(space).log2(),
    }
}

// An emoji counts as 2
fn utf16_length(input: &str) -> usize {
    input.encode_utf16().count()
}
