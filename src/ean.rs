//! EAN check-digit arithmetic and deterministic code synthesis.
//!
//! Codes are synthesized by hashing a seed with SHA-1 and reducing the digest
//! to a 12-digit payload, so the same row identifier always yields the same
//! EAN-13 while the output still looks random across identifiers.
use anyhow::{anyhow, bail, Result};
use rand::Rng;
use sha1::{Digest, Sha1};
use std::fmt;

/// Total length of a complete EAN-13, check digit included.
pub const EAN13_LEN: usize = 13;
/// Total length of a complete EAN-8, check digit included.
pub const EAN8_LEN: usize = 8;

/// Synthesized payloads span 12 digits, one short of a full EAN-13.
const PAYLOAD_MOD: u64 = 1_000_000_000_000;

/// Append the weighted-modulo-10 check digit to a digit string.
///
/// The input length is not constrained: 7 and 12 digit payloads yield
/// standard EAN-8/EAN-13 codes, anything else an arithmetically valid but
/// non-standard length. Callers wanting standard codes check the length.
pub fn append_check_digit(raw: &str) -> Result<String> {
    let check = check_digit(raw)?;
    Ok(format!("{raw}{check}"))
}

/// Compute the check digit for a payload without appending it.
pub fn check_digit(raw: &str) -> Result<u32> {
    let digits = digit_values(raw)?;
    Ok(check_digit_of(&digits))
}

/// Deterministically derive a complete EAN-13 from a seed.
///
/// The seed's display form is hashed with SHA-1 and the digest reduced
/// modulo 10^12; leading zeros in the payload are preserved. Identical seeds
/// always produce identical codes.
pub fn create_ean13(seed: impl fmt::Display) -> Result<String> {
    let digest = Sha1::digest(seed.to_string().as_bytes());
    // Big-endian reduction of the 160-bit digest modulo 10^12.
    let mut payload = 0u64;
    for byte in digest.iter() {
        payload = (payload * 256 + u64::from(*byte)) % PAYLOAD_MOD;
    }
    append_check_digit(&format!("{payload:012}"))
}

/// Derive an EAN-13 from a fresh `u64` drawn from the given source.
///
/// The random source is passed in rather than read from process state so
/// tests can substitute a seeded generator.
pub fn create_ean13_random(rng: &mut impl Rng) -> Result<String> {
    create_ean13(rng.gen::<u64>())
}

/// Why a candidate code fails EAN validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeFault {
    /// Code is empty.
    Empty,
    /// Code contains a character outside 0-9.
    NonDigit,
    /// Code length is neither 8 (EAN-8) nor 13 (EAN-13).
    Length(usize),
    /// Final digit does not satisfy the weighted checksum.
    CheckDigit { expected: u32, found: u32 },
}

impl fmt::Display for CodeFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty code"),
            Self::NonDigit => write!(f, "contains a non-digit character"),
            Self::Length(len) => write!(f, "length {len} is neither 8 nor 13"),
            Self::CheckDigit { expected, found } => {
                write!(f, "check digit {found} should be {expected}")
            }
        }
    }
}

/// Check that a string is a complete, standard EAN-8 or EAN-13.
pub fn validate(code: &str) -> Result<(), CodeFault> {
    let mut digits = Vec::with_capacity(code.len());
    for c in code.chars() {
        match c.to_digit(10) {
            Some(digit) => digits.push(digit),
            None => return Err(CodeFault::NonDigit),
        }
    }
    let Some((found, payload)) = digits.split_last() else {
        return Err(CodeFault::Empty);
    };
    if digits.len() != EAN8_LEN && digits.len() != EAN13_LEN {
        return Err(CodeFault::Length(digits.len()));
    }
    let expected = check_digit_of(payload);
    if *found != expected {
        return Err(CodeFault::CheckDigit {
            expected,
            found: *found,
        });
    }
    Ok(())
}

fn digit_values(raw: &str) -> Result<Vec<u32>> {
    if raw.is_empty() {
        bail!("cannot compute a check digit for an empty code");
    }
    raw.chars()
        .map(|c| {
            c.to_digit(10)
                .ok_or_else(|| anyhow!("non-digit character {c:?} in code {raw:?}"))
        })
        .collect()
}

/// Weighted sum with weight 3 on odd positions counted from the right.
fn check_digit_of(digits: &[u32]) -> u32 {
    let mut total = 0;
    for (i, digit) in digits.iter().rev().enumerate() {
        total += if i % 2 == 0 { 3 * digit } else { *digit };
    }
    (10 - total % 10) % 10
}
