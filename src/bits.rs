//! Conversion of user input (text, hex or binary strings) into bit sequences.
use std::{fmt, ops::Deref, str::FromStr};

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::{Bit, Error, Result};

/// Longest binary string the interactive validators accept.
pub const MAX_BINARY_INPUT: usize = 64;
/// Longest hex string the interactive validators accept (64 bits).
pub const MAX_HEX_INPUT: usize = 16;

/// Where a [`BitSequence`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Origin {
    Text,
    Hex,
    Binary,
    /// Built directly from bits, e.g. the output of a detector.
    Raw,
}

/// An ordered run of bits, tagged with the kind of input it was parsed from.
///
/// Equality only looks at the bits; the origin is metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BitSequence {
    bits: Vec<Bit>,
    origin: Origin,
}

impl BitSequence {
    pub fn new(bits: Vec<Bit>, origin: Origin) -> Self {
        Self { bits, origin }
    }

    pub fn origin(&self) -> Origin {
        self.origin
    }

    pub fn bits(&self) -> &[Bit] {
        &self.bits
    }

    pub fn into_bits(self) -> Vec<Bit> {
        self.bits
    }

    /// Every bit flipped, keeping the origin.
    pub fn complement(&self) -> Self {
        Self::new(self.bits.iter().map(|&bit| !bit).collect(), self.origin)
    }
}

impl PartialEq for BitSequence {
    fn eq(&self, other: &Self) -> bool {
        self.bits == other.bits
    }
}

impl Eq for BitSequence {}

impl Deref for BitSequence {
    type Target = [Bit];

    fn deref(&self) -> &[Bit] {
        &self.bits
    }
}

impl AsRef<[Bit]> for BitSequence {
    fn as_ref(&self) -> &[Bit] {
        &self.bits
    }
}

impl From<Vec<Bit>> for BitSequence {
    fn from(bits: Vec<Bit>) -> Self {
        Self::new(bits, Origin::Raw)
    }
}

impl FromIterator<Bit> for BitSequence {
    fn from_iter<T: IntoIterator<Item = Bit>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect(), Origin::Raw)
    }
}

impl fmt::Display for BitSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.bits.iter().map(|&bit| if bit { '1' } else { '0' }).join("")
        )
    }
}

impl FromStr for BitSequence {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        bits_from_binary(s)
    }
}

/// How a piece of input should be interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    #[default]
    Auto,
    Text,
    Hex,
    Binary,
}

impl FromStr for InputKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "text" => Ok(Self::Text),
            "hex" => Ok(Self::Hex),
            "binary" => Ok(Self::Binary),
            _ => Err(Error::UnsupportedScheme(s.to_string())),
        }
    }
}

fn strip_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

fn strip_hex_prefix(s: &str) -> &str {
    s.strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s)
}

/// Pushes `value` MSB first using exactly `width` bits.
fn push_bits(out: &mut Vec<Bit>, value: u32, width: u32) {
    out.extend((0..width).rev().map(|i| (value >> i) & 1 == 1));
}

/// Each character becomes its code point in binary, MSB first, padded to 8 bits.
///
/// Code points above 255 keep their full width rather than being truncated.
pub fn bits_from_text(s: &str) -> BitSequence {
    let mut bits = Vec::with_capacity(s.len() * 8);
    for c in s.chars() {
        let code = c as u32;
        let width = std::cmp::max(8, u32::BITS - code.leading_zeros());
        push_bits(&mut bits, code, width);
    }
    BitSequence::new(bits, Origin::Text)
}

/// Each hex digit becomes 4 bits. Whitespace and a leading `0x` are ignored.
///
/// Lenient: an invalid digit becomes `0000`. Use [`validate_hex_input`] first if
/// that matters.
pub fn bits_from_hex(s: &str) -> BitSequence {
    let cleaned = strip_whitespace(s);
    let digits = strip_hex_prefix(&cleaned);

    let mut bits = Vec::with_capacity(digits.len() * 4);
    for c in digits.chars() {
        push_bits(&mut bits, c.to_digit(16).unwrap_or(0), 4);
    }
    BitSequence::new(bits, Origin::Hex)
}

/// Parses a string of `0`/`1`, ignoring whitespace.
///
/// Anything else is rejected with its position in the whitespace-free string.
pub fn bits_from_binary(s: &str) -> Result<BitSequence> {
    strip_whitespace(s)
        .chars()
        .enumerate()
        .map(|(position, c)| match c {
            '0' => Ok(false),
            '1' => Ok(true),
            found => Err(Error::Validation { position, found }),
        })
        .collect::<Result<Vec<Bit>>>()
        .map(|bits| BitSequence::new(bits, Origin::Binary))
}

fn is_binary(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c == '0' || c == '1')
}

fn is_hex(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_hexdigit())
}

/// Guesses the input kind: binary first, then hex, then text.
///
/// `"1010"` is always binary even though it is also valid hex.
pub fn auto_convert(s: &str) -> BitSequence {
    if s.is_empty() {
        return BitSequence::new(Vec::new(), Origin::Raw);
    }

    let cleaned = strip_whitespace(s);
    if is_binary(&cleaned) {
        let bits = cleaned.chars().map(|c| c == '1').collect();
        BitSequence::new(bits, Origin::Binary)
    } else if is_hex(&cleaned) {
        bits_from_hex(&cleaned)
    } else {
        bits_from_text(s)
    }
}

/// Converts `s` as the given kind. Only [`InputKind::Binary`] can fail.
pub fn convert(s: &str, kind: InputKind) -> Result<BitSequence> {
    match kind {
        InputKind::Auto => Ok(auto_convert(s)),
        InputKind::Text => Ok(bits_from_text(s)),
        InputKind::Hex => Ok(bits_from_hex(s)),
        InputKind::Binary => bits_from_binary(s),
    }
}

/// Outcome of an advisory input check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Validation {
    pub is_valid: bool,
    pub cleaned_input: String,
    pub error: Option<String>,
}

impl Validation {
    fn ok(cleaned_input: String) -> Self {
        Self {
            is_valid: true,
            cleaned_input,
            error: None,
        }
    }

    fn rejected(cleaned_input: String, error: &str) -> Self {
        Self {
            is_valid: false,
            cleaned_input,
            error: Some(error.to_string()),
        }
    }
}

/// Checks a binary string bound for interactive use (at most 64 bits).
pub fn validate_binary_input(input: &str) -> Validation {
    if input.is_empty() {
        return Validation::rejected(String::new(), "Input is required");
    }
    let cleaned = strip_whitespace(input);
    if cleaned.is_empty() {
        Validation::rejected(cleaned, "Binary string cannot be empty")
    } else if cleaned.chars().count() > MAX_BINARY_INPUT {
        Validation::rejected(cleaned, "Binary string too long (max 64 bits)")
    } else if !is_binary(&cleaned) {
        Validation::rejected(cleaned, "Binary string can only contain 0s and 1s")
    } else {
        Validation::ok(cleaned)
    }
}

/// Checks a hex string bound for interactive use (at most 16 digits).
pub fn validate_hex_input(input: &str) -> Validation {
    if input.is_empty() {
        return Validation::rejected(String::new(), "Input is required");
    }
    let cleaned = strip_whitespace(input);
    let cleaned = strip_hex_prefix(&cleaned).to_string();
    if cleaned.is_empty() {
        Validation::rejected(cleaned, "Hexadecimal string cannot be empty")
    } else if cleaned.chars().count() > MAX_HEX_INPUT {
        Validation::rejected(cleaned, "Hexadecimal string too long (max 16 digits)")
    } else if !is_hex(&cleaned) {
        Validation::rejected(cleaned, "Hexadecimal string can only contain 0-9 and A-F")
    } else {
        Validation::ok(cleaned.to_ascii_uppercase())
    }
}

/// Canned input for demos and smoke tests.
pub fn sample_data(kind: InputKind) -> &'static str {
    match kind {
        InputKind::Text => "Hello World!",
        InputKind::Binary => "1010110011001010",
        InputKind::Hex => "A5C3",
        InputKind::Auto => "Sample",
    }
}
