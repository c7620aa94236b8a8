//! Bit error rate between a transmitted and a received bit sequence.
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Bit, Error, Result};

/// Coarse link quality derived from the BER.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Quality {
    /// BER below 0.1%.
    Excellent,
    /// BER below 1%.
    Good,
    /// BER below 10%.
    Poor,
    VeryPoor,
}

impl Quality {
    pub fn from_ber(ber: f64) -> Self {
        if ber < 0.001 {
            Quality::Excellent
        } else if ber < 0.01 {
            Quality::Good
        } else if ber < 0.1 {
            Quality::Poor
        } else {
            Quality::VeryPoor
        }
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Quality::Excellent => "Excellent",
            Quality::Good => "Good",
            Quality::Poor => "Poor",
            Quality::VeryPoor => "Very Poor",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BerResult {
    pub total_bits: usize,
    pub error_bits: usize,
    /// `error_bits / total_bits`, or 0 when there were no bits.
    pub ber: f64,
    pub quality: Quality,
}

impl BerResult {
    pub fn percentage(&self) -> f64 {
        self.ber * 100f64
    }
}

/// Counts positions where `received` differs from `original`.
///
/// The sequences must be the same length; nothing is truncated.
pub fn compute_ber(original: &[Bit], received: &[Bit]) -> Result<BerResult> {
    if original.len() != received.len() {
        return Err(Error::LengthMismatch {
            expected: original.len(),
            actual: received.len(),
        });
    }

    let total_bits = original.len();
    let error_bits = original
        .iter()
        .zip(received)
        .filter(|(a, b)| a != b)
        .count();
    let ber = if total_bits == 0 {
        0f64
    } else {
        error_bits as f64 / total_bits as f64
    };

    Ok(BerResult {
        total_bits,
        error_bits,
        ber,
        quality: Quality::from_ber(ber),
    })
}
