//! Error type shared by every stage of the simulator.
//!
//! All failures are local and deterministic: nothing here does I/O, so there
//! are no retries or partial results.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A character other than `0`/`1` in a strictly parsed bit string.
    #[error("invalid bit {found:?} at position {position}")]
    Validation { position: usize, found: char },

    /// Two sequences that must line up sample-for-sample (or bit-for-bit) do not.
    #[error("length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// Unknown line code, modulation, medium or input kind name.
    #[error("unsupported scheme: {0:?}")]
    UnsupportedScheme(String),

    #[error("samples per bit must be positive")]
    ZeroSamplesPerBit,

    /// Biphase codes split every bit into two equal halves.
    #[error("biphase line codes need an even number of samples per bit, got {0}")]
    OddSamplesPerBit(usize),

    #[error("invalid {name}: {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    /// Signal or noise power is zero, or there were no samples to measure.
    #[error("SNR is undefined for this signal")]
    UndefinedSnr,
}

pub type Result<T> = std::result::Result<T, Error>;

/// Rejects negative, infinite and NaN values for a named parameter.
pub(crate) fn non_negative(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value >= 0f64 {
        Ok(value)
    } else {
        Err(Error::InvalidParameter { name, value })
    }
}

/// Rejects zero, negative, infinite and NaN values for a named parameter.
pub(crate) fn positive(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0f64 {
        Ok(value)
    } else {
        Err(Error::InvalidParameter { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let err = Error::Validation {
            position: 3,
            found: 'x',
        };
        assert_eq!(err.to_string(), "invalid bit 'x' at position 3");

        let err = Error::LengthMismatch {
            expected: 8,
            actual: 7,
        };
        assert_eq!(err.to_string(), "length mismatch: expected 8, got 7");
    }

    #[test]
    fn parameter_checks() {
        assert_eq!(non_negative("distance", 0f64), Ok(0f64));
        assert!(non_negative("distance", -1f64).is_err());
        assert!(non_negative("distance", f64::NAN).is_err());
        assert!(positive("factor", 0f64).is_err());
        assert!(positive("factor", f64::INFINITY).is_err());
        assert_eq!(positive("factor", 0.5), Ok(0.5));
    }
}
