//! Dispatch over the six supported line codes.
use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::{
    Bit, BitSequence, Error, Result,
    ami::{rx_ami_signal, rx_pseudoternary_signal, tx_ami_signal, tx_pseudoternary_signal},
    error::positive,
    manchester::{
        rx_diff_manchester_signal, rx_manchester_signal, tx_diff_manchester_signal,
        tx_manchester_signal,
    },
    nrz::{rx_nrzi_signal, rx_nrzl_signal, tx_nrzi_signal, tx_nrzl_signal},
    waveform::{Scheme, Waveform, check_samples_per_bit},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineCode {
    #[serde(rename = "NRZ-L")]
    NrzL,
    #[serde(rename = "NRZ-I")]
    NrzI,
    Manchester,
    #[serde(rename = "DiffManchester")]
    DiffManchester,
    #[serde(rename = "AMI")]
    Ami,
    Pseudoternary,
}

impl LineCode {
    pub const ALL: [LineCode; 6] = [
        LineCode::NrzL,
        LineCode::NrzI,
        LineCode::Manchester,
        LineCode::DiffManchester,
        LineCode::Ami,
        LineCode::Pseudoternary,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            LineCode::NrzL => "NRZ-L",
            LineCode::NrzI => "NRZ-I",
            LineCode::Manchester => "Manchester",
            LineCode::DiffManchester => "DiffManchester",
            LineCode::Ami => "AMI",
            LineCode::Pseudoternary => "Pseudoternary",
        }
    }

    /// Codes that split each bit into two half-bit phases.
    pub fn is_biphase(&self) -> bool {
        matches!(self, LineCode::Manchester | LineCode::DiffManchester)
    }

    /// Codes whose running level depends on earlier bits.
    pub fn is_differential(&self) -> bool {
        matches!(
            self,
            LineCode::NrzI | LineCode::DiffManchester | LineCode::Ami | LineCode::Pseudoternary
        )
    }
}

impl fmt::Display for LineCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LineCode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_ascii_uppercase();
        match key.as_str() {
            "NRZL" | "NRZ" => Ok(LineCode::NrzL),
            "NRZI" => Ok(LineCode::NrzI),
            "MANCHESTER" => Ok(LineCode::Manchester),
            "DIFFMANCHESTER" | "DIFFERENTIALMANCHESTER" => Ok(LineCode::DiffManchester),
            "AMI" => Ok(LineCode::Ami),
            "PSEUDOTERNARY" => Ok(LineCode::Pseudoternary),
            _ => Err(Error::UnsupportedScheme(s.to_string())),
        }
    }
}

/// Line codes `bits` into a stepped waveform with `samples_per_bit` samples per bit.
///
/// Manchester and Differential Manchester need an even `samples_per_bit` so
/// that both halves of a bit are the same length. Odd values are rejected with
/// [`Error::OddSamplesPerBit`] rather than splitting the bit unevenly at
/// `samples_per_bit / 2`, which would leave every bit with a nonzero mean.
/// An empty input gives an empty waveform.
pub fn encode(bits: &[Bit], samples_per_bit: usize, line_code: LineCode) -> Result<Waveform> {
    let spb = check_samples_per_bit(samples_per_bit, line_code.is_biphase())?;
    let message = bits.iter().cloned();

    let samples: Vec<f64> = match line_code {
        LineCode::NrzL => tx_nrzl_signal(message, spb).collect(),
        LineCode::NrzI => tx_nrzi_signal(message, spb).collect(),
        LineCode::Manchester => tx_manchester_signal(message, spb).collect(),
        LineCode::DiffManchester => tx_diff_manchester_signal(message, spb).collect(),
        LineCode::Ami => tx_ami_signal(message, spb).collect(),
        LineCode::Pseudoternary => tx_pseudoternary_signal(message, spb).collect(),
    };
    trace!(%line_code, bits = bits.len(), samples = samples.len(), "encoded");

    Ok(Waveform::new(samples, spb, Scheme::Line(line_code)))
}

/// Recovers bits from a waveform produced by `line_code`, undoing the
/// differential and bipolar rules rather than just thresholding levels.
///
/// Assumes unit signal levels. For a waveform that has been scaled down by the
/// channel use [`decode_with_gain`].
pub fn decode(samples: &[f64], samples_per_bit: usize, line_code: LineCode) -> Result<BitSequence> {
    decode_with_gain(samples, samples_per_bit, line_code, 1f64)
}

/// [`decode`] for a waveform whose levels were multiplied by `gain`, such as
/// [`crate::Attenuation::factor`].
///
/// AMI and Pseudoternary marks are sliced at half the expected mark level,
/// `gain / 2`, so a run without marks stays a run without marks under noise.
pub fn decode_with_gain(
    samples: &[f64],
    samples_per_bit: usize,
    line_code: LineCode,
    gain: f64,
) -> Result<BitSequence> {
    let spb = check_samples_per_bit(samples_per_bit, line_code.is_biphase())?;
    let mark_threshold = positive("gain", gain)? / 2f64;
    let signal = samples.iter().cloned();

    let bits: BitSequence = match line_code {
        LineCode::NrzL => rx_nrzl_signal(signal, spb).collect(),
        LineCode::NrzI => rx_nrzi_signal(signal, spb).collect(),
        LineCode::Manchester => rx_manchester_signal(signal, spb).collect(),
        LineCode::DiffManchester => rx_diff_manchester_signal(signal, spb).collect(),
        LineCode::Ami => rx_ami_signal(signal, spb, mark_threshold).collect(),
        LineCode::Pseudoternary => rx_pseudoternary_signal(signal, spb, mark_threshold).collect(),
    };
    trace!(%line_code, samples = samples.len(), bits = bits.len(), mark_threshold, "decoded");

    Ok(bits)
}
