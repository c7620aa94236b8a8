//! Sampled waveforms produced by the line encoders and modulators.
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Error, Result, line_code::LineCode, modulation::ModulationScheme};

/// What produced a [`Waveform`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scheme {
    Line(LineCode),
    Modulation(ModulationScheme),
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scheme::Line(code) => write!(f, "{code}"),
            Scheme::Modulation(scheme) => write!(f, "{scheme}"),
        }
    }
}

/// Samples with their time stamps, in bit periods.
///
/// Invariant: `samples.len() == time_axis.len() == num_bits * samples_per_bit`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "WaveformParts")]
pub struct Waveform {
    samples: Vec<f64>,
    time_axis: Vec<f64>,
    tag: Scheme,
    samples_per_bit: usize,
}

impl Waveform {
    pub(crate) fn new(samples: Vec<f64>, samples_per_bit: usize, tag: Scheme) -> Self {
        let time_axis = sample_times(samples_per_bit).take(samples.len()).collect();
        Self {
            samples,
            time_axis,
            tag,
            samples_per_bit,
        }
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    pub fn time_axis(&self) -> &[f64] {
        &self.time_axis
    }

    pub fn tag(&self) -> Scheme {
        self.tag
    }

    pub fn samples_per_bit(&self) -> usize {
        self.samples_per_bit
    }

    pub fn num_bits(&self) -> usize {
        self.samples.len() / self.samples_per_bit
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// The samples belonging to bit `k`, if there is one.
    pub fn bit_window(&self, k: usize) -> Option<&[f64]> {
        self.samples
            .chunks(self.samples_per_bit)
            .nth(k)
    }

    pub fn into_samples(self) -> Vec<f64> {
        self.samples
    }
}

/// Unchecked wire form of a [`Waveform`].
#[derive(Deserialize)]
struct WaveformParts {
    samples: Vec<f64>,
    time_axis: Vec<f64>,
    tag: Scheme,
    samples_per_bit: usize,
}

impl TryFrom<WaveformParts> for Waveform {
    type Error = Error;

    fn try_from(parts: WaveformParts) -> Result<Self> {
        let biphase = matches!(parts.tag, Scheme::Line(code) if code.is_biphase());
        let spb = check_samples_per_bit(parts.samples_per_bit, biphase)?;
        if parts.time_axis.len() != parts.samples.len() {
            return Err(Error::LengthMismatch {
                expected: parts.samples.len(),
                actual: parts.time_axis.len(),
            });
        }
        let whole_bits = parts.samples.len() / spb * spb;
        if whole_bits != parts.samples.len() {
            return Err(Error::LengthMismatch {
                expected: whole_bits,
                actual: parts.samples.len(),
            });
        }
        Ok(Self {
            samples: parts.samples,
            time_axis: parts.time_axis,
            tag: parts.tag,
            samples_per_bit: spb,
        })
    }
}

/// Endless stream of sample instants: sample `i` of bit `k` sits at `k + i / samples_per_bit`.
pub fn sample_times(samples_per_bit: usize) -> impl Iterator<Item = f64> {
    let spb = samples_per_bit.max(1);
    (0usize..).map(move |n| (n / spb) as f64 + (n % spb) as f64 / spb as f64)
}

pub(crate) fn check_samples_per_bit(samples_per_bit: usize, biphase: bool) -> Result<usize> {
    if samples_per_bit == 0 {
        Err(Error::ZeroSamplesPerBit)
    } else if biphase && samples_per_bit % 2 != 0 {
        Err(Error::OddSamplesPerBit(samples_per_bit))
    } else {
        Ok(samples_per_bit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_axis() {
        let w = Waveform::new(vec![1f64; 8], 4, Scheme::Line(LineCode::NrzL));
        assert_eq!(
            w.time_axis(),
            [0f64, 0.25, 0.5, 0.75, 1f64, 1.25, 1.5, 1.75]
        );
        assert_eq!(w.num_bits(), 2);
        assert_eq!(w.bit_window(1), Some(&[1f64; 4][..]));
        assert_eq!(w.bit_window(2), None);
    }

    #[test]
    fn samples_per_bit_checks() {
        assert_eq!(check_samples_per_bit(0, false), Err(Error::ZeroSamplesPerBit));
        assert_eq!(check_samples_per_bit(3, false), Ok(3));
        assert_eq!(check_samples_per_bit(3, true), Err(Error::OddSamplesPerBit(3)));
        assert_eq!(check_samples_per_bit(4, true), Ok(4));
    }

    #[test]
    fn deserializing_checks_the_shape() {
        let w = Waveform::new(vec![1f64, -1f64], 2, Scheme::Line(LineCode::Manchester));
        let json = serde_json::to_string(&w).unwrap();
        assert_eq!(serde_json::from_str::<Waveform>(&json).unwrap(), w);

        let zero_spb = r#"{"samples":[1.0],"time_axis":[0.0],"tag":"NRZ-L","samples_per_bit":0}"#;
        assert!(serde_json::from_str::<Waveform>(zero_spb).is_err());

        let ragged = r#"{"samples":[1.0,1.0,1.0],"time_axis":[0.0,0.5,1.0],"tag":"NRZ-L","samples_per_bit":2}"#;
        assert!(serde_json::from_str::<Waveform>(ragged).is_err());

        let short_axis = r#"{"samples":[1.0,1.0],"time_axis":[0.0],"tag":"AMI","samples_per_bit":1}"#;
        assert!(serde_json::from_str::<Waveform>(short_axis).is_err());

        let odd_biphase = r#"{"samples":[1.0],"time_axis":[0.0],"tag":"Manchester","samples_per_bit":1}"#;
        assert!(serde_json::from_str::<Waveform>(odd_biphase).is_err());
    }

    #[test]
    fn tag_names() {
        assert_eq!(Scheme::Line(LineCode::Ami).to_string(), "AMI");
        assert_eq!(
            Scheme::Modulation(ModulationScheme::Psk).to_string(),
            "PSK"
        );
    }
}
