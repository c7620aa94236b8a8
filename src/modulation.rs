//! Carrier modulations and the detectors that undo them.
use std::{f64::consts::PI, fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::{
    Bit, BitSequence, Error, Result,
    ask::{rx_ask_signal, tx_ask_signal},
    error::non_negative,
    fsk::{rx_bfsk_signal, tx_bfsk_signal},
    psk::{rx_bpsk_signal, tx_bpsk_signal},
    waveform::{Scheme, Waveform, check_samples_per_bit},
};

/// Mean magnitude above which the envelope detector calls a bit a 1.
pub const DEFAULT_DEMOD_THRESHOLD: f64 = 0.1;

/// `sin(2π·freq·t + phase)`, with `t` in bit periods.
#[inline]
pub(crate) fn carrier(freq: f64, t: f64, phase: f64) -> f64 {
    (2f64 * PI * freq * t + phase).sin()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ModulationScheme {
    Ask,
    Fsk,
    Psk,
}

impl ModulationScheme {
    pub const ALL: [ModulationScheme; 3] = [
        ModulationScheme::Ask,
        ModulationScheme::Fsk,
        ModulationScheme::Psk,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ModulationScheme::Ask => "ASK",
            ModulationScheme::Fsk => "FSK",
            ModulationScheme::Psk => "PSK",
        }
    }
}

impl fmt::Display for ModulationScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ModulationScheme {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ASK" => Ok(ModulationScheme::Ask),
            "FSK" => Ok(ModulationScheme::Fsk),
            "PSK" => Ok(ModulationScheme::Psk),
            _ => Err(Error::UnsupportedScheme(s.to_string())),
        }
    }
}

/// Carrier settings. Frequencies are in cycles per bit period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModulationParams {
    /// ASK and PSK carrier.
    pub carrier_freq: f64,
    /// FSK tone for a 0.
    pub freq0: f64,
    /// FSK tone for a 1.
    pub freq1: f64,
    pub samples_per_bit: usize,
}

impl Default for ModulationParams {
    fn default() -> Self {
        Self {
            carrier_freq: 10f64,
            freq0: 5f64,
            freq1: 15f64,
            samples_per_bit: 100,
        }
    }
}

impl ModulationParams {
    fn validate(&self) -> Result<usize> {
        non_negative("carrier frequency", self.carrier_freq)?;
        non_negative("FSK frequency for 0", self.freq0)?;
        non_negative("FSK frequency for 1", self.freq1)?;
        check_samples_per_bit(self.samples_per_bit, false)
    }
}

pub fn modulate(
    bits: &[Bit],
    scheme: ModulationScheme,
    params: &ModulationParams,
) -> Result<Waveform> {
    let spb = params.validate()?;
    let message = bits.iter().cloned();

    let samples: Vec<f64> = match scheme {
        ModulationScheme::Ask => tx_ask_signal(message, params.carrier_freq, spb).collect(),
        ModulationScheme::Fsk => {
            tx_bfsk_signal(message, params.freq0, params.freq1, spb).collect()
        }
        ModulationScheme::Psk => tx_bpsk_signal(message, params.carrier_freq, spb).collect(),
    };
    trace!(%scheme, bits = bits.len(), samples = samples.len(), "modulated");

    Ok(Waveform::new(samples, spb, Scheme::Modulation(scheme)))
}

/// Envelope detection over windows of `samples_per_bit` samples.
///
/// Only ASK carries information in its envelope. FSK and PSK recover as all 1s
/// here; use [`detect`] when the scheme is known.
pub fn demodulate(samples: &[f64], samples_per_bit: usize, threshold: f64) -> Result<BitSequence> {
    let spb = check_samples_per_bit(samples_per_bit, false)?;
    let bits: BitSequence = rx_ask_signal(samples.iter().cloned(), spb, threshold).collect();
    debug!(samples = samples.len(), bits = bits.len(), threshold, "demodulated");
    Ok(bits)
}

/// Scheme-aware detection: envelope for ASK, tone energy for FSK, carrier
/// correlation for PSK. Assumes the first sample is at `t = 0`.
pub fn detect(
    samples: &[f64],
    scheme: ModulationScheme,
    params: &ModulationParams,
) -> Result<BitSequence> {
    let spb = params.validate()?;
    let signal = samples.iter().cloned();

    Ok(match scheme {
        ModulationScheme::Ask => rx_ask_signal(signal, spb, DEFAULT_DEMOD_THRESHOLD).collect(),
        ModulationScheme::Fsk => rx_bfsk_signal(signal, params.freq0, params.freq1, spb).collect(),
        ModulationScheme::Psk => rx_bpsk_signal(signal, params.carrier_freq, spb).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random_bits;
    use rand::{SeedableRng, rngs::StdRng};
    use rstest::rstest;

    #[rstest]
    #[case("ASK", ModulationScheme::Ask)]
    #[case("fsk", ModulationScheme::Fsk)]
    #[case(" Psk ", ModulationScheme::Psk)]
    fn parse(#[case] name: &str, #[case] expected: ModulationScheme) {
        assert_eq!(name.parse::<ModulationScheme>(), Ok(expected));
    }

    #[test]
    fn unknown_scheme_is_rejected() {
        assert_eq!(
            "QAM".parse::<ModulationScheme>(),
            Err(Error::UnsupportedScheme("QAM".to_string()))
        );
    }

    #[rstest]
    #[case(ModulationScheme::Ask)]
    #[case(ModulationScheme::Fsk)]
    #[case(ModulationScheme::Psk)]
    fn waveform_shape(#[case] scheme: ModulationScheme) {
        let params = ModulationParams::default();
        let w = modulate(&[true, false, true], scheme, &params).unwrap();
        assert_eq!(w.len(), 300);
        assert_eq!(w.time_axis().len(), 300);
        assert_eq!(w.tag(), Scheme::Modulation(scheme));
        assert!(w.samples().iter().all(|s_i| s_i.abs() <= 1f64));
    }

    #[test]
    fn ask_demodulates() {
        let data_bits = random_bits(512, &mut StdRng::seed_from_u64(30));
        let params = ModulationParams::default();
        let w = modulate(&data_bits, ModulationScheme::Ask, &params).unwrap();
        let rx = demodulate(w.samples(), 100, DEFAULT_DEMOD_THRESHOLD).unwrap();
        assert_eq!(rx.bits(), &data_bits[..]);
    }

    #[rstest]
    #[case(ModulationScheme::Fsk)]
    #[case(ModulationScheme::Psk)]
    fn envelope_detector_cannot_see_constant_envelopes(#[case] scheme: ModulationScheme) {
        let params = ModulationParams::default();
        let w = modulate(&[false, true, false, false], scheme, &params).unwrap();
        let rx = demodulate(w.samples(), 100, DEFAULT_DEMOD_THRESHOLD).unwrap();
        assert_eq!(rx.bits(), [true, true, true, true]);
    }

    #[rstest]
    #[case(ModulationScheme::Ask)]
    #[case(ModulationScheme::Fsk)]
    #[case(ModulationScheme::Psk)]
    fn scheme_aware_detection(#[case] scheme: ModulationScheme) {
        let data_bits = random_bits(512, &mut StdRng::seed_from_u64(31));
        let params = ModulationParams::default();
        let w = modulate(&data_bits, scheme, &params).unwrap();
        let rx = detect(w.samples(), scheme, &params).unwrap();
        assert_eq!(rx.bits(), &data_bits[..]);
    }

    #[test]
    fn partial_last_window() {
        let rx = demodulate(&[0f64, 0f64, 0.5], 2, DEFAULT_DEMOD_THRESHOLD).unwrap();
        assert_eq!(rx.bits(), [false, true]);
    }

    #[test]
    fn bad_params() {
        let params = ModulationParams {
            samples_per_bit: 0,
            ..Default::default()
        };
        assert_eq!(
            modulate(&[true], ModulationScheme::Ask, &params),
            Err(Error::ZeroSamplesPerBit)
        );
        let params = ModulationParams {
            carrier_freq: -1f64,
            ..Default::default()
        };
        assert!(modulate(&[true], ModulationScheme::Psk, &params).is_err());
        assert!(demodulate(&[0f64], 0, 0.1).is_err());
    }

    #[test]
    fn params_from_partial_config() {
        let params: ModulationParams = serde_json::from_str(r#"{"carrier_freq": 4.0}"#).unwrap();
        assert_eq!(params.carrier_freq, 4f64);
        assert_eq!(params.freq1, 15f64);
        assert_eq!(params.samples_per_bit, 100);
    }
}
