//! A physical layer simulator.
//!
//! Bits go in, get line coded or modulated into sampled waveforms, pass through
//! a noisy and lossy channel, and come back out as bits with an error rate.
//!
//! ```text
//! bits ─▶ encode ─▶ add_noise ─▶ attenuate ─▶ recover_bits ─▶ compute_ber
//! ```
//!
//! Every stage is a plain function over value types. The only source of
//! randomness is the [`rand::Rng`] handed to the noise models, so seeded
//! generators give reproducible runs.
use rand::Rng;

pub mod ami;
pub mod ask;
pub mod ber;
pub mod bits;
pub mod channel;
mod error;
pub mod fsk;
pub mod iter;
pub mod line_code;
pub mod manchester;
pub mod modulation;
pub mod nrz;
pub mod pipeline;
pub mod psk;
#[cfg(feature = "python")]
mod python;
pub mod recovery;
pub mod tdm;
pub mod waveform;

pub use crate::{
    ber::{BerResult, Quality, compute_ber},
    bits::{BitSequence, InputKind, Origin, auto_convert, bits_from_hex, bits_from_text},
    channel::{
        Attenuation, Medium, NoiseModel, Snr, add_gaussian_noise, add_noise, attenuate,
        measure_snr, propagation_timings,
    },
    error::{Error, Result},
    line_code::{LineCode, decode, decode_with_gain, encode},
    modulation::{ModulationParams, ModulationScheme, demodulate, detect, modulate},
    pipeline::{PipelineParams, PipelineRun, Recovery, run_pipeline},
    recovery::recover_bits,
    tdm::{SlotLabel, TdmFrame, demultiplex_tdm, multiplex_tdm},
    waveform::{Scheme, Waveform},
};

pub type Bit = bool;

#[inline]
pub fn db(x: f64) -> f64 {
    10f64 * x.log10()
}

#[inline]
pub fn undb(x: f64) -> f64 {
    10f64.powf(x / 10f64)
}

#[inline]
pub fn bit_to_nrz(bit: Bit) -> f64 {
    if bit { 1_f64 } else { -1_f64 }
}

/// Arithmetic mean; zero for an empty slice.
#[inline]
pub fn mean(signal: &[f64]) -> f64 {
    if signal.is_empty() {
        0f64
    } else {
        signal.iter().sum::<f64>() / signal.len() as f64
    }
}

/// Calculates the power (energy per sample) of a real signal.
#[inline]
pub fn avg_power(signal: &[f64]) -> f64 {
    if signal.is_empty() {
        return 0f64;
    }
    signal.iter().map(|&s_i| s_i.powi(2)).sum::<f64>() / signal.len() as f64
}

pub fn random_bits<R: Rng + ?Sized>(num_bits: usize, rng: &mut R) -> Vec<Bit> {
    (0..num_bits).map(|_| rng.random::<Bit>()).collect()
}
