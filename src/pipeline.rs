//! One end-to-end pass through the simulated link:
//! encode, add noise, attenuate, recover and score.
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    Bit, BitSequence, Error, Result, Waveform,
    ber::{BerResult, compute_ber},
    channel::{Attenuation, Medium, NoiseModel, Snr, attenuate, measure_snr},
    line_code::{LineCode, decode_with_gain, encode},
    recovery::{DEFAULT_THRESHOLD, recover_bits},
};

/// How the receiver turns the attenuated waveform back into bits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recovery {
    /// Window mean against a fixed level. Only NRZ-L is recovered faithfully.
    Threshold(f64),
    /// The decoder matching the transmit line code, told how much the channel
    /// attenuated the signal.
    LineDecode,
}

impl Default for Recovery {
    fn default() -> Self {
        Recovery::Threshold(DEFAULT_THRESHOLD)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineParams {
    pub line_code: LineCode,
    pub samples_per_bit: usize,
    /// Metres.
    pub distance: f64,
    pub noise_level: f64,
    pub noise_model: NoiseModel,
    /// Loss per metre.
    pub attenuation_factor: f64,
    pub recovery: Recovery,
}

impl Default for PipelineParams {
    fn default() -> Self {
        Self {
            line_code: LineCode::NrzL,
            samples_per_bit: 10,
            distance: 1000f64,
            noise_level: 0.1,
            noise_model: NoiseModel::Uniform,
            attenuation_factor: Medium::Copper.attenuation_factor(),
            recovery: Recovery::default(),
        }
    }
}

impl PipelineParams {
    pub fn with_medium(self, medium: Medium) -> Self {
        Self {
            attenuation_factor: medium.attenuation_factor(),
            ..self
        }
    }
}

/// Every intermediate product of a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineRun {
    pub waveform: Waveform,
    pub noisy: Vec<f64>,
    pub attenuation: Attenuation,
    pub recovered: BitSequence,
    pub ber: BerResult,
    /// Clean vs. noisy, before attenuation. `None` when undefined, e.g. with no noise.
    pub snr: Option<Snr>,
}

pub fn run_pipeline<R: Rng + ?Sized>(
    bits: &[Bit],
    params: &PipelineParams,
    rng: &mut R,
) -> Result<PipelineRun> {
    let waveform = encode(bits, params.samples_per_bit, params.line_code)?;
    debug!(line_code = %params.line_code, bits = bits.len(), samples = waveform.len(), "encoded");

    let noisy = params
        .noise_model
        .apply(waveform.samples(), params.noise_level, rng)?;
    let snr = match measure_snr(waveform.samples(), &noisy) {
        Ok(snr) => Some(snr),
        Err(Error::UndefinedSnr) => {
            debug!("SNR undefined for this run");
            None
        }
        Err(e) => return Err(e),
    };
    debug!(
        model = ?params.noise_model,
        level = params.noise_level,
        snr_db = snr.map(|s| s.db),
        "noise added"
    );

    let attenuation = attenuate(&noisy, params.distance, params.attenuation_factor)?;
    debug!(
        distance = params.distance,
        loss_db = attenuation.db,
        strength_percent = attenuation.strength_percent,
        "attenuated"
    );

    let recovered = match params.recovery {
        Recovery::Threshold(threshold) => {
            recover_bits(&attenuation.samples, params.samples_per_bit, threshold)?
        }
        Recovery::LineDecode => decode_with_gain(
            &attenuation.samples,
            params.samples_per_bit,
            params.line_code,
            attenuation.factor,
        )?,
    };

    let ber = compute_ber(bits, &recovered)?;
    debug!(
        errors = ber.error_bits,
        total = ber.total_bits,
        ber = ber.ber,
        quality = %ber.quality,
        "recovered"
    );

    Ok(PipelineRun {
        waveform,
        noisy,
        attenuation,
        recovered,
        ber,
        snr,
    })
}
