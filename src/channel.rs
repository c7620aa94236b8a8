//! Channel impairments: additive noise, distance attenuation, and the
//! measurements that go with them (SNR, propagation timing).
//!
//! Noise draws from whatever [`Rng`] the caller passes in. Seed it
//! (`StdRng::seed_from_u64`) for reproducible runs.
use std::{str::FromStr, time::Duration};

use rand::{
    Rng,
    distr::{Distribution, Uniform},
};
use rand_distr::Normal;
use serde::{Deserialize, Serialize};

use crate::{
    Error, Result, avg_power, db,
    error::{non_negative, positive},
    iter::Iter,
};

/// Signal speed in copper, m/s.
pub const DEFAULT_PROPAGATION_SPEED: f64 = 200_000_000f64;

/// Adds noise drawn uniformly from `[-level, level]` to every sample.
///
/// This is a bounded perturbation, not thermal noise. See
/// [`add_gaussian_noise`] for the Gaussian variant.
pub fn add_noise<R: Rng + ?Sized>(samples: &[f64], level: f64, rng: &mut R) -> Result<Vec<f64>> {
    let level = non_negative("noise level", level)?;
    if level == 0f64 {
        return Ok(samples.to_vec());
    }
    let noise = Uniform::new_inclusive(-level, level)
        .map_err(|_| Error::InvalidParameter {
            name: "noise level",
            value: level,
        })?;
    Ok(samples.iter().map(|&s_i| s_i + noise.sample(rng)).collect())
}

/// Adds zero-mean Gaussian noise with standard deviation `sigma` to every sample.
pub fn add_gaussian_noise<R: Rng + ?Sized>(
    samples: &[f64],
    sigma: f64,
    rng: &mut R,
) -> Result<Vec<f64>> {
    let sigma = non_negative("noise sigma", sigma)?;
    if sigma == 0f64 {
        return Ok(samples.to_vec());
    }
    let noise = Normal::new(0f64, sigma).map_err(|_| Error::InvalidParameter {
        name: "noise sigma",
        value: sigma,
    })?;
    Ok(samples.iter().map(|&s_i| s_i + noise.sample(rng)).collect())
}

/// Which noise distribution to draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoiseModel {
    /// Uniform on `[-level, level]`.
    #[default]
    Uniform,
    /// Normal with standard deviation `level`.
    Gaussian,
}

impl NoiseModel {
    pub fn apply<R: Rng + ?Sized>(&self, samples: &[f64], level: f64, rng: &mut R) -> Result<Vec<f64>> {
        match self {
            NoiseModel::Uniform => add_noise(samples, level, rng),
            NoiseModel::Gaussian => add_gaussian_noise(samples, level, rng),
        }
    }
}

/// Canned noise levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoisePreset {
    Low,
    Medium,
    High,
    Extreme,
}

impl NoisePreset {
    pub fn level(&self) -> f64 {
        match self {
            NoisePreset::Low => 0.05,
            NoisePreset::Medium => 0.15,
            NoisePreset::High => 0.3,
            NoisePreset::Extreme => 0.5,
        }
    }
}

/// A transmission medium and its loss per metre.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Medium {
    #[default]
    Copper,
    Coax,
    Fiber,
    Wireless,
}

impl Medium {
    /// Smaller means less loss.
    pub fn attenuation_factor(&self) -> f64 {
        match self {
            Medium::Copper => 0.001,
            Medium::Coax => 0.0005,
            Medium::Fiber => 0.0001,
            Medium::Wireless => 0.002,
        }
    }
}

impl FromStr for Medium {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "copper" => Ok(Medium::Copper),
            "coax" | "coaxial" => Ok(Medium::Coax),
            "fiber" | "fibre" => Ok(Medium::Fiber),
            "wireless" => Ok(Medium::Wireless),
            _ => Err(Error::UnsupportedScheme(s.to_string())),
        }
    }
}

/// A signal after distance loss.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attenuation {
    pub samples: Vec<f64>,
    /// Linear gain in `(0, 1]`.
    pub factor: f64,
    /// Loss in dB, `>= 0`.
    pub db: f64,
    /// `factor` as a percentage of the original amplitude.
    pub strength_percent: f64,
}

/// Scales `samples` by `exp(-attenuation_factor * distance)`.
///
/// A link so long that the gain underflows to zero is rejected as an invalid
/// distance, since no signal at all reaches the receiver.
pub fn attenuate(samples: &[f64], distance: f64, attenuation_factor: f64) -> Result<Attenuation> {
    let distance = non_negative("distance", distance)?;
    let attenuation_factor = positive("attenuation factor", attenuation_factor)?;

    let exponent = attenuation_factor * distance;
    let factor = (-exponent).exp();
    if factor <= 0f64 {
        return Err(Error::InvalidParameter {
            name: "distance",
            value: distance,
        });
    }
    Ok(Attenuation {
        samples: samples.iter().cloned().scale(factor).collect(),
        factor,
        // -20·log10(e^-x) = 20·x·log10(e); stays exact for subnormal `factor`.
        db: 20f64 * exponent * std::f64::consts::LOG10_E,
        strength_percent: factor * 100f64,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SnrQuality {
    Excellent,
    Good,
    Poor,
}

impl SnrQuality {
    pub fn from_db(snr_db: f64) -> Self {
        if snr_db > 20f64 {
            SnrQuality::Excellent
        } else if snr_db > 10f64 {
            SnrQuality::Good
        } else {
            SnrQuality::Poor
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Snr {
    pub signal_power: f64,
    pub noise_power: f64,
    pub ratio: f64,
    pub db: f64,
    pub quality: SnrQuality,
}

/// Compares a clean signal with its noisy copy.
///
/// Fails with [`Error::UndefinedSnr`] rather than returning NaN or infinity
/// when there are no samples or either power is zero.
pub fn measure_snr(clean: &[f64], noisy: &[f64]) -> Result<Snr> {
    if clean.len() != noisy.len() {
        return Err(Error::LengthMismatch {
            expected: clean.len(),
            actual: noisy.len(),
        });
    }
    if clean.is_empty() {
        return Err(Error::UndefinedSnr);
    }

    let noise: Vec<f64> = noisy.iter().zip(clean).map(|(n_i, c_i)| n_i - c_i).collect();
    let signal_power = avg_power(clean);
    let noise_power = avg_power(&noise);
    if signal_power == 0f64 || noise_power == 0f64 {
        return Err(Error::UndefinedSnr);
    }

    let ratio = signal_power / noise_power;
    let snr_db = db(ratio);
    Ok(Snr {
        signal_power,
        noise_power,
        ratio,
        db: snr_db,
        quality: SnrQuality::from_db(snr_db),
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timings {
    pub propagation_delay: Duration,
    pub transmission_time: Duration,
    pub total_delay: Duration,
}

fn seconds(name: &'static str, secs: f64) -> Result<Duration> {
    Duration::try_from_secs_f64(secs).map_err(|_| Error::InvalidParameter { name, value: secs })
}

/// How long `frame_bits` take to get onto the wire and across `distance` metres.
pub fn propagation_timings(
    distance: f64,
    bit_rate: f64,
    frame_bits: usize,
    propagation_speed: f64,
) -> Result<Timings> {
    let distance = non_negative("distance", distance)?;
    let bit_rate = positive("bit rate", bit_rate)?;
    let propagation_speed = positive("propagation speed", propagation_speed)?;

    let propagation_delay = seconds("distance", distance / propagation_speed)?;
    let transmission_time = seconds("frame size", frame_bits as f64 / bit_rate)?;
    Ok(Timings {
        propagation_delay,
        transmission_time,
        total_delay: propagation_delay + transmission_time,
    })
}
