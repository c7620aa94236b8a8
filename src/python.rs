use pyo3::{exceptions::PyValueError, prelude::*};
use rand::{SeedableRng, rngs::StdRng};

use crate::{
    Bit, Error, LineCode, ModulationParams, ModulationScheme, add_noise, attenuate, auto_convert,
    bits_from_hex, bits_from_text, compute_ber, demodulate, encode, modulate, multiplex_tdm,
    recover_bits,
};

impl From<Error> for PyErr {
    fn from(err: Error) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

#[pyfunction]
#[pyo3(name = "bits_from_text")]
fn bits_from_text_py(s: &str) -> Vec<Bit> {
    bits_from_text(s).into_bits()
}

#[pyfunction]
#[pyo3(name = "bits_from_hex")]
fn bits_from_hex_py(s: &str) -> Vec<Bit> {
    bits_from_hex(s).into_bits()
}

#[pyfunction]
#[pyo3(name = "auto_convert")]
fn auto_convert_py(s: &str) -> Vec<Bit> {
    auto_convert(s).into_bits()
}

/// Returns `(samples, time_axis)`.
#[pyfunction]
#[pyo3(name = "encode", signature = (bits, samples_per_bit, line_code="NRZ-L"))]
fn encode_py(bits: Vec<Bit>, samples_per_bit: usize, line_code: &str) -> PyResult<(Vec<f64>, Vec<f64>)> {
    let line_code: LineCode = line_code.parse()?;
    let w = encode(&bits, samples_per_bit, line_code)?;
    Ok((w.samples().to_vec(), w.time_axis().to_vec()))
}

/// Returns `(samples, time_axis)`.
#[pyfunction]
#[pyo3(
    name = "modulate",
    signature = (bits, scheme, carrier_freq=10f64, freq0=5f64, freq1=15f64, samples_per_bit=100)
)]
fn modulate_py(
    bits: Vec<Bit>,
    scheme: &str,
    carrier_freq: f64,
    freq0: f64,
    freq1: f64,
    samples_per_bit: usize,
) -> PyResult<(Vec<f64>, Vec<f64>)> {
    let scheme: ModulationScheme = scheme.parse()?;
    let params = ModulationParams {
        carrier_freq,
        freq0,
        freq1,
        samples_per_bit,
    };
    let w = modulate(&bits, scheme, &params)?;
    Ok((w.samples().to_vec(), w.time_axis().to_vec()))
}

#[pyfunction]
#[pyo3(name = "demodulate", signature = (samples, samples_per_bit=100, threshold=0.1))]
fn demodulate_py(samples: Vec<f64>, samples_per_bit: usize, threshold: f64) -> PyResult<Vec<Bit>> {
    Ok(demodulate(&samples, samples_per_bit, threshold)?.into_bits())
}

#[pyfunction]
#[pyo3(name = "add_noise", signature = (samples, level, seed=None))]
fn add_noise_py(samples: Vec<f64>, level: f64, seed: Option<u64>) -> PyResult<Vec<f64>> {
    let noisy = match seed {
        Some(seed) => add_noise(&samples, level, &mut StdRng::seed_from_u64(seed))?,
        None => add_noise(&samples, level, &mut rand::rng())?,
    };
    Ok(noisy)
}

/// Returns `(samples, factor, db, strength_percent)`.
#[pyfunction]
#[pyo3(name = "attenuate", signature = (samples, distance, attenuation_factor=0.001))]
fn attenuate_py(
    samples: Vec<f64>,
    distance: f64,
    attenuation_factor: f64,
) -> PyResult<(Vec<f64>, f64, f64, f64)> {
    let a = attenuate(&samples, distance, attenuation_factor)?;
    Ok((a.samples, a.factor, a.db, a.strength_percent))
}

#[pyfunction]
#[pyo3(name = "recover_bits", signature = (samples, samples_per_bit, threshold=0f64))]
fn recover_bits_py(samples: Vec<f64>, samples_per_bit: usize, threshold: f64) -> PyResult<Vec<Bit>> {
    Ok(recover_bits(&samples, samples_per_bit, threshold)?.into_bits())
}

/// Returns `(total_bits, error_bits, ber, quality)`.
#[pyfunction]
#[pyo3(name = "compute_ber")]
fn compute_ber_py(original: Vec<Bit>, received: Vec<Bit>) -> PyResult<(usize, usize, f64, String)> {
    let r = compute_ber(&original, &received)?;
    Ok((r.total_bits, r.error_bits, r.ber, r.quality.to_string()))
}

/// Returns `(bits, labels, total_frames)`.
#[pyfunction]
#[pyo3(name = "multiplex_tdm")]
fn multiplex_tdm_py(streams: Vec<Vec<Bit>>, time_slots: usize) -> PyResult<(Vec<Bit>, Vec<String>, usize)> {
    let frame = multiplex_tdm(&streams, time_slots)?;
    Ok((
        frame.bits().to_vec(),
        frame.labels().iter().map(ToString::to_string).collect(),
        frame.total_frames(),
    ))
}

#[pymodule]
#[pyo3(name = "physlayer")]
fn module_with_functions(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(bits_from_text_py, m)?)?;
    m.add_function(wrap_pyfunction!(bits_from_hex_py, m)?)?;
    m.add_function(wrap_pyfunction!(auto_convert_py, m)?)?;
    m.add_function(wrap_pyfunction!(encode_py, m)?)?;
    m.add_function(wrap_pyfunction!(modulate_py, m)?)?;
    m.add_function(wrap_pyfunction!(demodulate_py, m)?)?;
    m.add_function(wrap_pyfunction!(add_noise_py, m)?)?;
    m.add_function(wrap_pyfunction!(attenuate_py, m)?)?;
    m.add_function(wrap_pyfunction!(recover_bits_py, m)?)?;
    m.add_function(wrap_pyfunction!(compute_ber_py, m)?)?;
    m.add_function(wrap_pyfunction!(multiplex_tdm_py, m)?)?;
    Ok(())
}
