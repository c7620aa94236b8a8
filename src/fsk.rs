use std::f64::consts::PI;

use crate::{
    Bit,
    iter::Iter,
    modulation::carrier,
    waveform::sample_times,
};

/// Binary FSK: a 1 is a tone at `freq1`, a 0 a tone at `freq0`.
///
/// Both tones run off the same clock, so phase is not forced to be
/// continuous where the frequency switches.
pub fn tx_bfsk_signal<I: Iterator<Item = Bit>>(
    message: I,
    freq0: f64,
    freq1: f64,
    samples_per_bit: usize,
) -> impl Iterator<Item = f64> {
    message
        .inflate(samples_per_bit)
        .zip(sample_times(samples_per_bit))
        .map(move |(bit, t)| carrier(if bit { freq1 } else { freq0 }, t, 0f64))
}

/// Energy of one bit window at `freq`, ignoring phase.
fn tone_energy(window: &[(f64, f64)], freq: f64) -> f64 {
    let (i, q) = window.iter().fold((0f64, 0f64), |(i, q), &(s_i, t)| {
        let arg = 2f64 * PI * freq * t;
        (i + s_i * arg.cos(), q + s_i * arg.sin())
    });
    i.powi(2) + q.powi(2)
}

/// Non-coherent detector: picks whichever tone holds more energy in the bit.
pub fn rx_bfsk_signal<I: Iterator<Item = f64>>(
    signal: I,
    freq0: f64,
    freq1: f64,
    samples_per_bit: usize,
) -> impl Iterator<Item = Bit> {
    signal
        .zip(sample_times(samples_per_bit))
        .chunks(samples_per_bit)
        .map(move |window| tone_energy(&window, freq1) > tone_energy(&window, freq0))
}
