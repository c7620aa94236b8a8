use crate::{
    Bit,
    iter::Iter,
    modulation::carrier,
    waveform::sample_times,
};

/// On-off keying: a 1 sends the carrier, a 0 sends nothing.
pub fn tx_ask_signal<I: Iterator<Item = Bit>>(
    message: I,
    carrier_freq: f64,
    samples_per_bit: usize,
) -> impl Iterator<Item = f64> {
    message
        .inflate(samples_per_bit)
        .zip(sample_times(samples_per_bit))
        .map(move |(bit, t)| if bit { carrier(carrier_freq, t, 0f64) } else { 0f64 })
}

/// Envelope detector: a bit window whose mean magnitude exceeds `threshold` is a 1.
///
/// This knows nothing about the carrier, so it only makes sense for ASK. FSK and
/// PSK have a constant envelope and come out as all 1s.
pub fn rx_ask_signal<I: Iterator<Item = f64>>(
    signal: I,
    samples_per_bit: usize,
    threshold: f64,
) -> impl Iterator<Item = Bit> {
    signal.chunks(samples_per_bit).map(move |window| {
        window.iter().map(|s_i| s_i.abs()).sum::<f64>() / window.len() as f64 > threshold
    })
}
