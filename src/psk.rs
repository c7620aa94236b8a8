use std::f64::consts::PI;

use crate::{
    Bit,
    iter::Iter,
    modulation::carrier,
    waveform::sample_times,
};

/// Phase of the carrier for each bit: 0 for a 1, π for a 0.
#[inline]
pub fn bit_to_phase(bit: Bit) -> f64 {
    if bit { 0f64 } else { PI }
}

/// Binary PSK on a real carrier.
pub fn tx_bpsk_signal<I: Iterator<Item = Bit>>(
    message: I,
    carrier_freq: f64,
    samples_per_bit: usize,
) -> impl Iterator<Item = f64> {
    message
        .inflate(samples_per_bit)
        .zip(sample_times(samples_per_bit))
        .map(move |(bit, t)| carrier(carrier_freq, t, bit_to_phase(bit)))
}

/// Coherent detector: correlates each bit window against the zero-phase carrier.
pub fn rx_bpsk_signal<I: Iterator<Item = f64>>(
    signal: I,
    carrier_freq: f64,
    samples_per_bit: usize,
) -> impl Iterator<Item = Bit> {
    signal
        .zip(sample_times(samples_per_bit))
        .chunks(samples_per_bit)
        .map(move |window| {
            window
                .iter()
                .map(|&(s_i, t)| s_i * carrier(carrier_freq, t, 0f64))
                .sum::<f64>()
                >= 0f64
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random_bits;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn bpsk() {
        let data_bits = random_bits(2048, &mut StdRng::seed_from_u64(22));

        let bpsk_tx: Vec<f64> = tx_bpsk_signal(data_bits.iter().cloned(), 10f64, 100).collect();
        let bpsk_rx: Vec<Bit> = rx_bpsk_signal(bpsk_tx.iter().cloned(), 10f64, 100).collect();
        assert_eq!(data_bits, bpsk_rx);
    }

    #[test]
    fn zero_is_the_inverted_carrier() {
        let one: Vec<f64> = tx_bpsk_signal([true].into_iter(), 3f64, 20).collect();
        let zero: Vec<f64> = tx_bpsk_signal([false].into_iter(), 3f64, 20).collect();
        for (a, b) in one.iter().zip(zero.iter()) {
            assert!((a + b).abs() < 1e-9);
        }
    }
}
