//! Non-return-to-zero line codes.
use crate::{Bit, bit_to_nrz, iter::Iter, mean};

/// NRZ-L: a 1 is held at +1 V, a 0 at -1 V, for the whole bit.
pub fn tx_nrzl_signal<I: Iterator<Item = Bit>>(
    message: I,
    samples_per_bit: usize,
) -> impl Iterator<Item = f64> {
    message.map(bit_to_nrz).inflate(samples_per_bit)
}

pub fn rx_nrzl_signal<I: Iterator<Item = f64>>(
    signal: I,
    samples_per_bit: usize,
) -> impl Iterator<Item = Bit> {
    signal
        .chunks(samples_per_bit)
        .map(|window| mean(&window) > 0f64)
}

/// NRZ-I: the line starts high and every 1 inverts it before the bit is sent.
pub fn tx_nrzi_signal<I: Iterator<Item = Bit>>(
    message: I,
    samples_per_bit: usize,
) -> impl Iterator<Item = f64> {
    message
        .scan(1f64, |level, bit| {
            if bit {
                *level = -*level;
            }
            Some(*level)
        })
        .inflate(samples_per_bit)
}

/// A 1 is any change of level from the previous bit (or from the initial high).
pub fn rx_nrzi_signal<I: Iterator<Item = f64>>(
    signal: I,
    samples_per_bit: usize,
) -> impl Iterator<Item = Bit> {
    signal
        .chunks(samples_per_bit)
        .map(|window| mean(&window) > 0f64)
        .scan(true, |previous, high| {
            let bit = high != *previous;
            *previous = high;
            Some(bit)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random_bits;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn nrzl_levels() {
        let data = [false, true, false, false, false, false, false, true];
        let tx: Vec<f64> = tx_nrzl_signal(data.iter().cloned(), 1).collect();
        assert_eq!(tx, [-1f64, 1f64, -1f64, -1f64, -1f64, -1f64, -1f64, 1f64]);
    }

    #[test]
    fn nrzi_levels() {
        let data = [true, false, true, true, false];
        let tx: Vec<f64> = tx_nrzi_signal(data.iter().cloned(), 2).collect();
        assert_eq!(
            tx,
            [-1f64, -1f64, -1f64, -1f64, 1f64, 1f64, -1f64, -1f64, -1f64, -1f64]
        );
    }

    #[test]
    fn nrzi_starts_high() {
        let tx: Vec<f64> = tx_nrzi_signal([false, false].into_iter(), 3).collect();
        assert_eq!(tx, [1f64; 6]);
    }

    #[test]
    fn nrzl() {
        let data_bits = random_bits(9001, &mut StdRng::seed_from_u64(1));
        let tx: Vec<f64> = tx_nrzl_signal(data_bits.iter().cloned(), 10).collect();
        let rx: Vec<Bit> = rx_nrzl_signal(tx.iter().cloned(), 10).collect();
        assert_eq!(tx.len(), data_bits.len() * 10);
        assert_eq!(data_bits, rx);
    }

    #[test]
    fn nrzi() {
        let data_bits = random_bits(9001, &mut StdRng::seed_from_u64(2));
        let tx: Vec<f64> = tx_nrzi_signal(data_bits.iter().cloned(), 10).collect();
        let rx: Vec<Bit> = rx_nrzi_signal(tx.iter().cloned(), 10).collect();
        assert_eq!(data_bits, rx);
    }
}
