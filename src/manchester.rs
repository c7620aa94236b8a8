//! Biphase line codes. Both guarantee a transition in the middle of every bit,
//! so `samples_per_bit` must be even for the halves to line up.
use crate::{Bit, iter::Iter, mean};

/// Splits a bit window into its two half-bit phases and averages each.
fn half_means(window: &[f64]) -> (f64, f64) {
    let (first, second) = window.split_at(window.len() / 2);
    (mean(first), mean(second))
}

/// Manchester: a 0 is high then low, a 1 is low then high.
pub fn tx_manchester_signal<I: Iterator<Item = Bit>>(
    message: I,
    samples_per_bit: usize,
) -> impl Iterator<Item = f64> {
    let half = samples_per_bit / 2;
    message.flat_map(move |bit| {
        let first = if bit { -1f64 } else { 1f64 };
        [first, -first].into_iter().inflate(half)
    })
}

/// A rising mid-bit transition is a 1.
pub fn rx_manchester_signal<I: Iterator<Item = f64>>(
    signal: I,
    samples_per_bit: usize,
) -> impl Iterator<Item = Bit> {
    signal.chunks(samples_per_bit).map(|window| {
        let (first, second) = half_means(&window);
        second > first
    })
}

/// Differential Manchester: the line starts high. A 0 flips the level at the
/// start of the bit, a 1 does not, and every bit flips again at its midpoint.
pub fn tx_diff_manchester_signal<I: Iterator<Item = Bit>>(
    message: I,
    samples_per_bit: usize,
) -> impl Iterator<Item = f64> {
    let half = samples_per_bit / 2;
    message
        .scan(1f64, |level, bit| {
            if !bit {
                *level = -*level;
            }
            let first = *level;
            *level = -*level;
            Some([first, *level])
        })
        .flat_map(move |halves| halves.into_iter().inflate(half))
}

/// A 1 is a bit whose first half continues the level the previous bit ended on.
pub fn rx_diff_manchester_signal<I: Iterator<Item = f64>>(
    signal: I,
    samples_per_bit: usize,
) -> impl Iterator<Item = Bit> {
    signal
        .chunks(samples_per_bit)
        .scan(true, |previous_high, window| {
            let (first, second) = half_means(&window);
            let bit = (first > 0f64) == *previous_high;
            *previous_high = second > 0f64;
            Some(bit)
        })
}
