//! Bipolar (three level) line codes.
use crate::{Bit, iter::Iter, mean};

/// Bits equal to `mark` take the current polarity, which then flips.
/// Everything else sits at 0 V. Polarity starts at +1 on every call.
fn alternate_marks<I: Iterator<Item = Bit>>(message: I, mark: Bit) -> impl Iterator<Item = f64> {
    message.scan(1f64, move |polarity, bit| {
        if bit == mark {
            let level = *polarity;
            *polarity = -*polarity;
            Some(level)
        } else {
            Some(0f64)
        }
    })
}

/// Alternate mark inversion: 1s alternate between +1 V and -1 V, 0s are 0 V.
pub fn tx_ami_signal<I: Iterator<Item = Bit>>(
    message: I,
    samples_per_bit: usize,
) -> impl Iterator<Item = f64> {
    alternate_marks(message, true).inflate(samples_per_bit)
}

/// A bit window whose magnitude clears `mark_threshold` is a 1.
pub fn rx_ami_signal<I: Iterator<Item = f64>>(
    signal: I,
    samples_per_bit: usize,
    mark_threshold: f64,
) -> impl Iterator<Item = Bit> {
    signal
        .chunks(samples_per_bit)
        .map(move |window| mean(&window).abs() > mark_threshold)
}

/// Pseudoternary: AMI with the roles swapped, 0s alternate and 1s are 0 V.
pub fn tx_pseudoternary_signal<I: Iterator<Item = Bit>>(
    message: I,
    samples_per_bit: usize,
) -> impl Iterator<Item = f64> {
    alternate_marks(message, false).inflate(samples_per_bit)
}

pub fn rx_pseudoternary_signal<I: Iterator<Item = f64>>(
    signal: I,
    samples_per_bit: usize,
    mark_threshold: f64,
) -> impl Iterator<Item = Bit> {
    rx_ami_signal(signal, samples_per_bit, mark_threshold).map(|mark| !mark)
}
