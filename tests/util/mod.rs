#![allow(dead_code, unused_macros)]
use physlayer::{Bit, random_bits};
use rand::{SeedableRng, rngs::StdRng};

/// Fraction of positions where two bit sequences disagree.
macro_rules! error {
    ($thing1:expr, $thing2:expr) => {
        $thing1
            .iter()
            .cloned()
            .zip($thing2.iter().cloned())
            .map(|(t1, t2)| if t1 == t2 { 0f64 } else { 1f64 })
            .sum::<f64>()
            / $thing1.len() as f64
    };
}

pub fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

pub fn random_data(num_bits: usize, seed: u64) -> Vec<Bit> {
    random_bits(num_bits, &mut rng(seed))
}

/// A spread of lengths, including the empty and single-bit cases.
pub fn sample_messages() -> Vec<Vec<Bit>> {
    [0usize, 1, 2, 7, 8, 33, 256]
        .into_iter()
        .zip(100u64..)
        .map(|(len, seed)| random_data(len, seed))
        .chain([vec![true; 16], vec![false; 16]])
        .collect()
}
