//! Threshold slicing of a received waveform back into bits.
use tracing::trace;

use crate::{BitSequence, Result, iter::Iter, mean, waveform::check_samples_per_bit};

/// Midpoint between the NRZ levels.
pub const DEFAULT_THRESHOLD: f64 = 0f64;

/// One bit per window of `samples_per_bit` samples: 1 when the window mean is
/// strictly above `threshold`. A short trailing window still yields a bit.
///
/// This is line-code agnostic. It recovers NRZ-L directly; for the other codes
/// use [`crate::decode`].
pub fn recover_bits(samples: &[f64], samples_per_bit: usize, threshold: f64) -> Result<BitSequence> {
    let spb = check_samples_per_bit(samples_per_bit, false)?;
    let bits: BitSequence = samples
        .iter()
        .cloned()
        .chunks(spb)
        .map(|window| mean(&window) > threshold)
        .collect();
    trace!(samples = samples.len(), bits = bits.len(), threshold, "recovered");
    Ok(bits)
}
