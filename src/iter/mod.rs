//! Sample-stream adaptors shared by the encoders, detectors and channel models.
mod chunks;
mod inflate;
mod scale;

pub use chunks::Chunks;
pub use inflate::Inflate;
pub use scale::Scale;

pub trait Iter: Iterator + Sized {
    /// Groups the stream into windows of `size` items. The final window may be short.
    fn chunks(self, size: usize) -> Chunks<Self::Item, Self>
    where
        Self::Item: Copy,
    {
        Chunks::new(self, size)
    }

    /// Repeats every item `factor` times, e.g. one level per sample of a bit.
    fn inflate(self, factor: usize) -> Inflate<Self::Item, Self>
    where
        Self::Item: Copy,
    {
        Inflate::new(self, factor)
    }

    /// Multiplies every item by a constant gain.
    fn scale(self, scalar: f64) -> Scale<Self::Item, Self>
    where
        Self::Item: std::ops::Mul<f64, Output = Self::Item>,
    {
        Scale::new(self, scalar)
    }
}

impl<I: Iterator> Iter for I {}
