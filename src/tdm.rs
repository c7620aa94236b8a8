//! Synchronous time-division multiplexing of several bit streams.
//!
//! Each frame carries one bit per slot. Slot `k` always belongs to stream `k`;
//! once a stream runs out its slot is padded with an `Empty` 0.
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::{Bit, BitSequence, Error, Result};

/// Who owns a bit in a multiplexed frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlotLabel {
    /// 1-based stream number.
    Stream(usize),
    Empty,
}

impl fmt::Display for SlotLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlotLabel::Stream(n) => write!(f, "Stream {n}"),
            SlotLabel::Empty => f.write_str("Empty"),
        }
    }
}

/// Invariant: `bits.len() == labels.len() == time_slots * total_frames`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TdmFrameParts")]
pub struct TdmFrame {
    bits: Vec<Bit>,
    labels: Vec<SlotLabel>,
    time_slots: usize,
    total_frames: usize,
}

impl TdmFrame {
    pub fn bits(&self) -> &[Bit] {
        &self.bits
    }

    pub fn labels(&self) -> &[SlotLabel] {
        &self.labels
    }

    pub fn time_slots(&self) -> usize {
        self.time_slots
    }

    /// Bits per frame, one per slot.
    pub fn frame_length(&self) -> usize {
        self.time_slots
    }

    pub fn total_frames(&self) -> usize {
        self.total_frames
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }
}

/// Unchecked wire form of a [`TdmFrame`].
#[derive(Deserialize)]
struct TdmFrameParts {
    bits: Vec<Bit>,
    labels: Vec<SlotLabel>,
    time_slots: usize,
    total_frames: usize,
}

impl TryFrom<TdmFrameParts> for TdmFrame {
    type Error = Error;

    fn try_from(parts: TdmFrameParts) -> Result<Self> {
        if parts.time_slots == 0 {
            return Err(Error::InvalidParameter {
                name: "time slots",
                value: 0f64,
            });
        }
        let expected = parts.time_slots.saturating_mul(parts.total_frames);
        for actual in [parts.bits.len(), parts.labels.len()] {
            if actual != expected {
                return Err(Error::LengthMismatch { expected, actual });
            }
        }
        // Slot k of every frame belongs to stream k + 1, or is padding.
        for (i, label) in parts.labels.iter().enumerate() {
            if let SlotLabel::Stream(n) = *label {
                if n != i % parts.time_slots + 1 {
                    return Err(Error::InvalidParameter {
                        name: "slot label",
                        value: n as f64,
                    });
                }
            }
        }
        Ok(Self {
            bits: parts.bits,
            labels: parts.labels,
            time_slots: parts.time_slots,
            total_frames: parts.total_frames,
        })
    }
}

/// Interleaves `streams` bit by bit into `time_slots` fixed slots.
///
/// Streams past `time_slots` are not transmitted.
pub fn multiplex_tdm<S: AsRef<[Bit]>>(streams: &[S], time_slots: usize) -> Result<TdmFrame> {
    if time_slots == 0 {
        return Err(Error::InvalidParameter {
            name: "time slots",
            value: 0f64,
        });
    }

    let total_frames = streams
        .iter()
        .map(|stream| stream.as_ref().len())
        .max()
        .unwrap_or(0);

    let (bits, labels): (Vec<Bit>, Vec<SlotLabel>) = (0..total_frames)
        .flat_map(|i| (0..time_slots).map(move |slot| (i, slot)))
        .map(|(i, slot)| {
            match streams.get(slot).and_then(|stream| stream.as_ref().get(i)) {
                Some(&bit) => (bit, SlotLabel::Stream(slot + 1)),
                None => (false, SlotLabel::Empty),
            }
        })
        .unzip();
    trace!(streams = streams.len(), time_slots, total_frames, "multiplexed");

    Ok(TdmFrame {
        bits,
        labels,
        time_slots,
        total_frames,
    })
}

/// Splits a frame back into one sequence per slot, dropping `Empty` padding.
pub fn demultiplex_tdm(frame: &TdmFrame) -> Vec<BitSequence> {
    let mut streams = vec![Vec::new(); frame.time_slots];
    for (&bit, label) in frame.bits.iter().zip(&frame.labels) {
        if let SlotLabel::Stream(n) = *label {
            if let Some(stream) = n.checked_sub(1).and_then(|slot| streams.get_mut(slot)) {
                stream.push(bit);
            }
        }
    }
    streams.into_iter().map(BitSequence::from).collect()
}
