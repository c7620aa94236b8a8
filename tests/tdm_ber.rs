use physlayer::{
    Bit, BitSequence, Quality, SlotLabel, auto_convert,
    channel::{DEFAULT_PROPAGATION_SPEED, propagation_timings},
    compute_ber, demultiplex_tdm, multiplex_tdm,
};

#[macro_use]
mod util;

use util::{random_data, sample_messages};

#[test]
fn ber_identity_and_complement() {
    for message in sample_messages() {
        let same = compute_ber(&message, &message).unwrap();
        assert_eq!(same.error_bits, 0);
        assert_eq!(same.ber, 0f64);
        assert_eq!(same.quality, Quality::Excellent);

        if message.is_empty() {
            continue;
        }
        let flipped = BitSequence::from(message.clone()).complement();
        let r = compute_ber(&message, &flipped).unwrap();
        assert_eq!(r.ber, 1f64);
        assert_eq!(error!(message, flipped.bits()), 1f64);
    }
}

#[test]
fn two_stream_scenario() {
    let streams: Vec<BitSequence> = ["101", "01"]
        .iter()
        .map(|s| s.parse().unwrap())
        .collect();
    let frame = multiplex_tdm(&streams, 2).unwrap();
    assert_eq!(frame.bits(), [true, false, false, true, true, false]);
    assert_eq!(frame.labels()[5], SlotLabel::Empty);
    assert_eq!(frame.total_frames(), 3);

    let back = demultiplex_tdm(&frame);
    assert_eq!(back, streams);
}

#[test]
fn single_slot_identity() {
    for message in sample_messages() {
        let frame = multiplex_tdm(&[message.clone()], 1).unwrap();
        assert_eq!(frame.bits(), &message[..]);
        assert_eq!(frame.total_frames(), message.len());
    }
}

#[test]
fn frame_length_invariant() {
    let streams: Vec<Vec<Bit>> = (0..5).map(|i| random_data(3 * i + 1, i as u64)).collect();
    for time_slots in 1..7 {
        let frame = multiplex_tdm(&streams, time_slots).unwrap();
        assert_eq!(frame.len(), time_slots * frame.total_frames());
        assert_eq!(frame.labels().len(), frame.len());
    }
}

#[test]
fn converted_inputs_multiplex() {
    let streams = [auto_convert("Hi"), auto_convert("F0"), auto_convert("1 0 1")];
    let frame = multiplex_tdm(&streams, 3).unwrap();
    assert_eq!(frame.total_frames(), 16);
    let back = demultiplex_tdm(&frame);
    assert_eq!(back[0].bits(), streams[0].bits());
    assert_eq!(back[2].to_string(), "101");
}

#[test]
fn a_frame_takes_longer_to_send_than_to_cross_a_room() {
    let t = propagation_timings(10f64, 1_000_000f64, 1500 * 8, DEFAULT_PROPAGATION_SPEED).unwrap();
    assert!(t.propagation_delay < t.transmission_time);
    assert_eq!(t.total_delay, t.propagation_delay + t.transmission_time);
}
