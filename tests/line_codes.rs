use physlayer::{LineCode, bits_from_text, decode, encode, mean};
use rstest::rstest;

#[macro_use]
mod util;

use util::sample_messages;

#[test]
fn nrzl_levels() {
    for message in sample_messages() {
        let w = encode(&message, 1, LineCode::NrzL).unwrap();
        for (&bit, &s_i) in message.iter().zip(w.samples()) {
            assert_eq!(s_i, if bit { 1f64 } else { -1f64 });
        }
    }
}

#[test]
fn nrzi_noiseless_round_trip() {
    for message in sample_messages() {
        let w = encode(&message, 8, LineCode::NrzI).unwrap();
        let rx = decode(w.samples(), 8, LineCode::NrzI).unwrap();
        assert_eq!(rx.bits(), &message[..]);
    }
}

#[rstest]
#[case(LineCode::Manchester)]
#[case(LineCode::DiffManchester)]
fn biphase_bits_are_balanced(#[case] line_code: LineCode) {
    for message in sample_messages() {
        let w = encode(&message, 10, line_code).unwrap();
        for k in 0..message.len() {
            let window = w.bit_window(k).unwrap();
            assert_eq!(mean(window), 0f64);
        }
    }
}

/// Signs of the nonzero bit levels, one per mark.
fn mark_signs(samples: &[f64]) -> Vec<f64> {
    samples
        .iter()
        .filter(|s_i| **s_i != 0f64)
        .map(|s_i| s_i.signum())
        .collect()
}

#[rstest]
#[case(LineCode::Ami, true)]
#[case(LineCode::Pseudoternary, false)]
fn marks_alternate(#[case] line_code: LineCode, #[case] mark: bool) {
    for message in sample_messages() {
        let w = encode(&message, 1, line_code).unwrap();
        for (&bit, &s_i) in message.iter().zip(w.samples()) {
            if bit != mark {
                assert_eq!(s_i, 0f64);
            }
        }

        let signs = mark_signs(w.samples());
        assert_eq!(signs.len(), message.iter().filter(|&&bit| bit == mark).count());
        for (i, sign) in signs.iter().enumerate() {
            assert_eq!(*sign, if i % 2 == 0 { 1f64 } else { -1f64 });
        }
    }
}

#[test]
fn letter_a() {
    let bits = bits_from_text("A");
    assert_eq!(bits.to_string(), "01000001");
    let w = encode(&bits, 1, LineCode::NrzL).unwrap();
    assert_eq!(w.samples(), [-1f64, 1f64, -1f64, -1f64, -1f64, -1f64, -1f64, 1f64]);
}

#[rstest]
#[case(LineCode::NrzL)]
#[case(LineCode::NrzI)]
#[case(LineCode::Manchester)]
#[case(LineCode::DiffManchester)]
#[case(LineCode::Ami)]
#[case(LineCode::Pseudoternary)]
fn every_code_round_trips(#[case] line_code: LineCode) {
    for message in sample_messages() {
        let w = encode(&message, 4, line_code).unwrap();
        assert_eq!(w.len(), message.len() * 4);
        let rx = decode(w.samples(), 4, line_code).unwrap();
        assert_eq!(rx.bits(), &message[..]);
    }
}

#[test]
fn encoders_start_fresh_every_call() {
    let message = util::random_data(64, 5);
    for line_code in LineCode::ALL {
        let first = encode(&message, 2, line_code).unwrap();
        let second = encode(&message, 2, line_code).unwrap();
        assert_eq!(first, second, "{line_code}");
    }
}
