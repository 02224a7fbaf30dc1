//! Property-based tests for the Rice decode core.
//!
//! These verify the load-bearing invariants across randomized inputs:
//! - encode/decode round-trip preserves value and exact bit count
//! - the fast path never disagrees with the general path
//! - stream round-trips survive arbitrary delta sequences
//! - the hold buffer matches a reference model under random traffic
//!
//! Run with: cargo test --test proptest_roundtrip

use proptest::prelude::*;
use std::collections::HashMap;

use vassago_core::{BitWindow, CodeParam, Decoded, QUOTIENT_FIELD_BITS, WINDOW_BITS};
use vassago_rice::{
    decode, decode_fast, decode_slow, encode, unzigzag, zigzag, DeltaStreamDecoder,
    DeltaStreamEncoder, HoldBuffer,
};

/// Strategy over the supported code parameters.
fn param_strategy() -> impl Strategy<Value = CodeParam> {
    prop_oneof![Just(CodeParam::K1), Just(CodeParam::K2), Just(CodeParam::K3)]
}

/// Strategy over raw window contents.
fn window_strategy() -> impl Strategy<Value = BitWindow> {
    (0u32..(1 << WINDOW_BITS)).prop_map(BitWindow::new)
}

/// Deltas that stay encodable for every supported parameter.
fn delta_strategy() -> impl Strategy<Value = i32> {
    -16i32..=16
}

/// One step of hold-buffer traffic.
#[derive(Debug, Clone)]
enum BufOp {
    Insert(u32),
    Read(u32),
    Query(u32),
}

fn buf_op_strategy() -> impl Strategy<Value = BufOp> {
    prop_oneof![
        (0u32..8).prop_map(BufOp::Insert),
        (0u32..8).prop_map(BufOp::Read),
        (0u32..8).prop_map(BufOp::Query),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    })]

    /// Property: every encodable (param, value) pair round-trips through a
    /// window with the exact code length.
    #[test]
    fn prop_code_roundtrip(
        param in param_strategy(),
        raw in 0u32..((QUOTIENT_FIELD_BITS << 3) | 0b111) + 1,
    ) {
        let value = raw.min(param.max_value());
        let code = encode(param, value).unwrap();
        let window = BitWindow::with_leading(code.bits, code.len as u32).unwrap();
        prop_assert_eq!(
            decode(param, window),
            Decoded { value, bits: code.len }
        );
    }

    /// Property: wherever the fast path matches, the slow path produces an
    /// identical result, for completely arbitrary window contents.
    #[test]
    fn prop_path_equivalence(param in param_strategy(), window in window_strategy()) {
        if let Some(fast) = decode_fast(param, window) {
            prop_assert_eq!(fast, decode_slow(param, window));
        }
    }

    /// Property: decoding any window yields a self-consistent result that
    /// re-encodes to the same bit count.
    #[test]
    fn prop_decode_is_self_consistent(param in param_strategy(), window in window_strategy()) {
        let got = decode(param, window);
        let code = encode(param, got.value).unwrap();
        prop_assert_eq!(code.len, got.bits);
        // The code bits must match the window's leading bits.
        prop_assert_eq!(window.leading(code.len as u32), code.bits);
    }

    /// Property: arbitrary delta sequences survive the full
    /// encode -> bytes -> stream-decode round-trip.
    #[test]
    fn prop_stream_roundtrip(
        param in param_strategy(),
        deltas in prop::collection::vec(delta_strategy(), 0..64),
    ) {
        let mut enc = DeltaStreamEncoder::new(param);
        for &d in &deltas {
            enc.push_delta(d).unwrap();
        }
        let bit_len = enc.bit_len();
        let bytes = enc.finish();

        let mut dec = DeltaStreamDecoder::with_bit_len(param, &bytes, bit_len).unwrap();
        prop_assert_eq!(dec.decode_all().unwrap(), deltas);
        prop_assert_eq!(dec.stats().bits_consumed as usize, bit_len);
    }

    /// Property: zigzag is a bijection on the tested range.
    #[test]
    fn prop_zigzag_bijection(delta in -1000i32..=1000) {
        prop_assert_eq!(unzigzag(zigzag(delta)), delta);
    }

    /// Property: the hold buffer behaves exactly like a capacity-bounded
    /// map under random insert/read/query traffic.
    #[test]
    fn prop_holdbuf_matches_model(ops in prop::collection::vec(buf_op_strategy(), 0..128)) {
        let capacity = 4;
        let mut buf: HoldBuffer<u32> = HoldBuffer::new(capacity);
        let mut model: HashMap<u32, u32> = HashMap::new();

        for (step, op) in ops.into_iter().enumerate() {
            match op {
                BufOp::Insert(tag) => {
                    // Duplicate live tags are outside the caller contract.
                    if model.contains_key(&tag) {
                        continue;
                    }
                    let payload = step as u32;
                    let accepted = buf.try_insert(tag, payload);
                    prop_assert_eq!(accepted, model.len() < capacity);
                    if accepted {
                        model.insert(tag, payload);
                    }
                }
                BufOp::Read(tag) => {
                    prop_assert_eq!(buf.try_read(tag), model.remove(&tag));
                }
                BufOp::Query(tag) => {
                    prop_assert_eq!(buf.query(tag), model.contains_key(&tag));
                }
            }
            prop_assert_eq!(buf.len(), model.len());
        }
    }
}

/// Randomized mixed-parameter soak: many independent streams, each decoded
/// back exactly.
#[test]
fn test_randomized_streams() {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    let mut rng = StdRng::seed_from_u64(0x5a55a50);
    for _ in 0..200 {
        let param = CodeParam::ALL[rng.gen_range(0..3)];
        let len = rng.gen_range(0..40);
        let deltas: Vec<i32> = (0..len).map(|_| rng.gen_range(-16..=16)).collect();

        let mut enc = DeltaStreamEncoder::new(param);
        for &d in &deltas {
            enc.push_delta(d).unwrap();
        }
        let bit_len = enc.bit_len();
        let bytes = enc.finish();

        let mut dec = DeltaStreamDecoder::with_bit_len(param, &bytes, bit_len).unwrap();
        assert_eq!(dec.decode_all().unwrap(), deltas);
    }
}

/// End-to-end: producer decodes and parks slow-path results by position,
/// consumer drains them out of order.
#[test]
fn test_decode_into_hold_buffer_out_of_order() {
    let deltas = [-9, 1, 12, 0];
    let mut enc = DeltaStreamEncoder::new(CodeParam::K1);
    for &d in &deltas {
        enc.push_delta(d).unwrap();
    }
    let bit_len = enc.bit_len();
    let bytes = enc.finish();

    let mut dec = DeltaStreamDecoder::with_bit_len(CodeParam::K1, &bytes, bit_len).unwrap();
    let mut held: HoldBuffer<i32> = HoldBuffer::new(4);
    let mut tag = 0u32;
    while let Some(delta) = dec.next_delta().unwrap() {
        assert!(held.try_insert(tag, delta));
        tag += 1;
    }

    // Consumer asks for positions in reverse arrival order.
    for tag in (0..deltas.len() as u32).rev() {
        assert!(held.query(tag));
        assert_eq!(held.try_read(tag), Some(deltas[tag as usize]));
    }
    assert!(held.is_empty());
}
