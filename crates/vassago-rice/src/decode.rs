//! Golomb-Rice decode engine.
//!
//! Two strategies are evaluated as independent pure functions and combined
//! by a single selection rule: if the fast-path table recognises the leading
//! window bits the table entry wins, otherwise the general path's result is
//! used. Wherever both apply they agree bit-for-bit, so the selection never
//! changes the observable output.
//!
//! The engine is stateless. Callers supply the parameter and a fresh
//! [`BitWindow`] per code and advance their stream position by the returned
//! bit count.

use crate::table::{self, FAST_BITS};
use vassago_core::{BitWindow, CodeParam, Decoded, QUOTIENT_FIELD_BITS};

/// Decode the next code from the window.
///
/// Pure and infallible: a well-formed stream plus a supported parameter
/// always yields a result, because every window either contains a
/// terminating `0` within the quotient field or decodes as the saturated
/// maximum-length code.
#[inline]
pub fn decode(param: CodeParam, window: BitWindow) -> Decoded {
    match decode_fast(param, window) {
        Some(hit) => {
            debug_assert_eq!(hit, decode_slow(param, window));
            hit
        }
        None => decode_slow(param, window),
    }
}

/// Fast path: direct lookup on the leading [`FAST_BITS`] window bits.
///
/// Returns `None` when the code is longer than the peek width or the
/// parameter has no table.
#[inline]
pub fn decode_fast(param: CodeParam, window: BitWindow) -> Option<Decoded> {
    table::lookup(param, window.leading(FAST_BITS)).map(|entry| Decoded {
        value: entry.value as u32,
        bits: entry.bits,
    })
}

/// Slow path: general unary-quotient decode.
///
/// The quotient is the position of the first `0` within the
/// [`QUOTIENT_FIELD_BITS`]-wide field, found with a priority-encoder style
/// `leading_zeros` on the inverted field. An all-ones field saturates: the
/// quotient becomes the full field width and no terminator bit is consumed.
pub fn decode_slow(param: CodeParam, window: BitWindow) -> Decoded {
    let k = param.k();
    let field = window.leading(QUOTIENT_FIELD_BITS);
    let inverted = !field & ((1 << QUOTIENT_FIELD_BITS) - 1);

    let (q, unary_bits) = if inverted == 0 {
        // Saturated: all ones, no terminating zero inside the field.
        (QUOTIENT_FIELD_BITS, QUOTIENT_FIELD_BITS)
    } else {
        // First zero of the field is the first one of the inverted field.
        let first_zero = inverted.leading_zeros() - (32 - QUOTIENT_FIELD_BITS);
        (first_zero, first_zero + 1)
    };

    let r = window.field(unary_bits, k);
    Decoded {
        value: (q << k) + r,
        bits: (unary_bits + k) as u8,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vassago_core::WINDOW_BITS;

    fn window(s: &str) -> BitWindow {
        BitWindow::from_bit_str(s).unwrap()
    }

    #[test]
    fn test_reference_vectors() {
        // k=2, "0110..." -> q=0, r=3.
        assert_eq!(
            decode(CodeParam::K2, window("0110000")),
            Decoded { value: 3, bits: 3 }
        );
        // k=2, "1010..." -> q=1, r=2.
        assert_eq!(
            decode(CodeParam::K2, window("1010000")),
            Decoded { value: 6, bits: 4 }
        );
        // k=3, "1110110..." -> q=3, r=6.
        assert_eq!(
            decode(CodeParam::K3, window("1110110")),
            Decoded { value: 30, bits: 7 }
        );
    }

    #[test]
    fn test_worst_case_maximum_length_code() {
        // k=1, 15 ones then a terminator and a zero remainder: the longest
        // non-saturated code.
        let w = window("111111111111111 0 0");
        assert_eq!(decode(CodeParam::K1, w), Decoded { value: 30, bits: 17 });
    }

    #[test]
    fn test_saturated_quotient_consumes_no_terminator() {
        // All ones across the quotient field: q saturates to the field width
        // and bits = field + k, with no +1.
        let w = window("1111111111111111 101");
        let got = decode(CodeParam::K3, w);
        assert_eq!(got.value, (QUOTIENT_FIELD_BITS << 3) + 0b101);
        assert_eq!(got.bits as u32, QUOTIENT_FIELD_BITS + 3);

        let w1 = window("1111111111111111 1");
        assert_eq!(
            decode(CodeParam::K1, w1),
            Decoded { value: (QUOTIENT_FIELD_BITS << 1) + 1, bits: 17 }
        );
    }

    #[test]
    fn test_fast_and_slow_paths_agree_everywhere() {
        // Exhaustive over the leading byte; the tail never matters for codes
        // the fast path can see.
        for param in CodeParam::ALL {
            for prefix in 0u32..256 {
                let w = BitWindow::new(prefix << (WINDOW_BITS - 8));
                if let Some(fast) = decode_fast(param, w) {
                    assert_eq!(fast, decode_slow(param, w), "k={} prefix={prefix:08b}", param.k());
                }
            }
        }
    }

    #[test]
    fn test_k3_always_takes_slow_path() {
        for prefix in 0u32..16 {
            let w = BitWindow::new(prefix << (WINDOW_BITS - 4));
            assert!(decode_fast(CodeParam::K3, w).is_none());
        }
    }

    #[test]
    fn test_quotient_positions_all_k() {
        // One code per quotient value, zero remainder: value = q << k.
        for param in CodeParam::ALL {
            let k = param.k();
            for q in 0..QUOTIENT_FIELD_BITS {
                let ones: String = std::iter::repeat('1').take(q as usize).collect();
                let s = format!("{ones}0{}", "0".repeat(k as usize));
                let got = decode(param, window(&s));
                assert_eq!(got.value, q << k, "k={k} q={q}");
                assert_eq!(got.bits as u32, q + 1 + k, "k={k} q={q}");
            }
        }
    }
}
