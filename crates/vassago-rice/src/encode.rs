//! Golomb-Rice encoder and signed-delta mapping.
//!
//! The decode engine's round-trip contract needs an exact encoder: every
//! `(value, k)` pair must produce the code whose decode returns the same
//! value and the same bit count. The saturated form mirrors the decoder's
//! saturation rule and carries no terminator bit.

use vassago_core::{CodeParam, Error, Result, QUOTIENT_FIELD_BITS};

/// An encoded code: the bits, right-aligned, plus the code length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Code {
    /// Code bits, right-aligned (MSB-first when left-aligned into a window).
    pub bits: u32,
    /// Code length in bits.
    pub len: u8,
}

/// Encode a non-negative value as a Golomb-Rice code.
///
/// Values whose quotient exceeds the field width are not representable and
/// are rejected; a quotient equal to the field width takes the saturated,
/// terminator-free form.
pub fn encode(param: CodeParam, value: u32) -> Result<Code> {
    let k = param.k();
    let q = value >> k;
    let r = value & param.remainder_mask();

    if q > QUOTIENT_FIELD_BITS {
        return Err(Error::ValueOutOfRange {
            value,
            k,
            max: param.max_value(),
        });
    }

    if q == QUOTIENT_FIELD_BITS {
        // Saturated: a full field of ones, remainder, no terminator.
        let ones = (1u32 << QUOTIENT_FIELD_BITS) - 1;
        Ok(Code {
            bits: (ones << k) | r,
            len: (QUOTIENT_FIELD_BITS + k) as u8,
        })
    } else {
        // q ones, a terminating zero, then the remainder.
        let unary = ((1u32 << q) - 1) << 1;
        Ok(Code {
            bits: (unary << k) | r,
            len: (q + 1 + k) as u8,
        })
    }
}

/// Map a signed weight delta onto the non-negative integers.
///
/// Small magnitudes of either sign get small codes: 0, -1, 1, -2, 2, ...
/// map to 0, 1, 2, 3, 4, ...
#[inline]
pub const fn zigzag(delta: i32) -> u32 {
    ((delta << 1) ^ (delta >> 31)) as u32
}

/// Inverse of [`zigzag`].
#[inline]
pub const fn unzigzag(mapped: u32) -> i32 {
    ((mapped >> 1) as i32) ^ -((mapped & 1) as i32)
}

/// Appends Golomb-Rice codes to a growable byte stream, MSB first.
///
/// Produces exactly the layout the window supplier reads back: the first
/// code starts at the MSB of byte zero, and the final partial byte is
/// zero-padded.
#[derive(Debug, Clone)]
pub struct DeltaStreamEncoder {
    param: CodeParam,
    buf: Vec<u8>,
    bit_len: usize,
}

impl DeltaStreamEncoder {
    /// Create an empty stream for the given parameter.
    pub fn new(param: CodeParam) -> Self {
        Self {
            param,
            buf: Vec::new(),
            bit_len: 0,
        }
    }

    /// The code parameter this stream encodes with.
    pub fn param(&self) -> CodeParam {
        self.param
    }

    /// Total bits appended so far.
    pub fn bit_len(&self) -> usize {
        self.bit_len
    }

    /// Append one signed delta (zigzag-mapped, then coded).
    pub fn push_delta(&mut self, delta: i32) -> Result<()> {
        self.push_value(zigzag(delta))
    }

    /// Append one already-mapped non-negative value.
    pub fn push_value(&mut self, value: u32) -> Result<()> {
        let code = encode(self.param, value)?;
        self.push_bits(code);
        Ok(())
    }

    /// Consume the encoder, returning the zero-padded byte stream.
    pub fn finish(self) -> Vec<u8> {
        self.buf
    }

    fn push_bits(&mut self, code: Code) {
        for i in (0..code.len).rev() {
            let bit = (code.bits >> i) & 1;
            if self.bit_len % 8 == 0 {
                self.buf.push(0);
            }
            let byte = self.bit_len / 8;
            self.buf[byte] |= (bit as u8) << (7 - self.bit_len % 8);
            self.bit_len += 1;
        }
    }
}
