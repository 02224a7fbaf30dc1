//! Core type definitions for the weight-delta codec.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Width of the unary quotient field, in bits.
///
/// A quotient that shows no terminating `0` within this many bits saturates;
/// the saturated code carries no terminator bit at all.
pub const QUOTIENT_FIELD_BITS: u32 = 16;

/// Largest supported Rice parameter.
pub const MAX_K: u32 = 3;

/// Width of the bit window handed to the decode engine.
///
/// Wide enough for the longest possible code: a saturated quotient field
/// followed by a maximum-width remainder.
pub const WINDOW_BITS: u32 = QUOTIENT_FIELD_BITS + MAX_K;

/// Caller-assigned identifier addressing a buffered decode result.
///
/// Typically a sequence or group position. Uniqueness among live entries is
/// the producer's responsibility.
pub type Tag = u32;

/// Supported Golomb-Rice code parameters.
///
/// The parameter selects the remainder width. Only `k` in `1..=3` is
/// representable; anything else is rejected at construction, so the decode
/// engine itself never has to validate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CodeParam {
    /// 1-bit remainder.
    K1,
    /// 2-bit remainder.
    K2,
    /// 3-bit remainder.
    K3,
}

impl CodeParam {
    /// All supported parameters, in order.
    pub const ALL: [CodeParam; 3] = [CodeParam::K1, CodeParam::K2, CodeParam::K3];

    /// Create from a numeric `k`.
    pub fn from_k(k: u32) -> Result<Self> {
        match k {
            1 => Ok(CodeParam::K1),
            2 => Ok(CodeParam::K2),
            3 => Ok(CodeParam::K3),
            _ => Err(Error::unsupported_param(k)),
        }
    }

    /// Numeric remainder width.
    #[inline]
    pub const fn k(self) -> u32 {
        match self {
            CodeParam::K1 => 1,
            CodeParam::K2 => 2,
            CodeParam::K3 => 3,
        }
    }

    /// Mask covering the remainder bits.
    #[inline]
    pub const fn remainder_mask(self) -> u32 {
        (1 << self.k()) - 1
    }

    /// Largest value this parameter can encode (saturated quotient, all-ones
    /// remainder).
    #[inline]
    pub const fn max_value(self) -> u32 {
        (QUOTIENT_FIELD_BITS << self.k()) | self.remainder_mask()
    }

    /// Longest possible code length in bits: a saturated quotient field plus
    /// the remainder, with no terminator.
    #[inline]
    pub const fn max_code_bits(self) -> u32 {
        QUOTIENT_FIELD_BITS + self.k()
    }
}

/// A fixed-width, MSB-first view of the next [`WINDOW_BITS`] bits of the
/// stream.
///
/// Bit index 0 is the most significant (first-arriving) bit. The window is
/// immutable; advancing the stream means fetching a fresh window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitWindow {
    bits: u32,
}

impl BitWindow {
    /// Create a window from raw bits, right-aligned in the integer.
    ///
    /// Bits above [`WINDOW_BITS`] are masked off.
    #[inline]
    pub const fn new(raw: u32) -> Self {
        Self {
            bits: raw & ((1 << WINDOW_BITS) - 1),
        }
    }

    /// Create a window whose leading `len` bits are the low `len` bits of
    /// `code`, with the tail zero-filled.
    ///
    /// This is how an encoder-produced code is positioned for decode.
    pub fn with_leading(code: u32, len: u32) -> Result<Self> {
        if len > WINDOW_BITS {
            return Err(Error::window_too_narrow(len as usize, WINDOW_BITS as usize));
        }
        let code = if len == 0 { 0 } else { code & ((1u32 << len).wrapping_sub(1)) };
        Ok(Self::new(code << (WINDOW_BITS - len)))
    }

    /// Parse a window from a string of `0`/`1` characters, MSB first.
    ///
    /// Shorter strings are zero-filled at the tail. Other characters are
    /// ignored, so `"0110 0000"` style grouping is fine.
    pub fn from_bit_str(s: &str) -> Result<Self> {
        let mut bits = 0u32;
        let mut len = 0u32;
        for c in s.chars() {
            let bit = match c {
                '0' => 0,
                '1' => 1,
                _ => continue,
            };
            if len == WINDOW_BITS {
                return Err(Error::window_too_narrow(
                    len as usize + 1,
                    WINDOW_BITS as usize,
                ));
            }
            bits = (bits << 1) | bit;
            len += 1;
        }
        Ok(Self::new(bits << (WINDOW_BITS - len)))
    }

    /// Raw window contents, right-aligned.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.bits
    }

    /// The bit at MSB-first index `i` (0 or 1).
    #[inline]
    pub const fn bit(self, i: u32) -> u32 {
        (self.bits >> (WINDOW_BITS - 1 - i)) & 1
    }

    /// The leading `n` bits of the window, right-aligned.
    #[inline]
    pub const fn leading(self, n: u32) -> u32 {
        self.bits >> (WINDOW_BITS - n)
    }

    /// `len` bits starting at MSB-first index `start`, right-aligned.
    #[inline]
    pub const fn field(self, start: u32, len: u32) -> u32 {
        (self.bits >> (WINDOW_BITS - start - len)) & ((1 << len) - 1)
    }
}

/// A single decode result: the mapped (non-negative) delta plus the exact
/// number of window bits the code occupied.
///
/// Self-consistent by construction: re-encoding `value` with the same
/// parameter reproduces exactly `bits` bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoded {
    /// The decoded unsigned value `(q << k) + r`.
    pub value: u32,
    /// Bits consumed from the window.
    pub bits: u8,
}
