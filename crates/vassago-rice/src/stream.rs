//! Stream-walking decode on top of the per-code engine.
//!
//! [`WindowSource`] is the window-supplier boundary: it serves the next
//! [`WINDOW_BITS`]-bit MSB-first view of a byte slice at any bit position,
//! zero-filling past the end. [`DeltaStreamDecoder`] drives the engine over
//! it: fetch a window, decode, advance by the consumed bits, repeat.

use crate::decode::{decode_fast, decode_slow};
use crate::encode::unzigzag;
use serde::Serialize;
use tracing::debug;
use vassago_core::{BitWindow, CodeParam, Error, Result, WINDOW_BITS};

/// Serves fixed-width bit windows from a byte slice.
///
/// Bit addressing is MSB-first: position 0 is the most significant bit of
/// byte 0. Windows past the end of the data are zero-filled, which matches
/// the zero padding the stream encoder emits.
#[derive(Debug, Clone)]
pub struct WindowSource<'a> {
    data: &'a [u8],
    bit_pos: usize,
    bit_len: usize,
}

impl<'a> WindowSource<'a> {
    /// Create a source over a whole byte slice.
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            bit_pos: 0,
            bit_len: data.len() * 8,
        }
    }

    /// Create a source over the first `bit_len` bits of the slice.
    ///
    /// Use this when the logical stream length is not byte-aligned, so that
    /// trailing pad bits are not misread as codes.
    pub fn with_bit_len(data: &'a [u8], bit_len: usize) -> Result<Self> {
        if bit_len > data.len() * 8 {
            return Err(Error::window_too_narrow(bit_len, data.len() * 8));
        }
        Ok(Self {
            data,
            bit_pos: 0,
            bit_len,
        })
    }

    /// Current bit position.
    pub fn position(&self) -> usize {
        self.bit_pos
    }

    /// Bits left before the logical end of the stream.
    pub fn bits_remaining(&self) -> usize {
        self.bit_len - self.bit_pos
    }

    /// The window starting at the current position, zero-filled at the tail.
    pub fn window(&self) -> BitWindow {
        let byte = self.bit_pos / 8;
        let mut acc = 0u64;
        for i in 0..5 {
            let b = self.data.get(byte + i).copied().unwrap_or(0);
            acc = (acc << 8) | b as u64;
        }
        let offset = (self.bit_pos % 8) as u32;
        BitWindow::new((acc >> (40 - offset - WINDOW_BITS)) as u32)
    }

    /// Advance the position by `bits`.
    pub fn advance(&mut self, bits: usize) {
        self.bit_pos += bits;
    }
}

/// Per-stream decode counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DecodeStats {
    /// Values decoded.
    pub values: u64,
    /// Codes resolved by the lookup table.
    pub fast_path: u64,
    /// Codes that took the general path.
    pub slow_path: u64,
    /// Total bits consumed.
    pub bits_consumed: u64,
}

/// Decodes a whole delta stream, one code at a time.
#[derive(Debug, Clone)]
pub struct DeltaStreamDecoder<'a> {
    param: CodeParam,
    source: WindowSource<'a>,
    stats: DecodeStats,
}

impl<'a> DeltaStreamDecoder<'a> {
    /// Decode over a whole byte slice.
    ///
    /// Trailing zero padding decodes as zero-valued codes; use
    /// [`DeltaStreamDecoder::with_bit_len`] when the exact stream length in
    /// bits is known.
    pub fn new(param: CodeParam, data: &'a [u8]) -> Self {
        Self {
            param,
            source: WindowSource::new(data),
            stats: DecodeStats::default(),
        }
    }

    /// Decode over the first `bit_len` bits of the slice.
    pub fn with_bit_len(param: CodeParam, data: &'a [u8], bit_len: usize) -> Result<Self> {
        Ok(Self {
            param,
            source: WindowSource::with_bit_len(data, bit_len)?,
            stats: DecodeStats::default(),
        })
    }

    /// Decode counters so far.
    pub fn stats(&self) -> DecodeStats {
        self.stats
    }

    /// Decode the next mapped (non-negative) value.
    ///
    /// `Ok(None)` at the logical end of the stream; an error only when a
    /// code runs past it, which means the input was truncated.
    pub fn next_value(&mut self) -> Result<Option<u32>> {
        if self.source.bits_remaining() == 0 {
            return Ok(None);
        }
        let window = self.source.window();
        let decoded = match decode_fast(self.param, window) {
            Some(hit) => {
                self.stats.fast_path += 1;
                hit
            }
            None => {
                self.stats.slow_path += 1;
                decode_slow(self.param, window)
            }
        };
        if decoded.bits as usize > self.source.bits_remaining() {
            return Err(Error::stream_exhausted(self.source.position()));
        }
        self.source.advance(decoded.bits as usize);
        self.stats.values += 1;
        self.stats.bits_consumed += decoded.bits as u64;
        Ok(Some(decoded.value))
    }

    /// Decode the next signed delta.
    pub fn next_delta(&mut self) -> Result<Option<i32>> {
        Ok(self.next_value()?.map(unzigzag))
    }

    /// Decode every remaining delta.
    pub fn decode_all(&mut self) -> Result<Vec<i32>> {
        let mut deltas = Vec::new();
        while let Some(delta) = self.next_delta()? {
            deltas.push(delta);
        }
        debug!(
            values = self.stats.values,
            fast = self.stats.fast_path,
            slow = self.stats.slow_path,
            bits = self.stats.bits_consumed,
            "delta stream decoded"
        );
        Ok(deltas)
    }
}
