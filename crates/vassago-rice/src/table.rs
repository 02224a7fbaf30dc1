//! Fast-path decode tables.
//!
//! Short Golomb-Rice codes are decoded by direct lookup on the leading
//! [`FAST_BITS`] window bits. The tables enumerate every code whose total
//! length `(q + 1) + k` fits in the peek width; each code owns all indices
//! that share its prefix, so the trailing don't-care bits never affect the
//! result.
//!
//! `k = 3` has no table: its shortest code is already 4 bits and the
//! workload takes the general path for it.

use vassago_core::CodeParam;

/// Number of leading window bits the fast path inspects.
pub const FAST_BITS: u32 = 4;

const FAST_TABLE_SIZE: usize = 1 << FAST_BITS;

/// A single entry in a fast-path decode table.
///
/// `bits == 0` marks an index with no fast-path code (the code starting
/// there is longer than [`FAST_BITS`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FastEntry {
    /// The decoded value `(q << k) + r`.
    pub value: u8,
    /// Total code length in bits.
    pub bits: u8,
}

/// Build the lookup table for one parameter at compile time.
///
/// For each `(q, r)` with `(q + 1) + k <= FAST_BITS`, the code is `q` ones,
/// a terminating zero, then `r` in `k` bits. The code is left-aligned in the
/// peek width and replicated across all `2^(FAST_BITS - len)` suffixes.
const fn build_table(k: u32) -> [FastEntry; FAST_TABLE_SIZE] {
    let mut entries = [FastEntry { value: 0, bits: 0 }; FAST_TABLE_SIZE];
    let mut q = 0u32;
    while q + 1 + k <= FAST_BITS {
        let len = q + 1 + k;
        let unary = ((1u32 << q) - 1) << 1;
        let mut r = 0u32;
        while r < (1u32 << k) {
            let code = (unary << k) | r;
            let pad = FAST_BITS - len;
            let base = (code << pad) as usize;
            let mut i = 0usize;
            while i < (1usize << pad) {
                entries[base + i] = FastEntry {
                    value: ((q << k) + r) as u8,
                    bits: len as u8,
                };
                i += 1;
            }
            r += 1;
        }
        q += 1;
    }
    entries
}

static FAST_K1: [FastEntry; FAST_TABLE_SIZE] = build_table(1);
static FAST_K2: [FastEntry; FAST_TABLE_SIZE] = build_table(2);

/// Look up the leading window bits in the table for `param`.
///
/// Returns `None` when no code of length `<= FAST_BITS` starts at this
/// window position, or when the parameter has no fast path at all.
#[inline]
pub fn lookup(param: CodeParam, leading: u32) -> Option<FastEntry> {
    let table = match param {
        CodeParam::K1 => &FAST_K1,
        CodeParam::K2 => &FAST_K2,
        CodeParam::K3 => return None,
    };
    let entry = table[(leading as usize) & (FAST_TABLE_SIZE - 1)];
    (entry.bits != 0).then_some(entry)
}
