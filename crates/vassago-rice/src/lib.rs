//! # Vassago Rice
//!
//! Golomb-Rice decode core for entropy-coded weight-delta streams, with a
//! fixed-capacity, tag-addressed hold buffer for out-of-order retrieval of
//! decoded results.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                      vassago-rice                        │
//! ├────────────────────────────┬─────────────────────────────┤
//! │  decode.rs                 │  holdbuf.rs                 │
//! │  (dual-path engine)        │  (tag-addressed scoreboard) │
//! │  table.rs                  │                             │
//! │  (fast-path lookup)        │                             │
//! ├────────────────────────────┴─────────────────────────────┤
//! │  encode.rs (codes, zigzag)  │  stream.rs (window walker) │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Decode model
//!
//! Codes are a unary quotient (ones, then a terminating zero, or a
//! saturated all-ones field with no terminator) followed by a `k`-bit
//! remainder. Short codes resolve through a direct lookup table on the
//! leading window bits; everything else takes a general first-zero scan.
//! Both paths are pure functions over the same window and agree wherever
//! both apply.
//!
//! The engine is stateless and freely parallel across independent stream
//! positions. The hold buffer is the only stateful piece: producers park
//! tagged results under backpressure, consumers drain any held tag in any
//! order.
//!
//! ## Quick Start
//!
//! ```rust
//! use vassago_core::CodeParam;
//! use vassago_rice::{DeltaStreamDecoder, DeltaStreamEncoder, HoldBuffer};
//!
//! let mut enc = DeltaStreamEncoder::new(CodeParam::K2);
//! for delta in [0, -3, 7] {
//!     enc.push_delta(delta).unwrap();
//! }
//! let bit_len = enc.bit_len();
//! let bytes = enc.finish();
//!
//! let mut dec = DeltaStreamDecoder::with_bit_len(CodeParam::K2, &bytes, bit_len).unwrap();
//! assert_eq!(dec.decode_all().unwrap(), vec![0, -3, 7]);
//!
//! // Park a result for a consumer that is not ready yet.
//! let mut held: HoldBuffer<u32> = HoldBuffer::new(4);
//! assert!(held.try_insert(12, 30));
//! assert_eq!(held.try_read(12), Some(30));
//! ```

pub mod decode;
pub mod encode;
pub mod holdbuf;
pub mod stream;
pub mod table;

pub use decode::{decode, decode_fast, decode_slow};
pub use encode::{encode, unzigzag, zigzag, Code, DeltaStreamEncoder};
pub use holdbuf::{HoldBuffer, HoldBufferConfig, HoldBufferStats, DEFAULT_SLOTS};
pub use stream::{DecodeStats, DeltaStreamDecoder, WindowSource};
pub use table::{FastEntry, FAST_BITS};
