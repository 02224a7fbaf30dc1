//! # Vassago Core
//!
//! Core error taxonomy and data-model types for the Vassago weight-delta
//! codec.
//!
//! Vassago is named after the third demon of the Ars Goetia, who discovers
//! things hidden and lost - just as the decoder recovers weight deltas hidden
//! in an entropy-coded bitstream.
//!
//! ## Design Philosophy
//!
//! - **Preconditions live in types**: unsupported code parameters and
//!   undersized bit windows are unrepresentable, not runtime branches
//! - **Pure decode**: the engine itself is stateless; only the hold buffer
//!   carries state
//! - **Hardware-faithful widths**: the bit window and quotient field mirror a
//!   fixed hardware resource budget
//!
//! ## Core Types
//!
//! - [`CodeParam`] - supported Golomb-Rice parameter `k`
//! - [`BitWindow`] - fixed-width MSB-first view of upcoming stream bits
//! - [`Decoded`] - decoded value plus bits consumed
//! - [`Tag`] - caller-assigned identifier for out-of-order retrieval

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::{
    BitWindow, CodeParam, Decoded, Tag, MAX_K, QUOTIENT_FIELD_BITS, WINDOW_BITS,
};
