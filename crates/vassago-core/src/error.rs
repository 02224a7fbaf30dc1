//! Error types for decode operations.

use thiserror::Error;

/// Result type alias for codec operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Codec error types.
///
/// Capacity exhaustion on the hold buffer and tag misses are *not* errors:
/// they are expected outcomes signalled as `bool`/`Option` by the buffer
/// itself. Everything here is either a caller precondition violation or a
/// truncated input stream.
#[derive(Debug, Error)]
pub enum Error {
    /// Golomb-Rice parameter outside the supported range.
    #[error("unsupported Rice parameter k={k}: supported range is 1..=3")]
    UnsupportedParam { k: u32 },

    /// A bit window cannot hold the requested number of bits.
    #[error("bit window too narrow: need {required} bits, window holds {provided}")]
    WindowTooNarrow { required: usize, provided: usize },

    /// Value exceeds the encodable range for the given parameter.
    #[error("value {value} exceeds encodable range for k={k} (max {max})")]
    ValueOutOfRange { value: u32, k: u32, max: u32 },

    /// The bitstream ended inside a code.
    #[error("bitstream exhausted after {bits_read} bits")]
    StreamExhausted { bits_read: usize },
}

impl Error {
    /// Create an unsupported parameter error.
    pub fn unsupported_param(k: u32) -> Self {
        Error::UnsupportedParam { k }
    }

    /// Create a window too narrow error.
    pub fn window_too_narrow(required: usize, provided: usize) -> Self {
        Error::WindowTooNarrow { required, provided }
    }

    /// Create a stream exhausted error.
    pub fn stream_exhausted(bits_read: usize) -> Self {
        Error::StreamExhausted { bits_read }
    }

    /// Check if error is recoverable (caller can retry with more input).
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Error::StreamExhausted { .. })
    }

    /// Get error category for metrics.
    pub fn category(&self) -> &'static str {
        match self {
            Error::UnsupportedParam { .. } => "unsupported_param",
            Error::WindowTooNarrow { .. } => "window_too_narrow",
            Error::ValueOutOfRange { .. } => "value_out_of_range",
            Error::StreamExhausted { .. } => "stream_exhausted",
        }
    }
}
