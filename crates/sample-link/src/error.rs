//! Sample Link Error Types

use endian_codec::CodecError;
use ring_buffer::RingBufferError;
use thiserror::Error;

/// Errors raised while buffering, framing, or configuring the link
#[derive(Debug, Error)]
pub enum LinkError {
    /// Ring buffer rejected the operation
    #[error("Buffer error: {0}")]
    Buffer(#[from] RingBufferError),

    /// Field could not be written or read
    #[error("Codec error: {0}")]
    Codec(#[from] CodecError),

    /// Frame shorter than its header or declared payload
    #[error("Truncated frame: need {needed} bytes, have {available}")]
    Truncated { needed: usize, available: usize },

    /// Frame carries samples of a different width
    #[error("Sample width mismatch: expected {expected} bytes, frame declares {actual}")]
    WidthMismatch { expected: usize, actual: u8 },

    /// Bytes left over after the declared payload
    #[error("{0} trailing bytes after frame payload")]
    TrailingBytes(usize),

    /// Sample count does not fit the 16-bit count field
    #[error("Frame holds {0} samples, more than the count field allows")]
    FrameTooLarge(usize),

    /// Configuration source could not be read or parsed
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Configuration parsed but is unusable
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
