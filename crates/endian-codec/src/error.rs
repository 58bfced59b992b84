//! Codec Error Types

use thiserror::Error;

/// Errors when moving wire fields in and out of byte slices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CodecError {
    /// Slice too short for the field
    #[error("Buffer too short: need {needed} bytes, have {available}")]
    BufferTooShort { needed: usize, available: usize },
}
