//! Ring Buffer Error Types

use thiserror::Error;

/// Errors reported by [`RingBuffer`](crate::RingBuffer) operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RingBufferError {
    /// Read attempted on an empty buffer
    #[error("Ring buffer underflow: no samples available")]
    Underflow,

    /// Write rejected because the buffer is full
    #[error("Ring buffer overflow: capacity of {capacity} samples reached")]
    Overflow { capacity: usize },
}
