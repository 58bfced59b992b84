//! Fixed-Capacity Ring Buffer
//!
//! Provides a FIFO staging area for small unsigned sensor samples. Capacity
//! is a const generic and storage lives inline in the struct, so add, get and
//! clear never allocate. `read_last` is the one method that returns a `Vec`.

mod buffer;
mod error;

pub use buffer::{Drain, Iter, RingBuffer};
pub use error::RingBufferError;

use serde::{Deserialize, Serialize};

/// Point-in-time snapshot of buffer occupancy and counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BufferStats {
    /// Samples currently held
    pub len: usize,
    /// Fixed capacity
    pub capacity: usize,
    /// Samples accepted since creation or last reset
    pub total_written: u64,
    /// Samples evicted by overwrite since creation or last reset
    pub overwritten: u64,
}

impl BufferStats {
    /// Fill ratio (0.0 to 1.0)
    pub fn fill_ratio(&self) -> f64 {
        self.len as f64 / self.capacity as f64
    }
}
