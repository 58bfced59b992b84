//! Fixed-Capacity Ring Buffer Implementation

use crate::{BufferStats, RingBufferError};
use tracing::trace;

/// Single-owner FIFO ring buffer with `N` inline slots
///
/// When full, [`add`](Self::add) overwrites the oldest unread sample and
/// [`try_add`](Self::try_add) rejects the write. Reads from an empty buffer
/// return [`RingBufferError::Underflow`] and never touch storage.
///
/// There is no internal synchronization. A producer and consumer on different
/// threads must share the buffer behind a lock.
#[derive(Debug, Clone)]
pub struct RingBuffer<T, const N: usize> {
    /// Inline storage
    storage: [T; N],
    /// Next slot to write
    head: usize,
    /// Next slot to read
    tail: usize,
    /// Samples currently held
    count: usize,
    /// Total samples accepted (for statistics)
    total_written: u64,
    /// Samples evicted by overwrite (for statistics)
    overwritten: u64,
}

impl<T: Copy + Default, const N: usize> RingBuffer<T, N> {
    /// Buffer capacity
    pub const CAPACITY: usize = N;

    const NONZERO_CAPACITY: () = assert!(N > 0, "ring buffer capacity must be non-zero");

    /// Create an empty buffer
    ///
    /// ```
    /// let buffer = ring_buffer::RingBuffer::<u8, 4>::new();
    /// assert!(buffer.is_empty());
    /// ```
    ///
    /// A zero capacity is rejected when the type is instantiated:
    ///
    /// ```compile_fail
    /// let _ = ring_buffer::RingBuffer::<u8, 0>::new();
    /// ```
    pub fn new() -> Self {
        let () = Self::NONZERO_CAPACITY;
        Self {
            storage: [T::default(); N],
            head: 0,
            tail: 0,
            count: 0,
            total_written: 0,
            overwritten: 0,
        }
    }

    #[inline]
    fn advance(index: usize) -> usize {
        let next = index + 1;
        if next == N {
            0
        } else {
            next
        }
    }

    /// Push a sample, overwriting the oldest one if full.
    ///
    /// Returns the evicted sample when an overwrite happened.
    pub fn add(&mut self, value: T) -> Option<T> {
        let evicted = if self.count == N {
            // head == tail here, so the write below lands on the evicted slot
            let oldest = self.storage[self.tail];
            self.tail = Self::advance(self.tail);
            self.overwritten += 1;
            trace!(capacity = N, "Ring buffer full, overwriting oldest sample");
            Some(oldest)
        } else {
            self.count += 1;
            None
        };

        self.storage[self.head] = value;
        self.head = Self::advance(self.head);
        self.total_written += 1;

        evicted
    }

    /// Push a sample, rejecting it if the buffer is full
    pub fn try_add(&mut self, value: T) -> Result<(), RingBufferError> {
        if self.count == N {
            return Err(RingBufferError::Overflow { capacity: N });
        }
        self.add(value);
        Ok(())
    }

    /// Pop the oldest sample
    pub fn get(&mut self) -> Result<T, RingBufferError> {
        if self.count == 0 {
            trace!("Ring buffer underflow");
            return Err(RingBufferError::Underflow);
        }

        let value = self.storage[self.tail];
        self.tail = Self::advance(self.tail);
        self.count -= 1;
        Ok(value)
    }

    /// Oldest sample without consuming it
    pub fn peek(&self) -> Option<T> {
        if self.count == 0 {
            None
        } else {
            Some(self.storage[self.tail])
        }
    }

    /// Get the number of samples currently in the buffer
    pub fn len(&self) -> usize {
        self.count
    }

    /// Check if buffer is empty
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Check if buffer is full
    pub fn is_full(&self) -> bool {
        self.count == N
    }

    /// Get the buffer capacity
    pub fn capacity(&self) -> usize {
        N
    }

    /// Get fill ratio (0.0 to 1.0)
    pub fn fill_ratio(&self) -> f64 {
        self.count as f64 / N as f64
    }

    /// Get total samples written (for statistics)
    pub fn total_written(&self) -> u64 {
        self.total_written
    }

    /// Get number of samples lost to overwrite
    pub fn overwritten(&self) -> u64 {
        self.overwritten
    }

    /// Snapshot of occupancy and counters
    pub fn stats(&self) -> BufferStats {
        BufferStats {
            len: self.count,
            capacity: N,
            total_written: self.total_written,
            overwritten: self.overwritten,
        }
    }

    /// Iterate oldest to newest without consuming
    pub fn iter(&self) -> Iter<'_, T, N> {
        Iter {
            buffer: self,
            offset: 0,
        }
    }

    /// Read the last `count` samples (most recent first)
    ///
    /// Copies into a freshly allocated `Vec`.
    pub fn read_last(&self, count: usize) -> Vec<T> {
        let count = count.min(self.count);
        (0..count)
            .map(|i| self.storage[(self.head + N - 1 - i) % N])
            .collect()
    }

    /// Consume up to `max` samples in FIFO order
    pub fn drain(&mut self, max: usize) -> Drain<'_, T, N> {
        let remaining = max.min(self.count);
        Drain {
            buffer: self,
            remaining,
        }
    }

    /// Clear the buffer. Storage is left as is.
    pub fn clear(&mut self) {
        self.head = 0;
        self.tail = 0;
        self.count = 0;
    }

    /// Hard reset: clear, zero the storage and the statistics
    pub fn reset(&mut self) {
        self.clear();
        self.storage = [T::default(); N];
        self.total_written = 0;
        self.overwritten = 0;
    }
}

impl<T: Copy + Default, const N: usize> Default for RingBuffer<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T: Copy + Default, const N: usize> IntoIterator for &'a RingBuffer<T, N> {
    type Item = T;
    type IntoIter = Iter<'a, T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Borrowing iterator, oldest sample first
pub struct Iter<'a, T, const N: usize> {
    buffer: &'a RingBuffer<T, N>,
    offset: usize,
}

impl<T: Copy, const N: usize> Iterator for Iter<'_, T, N> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.offset == self.buffer.count {
            return None;
        }
        let value = self.buffer.storage[(self.buffer.tail + self.offset) % N];
        self.offset += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.buffer.count - self.offset;
        (remaining, Some(remaining))
    }
}

impl<T: Copy, const N: usize> ExactSizeIterator for Iter<'_, T, N> {}

/// Consuming iterator returned by [`RingBuffer::drain`]
///
/// Samples not yet yielded when the iterator is dropped stay in the buffer.
pub struct Drain<'a, T, const N: usize> {
    buffer: &'a mut RingBuffer<T, N>,
    remaining: usize,
}

impl<T: Copy + Default, const N: usize> Iterator for Drain<'_, T, N> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        self.buffer.get().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T: Copy + Default, const N: usize> ExactSizeIterator for Drain<'_, T, N> {}
