//! Buffered Sample Link

use crate::{LinkConfig, LinkError, OverflowPolicy, SampleFrame};
use endian_codec::WireSample;
use ring_buffer::RingBuffer;
use tracing::{debug, info, warn};

/// Producer-facing staging buffer feeding the frame encoder
///
/// Samples are recorded one at a time and leave as [`SampleFrame`]s in the
/// order they were recorded.
pub struct SampleLink<T, const N: usize> {
    /// Staging buffer
    buffer: RingBuffer<T, N>,
    /// Configuration
    config: LinkConfig,
    /// Sequence number of the next frame
    sequence: u16,
    /// Samples lost to overflow
    dropped: u64,
}

impl<T: WireSample + Default, const N: usize> SampleLink<T, N> {
    /// Create a new link
    pub fn new(config: LinkConfig) -> Result<Self, LinkError> {
        config.validate()?;
        info!(
            "Creating sample link: capacity={}, width={}B, config={:?}",
            N,
            T::WIDTH,
            config
        );
        Ok(Self {
            buffer: RingBuffer::new(),
            sequence: config.start_sequence,
            config,
            dropped: 0,
        })
    }

    /// Stage a sample according to the configured overflow policy
    pub fn record(&mut self, sample: T) -> Result<(), LinkError> {
        match self.config.overflow {
            OverflowPolicy::Overwrite => {
                if self.buffer.add(sample).is_some() {
                    self.dropped += 1;
                    debug!(dropped = self.dropped, "Oldest sample overwritten");
                }
            }
            OverflowPolicy::Reject => {
                if let Err(e) = self.buffer.try_add(sample) {
                    self.dropped += 1;
                    warn!(dropped = self.dropped, "Sample rejected: {}", e);
                    return Err(e.into());
                }
            }
        }
        Ok(())
    }

    /// Drain up to `max_samples_per_frame` samples into the next frame
    pub fn next_frame(&mut self) -> Option<SampleFrame<T>> {
        if self.buffer.is_empty() {
            return None;
        }

        let max = usize::from(self.config.max_samples_per_frame);
        let samples: Vec<T> = self.buffer.drain(max).collect();
        let frame = SampleFrame {
            sequence: self.sequence,
            samples,
        };
        self.sequence = self.sequence.wrapping_add(1);

        debug!(
            "Framed {} samples as sequence {} ({} pending)",
            frame.samples.len(),
            frame.sequence,
            self.buffer.len()
        );
        Some(frame)
    }

    /// Next frame as wire bytes
    pub fn next_encoded(&mut self) -> Result<Option<Vec<u8>>, LinkError> {
        self.next_frame().map(|frame| frame.encode()).transpose()
    }

    /// Drain every pending sample into frames
    pub fn flush(&mut self) -> Vec<SampleFrame<T>> {
        std::iter::from_fn(|| self.next_frame()).collect()
    }

    /// Samples waiting to be framed
    pub fn pending(&self) -> usize {
        self.buffer.len()
    }

    /// Samples lost to overflow since creation
    pub fn dropped(&self) -> u64 {
        self.dropped
    }

    /// Sequence number the next frame will carry
    pub fn sequence(&self) -> u16 {
        self.sequence
    }

    /// Staging buffer
    pub fn buffer(&self) -> &RingBuffer<T, N> {
        &self.buffer
    }

    /// Active configuration
    pub fn config(&self) -> &LinkConfig {
        &self.config
    }
}
