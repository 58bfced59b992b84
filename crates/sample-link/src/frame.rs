//! Telemetry Frame Wire Format
//!
//! ```text
//! +----------+-------+-------+---------------------+
//! | sequence | width | count | samples             |
//! | u16 BE   | u8    | u16 BE| count * width bytes |
//! +----------+-------+-------+---------------------+
//! ```

use crate::LinkError;
use endian_codec::{decode_be16, encode_be16, WireSample};

/// Encoded header size in bytes
pub const HEADER_LEN: usize = 5;

/// A batch of samples drained from the staging buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleFrame<T> {
    /// Wrapping frame counter
    pub sequence: u16,
    /// Samples in FIFO order
    pub samples: Vec<T>,
}

impl<T: WireSample> SampleFrame<T> {
    /// Total encoded size
    pub fn encoded_len(&self) -> usize {
        HEADER_LEN + self.samples.len() * T::WIDTH
    }

    /// Serialize to wire bytes
    pub fn encode(&self) -> Result<Vec<u8>, LinkError> {
        let count = u16::try_from(self.samples.len())
            .map_err(|_| LinkError::FrameTooLarge(self.samples.len()))?;

        let mut out = vec![0u8; self.encoded_len()];
        out[0..2].copy_from_slice(&encode_be16(self.sequence));
        out[2] = T::WIDTH as u8;
        out[3..5].copy_from_slice(&encode_be16(count));

        let mut offset = HEADER_LEN;
        for sample in &self.samples {
            offset += sample.write_be(&mut out[offset..])?;
        }

        Ok(out)
    }

    /// Parse wire bytes. The input must hold exactly one frame.
    pub fn decode(bytes: &[u8]) -> Result<Self, LinkError> {
        if bytes.len() < HEADER_LEN {
            return Err(LinkError::Truncated {
                needed: HEADER_LEN,
                available: bytes.len(),
            });
        }

        let sequence = decode_be16([bytes[0], bytes[1]]);
        let width = bytes[2];
        if usize::from(width) != T::WIDTH {
            return Err(LinkError::WidthMismatch {
                expected: T::WIDTH,
                actual: width,
            });
        }
        let count = usize::from(decode_be16([bytes[3], bytes[4]]));

        let payload = &bytes[HEADER_LEN..];
        let needed = count * T::WIDTH;
        if payload.len() < needed {
            return Err(LinkError::Truncated {
                needed: HEADER_LEN + needed,
                available: bytes.len(),
            });
        }
        if payload.len() > needed {
            return Err(LinkError::TrailingBytes(payload.len() - needed));
        }

        let samples = payload
            .chunks_exact(T::WIDTH)
            .map(T::read_be)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { sequence, samples })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_layout() {
        let frame = SampleFrame {
            sequence: 0x0102,
            samples: vec![32u32, 0xAABB_CCDD],
        };

        let bytes = frame.encode().unwrap();
        assert_eq!(bytes.len(), frame.encoded_len());
        assert_eq!(
            bytes,
            vec![
                0x01, 0x02, // sequence
                0x04, // width
                0x00, 0x02, // count
                0x00, 0x00, 0x00, 0x20, // 32
                0xAA, 0xBB, 0xCC, 0xDD,
            ]
        );
    }

    #[test]
    fn test_decode_u16_frame() {
        let bytes = [0x00, 0x07, 0x02, 0x00, 0x03, 0x00, 0x20, 0x12, 0x34, 0xFF, 0xFE];
        let frame = SampleFrame::<u16>::decode(&bytes).unwrap();
        assert_eq!(frame.sequence, 7);
        assert_eq!(frame.samples, vec![32, 0x1234, 0xFFFE]);
    }

    #[test]
    fn test_empty_frame() {
        let frame: SampleFrame<u8> = SampleFrame {
            sequence: 9,
            samples: Vec::new(),
        };
        let bytes = frame.encode().unwrap();
        assert_eq!(bytes.len(), HEADER_LEN);
        assert_eq!(SampleFrame::<u8>::decode(&bytes).unwrap(), frame);
    }

    #[test]
    fn test_decode_rejects_short_header() {
        assert!(matches!(
            SampleFrame::<u8>::decode(&[0x00, 0x01]),
            Err(LinkError::Truncated { needed: 5, available: 2 })
        ));
    }

    #[test]
    fn test_decode_rejects_truncated_payload() {
        let bytes = [0x00, 0x00, 0x02, 0x00, 0x02, 0x00, 0x01, 0x00];
        assert!(matches!(
            SampleFrame::<u16>::decode(&bytes),
            Err(LinkError::Truncated { needed: 9, available: 8 })
        ));
    }

    #[test]
    fn test_decode_rejects_width_mismatch() {
        let bytes = SampleFrame {
            sequence: 1,
            samples: vec![1u8, 2, 3, 4],
        }
        .encode()
        .unwrap();

        assert!(matches!(
            SampleFrame::<u32>::decode(&bytes),
            Err(LinkError::WidthMismatch { expected: 4, actual: 1 })
        ));
    }

    #[test]
    fn test_decode_rejects_trailing_bytes() {
        let mut bytes = SampleFrame {
            sequence: 1,
            samples: vec![10u8],
        }
        .encode()
        .unwrap();
        bytes.extend_from_slice(&[0, 0]);

        assert!(matches!(
            SampleFrame::<u8>::decode(&bytes),
            Err(LinkError::TrailingBytes(2))
        ));
    }

    #[test]
    fn test_oversized_frame_rejected() {
        let frame = SampleFrame {
            sequence: 0,
            samples: vec![0u8; usize::from(u16::MAX) + 1],
        };
        assert!(matches!(frame.encode(), Err(LinkError::FrameTooLarge(65536))));
    }
}
