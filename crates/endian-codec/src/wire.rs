//! Big-Endian Wire Fields

use crate::error::CodecError;
use crate::swap::{to_big_endian_16, to_big_endian_32};

/// Wire bytes of a `u16`, most significant first
///
/// The swapped value is laid out little-endian, which puts the original most
/// significant byte first on every host.
#[must_use]
pub fn encode_be16(value: u16) -> [u8; 2] {
    to_big_endian_16(value).to_le_bytes()
}

/// Wire bytes of a `u32`, most significant first
#[must_use]
pub fn encode_be32(value: u32) -> [u8; 4] {
    to_big_endian_32(value).to_le_bytes()
}

/// Parse a big-endian `u16` wire field
#[must_use]
pub fn decode_be16(bytes: [u8; 2]) -> u16 {
    to_big_endian_16(u16::from_le_bytes(bytes))
}

/// Parse a big-endian `u32` wire field
#[must_use]
pub fn decode_be32(bytes: [u8; 4]) -> u32 {
    to_big_endian_32(u32::from_le_bytes(bytes))
}

fn ensure_len(needed: usize, available: usize) -> Result<(), CodecError> {
    if available < needed {
        Err(CodecError::BufferTooShort { needed, available })
    } else {
        Ok(())
    }
}

/// Unsigned sample that can travel as a fixed-width big-endian field
pub trait WireSample: Copy {
    /// Encoded width in bytes
    const WIDTH: usize;

    /// Write into the front of `out`, returning the bytes written
    fn write_be(self, out: &mut [u8]) -> Result<usize, CodecError>;

    /// Read from the front of `input`
    fn read_be(input: &[u8]) -> Result<Self, CodecError>;
}

impl WireSample for u8 {
    const WIDTH: usize = 1;

    fn write_be(self, out: &mut [u8]) -> Result<usize, CodecError> {
        ensure_len(Self::WIDTH, out.len())?;
        out[0] = self;
        Ok(Self::WIDTH)
    }

    fn read_be(input: &[u8]) -> Result<Self, CodecError> {
        ensure_len(Self::WIDTH, input.len())?;
        Ok(input[0])
    }
}

impl WireSample for u16 {
    const WIDTH: usize = 2;

    fn write_be(self, out: &mut [u8]) -> Result<usize, CodecError> {
        ensure_len(Self::WIDTH, out.len())?;
        out[..Self::WIDTH].copy_from_slice(&encode_be16(self));
        Ok(Self::WIDTH)
    }

    fn read_be(input: &[u8]) -> Result<Self, CodecError> {
        ensure_len(Self::WIDTH, input.len())?;
        Ok(decode_be16([input[0], input[1]]))
    }
}

impl WireSample for u32 {
    const WIDTH: usize = 4;

    fn write_be(self, out: &mut [u8]) -> Result<usize, CodecError> {
        ensure_len(Self::WIDTH, out.len())?;
        out[..Self::WIDTH].copy_from_slice(&encode_be32(self));
        Ok(Self::WIDTH)
    }

    fn read_be(input: &[u8]) -> Result<Self, CodecError> {
        ensure_len(Self::WIDTH, input.len())?;
        Ok(decode_be32([input[0], input[1], input[2], input[3]]))
    }
}
