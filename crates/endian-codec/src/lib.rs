//! Big-Endian Wire Codec
//!
//! Byte-swap routines for fixed-width unsigned integers and helpers that
//! read/write them as big-endian wire fields. Every function here is pure
//! and safe to call from any thread.

mod error;
mod swap;
mod wire;

pub use error::CodecError;
pub use swap::{to_big_endian_16, to_big_endian_32};
pub use wire::{decode_be16, decode_be32, encode_be16, encode_be32, WireSample};
