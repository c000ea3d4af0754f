//! Byte-array conversion helpers for inspecting protocol payloads: hex
//! codecs, readable control-code dumps, and byte-wise xor.
#![warn(clippy::pedantic)]
#![warn(clippy::cargo)]

mod bytes_ext;
mod hex;
mod printable;

pub use bytes_ext::{BytesExt, LengthMismatch};
pub use hex::{
    hex_decode, hex_encode, hex_encode_paired, hex_encode_sep, hex_encode_spaced, hex_encode_with,
    DecodeError, HexFormat,
};
pub use printable::printable;
