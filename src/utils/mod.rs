//! Byte-level helpers shared by the codec.

pub mod converter;
