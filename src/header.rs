//! Fixed-layout ciphertext header.
//!
//! Layout (little-endian, 40 bytes, natural alignment made explicit):
//!
//! ```text
//! 0..4    magic      u32   0xDEADBEEF
//! 4..8    reserved         zero
//! 8..16   length     u64   unpadded plaintext length
//! 16..32  key        4×f32 w, x, y, z
//! 32..36  checksum   u32   shift-xor checksum of the plaintext
//! 36..40  reserved         zero
//! ```

use crate::constants::{HEADER_LEN, MAGIC};
use crate::error::HcError;
use crate::quaternion::Quaternion;

/// Header written in front of every ciphertext.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockHeader {
    pub magic: u32,
    pub length: u64,
    pub key: Quaternion,
    pub checksum: u32,
}

impl BlockHeader {
    /// Encoded size in bytes.
    pub const LEN: usize = HEADER_LEN;

    /// Builds a header for a plaintext of `length` bytes.
    pub fn new(length: u64, key: Quaternion, checksum: u32) -> Self {
        BlockHeader {
            magic: MAGIC,
            length,
            key,
            checksum,
        }
    }

    /// Serializes the header into its 40-byte little-endian form.
    pub fn encode_le(&self) -> [u8; HEADER_LEN] {
        let mut out = [0u8; HEADER_LEN];
        let mut i = 0usize;

        fn put(out: &mut [u8], i: &mut usize, b: &[u8]) {
            out[*i..*i + b.len()].copy_from_slice(b);
            *i += b.len();
        }

        put(&mut out, &mut i, &self.magic.to_le_bytes()); // 0..4
        i += 4; // 4..8 reserved
        put(&mut out, &mut i, &self.length.to_le_bytes()); // 8..16
        for c in self.key.to_array() {
            put(&mut out, &mut i, &c.to_le_bytes()); // 16..32
        }
        put(&mut out, &mut i, &self.checksum.to_le_bytes()); // 32..36
        i += 4; // 36..40 reserved

        debug_assert_eq!(i, HEADER_LEN, "header encoding wrote incorrect length");
        out
    }

    /// Parses and validates a header from the front of `buf`.
    ///
    /// # Errors
    /// [`HcError::InvalidData`] if `buf` is shorter than the header or the
    /// magic does not match.
    pub fn decode_le(buf: &[u8]) -> Result<Self, HcError> {
        let buf: &[u8; HEADER_LEN] = buf
            .get(..HEADER_LEN)
            .and_then(|b| b.try_into().ok())
            .ok_or(HcError::InvalidData)?;

        let u32_at = |o: usize| u32::from_le_bytes([buf[o], buf[o + 1], buf[o + 2], buf[o + 3]]);
        let f32_at = |o: usize| f32::from_bits(u32_at(o));

        let magic = u32_at(0);
        if magic != MAGIC {
            return Err(HcError::InvalidData);
        }

        let mut length = [0u8; 8];
        length.copy_from_slice(&buf[8..16]);

        Ok(BlockHeader {
            magic,
            length: u64::from_le_bytes(length),
            key: Quaternion::new(f32_at(16), f32_at(20), f32_at(24), f32_at(28)),
            checksum: u32_at(32),
        })
    }
}
