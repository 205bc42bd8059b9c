//! Byte-to-quaternion conversion utilities.
//!
//! A 16-byte plaintext block is read as eight little-endian `u16` words.
//! Each run of four words becomes one quaternion whose lanes hold
//! `word - 32768` as `f32`, so one block spreads over two quaternions.
//! Ciphertext quaternions are stored as four little-endian `f32` values.

use crate::constants::{BLOCK_LEN, LANE_BIAS, LANES_PER_BLOCK, QUATERNION_LEN};
use crate::quaternion::Quaternion;

/// Splits a plaintext block into its two lane quaternions.
///
/// # Parameters
/// - `block`: One padded 16-byte plaintext block.
///
/// # Returns
/// Two quaternions covering bytes `0..8` and `8..16` respectively.
pub fn block_to_quaternions(block: &[u8; BLOCK_LEN]) -> [Quaternion; 2] {
    let mut lanes = [0f32; LANES_PER_BLOCK];
    for (lane, word) in lanes.iter_mut().zip(block.chunks_exact(2)) {
        *lane = u16::from_le_bytes([word[0], word[1]]) as f32 - LANE_BIAS;
    }
    [
        Quaternion::new(lanes[0], lanes[1], lanes[2], lanes[3]),
        Quaternion::new(lanes[4], lanes[5], lanes[6], lanes[7]),
    ]
}

/// Reassembles a plaintext block from two (possibly perturbed) lane quaternions.
///
/// Each lane is rounded to the nearest integer and clamped to the `u16`
/// word range, absorbing the rounding error of the forward and inverse
/// multiplications. Non-finite lanes decode to word `0`.
pub fn quaternions_to_block(lanes: &[Quaternion; 2]) -> [u8; BLOCK_LEN] {
    let mut block = [0u8; BLOCK_LEN];
    let values = lanes.iter().flat_map(|q| q.to_array());
    for (dst, v) in block.chunks_exact_mut(2).zip(values) {
        dst.copy_from_slice(&lane_to_word(v).to_le_bytes());
    }
    block
}

fn lane_to_word(v: f32) -> u16 {
    if !v.is_finite() {
        return 0;
    }
    (v + LANE_BIAS).round().clamp(0.0, u16::MAX as f32) as u16
}

/// Encodes a quaternion as `w, x, y, z` little-endian `f32` values.
pub fn quaternion_to_bytes(q: &Quaternion) -> [u8; QUATERNION_LEN] {
    let mut out = [0u8; QUATERNION_LEN];
    for (dst, c) in out.chunks_exact_mut(4).zip(q.to_array()) {
        dst.copy_from_slice(&c.to_le_bytes());
    }
    out
}

/// Decodes a quaternion from 16 little-endian bytes.
///
/// # Parameters
/// - `input`: Slice of at least 16 bytes; only the first 16 are read.
pub fn quaternion_from_bytes(input: &[u8]) -> Quaternion {
    let mut c = [0f32; 4];
    for (dst, src) in c.iter_mut().zip(input[..QUATERNION_LEN].chunks_exact(4)) {
        *dst = f32::from_le_bytes([src[0], src[1], src[2], src[3]]);
    }
    Quaternion::from_array(c)
}
