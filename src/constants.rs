//! Fixed parameters shared by the arithmetic kernel, key derivation and codec.

/// Header sentinel written by `encrypt` and checked by `decrypt`.
pub const MAGIC: u32 = 0xDEAD_BEEF;

/// Plaintext is padded to a multiple of this many bytes.
pub const BLOCK_LEN: usize = 16;

/// Encoded size of one quaternion (four little-endian `f32`).
pub const QUATERNION_LEN: usize = 16;

/// Number of 16-bit lanes a plaintext block is split into.
pub const LANES_PER_BLOCK: usize = BLOCK_LEN / 2;

/// Ciphertext bytes produced per plaintext block (two quaternions).
pub const CIPHER_BLOCK_LEN: usize = 2 * QUATERNION_LEN;

/// Encoded header size: magic, pad, length, key, checksum, pad.
pub const HEADER_LEN: usize = 40;

/// Below this norm `normalize` and `inverse` refuse to divide.
pub const NORM_EPSILON: f32 = 1e-6;

/// Largest key norm `encrypt` accepts. Keeps `norm²` and every transformed
/// lane (at most `65536 * norm`) finite.
pub const MAX_KEY_NORM: f32 = 1e18;

/// Offset subtracted from each 16-bit lane before it enters a quaternion.
pub const LANE_BIAS: f32 = 32768.0;

/// Key derivation LCG parameters.
pub mod lcg {
    pub const MULTIPLIER: u64 = 1_103_515_245;
    pub const INCREMENT: u64 = 12_345;
    /// Only the low 16 bits of each state feed a key component.
    pub const COMPONENT_MASK: u64 = 0xFFFF;
}

/// Operands of the multiply micro-benchmark.
pub mod bench {
    pub const LHS: [f32; 4] = [1.0, 2.0, 3.0, 4.0];
    pub const RHS: [f32; 4] = [0.5, 1.5, 2.5, 3.5];
    pub const DEFAULT_ITERATIONS: usize = 10_000_000;
    /// Bytes read per multiplication: two 16-byte operands.
    pub const OPERAND_BYTES: usize = 2 * super::QUATERNION_LEN;
}
