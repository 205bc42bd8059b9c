//! Deterministic key derivation from a 64-bit seed.
//!
//! A linear-congruential generator produces four 16-bit samples which are
//! mapped to `[-1, 1]` and normalized into a unit quaternion. The same seed
//! always yields the same key, which is what lets `decrypt` reproduce the
//! key used by `encrypt`.

use crate::constants::lcg::{COMPONENT_MASK, INCREMENT, MULTIPLIER};
use crate::error::HcError;
use crate::quaternion::Quaternion;

/// Linear-congruential generator `state = state * 1103515245 + 12345 (mod 2^64)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lcg {
    state: u64,
}

impl Lcg {
    /// Creates a generator whose first step starts from `seed`.
    pub fn with_seed(seed: u64) -> Self {
        Lcg { state: seed }
    }

    /// Current state (the last value produced, or the seed).
    pub fn state(&self) -> u64 {
        self.state
    }

    /// Advances the generator and returns the new state.
    pub fn next_state(&mut self) -> u64 {
        self.state = self.state.wrapping_mul(MULTIPLIER).wrapping_add(INCREMENT);
        self.state
    }

    /// Advances the generator and maps the low 16 bits into `[-1, 1]`.
    pub fn next_unit(&mut self) -> f32 {
        let bits = (self.next_state() & COMPONENT_MASK) as f32;
        bits / 65535.0 * 2.0 - 1.0
    }
}

/// Derives the raw (not yet normalized) key components for `seed`.
pub fn raw_key(seed: u64) -> Quaternion {
    let mut lcg = Lcg::with_seed(seed);
    let w = lcg.next_unit();
    let x = lcg.next_unit();
    let y = lcg.next_unit();
    let z = lcg.next_unit();
    Quaternion::new(w, x, y, z)
}

/// Derives a unit-norm key quaternion from `seed`.
///
/// # Errors
/// Returns [`HcError::DivideByZero`] if the four raw samples form a
/// degenerate (near-zero) quaternion.
///
/// # Examples
///
/// ```
/// use hypercomplex::derive_key;
///
/// let k1 = derive_key(12345).unwrap();
/// let k2 = derive_key(12345).unwrap();
/// assert_eq!(k1, k2);
/// assert!((k1.norm() - 1.0).abs() < 1e-5);
/// ```
pub fn derive_key(seed: u64) -> Result<Quaternion, HcError> {
    raw_key(seed).normalize()
}
