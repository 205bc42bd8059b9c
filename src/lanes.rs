//! 4-wide f32 lane vector used by the quaternion kernel.
//!
//! The struct is 16-byte aligned so one value fills a 128-bit vector register
//! (NEON `q` / SSE `xmm`). All methods are `#[inline(always)]` with fixed-size
//! per-lane loops, which LLVM lowers to single vector instructions on targets
//! with 128-bit SIMD. No operation depends on the actual lane mapping.

use std::ops::{Add, Div, Mul, Neg, Sub};

/// A 4-wide f32 vector laid out as `[w, x, y, z]` when it carries a quaternion.
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C, align(16))]
pub struct Float4([f32; 4]);

impl Float4 {
    /// Creates a new `Float4` from an array of 4 f32 values.
    ///
    /// # Example
    /// ```
    /// use hypercomplex::lanes::Float4;
    /// let v = Float4::new([1.0, 2.0, 3.0, 4.0]);
    /// assert_eq!(v.to_array(), [1.0, 2.0, 3.0, 4.0]);
    /// ```
    #[inline(always)]
    pub fn new(arr: [f32; 4]) -> Self {
        Self(arr)
    }

    /// Creates a `Float4` with all lanes set to the same value.
    ///
    /// Equivalent to NEON's `vdupq_n_f32`.
    #[inline(always)]
    pub fn splat(v: f32) -> Self {
        Self([v, v, v, v])
    }

    /// Extracts the lanes as an array.
    #[inline(always)]
    pub fn to_array(self) -> [f32; 4] {
        self.0
    }

    /// Rearranges lanes so that output lane `k` holds input lane `idx[k]`.
    ///
    /// Equivalent to a `vqtbl1q` / `shufps` with a constant mask.
    ///
    /// # Example
    /// ```
    /// use hypercomplex::lanes::Float4;
    /// let v = Float4::new([1.0, 2.0, 3.0, 4.0]);
    /// assert_eq!(v.shuffle([3, 2, 1, 0]).to_array(), [4.0, 3.0, 2.0, 1.0]);
    /// ```
    #[inline(always)]
    pub fn shuffle(self, idx: [usize; 4]) -> Self {
        Self([self.0[idx[0]], self.0[idx[1]], self.0[idx[2]], self.0[idx[3]]])
    }

    /// Horizontal sum of all four lanes.
    #[inline(always)]
    pub fn reduce_sum(self) -> f32 {
        (self.0[0] + self.0[1]) + (self.0[2] + self.0[3])
    }

    /// Dot product with another vector (`vmulq` followed by a horizontal add).
    #[inline(always)]
    pub fn dot(self, other: Self) -> f32 {
        (self * other).reduce_sum()
    }

    /// True when every lane is finite (not NaN, not ±infinity).
    #[inline(always)]
    pub fn all_finite(self) -> bool {
        self.0.iter().all(|v| v.is_finite())
    }
}

impl Add for Float4 {
    type Output = Self;

    /// Element-wise addition (`vaddq_f32`).
    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Self([
            self.0[0] + rhs.0[0],
            self.0[1] + rhs.0[1],
            self.0[2] + rhs.0[2],
            self.0[3] + rhs.0[3],
        ])
    }
}

impl Sub for Float4 {
    type Output = Self;

    /// Element-wise subtraction (`vsubq_f32`).
    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        Self([
            self.0[0] - rhs.0[0],
            self.0[1] - rhs.0[1],
            self.0[2] - rhs.0[2],
            self.0[3] - rhs.0[3],
        ])
    }
}

impl Mul for Float4 {
    type Output = Self;

    /// Element-wise multiplication (`vmulq_f32`).
    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        Self([
            self.0[0] * rhs.0[0],
            self.0[1] * rhs.0[1],
            self.0[2] * rhs.0[2],
            self.0[3] * rhs.0[3],
        ])
    }
}

impl Div for Float4 {
    type Output = Self;

    /// Element-wise division (`vdivq_f32`).
    #[inline(always)]
    fn div(self, rhs: Self) -> Self {
        Self([
            self.0[0] / rhs.0[0],
            self.0[1] / rhs.0[1],
            self.0[2] / rhs.0[2],
            self.0[3] / rhs.0[3],
        ])
    }
}

impl Neg for Float4 {
    type Output = Self;

    /// Lane-wise negation (`vnegq_f32`).
    #[inline(always)]
    fn neg(self) -> Self {
        Self([-self.0[0], -self.0[1], -self.0[2], -self.0[3]])
    }
}
