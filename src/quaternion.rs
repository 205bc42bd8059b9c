//! Single-precision quaternion value type and its arithmetic.
//!
//! Every operation works on the whole quaternion at once through [`Float4`],
//! so the results never depend on how the four lanes are mapped to hardware.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use crate::constants::NORM_EPSILON;
use crate::error::HcError;
use crate::lanes::Float4;

/// Lane permutations and sign masks for the Hamilton product.
///
/// `a * b` is `aw*b + ax*(P1 b) + ay*(P2 b) + az*(P3 b)`, where `Pn` rearranges
/// `b` and flips the signs shown here.
const PERM_X: [usize; 4] = [1, 0, 3, 2];
const SIGN_X: [f32; 4] = [-1.0, 1.0, -1.0, 1.0];
const PERM_Y: [usize; 4] = [2, 3, 0, 1];
const SIGN_Y: [f32; 4] = [-1.0, 1.0, 1.0, -1.0];
const PERM_Z: [usize; 4] = [3, 2, 1, 0];
const SIGN_Z: [f32; 4] = [-1.0, -1.0, 1.0, 1.0];

/// A quaternion `w + xi + yj + zk` with `f32` components.
///
/// `repr(C)` keeps the field order `w, x, y, z`, matching the wire layout
/// used by the block codec.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[repr(C)]
pub struct Quaternion {
    pub w: f32,
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Quaternion {
    /// Creates a quaternion from its four components.
    pub const fn new(w: f32, x: f32, y: f32, z: f32) -> Self {
        Quaternion { w, x, y, z }
    }

    /// The multiplicative identity `(1, 0, 0, 0)`.
    pub const fn identity() -> Self {
        Quaternion::new(1.0, 0.0, 0.0, 0.0)
    }

    /// The zero quaternion.
    pub const fn zero() -> Self {
        Quaternion::new(0.0, 0.0, 0.0, 0.0)
    }

    /// Builds a quaternion from `[w, x, y, z]`.
    pub const fn from_array(c: [f32; 4]) -> Self {
        Quaternion::new(c[0], c[1], c[2], c[3])
    }

    /// Returns the components as `[w, x, y, z]`.
    pub const fn to_array(self) -> [f32; 4] {
        [self.w, self.x, self.y, self.z]
    }

    #[inline(always)]
    fn lanes(self) -> Float4 {
        Float4::new(self.to_array())
    }

    #[inline(always)]
    fn from_lanes(v: Float4) -> Self {
        Quaternion::from_array(v.to_array())
    }

    /// Hamilton product `self * rhs`.
    ///
    /// Non-commutative: `i * j = k` but `j * i = -k`.
    ///
    /// # Examples
    ///
    /// ```
    /// use hypercomplex::Quaternion;
    ///
    /// let i = Quaternion::new(0.0, 1.0, 0.0, 0.0);
    /// let j = Quaternion::new(0.0, 0.0, 1.0, 0.0);
    /// assert_eq!(i.multiply(&j), Quaternion::new(0.0, 0.0, 0.0, 1.0));
    /// assert_eq!(j.multiply(&i), Quaternion::new(0.0, 0.0, 0.0, -1.0));
    /// ```
    #[inline]
    pub fn multiply(&self, rhs: &Quaternion) -> Quaternion {
        let b = rhs.lanes();
        let bx = b.shuffle(PERM_X) * Float4::new(SIGN_X);
        let by = b.shuffle(PERM_Y) * Float4::new(SIGN_Y);
        let bz = b.shuffle(PERM_Z) * Float4::new(SIGN_Z);

        let acc = Float4::splat(self.w) * b
            + Float4::splat(self.x) * bx
            + Float4::splat(self.y) * by
            + Float4::splat(self.z) * bz;
        Quaternion::from_lanes(acc)
    }

    /// Conjugate `(w, -x, -y, -z)`.
    #[inline]
    pub fn conjugate(&self) -> Quaternion {
        Quaternion::from_lanes(self.lanes() * Float4::new([1.0, -1.0, -1.0, -1.0]))
    }

    /// Squared Euclidean length of the 4-tuple.
    #[inline]
    pub fn norm_squared(&self) -> f32 {
        let v = self.lanes();
        v.dot(v)
    }

    /// Euclidean length `sqrt(w² + x² + y² + z²)`.
    #[inline]
    pub fn norm(&self) -> f32 {
        self.norm_squared().sqrt()
    }

    /// Multiplies every component by `s`.
    #[inline]
    pub fn scale(&self, s: f32) -> Quaternion {
        Quaternion::from_lanes(self.lanes() * Float4::splat(s))
    }

    /// Divides every component by the norm.
    ///
    /// # Errors
    /// - [`HcError::DivideByZero`] if the norm is below `1e-6`.
    /// - [`HcError::InvalidData`] if the norm overflows `f32`.
    ///
    /// # Examples
    ///
    /// ```
    /// use hypercomplex::Quaternion;
    ///
    /// let q = Quaternion::new(0.0, 3.0, 4.0, 0.0).normalize().unwrap();
    /// assert!((q.norm() - 1.0).abs() < 1e-6);
    /// assert!(Quaternion::zero().normalize().is_err());
    /// ```
    pub fn normalize(&self) -> Result<Quaternion, HcError> {
        let n = self.norm();
        if n.is_nan() || n < NORM_EPSILON {
            return Err(HcError::DivideByZero);
        }
        if !n.is_finite() {
            return Err(HcError::InvalidData);
        }
        Ok(Quaternion::from_lanes(self.lanes() / Float4::splat(n)))
    }

    /// Multiplicative inverse `conjugate / norm²`.
    ///
    /// For a unit quaternion this equals the conjugate up to rounding.
    ///
    /// # Errors
    /// - [`HcError::DivideByZero`] if the norm is below `1e-6`.
    /// - [`HcError::InvalidData`] if `norm²` overflows `f32` (norm above
    ///   roughly `1.8e19`), where the result would collapse to zero.
    pub fn inverse(&self) -> Result<Quaternion, HcError> {
        let n = self.norm();
        if n.is_nan() || n < NORM_EPSILON {
            return Err(HcError::DivideByZero);
        }
        let n2 = self.norm_squared();
        if !n2.is_finite() {
            return Err(HcError::InvalidData);
        }
        let conj = self.conjugate().lanes();
        Ok(Quaternion::from_lanes(conj / Float4::splat(n2)))
    }

    /// True iff all four components are finite.
    ///
    /// Subnormal and very large finite values are valid.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.lanes().all_finite()
    }

    /// Component-wise comparison with an absolute tolerance.
    pub fn approx_eq(&self, other: &Quaternion, tol: f32) -> bool {
        self.to_array()
            .iter()
            .zip(other.to_array().iter())
            .all(|(a, b)| (a - b).abs() <= tol)
    }
}

impl Mul for Quaternion {
    type Output = Quaternion;

    fn mul(self, rhs: Quaternion) -> Quaternion {
        self.multiply(&rhs)
    }
}

impl Add for Quaternion {
    type Output = Quaternion;

    /// Component-wise sum.
    fn add(self, rhs: Quaternion) -> Quaternion {
        Quaternion::from_lanes(self.lanes() + rhs.lanes())
    }
}

impl Sub for Quaternion {
    type Output = Quaternion;

    fn sub(self, rhs: Quaternion) -> Quaternion {
        Quaternion::from_lanes(self.lanes() - rhs.lanes())
    }
}

impl Neg for Quaternion {
    type Output = Quaternion;

    fn neg(self) -> Quaternion {
        Quaternion::from_lanes(-self.lanes())
    }
}

impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({:.6}, {:.6}i, {:.6}j, {:.6}k)",
            self.w, self.x, self.y, self.z
        )
    }
}
