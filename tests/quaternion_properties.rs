//! Algebraic properties of the quaternion kernel.
//!
//! Fixed-value checks cover the Hamilton structure constants and the
//! documented norm values; the `proptest!` block covers the laws over
//! bounded random operands.

use hypercomplex::{kernel, HcError, Quaternion};
use proptest::prelude::*;

const I: Quaternion = Quaternion::new(0.0, 1.0, 0.0, 0.0);
const J: Quaternion = Quaternion::new(0.0, 0.0, 1.0, 0.0);
const K: Quaternion = Quaternion::new(0.0, 0.0, 0.0, 1.0);
const MINUS_ONE: Quaternion = Quaternion::new(-1.0, 0.0, 0.0, 0.0);

// ═══════════════════════════════════════════════════════════════════════
// Structure constants
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn identity_is_neutral_on_both_sides() {
    let q = Quaternion::new(1.5, -2.0, 3.25, -4.0);
    assert_eq!(Quaternion::identity() * q, q);
    assert_eq!(q * Quaternion::identity(), q);
}

#[test]
fn squares_of_units_are_minus_one() {
    assert_eq!(I * I, MINUS_ONE);
    assert_eq!(J * J, MINUS_ONE);
    assert_eq!(K * K, MINUS_ONE);
    assert_eq!(I * J * K, MINUS_ONE);
}

#[test]
fn cyclic_unit_products() {
    assert_eq!(I * J, K);
    assert_eq!(J * K, I);
    assert_eq!(K * I, J);
    assert_eq!(J * I, -K);
    assert_eq!(K * J, -I);
    assert_eq!(I * K, -J);
}

#[test]
fn multiplication_is_not_commutative() {
    let a = Quaternion::new(1.0, 2.0, 3.0, 4.0);
    let b = Quaternion::new(5.0, 6.0, 7.0, 8.0);
    assert_eq!(a * b, Quaternion::new(-60.0, 12.0, 30.0, 24.0));
    assert_eq!(b * a, Quaternion::new(-60.0, 20.0, 14.0, 32.0));
    assert_ne!(a * b, b * a);
}

#[test]
fn associativity_on_integer_operands() {
    let a = Quaternion::new(1.0, 2.0, 3.0, 4.0);
    let b = Quaternion::new(5.0, 6.0, 7.0, 8.0);
    let c = Quaternion::new(9.0, 10.0, 11.0, 12.0);
    assert!(((a * b) * c).approx_eq(&(a * (b * c)), 1e-5));
}

// ═══════════════════════════════════════════════════════════════════════
// Norms, normalize and validity
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn documented_norm_values() {
    assert_eq!(Quaternion::new(3.0, 4.0, 0.0, 0.0).norm(), 5.0);
    let n = Quaternion::new(1.0, 2.0, 3.0, 4.0).norm();
    assert!((n - 30f32.sqrt()).abs() < 1e-6);
    assert!(kernel::norm(None).is_nan());
}

#[test]
fn normalize_zero_leaves_output_untouched() {
    let sentinel = Quaternion::new(7.0, 7.0, 7.0, 7.0);
    let mut out = sentinel;
    assert_eq!(
        kernel::normalize(Some(&Quaternion::zero()), Some(&mut out)),
        Err(HcError::DivideByZero)
    );
    assert_eq!(out, sentinel);
}

#[test]
fn absent_references_are_rejected() {
    let q = Quaternion::identity();
    let mut out = Quaternion::zero();
    assert_eq!(
        kernel::multiply(None, Some(&q), Some(&mut out)),
        Err(HcError::NullPointer)
    );
    assert_eq!(kernel::add(Some(&q), Some(&q), None), Err(HcError::NullPointer));
    assert_eq!(kernel::conjugate(None, Some(&mut out)), Err(HcError::NullPointer));
    assert_eq!(out, Quaternion::zero());
    assert!(!kernel::is_valid(None));
}

#[test]
fn validity_rejects_non_finite_components() {
    assert!(Quaternion::new(1.0, 2.0, 3.0, 4.0).is_valid());
    assert!(Quaternion::new(1e-10, 0.0, 0.0, 0.0).is_valid());
    assert!(Quaternion::new(1e10, -1e10, 0.0, 0.0).is_valid());
    assert!(!Quaternion::new(f32::INFINITY, 0.0, 0.0, 0.0).is_valid());
    assert!(!Quaternion::new(f32::NAN, 0.0, 0.0, 0.0).is_valid());
    assert!(!Quaternion::new(0.0, 0.0, f32::NEG_INFINITY, 0.0).is_valid());
}

// ═══════════════════════════════════════════════════════════════════════
// Property tests
// ═══════════════════════════════════════════════════════════════════════

fn small_quaternion() -> impl Strategy<Value = Quaternion> {
    (-1.0f32..1.0, -1.0f32..1.0, -1.0f32..1.0, -1.0f32..1.0)
        .prop_map(|(w, x, y, z)| Quaternion::new(w, x, y, z))
}

proptest! {
    #[test]
    fn prop_associative(a in small_quaternion(), b in small_quaternion(), c in small_quaternion()) {
        prop_assert!(((a * b) * c).approx_eq(&(a * (b * c)), 1e-4));
    }

    #[test]
    fn prop_conjugate_reverses_products(a in small_quaternion(), b in small_quaternion()) {
        let lhs = (a * b).conjugate();
        let rhs = b.conjugate() * a.conjugate();
        prop_assert!(lhs.approx_eq(&rhs, 1e-5));
    }

    #[test]
    fn prop_norm_is_multiplicative(a in small_quaternion(), b in small_quaternion()) {
        prop_assert!(((a * b).norm() - a.norm() * b.norm()).abs() < 1e-5);
    }

    #[test]
    fn prop_normalize_yields_unit(q in small_quaternion()) {
        prop_assume!(q.norm() > 1e-3);
        let u = q.normalize().unwrap();
        prop_assert!((u.norm() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn prop_inverse_cancels(q in small_quaternion()) {
        prop_assume!(q.norm() > 1e-1);
        let inv = q.inverse().unwrap();
        prop_assert!((q * inv).approx_eq(&Quaternion::identity(), 1e-4));
    }
}
