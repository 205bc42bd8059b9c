//! Return-code style kernel surface.
//!
//! Mirrors the classic `op(in, in, out) -> code` calling convention, where any
//! reference may be absent. Absent references map to [`HcError::NullPointer`],
//! checked before any arithmetic. Because [`Quaternion`] is `Copy`, a caller
//! that wants the output to alias an input simply passes a copy of the input
//! and the variable itself as `out`.

use crate::error::HcError;
use crate::quaternion::Quaternion;

/// Writes `a * b` into `out`.
///
/// # Errors
/// [`HcError::NullPointer`] if any reference is `None`; `out` is untouched.
///
/// # Examples
///
/// ```
/// use hypercomplex::{kernel, Quaternion};
///
/// let mut q = Quaternion::new(0.0, 1.0, 0.0, 0.0);
/// let j = Quaternion::new(0.0, 0.0, 1.0, 0.0);
/// let a = q;
/// kernel::multiply(Some(&a), Some(&j), Some(&mut q)).unwrap();
/// assert_eq!(q, Quaternion::new(0.0, 0.0, 0.0, 1.0));
/// ```
pub fn multiply(
    a: Option<&Quaternion>,
    b: Option<&Quaternion>,
    out: Option<&mut Quaternion>,
) -> Result<(), HcError> {
    let (a, b, out) = require3(a, b, out)?;
    *out = a.multiply(b);
    Ok(())
}

/// Writes `a + b` into `out`.
///
/// # Errors
/// [`HcError::NullPointer`] if any reference is `None`.
pub fn add(
    a: Option<&Quaternion>,
    b: Option<&Quaternion>,
    out: Option<&mut Quaternion>,
) -> Result<(), HcError> {
    let (a, b, out) = require3(a, b, out)?;
    *out = *a + *b;
    Ok(())
}

/// Writes the conjugate of `input` into `out`.
///
/// # Errors
/// [`HcError::NullPointer`] if any reference is `None`.
pub fn conjugate(input: Option<&Quaternion>, out: Option<&mut Quaternion>) -> Result<(), HcError> {
    let (input, out) = require2(input, out)?;
    *out = input.conjugate();
    Ok(())
}

/// Returns the norm of `q`, or `NaN` when `q` is absent.
///
/// Unlike the other operations this one has no error channel: the NaN
/// sentinel is the only failure signal.
pub fn norm(q: Option<&Quaternion>) -> f32 {
    match q {
        Some(q) => q.norm(),
        None => f32::NAN,
    }
}

/// Writes the unit quaternion `input / norm(input)` into `out`.
///
/// On failure `out` keeps its previous value.
///
/// # Errors
/// - [`HcError::NullPointer`] if any reference is `None`.
/// - [`HcError::DivideByZero`] if `norm(input) < 1e-6`.
pub fn normalize(input: Option<&Quaternion>, out: Option<&mut Quaternion>) -> Result<(), HcError> {
    let (input, out) = require2(input, out)?;
    *out = input.normalize()?;
    Ok(())
}

/// True iff `q` is present and all its components are finite.
pub fn is_valid(q: Option<&Quaternion>) -> bool {
    q.is_some_and(Quaternion::is_valid)
}

fn require2<'a, 'b>(
    input: Option<&'a Quaternion>,
    out: Option<&'b mut Quaternion>,
) -> Result<(&'a Quaternion, &'b mut Quaternion), HcError> {
    match (input, out) {
        (Some(input), Some(out)) => Ok((input, out)),
        _ => Err(HcError::NullPointer),
    }
}

fn require3<'a, 'b, 'c>(
    a: Option<&'a Quaternion>,
    b: Option<&'b Quaternion>,
    out: Option<&'c mut Quaternion>,
) -> Result<(&'a Quaternion, &'b Quaternion, &'c mut Quaternion), HcError> {
    match (a, b, out) {
        (Some(a), Some(b), Some(out)) => Ok((a, b, out)),
        _ => Err(HcError::NullPointer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q1() -> Quaternion {
        Quaternion::new(1.0, 2.0, 3.0, 4.0)
    }
    fn q2() -> Quaternion {
        Quaternion::new(5.0, 6.0, 7.0, 8.0)
    }

    #[test]
    fn test_null_pointer_multiply() {
        let mut r = Quaternion::zero();
        assert_eq!(multiply(None, Some(&q2()), Some(&mut r)), Err(HcError::NullPointer));
        assert_eq!(multiply(Some(&q1()), None, Some(&mut r)), Err(HcError::NullPointer));
        assert_eq!(multiply(Some(&q1()), Some(&q2()), None), Err(HcError::NullPointer));
        assert_eq!(r, Quaternion::zero());
    }

    #[test]
    fn test_null_pointer_add() {
        let mut r = Quaternion::zero();
        assert_eq!(add(None, Some(&q2()), Some(&mut r)), Err(HcError::NullPointer));
        assert_eq!(add(Some(&q1()), None, Some(&mut r)), Err(HcError::NullPointer));
        assert_eq!(add(Some(&q1()), Some(&q2()), None), Err(HcError::NullPointer));
    }

    #[test]
    fn test_null_pointer_conjugate_normalize() {
        let mut r = Quaternion::zero();
        assert_eq!(conjugate(None, Some(&mut r)), Err(HcError::NullPointer));
        assert_eq!(conjugate(Some(&q1()), None), Err(HcError::NullPointer));
        assert_eq!(normalize(None, Some(&mut r)), Err(HcError::NullPointer));
        assert_eq!(normalize(Some(&q1()), None), Err(HcError::NullPointer));
    }

    #[test]
    fn test_null_checked_before_domain() {
        // A zero input would be DivideByZero, but the missing output wins.
        assert_eq!(
            normalize(Some(&Quaternion::zero()), None),
            Err(HcError::NullPointer)
        );
    }

    #[test]
    fn test_norm_sentinel() {
        assert!(norm(None).is_nan());
        assert_eq!(norm(Some(&Quaternion::new(0.0, 3.0, 4.0, 0.0))), 5.0);
    }

    #[test]
    fn test_is_valid_absent() {
        assert!(!is_valid(None));
        assert!(is_valid(Some(&q1())));
    }

    #[test]
    fn test_success_paths() {
        let mut r = Quaternion::zero();
        add(Some(&q1()), Some(&q2()), Some(&mut r)).unwrap();
        assert_eq!(r, Quaternion::new(6.0, 8.0, 10.0, 12.0));

        conjugate(Some(&q1()), Some(&mut r)).unwrap();
        assert_eq!(r, Quaternion::new(1.0, -2.0, -3.0, -4.0));

        multiply(Some(&q1()), Some(&q2()), Some(&mut r)).unwrap();
        assert_eq!(r, Quaternion::new(-60.0, 12.0, 30.0, 24.0));
    }

    #[test]
    fn test_normalize_in_place() {
        let mut q = q1();
        let input = q;
        normalize(Some(&input), Some(&mut q)).unwrap();
        assert!((q.norm() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_normalize_zero_leaves_output() {
        let sentinel = Quaternion::new(9.0, 9.0, 9.0, 9.0);
        let mut out = sentinel;
        assert_eq!(
            normalize(Some(&Quaternion::zero()), Some(&mut out)),
            Err(HcError::DivideByZero)
        );
        assert_eq!(out, sentinel);
    }
}
