//! Applying a quaternion rotation to vectors
//!
//! Two algorithms are provided and agree on unit quaternions:
//!
//! - [`rotate_direct`] evaluates the conjugation `q · [0, v] · q*` with two
//!   Hamilton products. It checks that `q` is unit and reports failure.
//! - [`rotate_rodrigues`] evaluates the closed form
//!   `2 ((u·v) u + (s² - ½) v + s (u × v))`. It is faster and **does not check
//!   anything**.
//!
//! Both are active rotations: the vector moves, the frame stays fixed.
//!
//! # Example
//! ```
//! use rotation_kernel::{Vec3, axis_angle_to_quat, rotate_direct, rotate_rodrigues};
//!
//! let q = axis_angle_to_quat(Vec3::new(0.0f32, 0.0, 1.0), core::f32::consts::FRAC_PI_2, 1e-4).unwrap();
//! let v = Vec3::new(1.0f32, 0.0, 0.0);
//!
//! let direct = rotate_direct(v, q, 1e-4).unwrap();
//! let fast = rotate_rodrigues(v, q);
//!
//! assert!(direct.approx_eq(&Vec3::new(0.0, 1.0, 0.0), 1e-4));
//! assert!(fast.approx_eq(&direct, 1e-4));
//! ```

use crate::error::{KernelError, KernelResult};
use crate::quaternion::Quat;
use crate::scalar::Scalar;
use crate::vector::Vec3;

/// Rotate `v` by the unit quaternion `q` through the conjugation product
/// `q · [0, v] · conjugate(q)`.
///
/// Fails with [`KernelError::NonUnitQuaternion`] when `q` is not unit within
/// `tol`. The unchecked product is available as [`sandwich`] for callers that
/// want the value anyway.
pub fn rotate_direct<T: Scalar>(v: Vec3<T>, q: Quat<T>, tol: T) -> KernelResult<Vec3<T>> {
    if !q.is_unit(tol) {
        log::trace!("squared norm {} is not unit, refusing to rotate", q.norm_squared());
        return Err(KernelError::NonUnitQuaternion);
    }
    Ok(sandwich(v, q))
}

/// The conjugation product `q · [0, v] · conjugate(q)`, projected back to a
/// vector, without any check.
///
/// For a non-unit `q` the result is the rotation scaled by `|q|²`.
#[inline]
pub fn sandwich<T: Scalar>(v: Vec3<T>, q: Quat<T>) -> Vec3<T> {
    (q * Quat::pure(v) * q.conjugate()).vector_part()
}

/// Rotate `v` by `q = (s, u)` with the closed-form Rodrigues formula
/// `R(v) = 2 ((u·v) u + (s² - ½) v + s (u × v))`.
///
/// # Unchecked
///
/// `q` **must be a unit quaternion**. Nothing is checked and there is no
/// failure signal: a non-unit `q` silently yields a scaled and sheared
/// vector that is not a rotation. Use [`rotate_direct`] when the input is not
/// trusted.
#[inline]
pub fn rotate_rodrigues<T: Scalar>(v: Vec3<T>, q: Quat<T>) -> Vec3<T> {
    let s = q.r;
    let u = q.vector_part();

    (u * u.dot(&v) + v * (s * s - T::half()) + u.cross(&v) * s) * T::two()
}

/// Rotate every vector of `points` in place with [`rotate_rodrigues`].
///
/// Same unit-quaternion precondition, same absence of checks. Each element
/// is independent, so callers may split the slice across threads.
pub fn rotate_all<T: Scalar>(points: &mut [Vec3<T>], q: Quat<T>) {
    for point in points.iter_mut() {
        *point = rotate_rodrigues(*point, q);
    }
}
