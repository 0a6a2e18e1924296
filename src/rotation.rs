//! Conversion between axis-angle rotations and unit quaternions
//!
//! The (axis, angle) form is redundant: `(a, θ)`, `(-a, -θ)` and `(a, θ + 2π)`
//! are the same rotation, and so are `q` and `-q`. Nothing here reduces a
//! rotation to a canonical form, so compare rotated vectors, not rotations.
//!
//! # Example
//! ```
//! use rotation_kernel::{Vec3, axis_angle_to_quat, quat_to_axis_angle};
//!
//! let axis = Vec3::new(0.0f64, 0.0, 2.0); // need not be unit
//! let q = axis_angle_to_quat(axis, 1.0, 1e-6).unwrap();
//!
//! let rotation = quat_to_axis_angle(q, 1e-6).unwrap();
//! assert!(rotation.axis.approx_eq(&Vec3::new(0.0, 0.0, 1.0), 1e-9));
//! assert!((rotation.angle - 1.0).abs() < 1e-9);
//! ```

use nalgebra::{ComplexField, RealField};

use crate::error::{KernelError, KernelResult};
use crate::quaternion::Quat;
use crate::scalar::Scalar;
use crate::vector::Vec3;

/// A rotation by `angle` radians about `axis`.
///
/// The axis is expected to be non-null unless the angle is zero. It does not
/// have to be unit length when converting to a quaternion; axes extracted
/// from a quaternion are always unit length.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AxisAngle<T> {
    /// Rotation axis
    pub axis: Vec3<T>,
    /// Rotation angle in radians, right-handed about `axis`
    pub angle: T,
}

impl<T: Scalar> AxisAngle<T> {
    /// Create a rotation of `angle` radians about `axis`
    pub fn new(axis: Vec3<T>, angle: T) -> Self {
        Self { axis, angle }
    }

    /// See [`axis_angle_to_quat`]
    pub fn to_quat(&self, tol: T) -> KernelResult<Quat<T>> {
        axis_angle_to_quat(self.axis, self.angle, tol)
    }

    /// See [`quat_to_axis_angle`]
    pub fn from_quat(q: Quat<T>, tol: T) -> KernelResult<Self> {
        quat_to_axis_angle(q, tol)
    }
}

/// Build the unit quaternion for a rotation of `angle_rad` about `axis`.
///
/// The axis is normalized here, it need not be unit already. The result is
/// `(cos(θ/2), â sin(θ/2))`.
///
/// A null axis (within `tol`) is accepted only with an angle within `tol` of
/// zero, which yields the identity. Any other angle about a null axis fails
/// with [`KernelError::NullVector`].
pub fn axis_angle_to_quat<T: Scalar>(axis: Vec3<T>, angle_rad: T, tol: T) -> KernelResult<Quat<T>> {
    if axis.is_null(tol) {
        if ComplexField::abs(angle_rad) <= tol {
            return Ok(Quat::identity());
        }
        log::trace!("rotation of {} rad about a null axis", angle_rad);
        return Err(KernelError::NullVector);
    }

    let (sin_half, cos_half) = (angle_rad * T::half()).sin_cos();
    let unit_axis = axis / axis.norm();

    Ok(Quat::from_parts(cos_half, unit_axis * sin_half))
}

/// Extract the rotation axis and angle from a unit quaternion.
///
/// The angle is `2 atan2(|u|, r)` for `q = (r, u)`, equal to `2 acos(r)` on
/// unit quaternions, and lies in `[0, 2π]`; the axis is unit length.
///
/// # Errors
/// - [`KernelError::NonUnitQuaternion`] when `q` is not unit within `tol`.
/// - [`KernelError::DegenerateAngle`] when the angle is 0 or 2π: the vector
///   part vanishes and no axis can be recovered.
pub fn quat_to_axis_angle<T: Scalar>(q: Quat<T>, tol: T) -> KernelResult<AxisAngle<T>> {
    if !q.is_unit(tol) {
        log::trace!("squared norm {} is not unit, no axis-angle", q.norm_squared());
        return Err(KernelError::NonUnitQuaternion);
    }

    // For an exactly unit quaternion this is sqrt(1 - r^2)
    let sin_half = q.vector_part().norm();
    if sin_half <= tol {
        log::trace!("vector part norm {} vanishes, axis undefined", sin_half);
        return Err(KernelError::DegenerateAngle);
    }

    // atan2 stays accurate where r rounds to +-1 and cannot disagree with the
    // degeneracy check above
    let angle = T::two() * RealField::atan2(sin_half, q.r);

    Ok(AxisAngle::new(q.vector_part() / sin_half, angle))
}

/// Combined rotation of applying `first`, then `second`.
///
/// This is the product `second * first`: the rightmost factor acts first.
#[inline]
pub fn compose<T: Scalar>(first: Quat<T>, second: Quat<T>) -> Quat<T> {
    second * first
}
