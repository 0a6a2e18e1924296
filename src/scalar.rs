//! Scalar type, build precision and tolerance utilities

use nalgebra::{ComplexField, RealField};

/// Floating-point scalar used by every kernel type.
///
/// Implemented for [`f32`] and [`f64`]. Each implementation carries its own
/// default absolute tolerance, which is what every predicate in this crate
/// uses when the caller has no better value.
pub trait Scalar: RealField + Copy {
    /// Default absolute tolerance for comparisons at this precision.
    const DEFAULT_TOLERANCE: Self;

    /// `0.5`
    #[inline]
    fn half() -> Self {
        nalgebra::convert::<f64, Self>(0.5)
    }

    /// `2.0`
    #[inline]
    fn two() -> Self {
        nalgebra::convert::<f64, Self>(2.0)
    }
}

impl Scalar for f32 {
    const DEFAULT_TOLERANCE: Self = 1.0e-4;
}

impl Scalar for f64 {
    const DEFAULT_TOLERANCE: Self = 1.0e-6;
}

/// Build-wide floating point precision.
///
/// `f32` unless the `f64` feature is enabled. Pick one per program and stick
/// to it; the generic types accept either.
#[cfg(not(feature = "f64"))]
pub type Real = f32;

/// Build-wide floating point precision.
#[cfg(feature = "f64")]
pub type Real = f64;

/// Default tolerance at the build precision.
pub const DEFAULT_TOL: Real = <Real as Scalar>::DEFAULT_TOLERANCE;

/// Returns true when `a` and `b` differ by at most `tol`.
///
/// This is an absolute comparison: callers working with very large or very
/// small magnitudes must scale `tol` themselves.
///
/// # Example
/// ```
/// use rotation_kernel::is_approx;
///
/// assert!(is_approx(1.0f32, 1.00005, 1e-4));
/// assert!(!is_approx(1.0f32, 1.001, 1e-4));
/// ```
#[inline]
pub fn is_approx<T: Scalar>(a: T, b: T, tol: T) -> bool {
    ComplexField::abs(a - b) <= tol
}

/// Convert degrees to radians
#[inline]
pub fn deg_to_rad<T: Scalar>(degrees: T) -> T {
    degrees * T::pi() / nalgebra::convert::<f64, T>(180.0)
}

/// Convert radians to degrees
#[inline]
pub fn rad_to_deg<T: Scalar>(radians: T) -> T {
    radians * nalgebra::convert::<f64, T>(180.0) / T::pi()
}
