//! Quaternion algebra

use core::fmt;
use core::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

use approx::AbsDiffEq;
use nalgebra::ComplexField;

use crate::error::{KernelError, KernelResult};
use crate::scalar::{Scalar, is_approx};
use crate::vector::Vec3;

/// A quaternion `r + i·i + j·j + k·k`: a scalar part fused with a vector
/// part.
///
/// Any quaternion is valid for the generic algebra (product, conjugate,
/// inverse). Only unit quaternions (squared norm within tolerance of one)
/// represent rotations; the rotation functions check or assume that.
///
/// # Example
/// ```
/// use rotation_kernel::Quat;
///
/// let q = Quat::new(1.0f32, 2.0, 3.0, 4.0);
/// assert_eq!(q.conjugate().conjugate(), q);
/// assert!(!q.is_unit(1e-4));
/// assert!(Quat::<f32>::identity().is_unit(1e-4));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quat<T> {
    /// Real (scalar) component
    pub r: T,
    /// `i` component
    pub i: T,
    /// `j` component
    pub j: T,
    /// `k` component
    pub k: T,
}

impl<T: Scalar> Quat<T> {
    /// Create a quaternion from its scalar and three imaginary components
    #[inline]
    pub const fn new(r: T, i: T, j: T, k: T) -> Self {
        Self { r, i, j, k }
    }

    /// Create a quaternion from a scalar part and a vector part
    #[inline]
    pub fn from_parts(r: T, v: Vec3<T>) -> Self {
        Self::new(r, v.x, v.y, v.z)
    }

    /// The identity rotation `(1, 0, 0, 0)`
    #[inline]
    pub fn identity() -> Self {
        Self::new(T::one(), T::zero(), T::zero(), T::zero())
    }

    /// The zero quaternion
    #[inline]
    pub fn zeros() -> Self {
        Self::new(T::zero(), T::zero(), T::zero(), T::zero())
    }

    /// Promote a vector to the pure quaternion `[0, v]`
    #[inline]
    pub fn pure(v: Vec3<T>) -> Self {
        Self::from_parts(T::zero(), v)
    }

    /// Overwrite all four components
    #[inline]
    pub fn set(&mut self, r: T, i: T, j: T, k: T) {
        *self = Self::new(r, i, j, k);
    }

    /// The scalar part `r`
    #[inline]
    pub fn scalar_part(&self) -> T {
        self.r
    }

    /// The vector part `(i, j, k)`
    #[inline]
    pub fn vector_part(&self) -> Vec3<T> {
        Vec3::new(self.i, self.j, self.k)
    }

    /// Project a pure quaternion back to a vector.
    ///
    /// Fails with [`KernelError::NotPureQuaternion`] when the scalar part is
    /// not within `tol` of zero.
    pub fn to_pure_vector(&self, tol: T) -> KernelResult<Vec3<T>> {
        if ComplexField::abs(self.r) > tol {
            log::trace!("scalar part {} is not zero, not a pure quaternion", self.r);
            return Err(KernelError::NotPureQuaternion);
        }
        Ok(self.vector_part())
    }

    /// Returns a copy scaled by `factor`
    #[inline]
    pub fn scale(self, factor: T) -> Self {
        Self::new(self.r * factor, self.i * factor, self.j * factor, self.k * factor)
    }

    /// The conjugate `r - i·i - j·j - k·k`
    #[inline]
    pub fn conjugate(self) -> Self {
        Self::new(self.r, -self.i, -self.j, -self.k)
    }

    /// Conjugate in place
    #[inline]
    pub fn conjugate_mut(&mut self) {
        *self = self.conjugate();
    }

    /// Squared norm
    #[inline]
    pub fn norm_squared(&self) -> T {
        self.r * self.r + self.i * self.i + self.j * self.j + self.k * self.k
    }

    /// Norm
    #[inline]
    pub fn norm(&self) -> T {
        self.norm_squared().sqrt()
    }

    /// True when the squared norm is within `tol` of one
    pub fn is_unit(&self, tol: T) -> bool {
        is_approx(self.norm_squared(), T::one(), tol)
    }

    /// Hamilton product `self * rhs`.
    ///
    /// Associative but not commutative. The norm is multiplicative:
    /// `|a * b| = |a| |b|`.
    #[inline]
    pub fn product(&self, rhs: &Self) -> Self {
        let l = self;
        Self::new(
            l.r * rhs.r - l.i * rhs.i - l.j * rhs.j - l.k * rhs.k,
            l.r * rhs.i + l.i * rhs.r + l.j * rhs.k - l.k * rhs.j,
            l.r * rhs.j - l.i * rhs.k + l.j * rhs.r + l.k * rhs.i,
            l.r * rhs.k + l.i * rhs.j - l.j * rhs.i + l.k * rhs.r,
        )
    }

    /// Multiplicative inverse `conjugate(q) / |q|^2`.
    ///
    /// Fails with [`KernelError::ZeroQuaternion`] when the squared norm is
    /// below `tol`. For a unit quaternion this equals the conjugate.
    pub fn try_inverse(&self, tol: T) -> KernelResult<Self> {
        let norm_squared = self.norm_squared();
        if norm_squared < tol {
            log::trace!("squared norm {} below tolerance, no inverse", norm_squared);
            return Err(KernelError::ZeroQuaternion);
        }
        Ok(self.conjugate() / norm_squared)
    }

    /// Invert in place. On failure the quaternion is left unchanged.
    pub fn inverse_mut(&mut self, tol: T) -> KernelResult<()> {
        *self = self.try_inverse(tol)?;
        Ok(())
    }

    /// Componentwise absolute comparison: every pair of components differs by
    /// at most `tol`.
    ///
    /// `q` and `-q` describe the same rotation but are not equal here.
    pub fn approx_eq(&self, other: &Self, tol: T) -> bool {
        is_approx(self.r, other.r, tol)
            && is_approx(self.i, other.i, tol)
            && is_approx(self.j, other.j, tol)
            && is_approx(self.k, other.k, tol)
    }
}

impl<T: Scalar> Mul for Quat<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.product(&rhs)
    }
}

impl<T: Scalar> Mul<T> for Quat<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: T) -> Self {
        self.scale(rhs)
    }
}

impl<T: Scalar> MulAssign<T> for Quat<T> {
    #[inline]
    fn mul_assign(&mut self, rhs: T) {
        *self = self.scale(rhs);
    }
}

impl<T: Scalar> Div<T> for Quat<T> {
    type Output = Self;

    #[inline]
    fn div(self, rhs: T) -> Self {
        Self::new(self.r / rhs, self.i / rhs, self.j / rhs, self.k / rhs)
    }
}

impl<T: Scalar> Add for Quat<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.r + rhs.r, self.i + rhs.i, self.j + rhs.j, self.k + rhs.k)
    }
}

impl<T: Scalar> AddAssign for Quat<T> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Scalar> Sub for Quat<T> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.r - rhs.r, self.i - rhs.i, self.j - rhs.j, self.k - rhs.k)
    }
}

impl<T: Scalar> SubAssign for Quat<T> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Scalar> Neg for Quat<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.r, -self.i, -self.j, -self.k)
    }
}

impl<T: Scalar> AbsDiffEq for Quat<T> {
    type Epsilon = T;

    fn default_epsilon() -> T {
        T::DEFAULT_TOLERANCE
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        self.approx_eq(other, epsilon)
    }
}

impl<T: Scalar> From<nalgebra::Quaternion<T>> for Quat<T> {
    fn from(q: nalgebra::Quaternion<T>) -> Self {
        Self::new(q.w, q.i, q.j, q.k)
    }
}

impl<T: Scalar> From<Quat<T>> for nalgebra::Quaternion<T> {
    fn from(q: Quat<T>) -> Self {
        nalgebra::Quaternion::new(q.r, q.i, q.j, q.k)
    }
}

impl<T: fmt::Display> fmt::Display for Quat<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        fmt::Display::fmt(&self.r, f)?;
        f.write_str(" | [")?;
        fmt::Display::fmt(&self.i, f)?;
        f.write_str(", ")?;
        fmt::Display::fmt(&self.j, f)?;
        f.write_str(", ")?;
        fmt::Display::fmt(&self.k, f)?;
        f.write_str("])")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conjugate_twice_is_identity() {
        let q = Quat::new(1.0f32, 2.0, 3.0, 4.0);
        assert_eq!(q.conjugate(), Quat::new(1.0, -2.0, -3.0, -4.0));
        assert_eq!(q.conjugate().conjugate(), q);

        let mut q_mut = q;
        q_mut.conjugate_mut();
        q_mut.conjugate_mut();
        assert_eq!(q_mut, q);
    }

    #[test]
    fn test_norm_and_unit() {
        let q = Quat::new(1.0f32, 2.0, 3.0, 4.0);
        assert!(is_approx(q.norm_squared(), 30.0, 1e-5));
        assert!(is_approx(q.norm(), 30.0f32.sqrt(), 1e-5));
        assert!(!q.is_unit(1e-4));

        assert!(Quat::new(0.0f32, 1.0, 0.0, 0.0).is_unit(1e-4));
        assert!(Quat::new(0.5f32, 0.5, 0.5, 0.5).is_unit(1e-4));
        assert!(!Quat::<f32>::zeros().is_unit(1e-4));
    }

    #[test]
    fn test_basis_products() {
        let one = Quat::<f64>::identity();
        let i = Quat::new(0.0f64, 1.0, 0.0, 0.0);
        let j = Quat::new(0.0f64, 0.0, 1.0, 0.0);
        let k = Quat::new(0.0f64, 0.0, 0.0, 1.0);

        assert_eq!(i * j, k);
        assert_eq!(j * i, -k);
        assert_eq!(j * k, i);
        assert_eq!(k * i, j);
        assert_eq!(i * i, -one);
        assert_eq!(i * j * k, -one);
    }

    #[test]
    fn test_hamilton_product_values() {
        let a = Quat::new(1.0f64, 2.0, 3.0, 4.0);
        let b = Quat::new(5.0f64, 6.0, 7.0, 8.0);
        assert_eq!(a * b, Quat::new(-60.0, 12.0, 30.0, 24.0));
        assert_eq!(b * a, Quat::new(-60.0, 20.0, 14.0, 32.0));
    }

    #[test]
    fn test_product_associative_and_norm_multiplicative() {
        let a = Quat::new(0.3f64, -1.2, 2.0, 0.7);
        let b = Quat::new(-0.5f64, 0.25, 1.5, -2.0);
        let c = Quat::new(1.1f64, 0.0, -0.4, 0.9);

        assert!(((a * b) * c).approx_eq(&(a * (b * c)), 1e-12));
        assert!(is_approx((a * b).norm(), a.norm() * b.norm(), 1e-12));
    }

    #[test]
    fn test_product_matches_nalgebra() {
        let a = Quat::new(0.3f64, -1.2, 2.0, 0.7);
        let b = Quat::new(-0.5f64, 0.25, 1.5, -2.0);
        let na_a: nalgebra::Quaternion<f64> = a.into();
        let na_b: nalgebra::Quaternion<f64> = b.into();
        assert!((a * b).approx_eq(&Quat::from(na_a * na_b), 1e-12));
    }

    #[test]
    fn test_inverse() {
        let q = Quat::new(1.0f64, 2.0, 3.0, 4.0);
        let inv = q.try_inverse(1e-6).unwrap();
        assert_eq!(inv, Quat::new(1.0 / 30.0, -2.0 / 30.0, -3.0 / 30.0, -4.0 / 30.0));
        assert!((q * inv).approx_eq(&Quat::identity(), 1e-12));
        assert!((inv * q).approx_eq(&Quat::identity(), 1e-12));
    }

    #[test]
    fn test_inverse_of_unit_is_conjugate() {
        let q = Quat::new(0.5f32, 0.5, -0.5, 0.5);
        let inv = q.try_inverse(1e-4).unwrap();
        assert!(inv.approx_eq(&q.conjugate(), 1e-6));
    }

    #[test]
    fn test_inverse_of_zero_fails_unchanged() {
        let mut q = Quat::<f32>::zeros();
        assert_eq!(q.inverse_mut(1e-4), Err(KernelError::ZeroQuaternion));
        assert_eq!(q, Quat::zeros());

        let mut tiny = Quat::new(1e-3f32, 0.0, 0.0, 1e-3);
        assert_eq!(tiny.inverse_mut(1e-4), Err(KernelError::ZeroQuaternion));
        assert_eq!(tiny, Quat::new(1e-3, 0.0, 0.0, 1e-3));
    }

    #[test]
    fn test_add_sub() {
        let a = Quat::new(1.0f32, 2.0, 3.0, 4.0);
        let b = Quat::new(0.5f32, -1.0, 1.0, 2.0);
        let mut acc = a;
        acc += b;
        assert_eq!(acc, Quat::new(1.5, 1.0, 4.0, 6.0));
        acc -= b;
        assert_eq!(acc, a);
        assert_eq!(a - a, Quat::zeros());
    }

    #[test]
    fn test_pure_vector_bridge() {
        let v = Vec3::new(1.0f32, 2.0, 3.0);
        let q = Quat::pure(v);
        assert_eq!(q, Quat::new(0.0, 1.0, 2.0, 3.0));
        assert_eq!(q.to_pure_vector(1e-4), Ok(v));

        let not_pure = Quat::new(1.0f32, 4.0, 5.0, 6.0);
        assert_eq!(not_pure.to_pure_vector(1e-4), Err(KernelError::NotPureQuaternion));
        assert_eq!(not_pure.vector_part(), Vec3::new(4.0, 5.0, 6.0));
        assert_eq!(not_pure.scalar_part(), 1.0);
    }

    #[test]
    fn test_set_and_from_parts() {
        let mut q = Quat::<f32>::default();
        q.set(0.5, 0.5, 0.5, 0.5);
        assert_eq!(q, Quat::from_parts(0.5, Vec3::new(0.5, 0.5, 0.5)));
        approx::assert_abs_diff_eq!(q, Quat::new(0.50005, 0.5, 0.49995, 0.5));
    }
}
