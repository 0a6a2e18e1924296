//! Three-component vector algebra

use core::fmt;
use core::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

use approx::AbsDiffEq;
use nalgebra::{ComplexField, Vector3};

use crate::error::{KernelError, KernelResult};
use crate::scalar::{Scalar, is_approx};

/// A 3D vector with components along the `i`, `j`, `k` axes.
///
/// No invariant is enforced at construction. Whether a vector is null or
/// normalized is a property checked against a tolerance, not a type-level
/// guarantee.
///
/// # Example
/// ```
/// use rotation_kernel::Vec3;
///
/// let x = Vec3::new(1.0f32, 0.0, 0.0);
/// let y = Vec3::new(0.0f32, 1.0, 0.0);
///
/// // Right-hand rule
/// assert_eq!(x.cross(&y), Vec3::new(0.0, 0.0, 1.0));
/// assert_eq!(x.dot(&y), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3<T> {
    /// Component along `i`
    pub x: T,
    /// Component along `j`
    pub y: T,
    /// Component along `k`
    pub z: T,
}

impl<T: Scalar> Vec3<T> {
    /// Create a vector from its three components
    #[inline]
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    /// The null vector
    #[inline]
    pub fn zeros() -> Self {
        Self::new(T::zero(), T::zero(), T::zero())
    }

    /// Overwrite all three components
    #[inline]
    pub fn set(&mut self, x: T, y: T, z: T) {
        self.x = x;
        self.y = y;
        self.z = z;
    }

    /// Returns a copy scaled by `factor`
    #[inline]
    pub fn scale(self, factor: T) -> Self {
        Self::new(self.x * factor, self.y * factor, self.z * factor)
    }

    /// Scale in place
    #[inline]
    pub fn scale_mut(&mut self, factor: T) {
        *self = self.scale(factor);
    }

    /// Scalar (dot) product
    #[inline]
    pub fn dot(&self, other: &Self) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product `self x other`, following the right-hand rule
    /// (`x cross y = z`).
    ///
    /// Every rotation formula in this crate depends on this orientation.
    #[inline]
    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Squared Euclidean norm
    #[inline]
    pub fn norm_squared(&self) -> T {
        self.dot(self)
    }

    /// Euclidean norm
    #[inline]
    pub fn norm(&self) -> T {
        self.norm_squared().sqrt()
    }

    /// True when every component is within `tol` of zero
    pub fn is_null(&self, tol: T) -> bool {
        ComplexField::abs(self.x) <= tol
            && ComplexField::abs(self.y) <= tol
            && ComplexField::abs(self.z) <= tol
    }

    /// True when the squared norm is within `tol` of one
    pub fn is_normalized(&self, tol: T) -> bool {
        is_approx(self.norm_squared(), T::one(), tol)
    }

    /// Scale to unit length in place.
    ///
    /// Fails with [`KernelError::NullVector`] when the vector is null within
    /// the default tolerance, in which case the vector is left unchanged.
    pub fn normalize_mut(&mut self) -> KernelResult<()> {
        if self.is_null(T::DEFAULT_TOLERANCE) {
            log::trace!("refusing to normalize null vector {:?}", self);
            return Err(KernelError::NullVector);
        }

        let norm = self.norm();
        self.scale_mut(T::one() / norm);
        Ok(())
    }

    /// Returns a unit-length copy, or [`KernelError::NullVector`]
    pub fn normalized(mut self) -> KernelResult<Self> {
        self.normalize_mut()?;
        Ok(self)
    }

    /// True when `self` and `other` are colinear, i.e. their cross product is
    /// null within `tol`. The null vector is colinear with everything.
    pub fn is_colinear(&self, other: &Self, tol: T) -> bool {
        self.cross(other).is_null(tol)
    }

    /// Componentwise absolute comparison: every pair of components differs by
    /// at most `tol`.
    pub fn approx_eq(&self, other: &Self, tol: T) -> bool {
        is_approx(self.x, other.x, tol)
            && is_approx(self.y, other.y, tol)
            && is_approx(self.z, other.z, tol)
    }
}

impl<T: Scalar> Add for Vec3<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl<T: Scalar> AddAssign for Vec3<T> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Scalar> Sub for Vec3<T> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl<T: Scalar> SubAssign for Vec3<T> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Scalar> Neg for Vec3<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl<T: Scalar> Mul<T> for Vec3<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: T) -> Self {
        self.scale(rhs)
    }
}

impl<T: Scalar> MulAssign<T> for Vec3<T> {
    #[inline]
    fn mul_assign(&mut self, rhs: T) {
        self.scale_mut(rhs);
    }
}

impl<T: Scalar> Div<T> for Vec3<T> {
    type Output = Self;

    #[inline]
    fn div(self, rhs: T) -> Self {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl<T: Scalar> AbsDiffEq for Vec3<T> {
    type Epsilon = T;

    fn default_epsilon() -> T {
        T::DEFAULT_TOLERANCE
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        self.approx_eq(other, epsilon)
    }
}

impl<T: Scalar> From<Vector3<T>> for Vec3<T> {
    fn from(v: Vector3<T>) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl<T: Scalar> From<Vec3<T>> for Vector3<T> {
    fn from(v: Vec3<T>) -> Self {
        Vector3::new(v.x, v.y, v.z)
    }
}

impl<T: fmt::Display> fmt::Display for Vec3<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        fmt::Display::fmt(&self.x, f)?;
        f.write_str(", ")?;
        fmt::Display::fmt(&self.y, f)?;
        f.write_str(", ")?;
        fmt::Display::fmt(&self.z, f)?;
        f.write_str("]")
    }
}
