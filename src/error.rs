//! Error types for the rotation kernel

/// Result type for fallible kernel operations
pub type KernelResult<T> = Result<T, KernelError>;

/// Reasons a kernel operation can refuse its input.
///
/// Every fallible operation reports one of these instead of panicking; the
/// caller decides whether the failure is recoverable (skip a sample) or not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum KernelError {
    /// The vector is null within tolerance (normalization, or a rotation
    /// axis used with a non-zero angle)
    #[error("vector is null within tolerance")]
    NullVector,

    /// The quaternion is not unit within tolerance and cannot be read as a
    /// rotation
    #[error("quaternion is not unit within tolerance")]
    NonUnitQuaternion,

    /// The rotation angle is 0 or 2π, so the rotation axis is undefined
    #[error("rotation angle is 0 or 2pi, axis is undefined")]
    DegenerateAngle,

    /// The quaternion has a squared norm below tolerance and has no inverse
    #[error("quaternion norm is zero within tolerance")]
    ZeroQuaternion,

    /// The quaternion has a non-zero scalar part and is not a pure vector
    #[error("quaternion scalar part is not zero within tolerance")]
    NotPureQuaternion,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_errors_are_distinguishable() {
        assert_ne!(KernelError::NullVector, KernelError::NonUnitQuaternion);
        assert_ne!(KernelError::DegenerateAngle, KernelError::ZeroQuaternion);
    }

    #[test]
    fn test_error_propagation() {
        fn inner() -> KernelResult<u8> {
            Err(KernelError::DegenerateAngle)
        }
        fn outer() -> KernelResult<u8> {
            let value = inner()?;
            Ok(value + 1)
        }
        assert_eq!(outer(), Err(KernelError::DegenerateAngle));
    }
}
