#![no_std]

//! Rotation Kernel - 3D vector and quaternion math for orientation code
//!
//! A small set of value types and pure functions: vector algebra, quaternion
//! algebra, tolerance-based predicates, axis-angle ↔ quaternion conversion
//! and rotation of vectors by quaternions.
//!
//! Nothing here holds state, allocates or blocks, so every function can be
//! called from any thread. Orientation tracking loops, sensor fusion and
//! console printing are left to the caller.
//!
//! # Features
//!
//! - Generic over [`f32`] and [`f64`] through the [`Scalar`] trait, with a
//!   build-wide [`Real`] alias selected by the `f64` cargo feature
//! - Absolute, per-component tolerance comparisons
//! - Checked rotation ([`rotate_direct`]) and unchecked fast rotation
//!   ([`rotate_rodrigues`])
//! - Failures reported as [`KernelError`], never as panics
//! - `#![no_std]` compatible for embedded systems
//!
//! # Quick Start
//!
//! ```rust
//! use rotation_kernel::{Quat, Vec3, axis_angle_to_quat, deg_to_rad, rotate_direct, rotate_rodrigues};
//!
//! // 90 degrees about Z
//! let q: Quat<f32> = axis_angle_to_quat(Vec3::new(0.0, 0.0, 1.0), deg_to_rad(90.0), 1e-4).unwrap();
//!
//! let v = Vec3::new(1.0, 0.0, 0.0);
//!
//! // Checked: fails on a non-unit quaternion
//! let rotated = rotate_direct(v, q, 1e-4).unwrap();
//! assert!(rotated.approx_eq(&Vec3::new(0.0, 1.0, 0.0), 1e-4));
//!
//! // Unchecked and faster: q must be unit
//! let rotated = rotate_rodrigues(v, q);
//! assert!(rotated.approx_eq(&Vec3::new(0.0, 1.0, 0.0), 1e-4));
//! ```
//!
//! # Non-canonical rotations
//!
//! `q` and `-q`, and `(axis, angle)` and `(axis, angle + 2π)`, are the same
//! rotation. No canonical form is computed; compare the rotated vectors
//! rather than the rotations themselves.

pub mod error;
mod quaternion;
pub mod rotate;
pub mod rotation;
mod scalar;
mod vector;

// Re-export all public types and functions
pub use error::{KernelError, KernelResult};
pub use quaternion::Quat;
pub use rotate::{rotate_all, rotate_direct, rotate_rodrigues, sandwich};
pub use rotation::{AxisAngle, axis_angle_to_quat, compose, quat_to_axis_angle};
pub use scalar::{DEFAULT_TOL, Real, Scalar, deg_to_rad, is_approx, rad_to_deg};
pub use vector::Vec3;
