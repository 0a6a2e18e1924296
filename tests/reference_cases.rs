use approx::assert_abs_diff_eq;
use rotation_kernel::{
    KernelError, Scalar, Vec3, axis_angle_to_quat, deg_to_rad, quat_to_axis_angle, rotate_direct,
    rotate_rodrigues,
};
use serde::Deserialize;
use std::error::Error;

const CASES_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/testdata/rotation_cases.csv");

/// One rotation with an independently computed result
#[derive(Debug, Deserialize)]
struct RotationCase {
    axis_x: f64,
    axis_y: f64,
    axis_z: f64,
    angle_deg: f64,
    vector_x: f64,
    vector_y: f64,
    vector_z: f64,
    expected_x: f64,
    expected_y: f64,
    expected_z: f64,
}

impl RotationCase {
    fn axis<T: Scalar>(&self) -> Vec3<T> {
        vec3(self.axis_x, self.axis_y, self.axis_z)
    }

    fn vector<T: Scalar>(&self) -> Vec3<T> {
        vec3(self.vector_x, self.vector_y, self.vector_z)
    }

    fn expected<T: Scalar>(&self) -> Vec3<T> {
        vec3(self.expected_x, self.expected_y, self.expected_z)
    }
}

fn vec3<T: Scalar>(x: f64, y: f64, z: f64) -> Vec3<T> {
    Vec3::new(nalgebra::convert(x), nalgebra::convert(y), nalgebra::convert(z))
}

fn load_cases() -> Result<Vec<RotationCase>, Box<dyn Error>> {
    let mut reader = csv::Reader::from_path(CASES_PATH)?;
    let mut cases = Vec::new();

    for result in reader.deserialize() {
        let record: RotationCase = result?;
        cases.push(record);
    }

    Ok(cases)
}

fn check_cases<T: Scalar>(tol: T) -> Result<(), Box<dyn Error>> {
    let cases = load_cases()?;
    assert!(!cases.is_empty(), "no rotation cases in {}", CASES_PATH);

    for case in &cases {
        let angle = deg_to_rad::<T>(nalgebra::convert(case.angle_deg));
        let q = axis_angle_to_quat(case.axis::<T>(), angle, T::DEFAULT_TOLERANCE)?;
        let v = case.vector::<T>();
        let expected = case.expected::<T>();

        let direct = rotate_direct(v, q, T::DEFAULT_TOLERANCE)?;
        let fast = rotate_rodrigues(v, q);

        assert!(direct.approx_eq(&expected, tol), "direct {:?}: got {:?}", case, direct);
        assert!(fast.approx_eq(&expected, tol), "rodrigues {:?}: got {:?}", case, fast);
    }

    Ok(())
}

#[test]
fn test_reference_cases_f32() -> Result<(), Box<dyn Error>> {
    check_cases::<f32>(1e-4)
}

#[test]
fn test_reference_cases_f64() -> Result<(), Box<dyn Error>> {
    check_cases::<f64>(1e-9)
}

/// Extracting axis-angle and rebuilding the quaternion gives the same
/// rotated vectors, even when the extracted form differs from the input
#[test]
fn test_reference_cases_survive_extraction() -> Result<(), Box<dyn Error>> {
    for case in load_cases()? {
        let angle = deg_to_rad(case.angle_deg);
        let q = axis_angle_to_quat(case.axis::<f64>(), angle, 1e-6)?;

        match quat_to_axis_angle(q, 1e-6) {
            Ok(rotation) => {
                let rebuilt = rotation.to_quat(1e-6)?;
                assert_abs_diff_eq!(
                    rotate_rodrigues(case.vector::<f64>(), rebuilt),
                    case.expected::<f64>(),
                    epsilon = 1e-9
                );
            }
            Err(KernelError::DegenerateAngle) => {
                // only the zero-angle case has no axis
                assert_eq!(case.angle_deg, 0.0);
            }
            Err(e) => return Err(e.into()),
        }
    }

    Ok(())
}
