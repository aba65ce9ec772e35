use approx::{assert_abs_diff_eq, assert_relative_eq};

use crate::*;

use super::init_logger;

#[test]
fn test_norm() {
    let v: Vector3 = Vector3::new(88.0, 300.0, 46.0);
    assert_eq!(v.norm_squared(), 99_860.0);
    assert_relative_eq!(v.norm(), 316.0063290505429, max_relative = 1e-14);
    assert_eq!(Vector3::new(0.0f32, -3.0, 4.0).norm(), 5.0);
}

#[test]
fn test_normalize() {
    let v: Vector3 = Vector3::new(1.0, -2.0, 5.0);
    let unit = v.normalize().unwrap();
    let root = 30.0f64.sqrt();
    assert!(unit.approx_eq(&Vector3::new(1.0 / root, -2.0 / root, 5.0 / root), 1e-14));
    assert_relative_eq!(unit.norm(), 1.0, max_relative = 1e-14);
}

#[test]
fn test_norm_of_huge_and_tiny_vectors() {
    let huge: Vector3 = Vector3::new(1e200, 1e200, 0.0);
    assert_relative_eq!(huge.norm(), 1e200 * 2.0f64.sqrt(), max_relative = 1e-14);

    let tiny: Vector3 = Vector3::new(3e-200, 4e-200, 0.0);
    assert_relative_eq!(tiny.norm(), 5e-200, max_relative = 1e-14);

    assert_eq!(Vector3::new(0.0f32, 0.0, -1e30).norm(), 1e30);
}

#[test]
fn test_normalize_huge_and_tiny_vectors() {
    let huge: Vector3 = Vector3::new(1e200, 0.0, 0.0);
    assert_eq!(huge.normalize(), Ok(Vector3::unit_x()));

    let tiny: Vector3 = Vector3::new(1e-200, 0.0, 0.0);
    assert_eq!(tiny.normalize(), Ok(Vector3::unit_x()));

    let subnormal: Vector3 = Vector3::new(0.0, -5e-324, 0.0);
    assert_eq!(subnormal.normalize(), Ok(-Vector3::unit_y()));

    let mixed: Vector3 = Vector3::new(-3e150, 0.0, 4e150);
    assert!(mixed.normalize().unwrap().approx_eq(&Vector3::new(-0.6, 0.0, 0.8), 1e-15));
}

#[test]
fn test_normalize_zero_vector() {
    init_logger();
    assert_eq!(Vector3::<f64>::zero().normalize(), Err(GeometryError::ZeroNorm));
    assert_eq!(Vector3::<f32>::zero().normalize(), Err(GeometryError::ZeroNorm));
}

#[test]
fn test_orthogonalize() {
    let v1: Vector3 = Vector3::new(1.0, -2.0, 5.0);
    let v2: Vector3 = Vector3::new(3.0, 4.0, -1.0);
    let orthogonal = v1.orthogonalize(v2).unwrap();
    assert_abs_diff_eq!(v1.dot(&orthogonal), 0.0, epsilon = 1e-12);
    assert!(orthogonal.approx_eq(&Vector3::new(10.0 / 3.0, 10.0 / 3.0, 2.0 / 3.0), 1e-12));

    // The inputs are untouched.
    assert_eq!(v2, Vector3::new(3.0, 4.0, -1.0));
}

#[test]
fn test_orthogonalize_against_zero_vector() {
    init_logger();
    let v: Vector3 = Vector3::new(1.0, -2.0, 5.0);
    assert_eq!(Vector3::zero().orthogonalize(v), Err(GeometryError::ZeroNorm));
}

#[test]
fn test_orthogonalize_against_huge_vector() {
    let v1: Vector3 = Vector3::new(1e200, 0.0, 0.0);
    let v2: Vector3 = Vector3::new(3.0, 4.0, -1.0);
    assert_eq!(v1.orthogonalize(v2), Ok(Vector3::new(0.0, 4.0, -1.0)));
}

#[test]
fn test_unit_vectors() {
    let (x, y, z) = (Vector3::<f64>::unit_x(), Vector3::<f64>::unit_y(), Vector3::<f64>::unit_z());
    assert_eq!(x.cross(&y), z);
    assert_eq!(y.cross(&z), x);
    assert_eq!(z.cross(&x), y);
    for unit in [x, y, z] {
        assert_eq!(unit.norm(), 1.0);
    }
}

#[test]
fn test_approx_eq() {
    let v: Vector3 = Vector3::new(1.0, 2.0, 3.0);
    assert!(v.approx_eq(&Vector3::new(1.05, 1.95, 3.0), 0.1));
    assert!(!v.approx_eq(&Vector3::new(1.05, 1.95, 3.2), 0.1));
}

#[test]
fn test_real_helpers() {
    assert_eq!(Real::sqrt(16.0f64), 4.0);
    assert_eq!(Real::abs(-2.5f32), 2.5);
    assert_eq!(<f64 as Real>::ZERO, 0.0);
}
