//! Algebraic and rotation properties of the public quaternion API

use nalgebra::Vector3;
use quaternions::{Quaternion, QuaternionBuilder, QuaternionError};
use std::f64::consts::PI;

const TOLERANCE: f64 = 1e-12;

/// Exactly representable sample values so associativity holds bit-for-bit
fn samples() -> Vec<Quaternion> {
    vec![
        Quaternion::new(3.0, 1.0, -2.0, 1.0),
        Quaternion::new(2.0, -1.0, 2.0, 3.0),
        Quaternion::new(0.5, 0.25, -0.125, 4.0),
        Quaternion::new(-1.5, 0.0, 8.0, -0.75),
        Quaternion::zero(),
        Quaternion::identity(),
    ]
}

/// Rotation by 2π/3 about (1, 1, 1)/√3, which cycles the coordinate axes
fn axis_cycle() -> (Quaternion, f64, Vector3<f64>) {
    let angle = 2.0 * PI / 3.0;
    let axis = Vector3::new(1.0, 1.0, 1.0) * (1.0 / 3.0_f64.sqrt());
    let q = Quaternion::from_axis_angle(&axis, angle).unwrap();
    (q, angle, axis)
}

fn assert_vec_close(actual: &Vector3<f64>, expected: &Vector3<f64>, atol: f64) {
    for i in 0..3 {
        assert!(
            (actual[i] - expected[i]).abs() <= atol,
            "Component {} mismatch: expected {}, got {}, diff {}",
            i,
            expected[i],
            actual[i],
            (actual[i] - expected[i]).abs()
        );
    }
}

#[test]
fn test_addition_is_associative_and_commutative() {
    let qs = samples();
    for p in &qs {
        for q in &qs {
            assert_eq!(*p + *q, *q + *p);
            for r in &qs {
                assert_eq!((*p + *q) + *r, *p + (*q + *r));
            }
        }
    }
}

#[test]
fn test_additive_inverse() {
    for q in samples() {
        assert_eq!(q + (-q), Quaternion::zero());
        assert_eq!(q - q, Quaternion::zero());
    }
}

#[test]
fn test_multiplication_is_not_commutative() {
    let p = Quaternion::new(3.0, 1.0, -2.0, 1.0);
    let q = Quaternion::new(2.0, -1.0, 2.0, 3.0);

    assert_eq!(p * q, Quaternion::new(8.0, -9.0, -2.0, 11.0));
    assert_ne!(p * q, q * p);
}

#[test]
fn test_multiplication_is_associative() {
    let qs = samples();
    for p in &qs {
        for q in &qs {
            for r in &qs {
                let left = (*p * *q) * *r;
                let right = *p * (*q * *r);
                assert!(left.is_approx(&right, TOLERANCE), "{left} != {right}");
            }
        }
    }
}

#[test]
fn test_double_conjugate_is_identity() {
    for q in samples() {
        assert_eq!(q.conj().conj(), q);
    }
}

#[test]
fn test_conjugate_of_product_reverses_order() {
    let p = Quaternion::new(3.0, 1.0, -2.0, 1.0);
    let q = Quaternion::new(2.0, -1.0, 2.0, 3.0);
    assert_eq!((p * q).conj(), q.conj() * p.conj());
}

#[test]
fn test_norm_is_multiplicative() {
    let p = Quaternion::new(3.0, 1.0, -2.0, 1.0);
    let q = Quaternion::new(2.0, -1.0, 2.0, 3.0);
    assert!(((p * q).norm() - p.norm() * q.norm()).abs() < TOLERANCE);
}

#[test]
fn test_product_with_inverse_is_identity() {
    for q in samples().into_iter().filter(|q| q.norm() != 0.0) {
        let q_inv = q.inv().unwrap();
        for product in [q * q_inv, q_inv * q] {
            assert!((product.a() - 1.0).abs() < TOLERANCE, "{product}");
            assert!(product.b().abs() < TOLERANCE, "{product}");
            assert!(product.c().abs() < TOLERANCE, "{product}");
            assert!(product.d().abs() < TOLERANCE, "{product}");
        }
    }
}

#[test]
fn test_inverse_of_zero_norm_fails() {
    assert_eq!(
        Quaternion::new(0.0, 0.0, 0.0, 0.0).inv(),
        Err(QuaternionError::DivisionByZero)
    );
}

#[test]
fn test_axis_angle_round_trip() {
    let (q, angle, axis) = axis_cycle();

    assert!(
        (q.angle() - angle).abs() < TOLERANCE,
        "Angle mismatch: expected {}, got {}",
        angle,
        q.angle()
    );
    assert_vec_close(&q.axis(), &axis, 1e-15);
    assert_vec_close(&q.try_axis().unwrap(), &axis, 1e-15);
}

#[test]
fn test_axis_angle_quaternion_has_unit_norm() {
    let (q, _, _) = axis_cycle();
    assert!((q.norm() - 1.0).abs() < TOLERANCE);
}

#[test]
fn test_rotate_vector_cycles_axes() {
    let (q, _, _) = axis_cycle();
    let rotated = q.rotate_vector(&Vector3::new(1.0, 0.0, 0.0));
    assert_vec_close(&rotated, &Vector3::new(0.0, 1.0, 0.0), 1e-15);
}

#[test]
fn test_rotate_frame_inverts_rotate_vector() {
    let (q, _, _) = axis_cycle();
    let in_frame = q.rotate_frame(&Vector3::new(0.0, 1.0, 0.0));
    assert_vec_close(&in_frame, &Vector3::new(1.0, 0.0, 0.0), 1e-15);
}

#[test]
fn test_equality_is_exact() {
    let p = Quaternion::new(0.1, -0.2, 0.3, -0.4);
    let q = Quaternion::new(0.1, -0.2, 0.3, -0.4);
    assert_eq!(p, q);

    let one_ulp = Quaternion::new(f64::from_bits(0.1_f64.to_bits() + 1), -0.2, 0.3, -0.4);
    assert_ne!(p, one_ulp);
}

#[test]
fn test_builder_forms_match_named_constructors() {
    let components = QuaternionBuilder::new()
        .with_a(3.0)
        .with_b(1.0)
        .with_c(-2.0)
        .with_d(1.0)
        .build()
        .unwrap();
    assert_eq!(components, Quaternion::new(3.0, 1.0, -2.0, 1.0));

    let (q, angle, axis) = axis_cycle();
    let rotation = QuaternionBuilder::new()
        .with_angle(angle)
        .with_axis(axis)
        .build()
        .unwrap();
    assert_eq!(rotation, q);
}

#[test]
fn test_builder_rejects_other_combinations() {
    let rejected = [
        QuaternionBuilder::new(),
        QuaternionBuilder::new().with_a(1.0),
        QuaternionBuilder::new().with_angle(1.0),
        QuaternionBuilder::new()
            .with_a(1.0)
            .with_b(2.0)
            .with_c(3.0)
            .with_d(4.0)
            .with_angle(1.0),
        QuaternionBuilder::new()
            .with_angle(1.0)
            .with_axis(Vector3::x())
            .with_d(1.0),
    ];

    for builder in rejected {
        assert!(
            matches!(builder.build(), Err(QuaternionError::InvalidArgument(_))),
            "Expected InvalidArgument for {builder:?}"
        );
    }
}

#[test]
fn test_display_format() {
    let p = Quaternion::new(3.0, 1.0, -2.0, 1.0);
    let q = Quaternion::new(2.0, -1.0, 2.0, 3.0);
    assert_eq!((p * q).to_string(), "8 + -9i + -2j + 11k");
}
