//! Cross-cutting properties of `Vector2`: immutability, round trips and scenarios.

use approx::assert_relative_eq;
use vector2::{Axis, Vector2, VectorError};

fn samples() -> Vec<Vector2> {
    vec![
        Vector2::new(10.0, 20.0),
        Vector2::new(-3.5, 0.25),
        Vector2::new(0.0, -7.0),
        Vector2::new(1e6, -1e-6),
        Vector2::new(24.0, 7.0),
    ]
}

fn assert_same(a: Vector2, b: Vector2) {
    assert_eq!(a.x().to_bits(), b.x().to_bits(), "{a} vs {b}");
    assert_eq!(a.y().to_bits(), b.y().to_bits(), "{a} vs {b}");
}

#[test]
fn every_operation_leaves_operands_unchanged() {
    let other = Vector2::new(5.0, -12.0);
    for v in samples() {
        let before = v;
        let _ = v.add(other).add_x(other).add_y(other);
        let _ = v.sub(other).sub_x(other).sub_y(other);
        let _ = v.mul(other).mul_x(other).mul_y(other);
        let _ = v.div(other).div_x(other).div_y(other);
        let _ = v.add_scalar(2.0, None).sub_scalar(1.0, 3.0).mul_scalar(4.0, 0.0);
        let _ = v.div_scalar(2.0, None);
        let _ = v.div_scalar(0.0, None);
        let _ = v.add_scalar_x(1.0).add_scalar_y(1.0).sub_scalar_x(1.0).sub_scalar_y(1.0);
        let _ = v.mul_scalar_x(2.0).mul_scalar_y(2.0).div_scalar_x(0.0).div_scalar_y(2.0);
        let _ = (v.magnitude(), v.length(), v.angle_radians(), v.angle_degrees());
        let _ = (v.angle_to_degrees(other), v.distance_to(other));
        let _ = (v.dot_product(other), v.cross_product(other));
        let _ = v.normalize().invert().invert_x().invert_y().round();
        let _ = v.limit(5.0, 0.5).interpolate(other, 0.3, 0.6);
        let _ = v.rotate_by_degrees(33.0).rotate_by_radians(1.0);
        let _ = v.zeroed();
        let _ = Vector2::random(v, other);
        let _ = v.to_string();

        assert_same(v, before);
        assert_same(other, Vector2::new(5.0, -12.0));
    }
}

#[test]
fn constructor_round_trips_components() {
    for (x, y) in [(0.0, 0.0), (1.5, -2.5), (f64::MAX, f64::MIN_POSITIVE)] {
        let v = Vector2::new(x, y);
        assert_eq!(v.x(), x);
        assert_eq!(v.y(), y);
    }
}

#[test]
fn add_then_sub_restores_vector() {
    let w = Vector2::new(0.1, -3.3);
    for v in samples() {
        let back = v.add(w).sub(w);
        assert_relative_eq!(back.x(), v.x(), epsilon = 1e-9);
        assert_relative_eq!(back.y(), v.y(), epsilon = 1e-9);
    }
}

#[test]
fn normalized_vectors_have_unit_length() {
    for v in samples() {
        assert_relative_eq!(v.normalize().magnitude(), 1.0, epsilon = 1e-12);
    }
    let zero = Vector2::new(0.0, 0.0).normalize();
    assert_eq!(zero.x(), 0.0);
    assert_eq!(zero.y(), 0.0);
}

#[test]
fn double_inversion_is_identity() {
    for v in samples() {
        assert_same(v.invert().invert(), v);
    }
}

#[test]
fn scenarios() {
    let v = Vector2::new(10.0, 20.0);

    assert_eq!(v.add_x(Vector2::new(5.0, 12.0)), Vector2::new(15.0, 20.0));
    assert_eq!(v.mul_scalar(5.0, None), Vector2::new(50.0, 100.0));
    assert_eq!(v.mul_scalar(1.0, 5.0), Vector2::new(10.0, 100.0));

    assert_eq!(
        v.div_scalar(0.0, None),
        Err(VectorError::DivideByZero { axis: Axis::X })
    );
    assert!(matches!(
        v.div_scalar(1.0, 0.0),
        Err(VectorError::DivideByZero { .. })
    ));

    assert_eq!(Vector2::new(3.0, 4.0).magnitude(), 5.0);
    assert_eq!(Vector2::new(24.0, 7.0).magnitude(), 25.0);

    let east = Vector2::new(10.0, 0.0);
    assert_relative_eq!(east.rotate_by_degrees(90.0).angle_degrees(), 90.0, epsilon = 1e-9);
    assert_relative_eq!(east.rotate_by_degrees(270.0).angle_degrees(), -90.0, epsilon = 1e-9);

    assert_eq!(
        Vector2::new(10.0, 6.0).interpolate(Vector2::new(20.0, 8.0), 0.5, 0.75),
        Vector2::new(15.0, 7.5)
    );

    for _ in 0..100 {
        let r = Vector2::random(Vector2::new(0.0, 10.0), Vector2::new(15.0, -5.0));
        assert!((0.0..15.0).contains(&r.x()));
        assert!((-5.0..10.0).contains(&r.y()));
    }
}

#[test]
fn division_error_propagates_with_question_mark() {
    fn scale_down(v: Vector2, by: f64) -> Result<Vector2, VectorError> {
        let halved = v.div_scalar(by, None)?;
        Ok(halved.round())
    }

    assert_eq!(scale_down(Vector2::new(9.0, 3.0), 2.0), Ok(Vector2::new(5.0, 2.0)));
    let err = scale_down(Vector2::new(9.0, 3.0), 0.0).unwrap_err();
    assert_eq!(err.to_string(), "division by zero on the x axis");
}

#[test]
fn display_is_stable() {
    assert_eq!(
        format!("{}", Vector2::new(10.0, 20.0)),
        "Vector2 { x: 10, y: 20 }"
    );
    assert_eq!(
        Vector2::new(15.0, 7.5).to_string(),
        "Vector2 { x: 15, y: 7.5 }"
    );
}
