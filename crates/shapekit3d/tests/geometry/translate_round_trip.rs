use crate::intersection_symmetry::{random_shape, ALL_SHAPE_TYPES};
use shapekit3d::math::{Real, Vector};
use shapekit3d::shape::{Shape, ShapeType};

fn assert_shapes_close(shape1: &Shape, shape2: &Shape, epsilon: Real) {
    match (shape1, shape2) {
        (Shape::Line(a), Shape::Line(b)) => assert_abs_diff_eq!(a, b, epsilon = epsilon),
        (Shape::Plane(a), Shape::Plane(b)) => assert_abs_diff_eq!(a, b, epsilon = epsilon),
        (Shape::Sphere(a), Shape::Sphere(b)) => assert_abs_diff_eq!(a, b, epsilon = epsilon),
        (Shape::Triangle(a), Shape::Triangle(b)) => assert_abs_diff_eq!(a, b, epsilon = epsilon),
        (Shape::Quad(a), Shape::Quad(b)) => assert_abs_diff_eq!(a, b, epsilon = epsilon),
        (Shape::Aabb(a), Shape::Aabb(b)) => assert_abs_diff_eq!(a, b, epsilon = epsilon),
        (Shape::Obb(a), Shape::Obb(b)) => assert_abs_diff_eq!(a, b, epsilon = epsilon),
        _ => panic!("shape types differ: {shape1:?} and {shape2:?}"),
    }
}

#[test]
fn translate_then_translate_back_is_identity() {
    let mut rng = oorandom::Rand32::new(42);

    for _ in 0..200 {
        let shift = Vector::from_fn(|_, _| rng.rand_float() * 20.0 - 10.0);

        for shape_type in ALL_SHAPE_TYPES {
            let original = random_shape(&mut rng, shape_type);
            let mut shape = original;
            shape.translate(&shift);
            shape.translate(&-shift);

            assert_eq!(shape.shape_type(), shape_type);
            assert_shapes_close(&shape, &original, 1.0e-4);
        }
    }
}

#[test]
fn translated_moves_the_centroid() {
    let mut rng = oorandom::Rand32::new(9);
    let shift = Vector::new(1.0, -2.0, 0.5);

    // A plane only moves along its normal.
    for shape_type in ALL_SHAPE_TYPES.into_iter().filter(|t| *t != ShapeType::Plane) {
        let shape = random_shape(&mut rng, shape_type);
        let moved = shape.translated(&shift);

        assert_relative_eq!(
            moved.compute_centroid(),
            shape.compute_centroid() + shift,
            epsilon = 1.0e-4
        );
    }
}
