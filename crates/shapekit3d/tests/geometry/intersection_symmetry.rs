use shapekit3d::bounding_volume::{Aabb, BoundingVolume};
use shapekit3d::math::{Point, Real, Rotation, UnitVector, Vector};
use shapekit3d::na::Unit;
use shapekit3d::shape::{Line, Obb, Plane, Quad, Shape, ShapeType, Sphere, Triangle};

fn random_point(rng: &mut oorandom::Rand32, extent: Real) -> Point<Real> {
    Point::from(Vector::from_fn(|_, _| (rng.rand_float() * 2.0 - 1.0) * extent))
}

fn random_direction(rng: &mut oorandom::Rand32) -> UnitVector<Real> {
    let v = Vector::from_fn(|_, _| rng.rand_float() * 2.0 - 1.0);
    Unit::try_new(v, 1.0e-3).unwrap_or(Vector::x_axis())
}

/// Generates one shape of the given type, somewhere around the origin.
pub fn random_shape(rng: &mut oorandom::Rand32, shape_type: ShapeType) -> Shape {
    let center = random_point(rng, 3.0);

    match shape_type {
        ShapeType::Line => {
            Line::new(center, center + random_direction(rng).into_inner() * 2.0).into()
        }
        ShapeType::Plane => Plane::from_point_and_normal(&center, random_direction(rng)).into(),
        ShapeType::Sphere => Sphere::new(center, rng.rand_float() * 1.5 + 0.2).into(),
        ShapeType::Triangle => Triangle::new(
            center,
            center + random_point(rng, 2.0).coords,
            center + random_point(rng, 2.0).coords,
        )
        .into(),
        ShapeType::Quad => {
            let rot = Rotation::from_scaled_axis(random_point(rng, 3.0).coords);
            let u = rot * Vector::x() * (rng.rand_float() + 0.2);
            let v = rot * Vector::y() * (rng.rand_float() + 0.2);
            Quad::new(center - u - v, center + u - v, center + u + v, center - u + v).into()
        }
        ShapeType::Aabb => {
            let half_extents = Vector::from_fn(|_, _| rng.rand_float() + 0.1);
            Aabb::from_half_extents(center, half_extents).into()
        }
        ShapeType::Obb => {
            let half_extents = Vector::from_fn(|_, _| rng.rand_float() + 0.1);
            let rot = Rotation::from_scaled_axis(random_point(rng, 3.0).coords);
            Obb::from_half_extents(center, half_extents, rot).into()
        }
    }
}

pub const ALL_SHAPE_TYPES: [ShapeType; 7] = [
    ShapeType::Line,
    ShapeType::Plane,
    ShapeType::Sphere,
    ShapeType::Triangle,
    ShapeType::Quad,
    ShapeType::Aabb,
    ShapeType::Obb,
];

#[test]
fn intersection_is_symmetric_for_every_pair() {
    let mut rng = oorandom::Rand32::new(42);

    for _ in 0..200 {
        for type1 in ALL_SHAPE_TYPES {
            for type2 in ALL_SHAPE_TYPES {
                let shape1 = random_shape(&mut rng, type1);
                let shape2 = random_shape(&mut rng, type2);

                assert_eq!(
                    shape1.intersects(&shape2),
                    shape2.intersects(&shape1),
                    "asymmetric intersection between {shape1:?} and {shape2:?}"
                );
            }
        }
    }
}

#[test]
fn every_shape_intersects_itself() {
    let mut rng = oorandom::Rand32::new(5);

    for _ in 0..100 {
        for shape_type in ALL_SHAPE_TYPES {
            let shape = random_shape(&mut rng, shape_type);
            assert!(shape.intersects(&shape), "{shape:?} does not intersect itself");
        }
    }
}

#[test]
fn shapes_far_apart_do_not_intersect() {
    let mut rng = oorandom::Rand32::new(17);
    let shift = Vector::new(100.0, -50.0, 25.0);

    for _ in 0..100 {
        for type1 in ALL_SHAPE_TYPES {
            for type2 in ALL_SHAPE_TYPES {
                if type1 == ShapeType::Plane || type2 == ShapeType::Plane {
                    continue;
                }

                let shape1 = random_shape(&mut rng, type1);
                let shape2 = random_shape(&mut rng, type2).translated(&shift);
                assert!(!shape1.intersects(&shape2), "{shape1:?} intersects {shape2:?}");
            }
        }
    }
}

#[test]
fn centroid_of_bounded_shapes_is_inside_bounding_box() {
    let mut rng = oorandom::Rand32::new(23);

    for _ in 0..100 {
        for shape_type in ALL_SHAPE_TYPES {
            let shape = random_shape(&mut rng, shape_type);
            let bounds = shape.compute_bounding_box();
            let centroid = shape.compute_centroid();

            assert!(
                bounds.loosened(1.0e-4).contains_local_point(&centroid),
                "{centroid:?} is outside of the bounds {bounds:?} of {shape:?}"
            );
        }
    }
}
