use shapekit3d::bounding_volume::Aabb;
use shapekit3d::math::{Point, Real, Rotation, Vector};
use shapekit3d::na::{Quaternion, Unit};
use shapekit3d::query::{Ray, RayCast, Unsupported};
use shapekit3d::shape::{Obb, Shape, Sphere};

fn run_test(name: &str, shape: Shape) {
    let mut rng = oorandom::Rand32::new(42);

    for _ in 0..1000 {
        let ray_origin = Point::from(Vector::from_fn(|_, _| rng.rand_float()).normalize() * 5.0);
        let ray = Ray::new(ray_origin, Unit::new_normalize(Point::origin() - ray_origin));

        let hit = shape
            .cast_ray(&ray, Real::MAX, true)
            .unwrap_or_else(|| panic!("Ray {ray:?} did not hit shape {name}"));

        assert_relative_eq!(ray.point_at(hit.distance), hit.position, epsilon = 1.0e-4);
        assert!(hit.normal.dot(&*ray.dir) <= 0.0);

        let point_nudged_in = hit.position + hit.normal.into_inner() * -0.001;
        let point_nudged_out = hit.position + hit.normal.into_inner() * 0.001;

        assert!(
            shape.contains(&point_nudged_in),
            "Shape {name} does not contain point nudged in {point_nudged_in:?}"
        );
        assert!(
            !shape.contains(&point_nudged_out),
            "Shape {name} contains point nudged out {point_nudged_out:?}"
        );

        let new_ray = Ray::new(
            point_nudged_out,
            Unit::new_normalize(ray_origin - point_nudged_out),
        );

        assert!(
            shape.cast_ray(&new_ray, Real::MAX, true).is_none(),
            "Ray {new_ray:?} from outside shape {name} did hit"
        );
    }
}

#[test]
fn shape_ray_cast_points_to_surface() {
    run_test(
        "sphere with radius 1",
        Sphere::new(Point::origin(), 1.0).into(),
    );
    run_test(
        "cube with half-side 1",
        Aabb::from_half_extents(Point::origin(), Vector::new(1.0, 1.0, 1.0)).into(),
    );
    run_test(
        "box with half-sides 0.5, 1, 1.5",
        Aabb::from_half_extents(Point::origin(), Vector::new(0.5, 1.0, 1.5)).into(),
    );

    let mut rng = oorandom::Rand32::new(1);
    for _ in 0..10 {
        let rotation = Unit::try_new(
            Quaternion::new(
                rng.rand_float(),
                rng.rand_float(),
                rng.rand_float(),
                rng.rand_float(),
            ),
            1.0e-5,
        )
        .unwrap_or(Rotation::identity());
        let obb = Obb::from_half_extents(Point::origin(), Vector::new(1.0, 0.5, 1.5), rotation);
        run_test(&format!("box rotated with {rotation:?}"), obb.into());
    }
}

#[test]
fn solid_flag_decides_interior_hits() {
    let shapes: [Shape; 3] = [
        Sphere::new(Point::origin(), 2.0).into(),
        Aabb::from_half_extents(Point::origin(), Vector::new(2.0, 2.0, 2.0)).into(),
        Obb::from_half_extents(
            Point::origin(),
            Vector::new(2.0, 2.0, 2.0),
            Rotation::from_euler_angles(0.1, 0.2, 0.3),
        )
        .into(),
    ];
    let ray = Ray::new(Point::new(0.0, 0.5, 0.0), Vector::x_axis());

    for shape in shapes {
        let solid_hit = shape.cast_ray(&ray, Real::MAX, true).unwrap();
        assert_eq!(solid_hit.distance, 0.0);
        assert_relative_eq!(*solid_hit.normal, -Vector::x(), epsilon = 1.0e-5);

        let exit_hit = shape.cast_ray(&ray, Real::MAX, false).unwrap();
        assert!(exit_hit.distance > 1.0);
        assert!(exit_hit.normal.dot(&*ray.dir) <= 0.0);
        assert!(shape.contains(&exit_hit.position));
    }
}

#[test]
fn max_distance_limits_hits() {
    let cube: Shape = Aabb::new(Point::new(-1.0, -1.0, -1.0), Point::new(1.0, 1.0, 1.0)).into();
    let ray = Ray::new(Point::new(0.0, 0.0, -5.0), Vector::z_axis());

    assert!(cube.cast_ray(&ray, 3.9, true).is_none());
    assert!(cube.cast_ray(&ray, 4.1, true).is_some());
}

#[test]
fn invalid_rays_are_unsupported() {
    let cube: Shape = Aabb::new(Point::new(-1.0, -1.0, -1.0), Point::new(1.0, 1.0, 1.0)).into();
    let bad_origin = Ray::new(Point::new(Real::NAN, 0.0, 0.0), Vector::z_axis());
    let bad_dir = Ray::new(
        Point::new(0.0, 0.0, -5.0),
        Unit::new_unchecked(Vector::new(0.0, 0.0, 2.0)),
    );

    assert_eq!(cube.try_cast_ray(&bad_origin, Real::MAX, true), Err(Unsupported));
    assert_eq!(cube.try_cast_ray(&bad_dir, Real::MAX, true), Err(Unsupported));

    let good = Ray::new(Point::new(0.0, 0.0, -5.0), Vector::z_axis());
    assert!(cube.try_cast_ray(&good, Real::MAX, true).unwrap().is_some());
}
