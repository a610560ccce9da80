use shapekit3d::math::{Point, Vector};
use shapekit3d::shape::{Shape, Sphere};

#[test]
fn sphere_projection_lies_on_surface() {
    let mut rng = oorandom::Rand32::new(42);

    for _ in 0..1000 {
        let center = Point::from(Vector::from_fn(|_, _| rng.rand_float() * 20.0 - 10.0));
        let radius = rng.rand_float() * 4.0 + 0.1;
        let sphere = Sphere::new(center, radius);
        let shape = Shape::from(sphere);

        let pt = Point::from(Vector::from_fn(|_, _| rng.rand_float() * 40.0 - 20.0));
        let proj = shape.compute_projection(&pt);
        assert_relative_eq!(shapekit3d::na::distance(&center, &proj), radius, epsilon = 1.0e-4);
    }
}

#[test]
fn sphere_center_projects_on_surface() {
    let sphere = Shape::from(Sphere::new(Point::new(1.0, -2.0, 3.0), 2.5));
    let proj = sphere.compute_projection(&Point::new(1.0, -2.0, 3.0));

    assert_relative_eq!(proj, Point::new(3.5, -2.0, 3.0), epsilon = 1.0e-5);
}

#[test]
fn sphere_contains_interior_and_surface_points() {
    let sphere = Shape::from(Sphere::new(Point::origin(), 1.0));

    assert!(sphere.contains(&Point::origin()));
    assert!(sphere.contains(&Point::new(0.0, 1.0, 0.0)));
    assert!(!sphere.contains(&Point::new(0.0, 1.01, 0.0)));
}

