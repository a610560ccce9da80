use shapekit3d::bounding_volume::Aabb;
use shapekit3d::math::{Point, Vector};
use shapekit3d::query::{Ray, RayCast};
use shapekit3d::shape::{Shape, Sphere};

fn aabb(mins: [f32; 3], maxs: [f32; 3]) -> Shape {
    Shape::from(Aabb::new(Point::from(mins), Point::from(maxs)))
}

#[test]
fn overlapping_aabbs_intersect() {
    let a = aabb([0.0, 0.0, 0.0], [2.0, 2.0, 2.0]);
    let b = aabb([1.0, 1.0, 1.0], [3.0, 3.0, 3.0]);
    assert!(a.intersects(&b));
    assert!(b.intersects(&a));
}

#[test]
fn disjoint_aabbs_do_not_intersect() {
    let a = aabb([0.0, 0.0, 0.0], [1.0, 1.0, 1.0]);
    let b = aabb([2.0, 2.0, 2.0], [3.0, 3.0, 3.0]);
    assert!(!a.intersects(&b));
    assert!(!b.intersects(&a));
}

#[test]
fn distant_spheres_do_not_intersect() {
    let s1 = Shape::from(Sphere::new(Point::origin(), 1.0));
    let s2 = Shape::from(Sphere::new(Point::new(3.0, 0.0, 0.0), 1.0));
    assert!(!s1.intersects(&s2));
    assert!(!s2.intersects(&s1));
}

#[test]
fn sphere_far_from_aabb_corner_does_not_intersect() {
    let sphere = Shape::from(Sphere::new(Point::origin(), 1.0));
    let b = aabb([2.0, 2.0, 2.0], [3.0, 3.0, 3.0]);
    assert!(!sphere.intersects(&b));
    assert!(!b.intersects(&sphere));
}

#[test]
fn ray_along_z_hits_unit_cube() {
    let cube = Shape::from(Aabb::new(
        Point::new(-1.0, -1.0, -1.0),
        Point::new(1.0, 1.0, 1.0),
    ));
    let ray = Ray::new(Point::new(0.0, 0.0, -5.0), Vector::z_axis());
    let hit = cube
        .cast_ray(&ray, f32::MAX, true)
        .expect("the ray should hit the cube");

    assert_relative_eq!(hit.distance, 4.0, epsilon = 1.0e-5);
    assert_relative_eq!(hit.position, Point::new(0.0, 0.0, -1.0), epsilon = 1.0e-5);
    assert_relative_eq!(*hit.normal, -Vector::z(), epsilon = 1.0e-5);
}
