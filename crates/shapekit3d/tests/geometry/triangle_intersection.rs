use shapekit3d::bounding_volume::Aabb;
use shapekit3d::math::{Point, Real, Rotation, Vector};
use shapekit3d::query::{Ray, RayCast};
use shapekit3d::shape::{Line, Obb, Plane, Quad, Shape, Triangle};

fn triangle(a: [Real; 3], b: [Real; 3], c: [Real; 3]) -> Shape {
    Triangle::new(Point::from(a), Point::from(b), Point::from(c)).into()
}

fn unit_square_at(z: Real) -> Shape {
    Quad::new(
        Point::new(0.0, 0.0, z),
        Point::new(1.0, 0.0, z),
        Point::new(1.0, 1.0, z),
        Point::new(0.0, 1.0, z),
    )
    .into()
}

#[test]
fn crossing_triangles_intersect() {
    let t1 = triangle([-1.0, -1.0, 0.0], [1.0, -1.0, 0.0], [0.0, 1.0, 0.0]);
    let t2 = triangle([0.0, 0.0, -1.0], [0.0, 0.0, 1.0], [0.0, 2.0, 0.0]);

    assert!(t1.intersects(&t2));
    assert!(t2.intersects(&t1));
}

#[test]
fn stacked_triangles_do_not_intersect() {
    let t1 = triangle([0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]);
    let t2 = triangle([0.0, 0.0, 0.5], [1.0, 0.0, 0.5], [0.0, 1.0, 0.5]);

    assert!(!t1.intersects(&t2));
}

#[test]
fn coplanar_triangles() {
    let t1 = triangle([0.0, 0.0, 0.0], [2.0, 0.0, 0.0], [0.0, 2.0, 0.0]);
    let overlapping = triangle([0.5, 0.5, 0.0], [3.0, 0.5, 0.0], [0.5, 3.0, 0.0]);
    // Inside the bounding box of `t1`, but past its hypotenuse.
    let disjoint = triangle([1.8, 1.8, 0.0], [2.0, 1.8, 0.0], [1.8, 2.0, 0.0]);

    assert!(t1.intersects(&overlapping));
    assert!(!t1.intersects(&disjoint));
    assert!(!disjoint.intersects(&t1));
}

#[test]
fn triangle_against_plane() {
    let plane: Shape = Plane::new(Vector::z_axis(), 0.25).into();
    let crossing = triangle([0.0, 0.0, 0.0], [1.0, 0.0, 1.0], [0.0, 1.0, 0.0]);
    let below = triangle([0.0, 0.0, 0.0], [1.0, 0.0, 0.2], [0.0, 1.0, 0.0]);

    assert!(plane.intersects(&crossing));
    assert!(crossing.intersects(&plane));
    assert!(!plane.intersects(&below));
}

#[test]
fn segment_through_quad() {
    let quad = unit_square_at(0.0);
    let through = Shape::from(Line::new(Point::new(0.5, 0.5, -1.0), Point::new(0.5, 0.5, 1.0)));
    let beside = Shape::from(Line::new(Point::new(1.5, 0.5, -1.0), Point::new(1.5, 0.5, 1.0)));
    let above = Shape::from(Line::new(Point::new(0.5, 0.5, 0.5), Point::new(0.5, 0.5, 1.0)));

    assert!(quad.intersects(&through));
    assert!(!quad.intersects(&beside));
    assert!(!quad.intersects(&above));
}

#[test]
fn quad_contains_only_surface_points() {
    let quad = unit_square_at(1.0);

    assert!(quad.contains(&Point::new(0.5, 0.25, 1.0)));
    assert!(quad.contains(&Point::new(1.0, 1.0, 1.0)));
    assert!(!quad.contains(&Point::new(0.5, 0.25, 1.1)));
    assert!(!quad.contains(&Point::new(1.5, 0.25, 1.0)));
}

#[test]
fn quads_against_boxes() {
    let quad = unit_square_at(0.0);
    let aabb: Shape = Aabb::new(Point::new(0.5, 0.5, -0.5), Point::new(2.0, 2.0, 0.5)).into();
    let far_aabb: Shape = Aabb::new(Point::new(0.5, 0.5, 0.1), Point::new(2.0, 2.0, 0.5)).into();
    let angle = core::f64::consts::FRAC_PI_4 as Real;
    // Its lowest edge sits right above the quad.
    let obb: Shape = Obb::from_half_extents(
        Point::new(0.5, 0.5, 2.0_f32.sqrt() * 0.5 + 0.05),
        Vector::new(0.5, 0.5, 0.5),
        Rotation::from_axis_angle(&Vector::x_axis(), angle),
    )
    .into();

    assert!(quad.intersects(&aabb));
    assert!(!quad.intersects(&far_aabb));
    assert!(!quad.intersects(&obb));
    assert!(quad.intersects(&obb.translated(&Vector::new(0.0, 0.0, -0.1))));
}

#[test]
fn rotated_boxes_separated_by_an_edge_axis() {
    let angle = core::f64::consts::FRAC_PI_4 as Real;
    let obb1: Shape = Obb::from_half_extents(
        Point::origin(),
        Vector::new(1.0, 1.0, 1.0),
        Rotation::from_axis_angle(&Vector::z_axis(), angle),
    )
    .into();
    let obb2: Shape = Obb::from_half_extents(
        Point::new(2.0 * 2.0_f32.sqrt() + 0.1, 0.0, 0.0),
        Vector::new(1.0, 1.0, 1.0),
        Rotation::from_axis_angle(&Vector::y_axis(), angle),
    )
    .into();

    assert!(!obb1.intersects(&obb2));
    assert!(obb1.intersects(&obb2.translated(&Vector::new(-0.2, 0.0, 0.0))));
}

#[test]
fn thin_triangles_and_quads_keep_their_area() {
    let sliver_tri = Triangle::new(
        Point::new(0.0, 0.0, 0.0),
        Point::new(10.0, 0.0, 0.0),
        Point::new(5.0, 0.003, 0.0),
    );
    let sliver_quad = Quad::new(
        Point::new(0.0, 0.0, 0.0),
        Point::new(10.0, 0.0, 0.0),
        Point::new(10.0, 0.003, 0.0),
        Point::new(0.0, 0.003, 0.0),
    );
    assert!(!sliver_tri.is_degenerate());
    assert!(!sliver_quad.is_degenerate());

    let crossing = Shape::from(Line::new(Point::new(5.0, 0.002, -1.0), Point::new(5.0, 0.002, 1.0)));
    let ray = Ray::new(Point::new(5.0, 0.002, -1.0), Vector::z_axis());

    for (sliver, vertices) in [
        (Shape::from(sliver_tri), sliver_tri.vertices().to_vec()),
        (Shape::from(sliver_quad), sliver_quad.vertices().to_vec()),
    ] {
        for v in vertices {
            assert!(sliver.contains(&v), "{sliver:?} does not contain its vertex {v:?}");
        }

        assert!(sliver.intersects(&crossing));
        assert!(crossing.intersects(&sliver));

        let hit = sliver.cast_ray(&ray, Real::MAX, true).unwrap();
        assert_relative_eq!(hit.distance, 1.0, epsilon = 1.0e-5);
    }
}
