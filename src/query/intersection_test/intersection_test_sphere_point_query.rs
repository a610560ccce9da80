use crate::math::DISTANCE_EPSILON;
use crate::query::PointQuery;
use crate::shape::Sphere;

/// Intersection test between a sphere and a shape implementing the `PointQuery` trait.
///
/// The sphere center is projected on the other shape: both shapes intersect if the center
/// is inside of it, or if its projection is not farther than the sphere radius.
pub fn intersection_test_sphere_point_query<P: ?Sized + PointQuery>(
    sphere1: &Sphere,
    point_query2: &P,
) -> bool {
    let proj = point_query2.project_point(&sphere1.center);
    proj.is_inside_eps(&sphere1.center, sphere1.radius + DISTANCE_EPSILON)
}

/// Intersection test between a shape implementing the `PointQuery` trait and a sphere.
#[inline]
pub fn intersection_test_point_query_sphere<P: ?Sized + PointQuery>(
    point_query1: &P,
    sphere2: &Sphere,
) -> bool {
    intersection_test_sphere_point_query(sphere2, point_query1)
}
