use crate::math::DISTANCE_EPSILON;
use crate::query::sat::SatShape;
use crate::shape::Plane;

/// Intersection test between a plane and a convex polytope.
///
/// The polytope intersects the plane if its projection on the plane normal contains the
/// plane offset, that is, if its vertices are not all strictly on the same side of the plane.
pub fn intersection_test_plane_sat_shape<S: ?Sized + SatShape>(plane1: &Plane, shape2: &S) -> bool {
    let (min, max) = shape2.sat_interval(&plane1.normal);
    min - DISTANCE_EPSILON <= plane1.distance && plane1.distance <= max + DISTANCE_EPSILON
}

/// Intersection test between a convex polytope and a plane.
#[inline]
pub fn intersection_test_sat_shape_plane<S: ?Sized + SatShape>(shape1: &S, plane2: &Plane) -> bool {
    intersection_test_plane_sat_shape(plane2, shape1)
}
