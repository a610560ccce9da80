use crate::math::{DEFAULT_EPSILON, DISTANCE_EPSILON};
use crate::shape::Plane;

/// Intersection test between two planes.
///
/// Non-parallel planes always intersect along a line. Parallel planes only intersect if they
/// coincide, regardless of the orientation of their normals.
pub fn intersection_test_plane_plane(plane1: &Plane, plane2: &Plane) -> bool {
    if plane1.normal.cross(&*plane2.normal).norm() > DEFAULT_EPSILON {
        return true;
    }

    if plane1.normal.dot(&*plane2.normal) >= 0.0 {
        (plane1.distance - plane2.distance).abs() <= DISTANCE_EPSILON
    } else {
        (plane1.distance + plane2.distance).abs() <= DISTANCE_EPSILON
    }
}
