use crate::bounding_volume::{Aabb, BoundingVolume};
use crate::math::DISTANCE_EPSILON;

/// Intersection test between two axis-aligned boxes.
///
/// Boxes closer than [`DISTANCE_EPSILON`] along every axis are considered touching.
#[inline]
pub fn intersection_test_aabb_aabb(aabb1: &Aabb, aabb2: &Aabb) -> bool {
    aabb1.loosened(DISTANCE_EPSILON).intersects(aabb2)
}
