use crate::math::DISTANCE_EPSILON;
use crate::query::closest_points::closest_points_line_line;
use crate::shape::Line;

/// Intersection test between two segments.
///
/// Segments are considered intersecting if they are closer than [`DISTANCE_EPSILON`].
pub fn intersection_test_line_line(line1: &Line, line2: &Line) -> bool {
    let [pt1, pt2] = closest_points_line_line(line1, line2);
    na::distance_squared(&pt1, &pt2) <= DISTANCE_EPSILON * DISTANCE_EPSILON
}
