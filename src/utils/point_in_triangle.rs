//! Point-in-triangle test for points already lying on the triangle's plane.

use crate::math::{Point, Real, Vector, DISTANCE_EPSILON};

/// Returns `true` if `p` lies inside of the triangle `(v1, v2, v3)`, borders included.
///
/// The point is assumed to lie on the plane of the triangle, and `normal` must be
/// colinear to that plane's normal (its orientation and length do not matter). The
/// test is carried out with the sign of the triple product of each edge with `p`,
/// with a slack of [`DISTANCE_EPSILON`] scaled by the edge length.
pub fn is_point_in_triangle(
    p: &Point<Real>,
    v1: &Point<Real>,
    v2: &Point<Real>,
    v3: &Point<Real>,
    normal: &Vector<Real>,
) -> bool {
    let n = normal.normalize();
    let edges = [(v1, v2), (v2, v3), (v3, v1)];
    let orientation = (v2 - v1).cross(&(v3 - v1)).dot(&n);
    let sign: Real = if orientation < 0.0 { -1.0 } else { 1.0 };

    edges.iter().all(|(a, b)| {
        let edge = *b - **a;
        let side = edge.cross(&(p - **a)).dot(&n) * sign;
        side >= -DISTANCE_EPSILON * edge.norm()
    })
}
