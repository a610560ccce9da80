use crate::math::{Point, Real, DEFAULT_EPSILON};
use crate::shape::Line;
use na;

/// Closest points between two lines (segments).
///
/// The result, say `res`, is such that the closest points between both lines are
/// `res[0]` on `line1` and `res[1]` on `line2`.
#[inline]
pub fn closest_points_line_line(line1: &Line, line2: &Line) -> [Point<Real>; 2] {
    let (s, t) = closest_points_segment_segment_params((&line1.a, &line1.b), (&line2.a, &line2.b));
    [line1.point_at(s), line2.point_at(t)]
}

/// Computes the parameters of the pair of closest points between two segments.
///
/// Returns `(s, t)`, both in `[0, 1]`, such that the closest points are
/// `seg1.0 + (seg1.1 - seg1.0) * s` and `seg2.0 + (seg2.1 - seg2.0) * t`. Segments with a
/// (near) zero length are treated as points.
pub fn closest_points_segment_segment_params(
    seg1: (&Point<Real>, &Point<Real>),
    seg2: (&Point<Real>, &Point<Real>),
) -> (Real, Real) {
    // Inspired by Real-time collision detection by Christer Ericson.
    let d1 = seg1.1 - seg1.0;
    let d2 = seg2.1 - seg2.0;
    let r = seg1.0 - seg2.0;

    let a = d1.norm_squared();
    let e = d2.norm_squared();
    let f = d2.dot(&r);

    let mut s;
    let mut t;

    let eps = DEFAULT_EPSILON;
    if a <= eps && e <= eps {
        s = 0.0;
        t = 0.0;
    } else if a <= eps {
        s = 0.0;
        t = na::clamp(f / e, 0.0, 1.0);
    } else {
        let c = d1.dot(&r);
        if e <= eps {
            t = 0.0;
            s = na::clamp(-c / a, 0.0, 1.0);
        } else {
            let b = d1.dot(&d2);
            let ae = a * e;
            let bb = b * b;
            let denom = ae - bb;

            // Use absolute and ulps error to test collinearity.
            if denom > eps && !ulps_eq!(ae, bb) {
                s = na::clamp((b * f - c * e) / denom, 0.0, 1.0);
            } else {
                s = 0.0;
            }

            t = (b * s + f) / e;

            if t < 0.0 {
                t = 0.0;
                s = na::clamp(-c / a, 0.0, 1.0);
            } else if t > 1.0 {
                t = 1.0;
                s = na::clamp((b - c) / a, 0.0, 1.0);
            }
        }
    }

    (s, t)
}
