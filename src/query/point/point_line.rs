use crate::math::{Point, Real};
use crate::query::{PointProjection, PointQuery};
use crate::shape::Line;

/// Projects `pt` on the segment `[a, b]`, returning the projected point and its parameter
/// `t` in `[0, 1]` such that the projection equals `a + (b - a) * t`.
///
/// A zero-length segment projects everything on `a`.
#[inline]
pub fn project_point_on_segment(
    a: &Point<Real>,
    b: &Point<Real>,
    pt: &Point<Real>,
) -> (Point<Real>, Real) {
    let ab = b - a;
    let ap = pt - a;
    let ab_ap = ab.dot(&ap);
    let sqnab = ab.norm_squared();

    if ab_ap <= 0.0 || sqnab == 0.0 {
        // Voronoï region of vertex 'a'.
        (*a, 0.0)
    } else if ab_ap >= sqnab {
        // Voronoï region of vertex 'b'.
        (*b, 1.0)
    } else {
        // Voronoï region of the segment interior.
        let u = ab_ap / sqnab;
        (a + ab * u, u)
    }
}

impl PointQuery for Line {
    #[inline]
    fn project_point(&self, pt: &Point<Real>) -> PointProjection {
        let (proj, _) = project_point_on_segment(&self.a, &self.b, pt);
        PointProjection::new(false, proj)
    }
}
