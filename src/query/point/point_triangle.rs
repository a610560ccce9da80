use crate::math::{Point, Real};
use crate::query::point::point_line::project_point_on_segment;
use crate::query::{PointProjection, PointQuery};
use crate::shape::Triangle;
use na;

impl Triangle {
    /// Projects `pt` on the closest edge of this triangle.
    fn project_point_on_edges(&self, pt: &Point<Real>) -> Point<Real> {
        let mut best = self.a;
        let mut best_dist = Real::MAX;

        for edge in self.edges() {
            let (proj, _) = project_point_on_segment(&edge.a, &edge.b, pt);
            let dist = na::distance_squared(pt, &proj);

            if dist < best_dist {
                best = proj;
                best_dist = dist;
            }
        }

        best
    }

    /// Projects `pt` on this triangle, assuming it is not degenerate.
    ///
    /// Classifies `pt` in the Voronoï regions of the triangle's vertices, edges and face.
    fn project_point_on_voronoi_regions(&self, pt: &Point<Real>) -> Point<Real> {
        let a = self.a;
        let b = self.b;
        let c = self.c;

        let ab = b - a;
        let ac = c - a;
        let ap = pt - a;

        let ab_ap = ab.dot(&ap);
        let ac_ap = ac.dot(&ap);

        if ab_ap <= 0.0 && ac_ap <= 0.0 {
            // Voronoï region of `a`.
            return a;
        }

        let bp = pt - b;
        let ab_bp = ab.dot(&bp);
        let ac_bp = ac.dot(&bp);

        if ab_bp >= 0.0 && ac_bp <= ab_bp {
            // Voronoï region of `b`.
            return b;
        }

        let cp = pt - c;
        let ab_cp = ab.dot(&cp);
        let ac_cp = ac.dot(&cp);

        if ac_cp >= 0.0 && ab_cp <= ac_cp {
            // Voronoï region of `c`.
            return c;
        }

        let bc = c - b;
        let n = ab.cross(&ac);

        let vc = n.dot(&ab.cross(&ap));
        if vc < 0.0 && ab_ap >= 0.0 && ab_bp <= 0.0 {
            // Voronoï region of `ab`.
            let v = ab_ap / ab.norm_squared();
            return a + ab * v;
        }

        let vb = -n.dot(&ac.cross(&cp));
        if vb < 0.0 && ac_ap >= 0.0 && ac_cp <= 0.0 {
            // Voronoï region of `ac`.
            let w = ac_ap / ac.norm_squared();
            return a + ac * w;
        }

        let va = n.dot(&bc.cross(&bp));
        if va < 0.0 && ac_bp - ab_bp >= 0.0 && ab_cp - ac_cp >= 0.0 {
            // Voronoï region of `bc`.
            let w = bc.dot(&bp) / bc.norm_squared();
            return b + bc * w;
        }

        // Voronoï region of the face.
        let denom = va + vb + vc;

        if denom != 0.0 {
            let v = vb / denom;
            let w = vc / denom;
            a + ab * v + ac * w
        } else {
            // Numerical instability on nearly degenerate triangles.
            self.project_point_on_edges(pt)
        }
    }
}

impl PointQuery for Triangle {
    #[inline]
    fn project_point(&self, pt: &Point<Real>) -> PointProjection {
        let proj = if self.is_degenerate() {
            log::debug!("Projecting a point on a degenerate triangle: using its longest edge.");
            let (i, _) = self.longest_edge();
            let edge = self.edges()[i];
            project_point_on_segment(&edge.a, &edge.b, pt).0
        } else {
            self.project_point_on_voronoi_regions(pt)
        };

        PointProjection::new(false, proj)
    }
}
