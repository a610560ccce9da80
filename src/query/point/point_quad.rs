use crate::math::{Point, Real};
use crate::query::point::point_line::project_point_on_segment;
use crate::query::{PointProjection, PointQuery};
use crate::shape::Quad;
use crate::utils;
use na;

impl Quad {
    /// Projects `pt` on the closest boundary edge of this quad.
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
}

impl PointQuery for Quad {
    fn project_point(&self, pt: &Point<Real>) -> PointProjection {
        let Some(normal) = self.normal() else {
            log::debug!("Projecting a point on a degenerate quad: using its boundary.");
            return PointProjection::new(false, self.project_point_on_edges(pt));
        };

        let on_plane = pt - *normal * normal.dot(&(pt - self.center()));

        let in_footprint =
            utils::is_point_in_triangle(&on_plane, &self.a, &self.b, &self.c, &normal)
                || utils::is_point_in_triangle(&on_plane, &self.a, &self.c, &self.d, &normal);

        if in_footprint {
            PointProjection::new(false, on_plane)
        } else {
            PointProjection::new(false, self.project_point_on_edges(pt))
        }
    }
}
