use crate::math::{Point, Real, Vector};
use crate::query::{PointProjection, PointQuery};
use crate::shape::Sphere;
use na::Unit;

impl PointQuery for Sphere {
    /// Projects `pt` on the surface of this sphere.
    ///
    /// Unlike boxes, interior points are not left in place: they are pushed to the surface
    /// too. The center itself is projected along the `+X` axis.
    #[inline]
    fn project_point(&self, pt: &Point<Real>) -> PointProjection {
        let dpt = pt - self.center;
        let inside = dpt.norm_squared() <= self.radius * self.radius;

        let dir = Unit::try_new(dpt, 0.0).unwrap_or_else(|| {
            log::debug!("Projecting the center of a sphere: falling back to the +X direction.");
            Vector::x_axis()
        });

        PointProjection::new(inside, self.center + *dir * self.radius)
    }

    #[inline]
    fn distance_to_point(&self, pt: &Point<Real>) -> Real {
        let dist = na::distance(pt, &self.center) - self.radius;
        dist.max(0.0)
    }
}
