use crate::bounding_volume::Aabb;
use crate::math::{Point, Real};
use crate::query::{PointProjection, PointQuery};

impl Aabb {
    /// Clamps `pt` between the corners of this AABB.
    #[inline]
    pub fn clamp_point(&self, pt: &Point<Real>) -> Point<Real> {
        pt.sup(&self.mins).inf(&self.maxs)
    }
}

impl PointQuery for Aabb {
    #[inline]
    fn project_point(&self, pt: &Point<Real>) -> PointProjection {
        PointProjection::new(self.contains_local_point(pt), self.clamp_point(pt))
    }
}
