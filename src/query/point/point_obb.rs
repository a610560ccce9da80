use crate::math::{Point, Real};
use crate::query::{PointProjection, PointQuery};
use crate::shape::Obb;

impl PointQuery for Obb {
    #[inline]
    fn project_point(&self, pt: &Point<Real>) -> PointProjection {
        let local_pt = self.to_local_point(pt);
        let local_proj = self.aabb().project_point(&local_pt);
        PointProjection::new(local_proj.is_inside, self.from_local_point(&local_proj.point))
    }
}
