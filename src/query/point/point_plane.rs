use crate::math::{Point, Real};
use crate::query::{PointProjection, PointQuery};
use crate::shape::Plane;

impl PointQuery for Plane {
    #[inline]
    fn project_point(&self, pt: &Point<Real>) -> PointProjection {
        let dist = self.signed_distance(pt);
        PointProjection::new(false, pt - *self.normal * dist)
    }

    #[inline]
    fn distance_to_point(&self, pt: &Point<Real>) -> Real {
        self.signed_distance(pt).abs()
    }
}
