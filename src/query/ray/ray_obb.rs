use crate::math::Real;
use crate::query::{Ray, RayCast, RayHit};
use crate::shape::Obb;
use na::Unit;

impl RayCast for Obb {
    fn cast_ray(&self, ray: &Ray, max_distance: Real, solid: bool) -> Option<RayHit> {
        let local_ray = Ray::new(
            self.to_local_point(&ray.origin),
            Unit::new_unchecked(self.to_local_vector(&ray.dir)),
        );
        let local_hit = self.aabb().cast_ray(&local_ray, max_distance, solid)?;

        Some(RayHit {
            position: self.from_local_point(&local_hit.position),
            normal: Unit::new_unchecked(self.from_local_vector(&local_hit.normal)),
            distance: local_hit.distance,
        })
    }
}
