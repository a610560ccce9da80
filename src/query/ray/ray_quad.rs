use crate::math::Real;
use crate::query::{Ray, RayCast, RayHit};
use crate::shape::Quad;

impl RayCast for Quad {
    /// Casts the ray on the two triangles of this quad, keeping the nearest hit.
    fn cast_ray(&self, ray: &Ray, max_distance: Real, solid: bool) -> Option<RayHit> {
        let [t1, t2] = self.triangles();

        match (
            t1.cast_ray(ray, max_distance, solid),
            t2.cast_ray(ray, max_distance, solid),
        ) {
            (Some(h1), Some(h2)) => Some(if h1.distance <= h2.distance { h1 } else { h2 }),
            (h1, h2) => h1.or(h2),
        }
    }
}
