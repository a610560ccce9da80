use crate::math::{Real, DISTANCE_EPSILON};
use crate::query::closest_points::closest_points_segment_segment_params;
use crate::query::{Ray, RayCast, RayHit};
use crate::shape::Line;
use na::{self, Unit};

impl RayCast for Line {
    /// Casts a ray on this line.
    ///
    /// A line has no thickness: the ray hits it if they pass within [`DISTANCE_EPSILON`] of
    /// each other. The reported normal is the component of `-ray.dir` orthogonal to the line.
    fn cast_ray(&self, ray: &Ray, max_distance: Real, _: bool) -> Option<RayHit> {
        // Clip the ray to a finite segment long enough to reach every point of the line.
        let reach = na::distance(&ray.origin, &self.a) + self.length() + DISTANCE_EPSILON;
        let ray_len = max_distance.min(reach).max(0.0);
        let ray_end = ray.point_at(ray_len);

        let (s, t) =
            closest_points_segment_segment_params((&ray.origin, &ray_end), (&self.a, &self.b));
        let on_ray = ray.origin + (ray_end - ray.origin) * s;
        let on_line = self.point_at(t);

        if na::distance_squared(&on_ray, &on_line) > DISTANCE_EPSILON * DISTANCE_EPSILON {
            return None;
        }

        let normal = match self.direction() {
            Some(dir) => -(*ray.dir - *dir * dir.dot(&*ray.dir)),
            None => -*ray.dir,
        };
        let normal = Unit::try_new(normal, DISTANCE_EPSILON).unwrap_or(-ray.dir);

        Some(RayHit {
            position: on_ray,
            normal,
            distance: s * ray_len,
        })
    }
}
