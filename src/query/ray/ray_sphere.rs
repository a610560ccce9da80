use crate::math::{Point, Real};
use crate::query::{Ray, RayCast, RayHit};
use crate::shape::Sphere;
use na::Unit;

/// Computes the distance at which a ray hits a sphere.
///
/// Returns whether the ray origin is inside of the sphere, and the hit distance if any. A ray
/// starting inside of the sphere hits it at distance zero if `solid` is `true`, and at its
/// exit point otherwise.
#[inline]
pub fn ray_toi_with_sphere(
    center: &Point<Real>,
    radius: Real,
    ray: &Ray,
    solid: bool,
) -> (bool, Option<Real>) {
    let dcenter = ray.origin - *center;

    let a = ray.dir.norm_squared();
    let b = ray.dir.dot(&dcenter);
    let c = dcenter.norm_squared() - radius * radius;

    if c > 0.0 && b > 0.0 {
        (false, None)
    } else {
        let delta = b * b - a * c;

        if delta < 0.0 {
            // no solution
            (false, None)
        } else {
            let t = (-b - delta.sqrt()) / a;

            if t <= 0.0 {
                // origin inside of the sphere
                if solid {
                    (true, Some(0.0))
                } else {
                    (true, Some((-b + delta.sqrt()) / a))
                }
            } else {
                (false, Some(t))
            }
        }
    }
}

impl RayCast for Sphere {
    fn cast_ray(&self, ray: &Ray, max_distance: Real, solid: bool) -> Option<RayHit> {
        let (inside, toi) = ray_toi_with_sphere(&self.center, self.radius, ray, solid);
        let toi = toi.filter(|toi| *toi <= max_distance)?;

        if inside && solid {
            return Some(RayHit::new(ray, 0.0, -ray.dir));
        }

        let pos = ray.point_at(toi);
        let outward = pos - self.center;
        let normal = if inside { -outward } else { outward };

        Some(RayHit::new(
            ray,
            toi,
            Unit::try_new(normal, 0.0).unwrap_or(-ray.dir),
        ))
    }
}
