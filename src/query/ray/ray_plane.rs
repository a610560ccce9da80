use crate::math::{Point, Real, Vector, DEFAULT_EPSILON};
use crate::query::{Ray, RayCast, RayHit};
use crate::shape::Plane;

/// Computes the toi of an unbounded line with a plane described by its center and normal.
///
/// Returns `None` if the line is (almost) parallel to the plane.
#[inline]
pub fn line_toi_with_plane(
    plane_center: &Point<Real>,
    plane_normal: &Vector<Real>,
    line_origin: &Point<Real>,
    line_dir: &Vector<Real>,
) -> Option<Real> {
    let dpos = *plane_center - *line_origin;
    let denom = plane_normal.dot(line_dir);

    if denom.abs() <= DEFAULT_EPSILON {
        None
    } else {
        Some(plane_normal.dot(&dpos) / denom)
    }
}

impl RayCast for Plane {
    #[inline]
    fn cast_ray(&self, ray: &Ray, max_distance: Real, _: bool) -> Option<RayHit> {
        let t = line_toi_with_plane(&self.center(), &self.normal, &ray.origin, &ray.dir)?;

        if t >= 0.0 && t <= max_distance {
            let normal = if self.normal.dot(&*ray.dir) < 0.0 {
                self.normal
            } else {
                -self.normal
            };

            Some(RayHit::new(ray, t, normal))
        } else {
            None
        }
    }
}
