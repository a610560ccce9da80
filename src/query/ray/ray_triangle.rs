use crate::math::{Point, Real, UnitVector};
use crate::query::{Ray, RayCast, RayHit};
use crate::shape::Triangle;
use na::Unit;

impl RayCast for Triangle {
    #[inline]
    fn cast_ray(&self, ray: &Ray, max_distance: Real, solid: bool) -> Option<RayHit> {
        if self.is_degenerate() {
            log::debug!("Casting a ray on a degenerate triangle: using its longest edge.");
            let (i, _) = self.longest_edge();
            return self.edges()[i].cast_ray(ray, max_distance, solid);
        }

        let (toi, normal) = local_ray_intersection_with_triangle(&self.a, &self.b, &self.c, ray)?;

        if toi <= max_distance {
            Some(RayHit::new(ray, toi, normal))
        } else {
            None
        }
    }
}

/// Computes the intersection between a triangle and a ray.
///
/// Both faces of the triangle can be hit. The returned normal points toward the side the ray
/// comes from. Returns `None` for degenerate triangles and for rays parallel to the triangle.
pub fn local_ray_intersection_with_triangle(
    a: &Point<Real>,
    b: &Point<Real>,
    c: &Point<Real>,
    ray: &Ray,
) -> Option<(Real, UnitVector<Real>)> {
    let ab = *b - *a;
    let ac = *c - *a;

    // normal
    let n = ab.cross(&ac);
    let d = ray.dir.dot(&n);

    // the normal and the ray direction are parallel
    if d == 0.0 {
        return None;
    }

    let ap = ray.origin - *a;
    let t = ap.dot(&n);

    // the ray does not intersect the halfspace defined by the triangle
    if (t < 0.0 && d < 0.0) || (t > 0.0 && d > 0.0) {
        return None;
    }

    let d = d.abs();

    //
    // intersection: compute barycentric coordinates
    //
    let e = -ray.dir.cross(&ap);

    let v;
    let w;
    let toi;
    let normal;

    if t < 0.0 {
        v = -ac.dot(&e);

        if v < 0.0 || v > d {
            return None;
        }

        w = ab.dot(&e);

        if w < 0.0 || v + w > d {
            return None;
        }

        toi = -t / d;
        normal = -n;
    } else {
        v = ac.dot(&e);

        if v < 0.0 || v > d {
            return None;
        }

        w = -ab.dot(&e);

        if w < 0.0 || v + w > d {
            return None;
        }

        toi = t / d;
        normal = n;
    }

    Unit::try_new(normal, 0.0).map(|normal| (toi, normal))
}
