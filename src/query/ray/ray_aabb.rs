use core::mem;

use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, UnitVector, Vector, DIM};
use crate::query::{Ray, RayCast, RayHit};
use na::Unit;
use num::Zero;

/// Computes the segment given by the intersection of a line and an AABB.
///
/// Returns the line parameters, and the normals of the AABB faces, at which the line enters
/// and exits the AABB. Both normals point against `dir`: outward for the entry face, inward
/// for the exit face. When the line enters or exits through an edge or a vertex, the
/// corresponding normal is `-dir`.
pub fn clip_aabb_line(
    aabb: &Aabb,
    origin: &Point<Real>,
    dir: &UnitVector<Real>,
) -> Option<((Real, UnitVector<Real>), (Real, UnitVector<Real>))> {
    let mut tmax: Real = Real::MAX;
    let mut tmin: Real = -tmax;
    let mut near_side = 0;
    let mut far_side = 0;
    let mut near_diag = false;
    let mut far_diag = false;

    for i in 0usize..DIM {
        if dir[i].is_zero() {
            if origin[i] < aabb.mins[i] || origin[i] > aabb.maxs[i] {
                return None;
            }
        } else {
            let denom = 1.0 / dir[i];
            let flip_sides;
            let mut inter_with_near_halfspace = (aabb.mins[i] - origin[i]) * denom;
            let mut inter_with_far_halfspace = (aabb.maxs[i] - origin[i]) * denom;

            if inter_with_near_halfspace > inter_with_far_halfspace {
                flip_sides = true;
                mem::swap(
                    &mut inter_with_near_halfspace,
                    &mut inter_with_far_halfspace,
                )
            } else {
                flip_sides = false;
            }

            if inter_with_near_halfspace > tmin {
                tmin = inter_with_near_halfspace;
                near_side = if flip_sides {
                    -(i as isize + 1)
                } else {
                    i as isize + 1
                };
                near_diag = false;
            } else if inter_with_near_halfspace == tmin {
                near_diag = true;
            }

            if inter_with_far_halfspace < tmax {
                tmax = inter_with_far_halfspace;
                far_side = if !flip_sides {
                    -(i as isize + 1)
                } else {
                    i as isize + 1
                };
                far_diag = false;
            } else if inter_with_far_halfspace == tmax {
                far_diag = true;
            }

            if tmax < 0.0 || tmin > tmax {
                return None;
            }
        }
    }

    let face_normal = |side: isize, sign: Real| {
        let mut normal = Vector::zeros();

        if side < 0 {
            normal[(-side - 1) as usize] = sign;
        } else {
            normal[(side - 1) as usize] = -sign;
        }

        Unit::new_unchecked(normal)
    };

    let near_normal = if near_diag || near_side == 0 {
        -*dir
    } else {
        face_normal(near_side, 1.0)
    };

    let far_normal = if far_diag || far_side == 0 {
        -*dir
    } else {
        face_normal(far_side, -1.0)
    };

    Some(((tmin, near_normal), (tmax, far_normal)))
}

impl RayCast for Aabb {
    fn cast_ray(&self, ray: &Ray, max_distance: Real, solid: bool) -> Option<RayHit> {
        let (near, far) = clip_aabb_line(self, &ray.origin, &ray.dir)?;

        if near.0 < 0.0 {
            if solid {
                Some(RayHit::new(ray, 0.0, -ray.dir))
            } else if far.0 <= max_distance {
                Some(RayHit::new(ray, far.0, far.1))
            } else {
                None
            }
        } else if near.0 <= max_distance {
            Some(RayHit::new(ray, near.0, near.1))
        } else {
            None
        }
    }
}
