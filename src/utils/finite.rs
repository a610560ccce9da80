use crate::math::{Point, Real, Vector};

/// Returns `true` if no coordinate of `pt` is NaN or infinite.
#[inline]
pub fn is_finite_point(pt: &Point<Real>) -> bool {
    is_finite_vector(&pt.coords)
}

/// Returns `true` if no component of `v` is NaN or infinite.
#[inline]
pub fn is_finite_vector(v: &Vector<Real>) -> bool {
    v.iter().all(|e| e.is_finite())
}
