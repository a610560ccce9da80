use core::iter::IntoIterator;

use crate::bounding_volume::Aabb;
use crate::math::{Point, Real};

/// Computes the AABB of a set of points.
///
/// Returns [`Aabb::new_invalid`] if `pts` yields nothing.
pub fn point_cloud_aabb<'a, I>(pts: I) -> Aabb
where
    I: IntoIterator<Item = &'a Point<Real>>,
{
    let mut result = Aabb::new_invalid();

    for pt in pts {
        result.take_point(*pt);
    }

    result
}

