use crate::math::{Point, Real};

/// Computes the geometric center (centroid) of a set of points.
///
/// All points are weighted equally. Returns the origin if `pts` is empty.
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use shapekit3d::math::Point;
/// use shapekit3d::utils::center;
///
/// let c = center(&[Point::new(0.0, 0.0, 0.0), Point::new(4.0, 2.0, 0.0)]);
/// assert_eq!(c, Point::new(2.0, 1.0, 0.0));
/// # }
/// ```
#[inline]
pub fn center(pts: &[Point<Real>]) -> Point<Real> {
    if pts.is_empty() {
        return Point::origin();
    }

    let denom: Real = 1.0 / pts.len() as Real;
    let mut res = Point::origin();

    for pt in pts {
        res += pt.coords * denom;
    }

    res
}
