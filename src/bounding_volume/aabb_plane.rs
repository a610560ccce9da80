use crate::bounding_volume::Aabb;
use crate::math::{Point, Real};
use crate::num::Bounded;
use crate::shape::Plane;
use na;

impl Plane {
    /// Computes the world-space [`Aabb`] of this plane.
    ///
    /// A plane is unbounded, so its AABB covers the whole space. Even an axis-aligned plane
    /// gets an unbounded AABB: its thickness is zero but its other two extents are not.
    #[inline]
    pub fn aabb(&self) -> Aabb {
        // We divide by 2.0  so that we can still make some operations with it (like loosening)
        // without breaking the box.
        let max = Point::max_value() * na::convert::<f64, Real>(0.5f64);
        Aabb::new(-max, max)
    }
}
