use crate::bounding_volume::Aabb;
use crate::shape::Quad;

impl Quad {
    /// Computes the world-space [`Aabb`] of this quad.
    #[inline]
    pub fn aabb(&self) -> Aabb {
        Aabb::from_points(&self.vertices())
    }
}
