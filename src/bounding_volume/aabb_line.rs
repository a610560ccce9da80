use crate::bounding_volume::Aabb;
use crate::shape::Line;

impl Line {
    /// Computes the world-space [`Aabb`] of this line.
    #[inline]
    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.a.inf(&self.b), self.a.sup(&self.b))
    }
}
