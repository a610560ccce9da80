use crate::bounding_volume::Aabb;
use crate::shape::Obb;

impl Obb {
    /// Computes the world-space [`Aabb`] of this oriented box.
    #[inline]
    pub fn bounding_aabb(&self) -> Aabb {
        self.local_aabb().transform_by(&self.isometry())
    }
}
