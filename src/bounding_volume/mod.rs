//! Bounding volumes.

#[doc(inline)]
pub use crate::bounding_volume::aabb::Aabb;
#[doc(inline)]
pub use crate::bounding_volume::bounding_volume::BoundingVolume;

#[doc(hidden)]
pub mod bounding_volume;

#[doc(hidden)]
pub mod aabb;
mod aabb_line;
mod aabb_obb;
mod aabb_plane;
mod aabb_quad;
mod aabb_sphere;
mod aabb_triangle;
mod aabb_utils;

/// Free functions for some special cases of bounding-volume computation.
pub mod details {
    pub use super::aabb_sphere::sphere_aabb;
    pub use super::aabb_utils::point_cloud_aabb;
}
