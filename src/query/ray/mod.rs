//! Ray-casting related definitions and implementations.

#[doc(inline)]
pub use self::ray::{Ray, RayCast, RayHit};
pub use self::ray_aabb::clip_aabb_line;
pub use self::ray_plane::line_toi_with_plane;
pub use self::ray_sphere::ray_toi_with_sphere;
pub use self::ray_triangle::local_ray_intersection_with_triangle;

#[doc(hidden)]
pub mod ray;
mod ray_aabb;
mod ray_line;
mod ray_obb;
mod ray_plane;
mod ray_quad;
mod ray_sphere;
mod ray_triangle;
