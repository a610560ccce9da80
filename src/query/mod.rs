//! Non-persistent geometric queries.
//!
//! # General cases
//! The most general methods provided by this module are:
//!
//! * [`query::intersection_test()`] to determine if two shapes are intersecting or not.
//! * [`query::try_intersection_test()`], its fallible version rejecting non-finite shapes.
//!
//! Ray-casting and point-projection can be achieved by importing traits:
//!
//! * [`query::RayCast`] for ray-casting.
//! * [`query::PointQuery`] for point projection.
//!
//! # Specific cases
//! The functions exported by the `details` submodule are more specific versions of the ones described above.
//! For example `intersection_test_sphere_sphere` tests the intersection between two shapes known at compile-time to be spheres.
//! The specific functions have the form `[operation]_[shape1]_[shape2]()` where:
//!
//! * `[operation]` is `intersection_test`.
//! * `[shape1]` is the type of the first shape passed to the function, e.g., `sphere`, or `plane`. Can also identify a trait implemented by supported shapes, e.g., `point_query` or `sat_shape`.
//! * `[shape2]` is the type of the second shape passed to the function.
//!
//! [`query::intersection_test()`]: crate::query::intersection_test
//! [`query::try_intersection_test()`]: crate::query::try_intersection_test
//! [`query::RayCast`]: crate::query::RayCast
//! [`query::PointQuery`]: crate::query::PointQuery

pub use self::error::Unsupported;
pub use self::intersection_test::{intersection_test, try_intersection_test};
pub use self::point::{PointProjection, PointQuery};
pub use self::ray::{Ray, RayCast, RayHit};

pub mod closest_points;
mod error;
mod intersection_test;
pub mod point;
mod ray;
pub mod sat;

/// Queries dedicated to specific pairs of shapes.
pub mod details {
    pub use super::closest_points::*;
    pub use super::intersection_test::*;
    pub use super::point::project_point_on_segment;
    pub use super::ray::{
        clip_aabb_line, line_toi_with_plane, local_ray_intersection_with_triangle,
        ray_toi_with_sphere,
    };
    pub use super::sat::intersection_test_sat;
}
