//! Point inclusion and projection.

#[doc(inline)]
pub use self::point_line::project_point_on_segment;
#[doc(inline)]
pub use self::point_query::{PointProjection, PointQuery};

mod point_aabb;
mod point_line;
mod point_obb;
mod point_plane;
mod point_quad;
#[doc(hidden)]
pub mod point_query;
mod point_sphere;
mod point_triangle;
