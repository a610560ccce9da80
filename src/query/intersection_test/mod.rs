//! Implementation details of the `intersection_test` function.

pub use self::intersection_test::{intersection_test, try_intersection_test};
pub use self::intersection_test_aabb_aabb::intersection_test_aabb_aabb;
pub use self::intersection_test_line_line::intersection_test_line_line;
pub use self::intersection_test_plane_plane::intersection_test_plane_plane;
pub use self::intersection_test_plane_sat_shape::{
    intersection_test_plane_sat_shape, intersection_test_sat_shape_plane,
};
pub use self::intersection_test_sphere_point_query::{
    intersection_test_point_query_sphere, intersection_test_sphere_point_query,
};
pub use self::intersection_test_sphere_sphere::intersection_test_sphere_sphere;

mod intersection_test_aabb_aabb;
mod intersection_test_line_line;
mod intersection_test_plane_plane;
mod intersection_test_plane_sat_shape;
mod intersection_test_sphere_point_query;
mod intersection_test_sphere_sphere;
