#[macro_use]
extern crate approx;

mod aabb_properties;
mod concrete_cases;
mod intersection_symmetry;
mod shape_ray_cast;
mod sphere_projection;
mod triangle_intersection;
mod translate_round_trip;
