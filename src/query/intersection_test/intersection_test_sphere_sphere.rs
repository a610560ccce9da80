use crate::math::DISTANCE_EPSILON;
use crate::shape::Sphere;

/// Intersection test between spheres.
#[inline]
pub fn intersection_test_sphere_sphere(s1: &Sphere, s2: &Sphere) -> bool {
    let distance_squared = na::distance_squared(&s1.center, &s2.center);
    let sum_radius = s1.radius + s2.radius + DISTANCE_EPSILON;
    distance_squared <= sum_radius * sum_radius
}
