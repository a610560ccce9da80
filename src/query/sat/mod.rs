//! Application of the Separating Axis Theorem (SAT).
//!
//! Two convex shapes do **not** intersect if and only if there exists an axis onto which their
//! projections do not overlap. For the polytopes of this crate (lines, triangles, quads and
//! boxes), it is sufficient to test a finite set of candidate axes:
//!
//! 1. the face normals of both shapes,
//! 2. the cross products of the edge directions of both shapes,
//! 3. for flat shapes, the normals of their edges within their plane.
//!
//! See [`sat_candidate_axes`] for the construction of that set, and
//! [`intersection_test_sat`] for the test itself.

pub use self::sat_axes::{sat_candidate_axes, MAX_SAT_AXES};
pub use self::sat_separation::{
    intersection_test_sat, sat_compute_separation_wrt_axis, sat_find_local_separating_axis,
    sat_intervals_overlap,
};
pub use self::sat_shape::SatShape;

mod sat_axes;
mod sat_separation;
mod sat_shape;
