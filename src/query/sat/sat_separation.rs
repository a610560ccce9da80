use crate::math::{Real, UnitVector, Vector, DISTANCE_EPSILON};
use crate::query::sat::{sat_candidate_axes, SatShape};

/// Tests whether two `(min, max)` intervals overlap, allowing a gap of at most `tolerance`.
#[inline]
pub fn sat_intervals_overlap(interval1: (Real, Real), interval2: (Real, Real), tolerance: Real) -> bool {
    !(interval1.1 + tolerance < interval2.0 || interval2.1 + tolerance < interval1.0)
}

/// Computes the separation between two shapes along `axis`.
///
/// The separation is the size of the gap between the projections of both shapes on `axis`.
/// It is negative if the projections overlap.
pub fn sat_compute_separation_wrt_axis<S1, S2>(
    shape1: &S1,
    shape2: &S2,
    axis: &UnitVector<Real>,
) -> Real
where
    S1: ?Sized + SatShape,
    S2: ?Sized + SatShape,
{
    let (min1, max1) = shape1.sat_interval(axis);
    let (min2, max2) = shape2.sat_interval(axis);
    (min2 - max1).max(min1 - max2)
}

/// Finds the candidate axis along which two shapes are the most separated.
///
/// Returns the separation along that axis, and the axis itself. A separation greater than
/// [`DISTANCE_EPSILON`] means that the shapes are disjoint. Returns a separation of
/// `-Real::MAX` and a zero axis if there is no candidate axis at all.
pub fn sat_find_local_separating_axis<S1, S2>(shape1: &S1, shape2: &S2) -> (Real, Vector<Real>)
where
    S1: ?Sized + SatShape,
    S2: ?Sized + SatShape,
{
    let mut best_separation = -Real::MAX;
    let mut best_dir = Vector::zeros();

    for axis in sat_candidate_axes(shape1, shape2) {
        let separation = sat_compute_separation_wrt_axis(shape1, shape2, &axis);

        if separation > best_separation {
            best_separation = separation;
            best_dir = axis.into_inner();
        }
    }

    (best_separation, best_dir)
}

/// Tests whether two convex polytopes intersect, using the Separating Axis Theorem.
///
/// Shapes that are closer than [`DISTANCE_EPSILON`] along every candidate axis are
/// considered intersecting.
pub fn intersection_test_sat<S1, S2>(shape1: &S1, shape2: &S2) -> bool
where
    S1: ?Sized + SatShape,
    S2: ?Sized + SatShape,
{
    sat_candidate_axes(shape1, shape2).iter().all(|axis| {
        sat_intervals_overlap(
            shape1.sat_interval(axis),
            shape2.sat_interval(axis),
            DISTANCE_EPSILON,
        )
    })
}
