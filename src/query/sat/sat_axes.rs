use crate::math::{Real, UnitVector, Vector, DEFAULT_EPSILON};
use crate::query::sat::SatShape;
use arrayvec::ArrayVec;
use na::Unit;

/// The maximum number of candidate separating axes between two shapes.
pub const MAX_SAT_AXES: usize = 40;

fn push_axis(axes: &mut ArrayVec<UnitVector<Real>, MAX_SAT_AXES>, axis: &Vector<Real>) {
    let Some(axis) = Unit::try_new(*axis, DEFAULT_EPSILON) else {
        // Colinear edges or degenerate face.
        return;
    };

    let is_duplicate = axes
        .iter()
        .any(|other| axis.cross(&**other).norm_squared() <= DEFAULT_EPSILON);

    if !is_duplicate {
        let _ = axes.try_push(axis);
    }
}

// Small but non-zero features (e.g. a tiny triangle) must keep their axes, so the
// near-zero test is only applied after the inputs have a unit length.
fn normalized<const N: usize>(vectors: ArrayVec<Vector<Real>, N>) -> ArrayVec<Vector<Real>, N> {
    vectors
        .into_iter()
        .filter_map(|v| v.try_normalize(0.0))
        .collect()
}

/// Enumerates the candidate separating axes between two convex polytopes.
///
/// The set contains:
/// - the face normals of both shapes,
/// - the cross products of every edge direction of the first shape with every edge
///   direction of the second shape,
/// - for each flat shape, the cross products of its normal with the edge directions of both
///   shapes (the in-plane edge normals, needed when both shapes are coplanar).
///
/// Axes with a near-zero length are skipped and parallel axes are only listed once, so the
/// set does not depend on the order of the two shapes.
pub fn sat_candidate_axes<S1, S2>(shape1: &S1, shape2: &S2) -> ArrayVec<UnitVector<Real>, MAX_SAT_AXES>
where
    S1: ?Sized + SatShape,
    S2: ?Sized + SatShape,
{
    let mut axes = ArrayVec::new();
    let normals1 = normalized(shape1.sat_face_normals());
    let normals2 = normalized(shape2.sat_face_normals());
    let edges1 = normalized(shape1.sat_edge_directions());
    let edges2 = normalized(shape2.sat_edge_directions());

    for n in normals1.iter().chain(normals2.iter()) {
        push_axis(&mut axes, n);
    }

    for e1 in &edges1 {
        for e2 in &edges2 {
            push_axis(&mut axes, &e1.cross(e2));
        }
    }

    for normals in [&normals1, &normals2] {
        if let [n] = normals.as_slice() {
            for e in edges1.iter().chain(edges2.iter()) {
                push_axis(&mut axes, &n.cross(e));
            }
        }
    }

    axes
}
