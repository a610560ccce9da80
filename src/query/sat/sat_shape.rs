use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, UnitVector, Vector};
use crate::shape::{Line, Obb, Quad, Triangle};
use arrayvec::ArrayVec;

/// Trait of the convex polytopes whose intersections are decided by the Separating Axis Theorem.
///
/// Flat shapes (triangles and quads) have a single face normal. A line has none. Boxes have
/// three face normals that also are their three edge directions.
pub trait SatShape {
    /// The vertices of this shape.
    fn sat_vertices(&self) -> ArrayVec<Point<Real>, 8>;

    /// The face normals of this shape, not necessarily normalized.
    ///
    /// Opposite faces sharing the same normal line are only listed once.
    fn sat_face_normals(&self) -> ArrayVec<Vector<Real>, 3>;

    /// The edge directions of this shape, not necessarily normalized.
    ///
    /// Parallel edges are only listed once.
    fn sat_edge_directions(&self) -> ArrayVec<Vector<Real>, 4>;

    /// Projects every point of this shape on `axis`, returning the covered `(min, max)` interval.
    fn sat_interval(&self, axis: &UnitVector<Real>) -> (Real, Real) {
        let mut min = Real::MAX;
        let mut max = -Real::MAX;

        for pt in self.sat_vertices() {
            let dot = axis.dot(&pt.coords);
            min = min.min(dot);
            max = max.max(dot);
        }

        (min, max)
    }
}

impl SatShape for Line {
    fn sat_vertices(&self) -> ArrayVec<Point<Real>, 8> {
        [self.a, self.b].into_iter().collect()
    }

    fn sat_face_normals(&self) -> ArrayVec<Vector<Real>, 3> {
        ArrayVec::new()
    }

    fn sat_edge_directions(&self) -> ArrayVec<Vector<Real>, 4> {
        [self.scaled_direction()].into_iter().collect()
    }
}

impl SatShape for Triangle {
    fn sat_vertices(&self) -> ArrayVec<Point<Real>, 8> {
        self.vertices().into_iter().collect()
    }

    fn sat_face_normals(&self) -> ArrayVec<Vector<Real>, 3> {
        [self.scaled_normal()].into_iter().collect()
    }

    fn sat_edge_directions(&self) -> ArrayVec<Vector<Real>, 4> {
        self.edges_scaled_directions().into_iter().collect()
    }
}

impl SatShape for Quad {
    fn sat_vertices(&self) -> ArrayVec<Point<Real>, 8> {
        self.vertices().into_iter().collect()
    }

    fn sat_face_normals(&self) -> ArrayVec<Vector<Real>, 3> {
        [self.scaled_normal()].into_iter().collect()
    }

    fn sat_edge_directions(&self) -> ArrayVec<Vector<Real>, 4> {
        self.edges().iter().map(|e| e.scaled_direction()).collect()
    }
}

impl SatShape for Aabb {
    fn sat_vertices(&self) -> ArrayVec<Point<Real>, 8> {
        self.vertices().into_iter().collect()
    }

    fn sat_face_normals(&self) -> ArrayVec<Vector<Real>, 3> {
        [Vector::x(), Vector::y(), Vector::z()].into_iter().collect()
    }

    fn sat_edge_directions(&self) -> ArrayVec<Vector<Real>, 4> {
        [Vector::x(), Vector::y(), Vector::z()].into_iter().collect()
    }

    #[inline]
    fn sat_interval(&self, axis: &UnitVector<Real>) -> (Real, Real) {
        self.project_on_axis(axis)
    }
}

impl SatShape for Obb {
    fn sat_vertices(&self) -> ArrayVec<Point<Real>, 8> {
        self.vertices().into_iter().collect()
    }

    fn sat_face_normals(&self) -> ArrayVec<Vector<Real>, 3> {
        self.axes().iter().map(|axis| axis.into_inner()).collect()
    }

    fn sat_edge_directions(&self) -> ArrayVec<Vector<Real>, 4> {
        self.axes().iter().map(|axis| axis.into_inner()).collect()
    }

    #[inline]
    fn sat_interval(&self, axis: &UnitVector<Real>) -> (Real, Real) {
        self.project_on_axis(axis)
    }
}
