//! Definition of the triangle shape.

use crate::math::{Point, Real, UnitVector, Vector, DEFAULT_EPSILON, DISTANCE_EPSILON};
use crate::shape::{Line, ShapeError};
use crate::utils;

use approx::AbsDiffEq;
use na::Unit;

/// A triangle shape.
///
/// The winding order of `a`, `b`, `c` determines the orientation of [`Triangle::normal`].
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[repr(C)]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Triangle {
    /// The triangle first point.
    pub a: Point<Real>,
    /// The triangle second point.
    pub b: Point<Real>,
    /// The triangle third point.
    pub c: Point<Real>,
}

impl From<[Point<Real>; 3]> for Triangle {
    fn from(arr: [Point<Real>; 3]) -> Self {
        Triangle::new(arr[0], arr[1], arr[2])
    }
}

impl Triangle {
    /// Creates a triangle from three points.
    #[inline]
    pub fn new(a: Point<Real>, b: Point<Real>, c: Point<Real>) -> Triangle {
        Triangle { a, b, c }
    }

    /// Creates a triangle from three points, checking that they are finite.
    ///
    /// Degenerate (flat or point-like) triangles are accepted: queries handle them by
    /// falling back to their longest edge.
    pub fn try_new(a: Point<Real>, b: Point<Real>, c: Point<Real>) -> Result<Triangle, ShapeError> {
        let tri = Triangle::new(a, b, c);
        if tri.is_finite() {
            Ok(tri)
        } else {
            Err(ShapeError::NonFinite)
        }
    }

    /// The three vertices of this triangle.
    #[inline]
    pub fn vertices(&self) -> [Point<Real>; 3] {
        [self.a, self.b, self.c]
    }

    /// The three edges of this triangle: `ab`, `bc`, `ca`.
    #[inline]
    pub fn edges(&self) -> [Line; 3] {
        [
            Line::new(self.a, self.b),
            Line::new(self.b, self.c),
            Line::new(self.c, self.a),
        ]
    }

    /// The edge vectors of this triangle: `b - a`, `c - b`, `a - c`.
    #[inline]
    pub fn edges_scaled_directions(&self) -> [Vector<Real>; 3] {
        [self.b - self.a, self.c - self.b, self.a - self.c]
    }

    /// A vector normal of this triangle, with a length equal to twice its area.
    ///
    /// The normal points such that it is collinear to `AB × AC` (where `×` denotes the cross
    /// product).
    #[inline]
    pub fn scaled_normal(&self) -> Vector<Real> {
        let ab = self.b - self.a;
        let ac = self.c - self.a;
        ab.cross(&ac)
    }

    /// The unit normal of this triangle assuming it is oriented ccw.
    ///
    /// Returns `None` if the triangle is degenerate.
    #[inline]
    pub fn normal(&self) -> Option<UnitVector<Real>> {
        if self.is_degenerate() {
            None
        } else {
            Some(Unit::new_normalize(self.scaled_normal()))
        }
    }

    /// The area of this triangle.
    #[inline]
    pub fn area(&self) -> Real {
        self.scaled_normal().norm() * 0.5
    }

    /// The squared length of the longest edge of this triangle, and the index of that edge
    /// in [`Triangle::edges`].
    pub fn longest_edge(&self) -> (usize, Real) {
        let sq_lengths = self.edges_scaled_directions().map(|e| e.norm_squared());
        let mut best = 0;

        for i in 1..3 {
            if sq_lengths[i] > sq_lengths[best] {
                best = i;
            }
        }

        (best, sq_lengths[best])
    }

    /// Checks that this triangle is degenerate, i.e., all its vertices are (almost) colinear.
    ///
    /// The test is scale-independent: it compares `|AB × AC| / longest_edge²` to
    /// [`DEFAULT_EPSILON`], the rounding error of the cross product. Thin triangles with a
    /// non-zero area are not degenerate.
    pub fn is_degenerate(&self) -> bool {
        let (_, sq_longest) = self.longest_edge();
        self.scaled_normal().norm() <= DEFAULT_EPSILON * sq_longest
    }

    /// The barycenter of this triangle.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        utils::center(&self.vertices())
    }

    /// Computes the barycentric coordinates `(u, v, w)` of `pt` wrt. this triangle, such that
    /// the projection of `pt` on the triangle's plane is `u * a + v * b + w * c`.
    ///
    /// Returns `None` if the triangle is degenerate.
    pub fn barycentric_coordinates(&self, pt: &Point<Real>) -> Option<[Real; 3]> {
        let n = self.scaled_normal();
        let sqn = n.norm_squared();

        if sqn <= DEFAULT_EPSILON * DEFAULT_EPSILON {
            return None;
        }

        let ap = pt - self.a;
        let v = ap.cross(&(self.c - self.a)).dot(&n) / sqn;
        let w = (self.b - self.a).cross(&ap).dot(&n) / sqn;
        Some([1.0 - v - w, v, w])
    }

    /// Moves every vertex of this triangle by `shift`.
    #[inline]
    pub fn translate(&mut self, shift: &Vector<Real>) {
        self.a += *shift;
        self.b += *shift;
        self.c += *shift;
    }

    /// Returns a copy of this triangle moved by `shift`.
    #[inline]
    #[must_use]
    pub fn translated(mut self, shift: &Vector<Real>) -> Self {
        self.translate(shift);
        self
    }

    /// Returns `true` if every vertex is finite.
    pub fn is_finite(&self) -> bool {
        self.vertices().iter().all(utils::is_finite_point)
    }
}

impl AbsDiffEq for Triangle {
    type Epsilon = Real;

    fn default_epsilon() -> Real {
        DISTANCE_EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Real) -> bool {
        self.a.abs_diff_eq(&other.a, epsilon)
            && self.b.abs_diff_eq(&other.b, epsilon)
            && self.c.abs_diff_eq(&other.c, epsilon)
    }
}
