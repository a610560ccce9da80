//! Definition of the quad shape.

use crate::math::{Point, Real, UnitVector, Vector, DEFAULT_EPSILON, DISTANCE_EPSILON};
use crate::shape::{Line, ShapeError, Triangle};
use crate::utils;

use approx::AbsDiffEq;
use na::Unit;

/// A flat four-sided polygon.
///
/// The vertices are given in order around the boundary: top-left `a`, top-right `b`,
/// bottom-right `c`, bottom-left `d`. The quad is assumed to be planar and convex; when it
/// is slightly warped, its plane is the one through its centroid orthogonal to
/// `(c - a) × (d - b)`.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[repr(C)]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Quad {
    /// The top-left vertex.
    pub a: Point<Real>,
    /// The top-right vertex.
    pub b: Point<Real>,
    /// The bottom-right vertex.
    pub c: Point<Real>,
    /// The bottom-left vertex.
    pub d: Point<Real>,
}

impl From<[Point<Real>; 4]> for Quad {
    fn from(arr: [Point<Real>; 4]) -> Self {
        Quad::new(arr[0], arr[1], arr[2], arr[3])
    }
}

impl Quad {
    /// Creates a quad from its top-left, top-right, bottom-right and bottom-left vertices.
    #[inline]
    pub fn new(
        top_left: Point<Real>,
        top_right: Point<Real>,
        bottom_right: Point<Real>,
        bottom_left: Point<Real>,
    ) -> Quad {
        Quad {
            a: top_left,
            b: top_right,
            c: bottom_right,
            d: bottom_left,
        }
    }

    /// Creates a quad, checking that every vertex is finite.
    pub fn try_new(
        top_left: Point<Real>,
        top_right: Point<Real>,
        bottom_right: Point<Real>,
        bottom_left: Point<Real>,
    ) -> Result<Quad, ShapeError> {
        let quad = Quad::new(top_left, top_right, bottom_right, bottom_left);
        if quad.is_finite() {
            Ok(quad)
        } else {
            Err(ShapeError::NonFinite)
        }
    }

    /// The four vertices of this quad, in boundary order.
    #[inline]
    pub fn vertices(&self) -> [Point<Real>; 4] {
        [self.a, self.b, self.c, self.d]
    }

    /// The four boundary edges of this quad: `ab`, `bc`, `cd`, `da`.
    #[inline]
    pub fn edges(&self) -> [Line; 4] {
        [
            Line::new(self.a, self.b),
            Line::new(self.b, self.c),
            Line::new(self.c, self.d),
            Line::new(self.d, self.a),
        ]
    }

    /// A normal of this quad, with a length equal to twice its area (for planar quads).
    #[inline]
    pub fn scaled_normal(&self) -> Vector<Real> {
        (self.c - self.a).cross(&(self.d - self.b))
    }

    /// The unit normal of this quad.
    ///
    /// Returns `None` if the quad is degenerate (all its vertices are colinear).
    #[inline]
    pub fn normal(&self) -> Option<UnitVector<Real>> {
        if self.is_degenerate() {
            None
        } else {
            Some(Unit::new_normalize(self.scaled_normal()))
        }
    }

    /// Checks that this quad is degenerate, i.e., all its vertices are (almost) colinear.
    ///
    /// Like [`Triangle::is_degenerate`], the test is relative to the squared length of the
    /// longest diagonal.
    pub fn is_degenerate(&self) -> bool {
        let sq_diagonal = (self.c - self.a)
            .norm_squared()
            .max((self.d - self.b).norm_squared());
        self.scaled_normal().norm() <= DEFAULT_EPSILON * sq_diagonal
    }

    /// The two triangles `(a, b, c)` and `(a, c, d)` this quad is made of.
    #[inline]
    pub fn triangles(&self) -> [Triangle; 2] {
        [
            Triangle::new(self.a, self.b, self.c),
            Triangle::new(self.a, self.c, self.d),
        ]
    }

    /// The area of this quad.
    pub fn area(&self) -> Real {
        let [t1, t2] = self.triangles();
        t1.area() + t2.area()
    }

    /// The average of the four vertices.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        utils::center(&self.vertices())
    }

    /// Moves every vertex of this quad by `shift`.
    #[inline]
    pub fn translate(&mut self, shift: &Vector<Real>) {
        self.a += *shift;
        self.b += *shift;
        self.c += *shift;
        self.d += *shift;
    }

    /// Returns a copy of this quad moved by `shift`.
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

impl AbsDiffEq for Quad {
    type Epsilon = Real;

    fn default_epsilon() -> Real {
        DISTANCE_EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Real) -> bool {
        self.vertices()
            .iter()
            .zip(other.vertices().iter())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}
