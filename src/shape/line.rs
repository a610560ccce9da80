//! Definition of the line (segment) shape.

use crate::math::{Point, Real, UnitVector, Vector, DEFAULT_EPSILON};
use crate::shape::ShapeError;
use crate::utils;

use approx::AbsDiffEq;
use core::mem;
use na::{self, Unit};

/// A line segment going from `a` to `b`.
///
/// A zero-length line is allowed: every query then treats it as the point `a`.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[repr(C)]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Line {
    /// The point the line begins at.
    pub a: Point<Real>,
    /// The point the line ends at.
    pub b: Point<Real>,
}

impl Line {
    /// Creates a new line from two points.
    #[inline]
    pub fn new(a: Point<Real>, b: Point<Real>) -> Line {
        Line { a, b }
    }

    /// Creates a new line, checking that both points are finite.
    pub fn try_new(a: Point<Real>, b: Point<Real>) -> Result<Line, ShapeError> {
        if !utils::is_finite_point(&a) || !utils::is_finite_point(&b) {
            return Err(ShapeError::NonFinite);
        }

        Ok(Line::new(a, b))
    }

    /// The direction of this line scaled by its length.
    ///
    /// Points from `self.a` toward `self.b`.
    #[inline]
    pub fn scaled_direction(&self) -> Vector<Real> {
        self.b - self.a
    }

    /// The length of this line.
    #[inline]
    pub fn length(&self) -> Real {
        self.scaled_direction().norm()
    }

    /// The unit direction of this line.
    ///
    /// Returns `None` if both points are equal.
    pub fn direction(&self) -> Option<UnitVector<Real>> {
        Unit::try_new(self.scaled_direction(), DEFAULT_EPSILON)
    }

    /// Returns `true` if this line has (almost) no length.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.scaled_direction().norm_squared() <= DEFAULT_EPSILON
    }

    /// Swaps the two vertices of this line.
    pub fn swap(&mut self) {
        mem::swap(&mut self.a, &mut self.b)
    }

    /// The point at the parameter `t`, where `t = 0` gives `a` and `t = 1` gives `b`.
    #[inline]
    pub fn point_at(&self, t: Real) -> Point<Real> {
        self.a + self.scaled_direction() * t
    }

    /// The midpoint of this line.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        na::center(&self.a, &self.b)
    }

    /// Moves both endpoints of this line by `shift`.
    #[inline]
    pub fn translate(&mut self, shift: &Vector<Real>) {
        self.a += *shift;
        self.b += *shift;
    }

    /// Returns a copy of this line moved by `shift`.
    #[inline]
    #[must_use]
    pub fn translated(mut self, shift: &Vector<Real>) -> Self {
        self.translate(shift);
        self
    }

    /// Returns `true` if both endpoints are finite.
    pub fn is_finite(&self) -> bool {
        utils::is_finite_point(&self.a) && utils::is_finite_point(&self.b)
    }
}

impl From<[Point<Real>; 2]> for Line {
    fn from(arr: [Point<Real>; 2]) -> Self {
        Line::new(arr[0], arr[1])
    }
}

impl AbsDiffEq for Line {
    type Epsilon = Real;

    fn default_epsilon() -> Real {
        crate::math::DISTANCE_EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Real) -> bool {
        self.a.abs_diff_eq(&other.a, epsilon) && self.b.abs_diff_eq(&other.b, epsilon)
    }
}
