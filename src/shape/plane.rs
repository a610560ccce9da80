//! Definition of the infinite plane shape.

use crate::math::{Point, Real, UnitVector, Vector, DEFAULT_EPSILON, DISTANCE_EPSILON};
use crate::shape::ShapeError;
use crate::utils;

use approx::AbsDiffEq;
use na::Unit;

/// An infinite plane: the set of points `x` such that `normal · x = distance`.
///
/// Unlike a half-space, a plane has no interior: it only contains the points of its
/// surface (up to [`DISTANCE_EPSILON`]).
#[derive(PartialEq, Debug, Clone, Copy)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[repr(C)]
pub struct Plane {
    /// The plane's unit normal.
    pub normal: UnitVector<Real>,
    /// The signed distance from the origin to the plane, along `normal`.
    pub distance: Real,
}

impl Plane {
    /// Builds a new plane from its unit normal and its signed distance to the origin.
    #[inline]
    pub fn new(normal: UnitVector<Real>, distance: Real) -> Plane {
        Plane { normal, distance }
    }

    /// Builds a new plane, checking that `normal` has a unit length and that every
    /// input is finite.
    pub fn try_new(normal: Vector<Real>, distance: Real) -> Result<Plane, ShapeError> {
        if !utils::is_finite_vector(&normal) || !distance.is_finite() {
            return Err(ShapeError::NonFinite);
        }

        let norm = normal.norm();
        if (norm - 1.0).abs() > DISTANCE_EPSILON {
            return Err(ShapeError::NonUnitNormal(norm));
        }

        Ok(Plane::new(Unit::new_normalize(normal), distance))
    }

    /// Builds the plane passing through `point` with the given normal.
    #[inline]
    pub fn from_point_and_normal(point: &Point<Real>, normal: UnitVector<Real>) -> Plane {
        Plane::new(normal, normal.dot(&point.coords))
    }

    /// Builds the plane passing through three points.
    ///
    /// The normal is oriented along `(b - a) × (c - a)`. Fails if the points are
    /// colinear or not finite.
    pub fn from_points(
        a: &Point<Real>,
        b: &Point<Real>,
        c: &Point<Real>,
    ) -> Result<Plane, ShapeError> {
        if [a, b, c].iter().any(|pt| !utils::is_finite_point(pt)) {
            return Err(ShapeError::NonFinite);
        }

        let normal = Unit::try_new((b - a).cross(&(c - a)), DEFAULT_EPSILON)
            .ok_or(ShapeError::ZeroDirection)?;
        Ok(Plane::from_point_and_normal(a, normal))
    }

    /// The signed distance between `pt` and this plane.
    ///
    /// Positive if `pt` is on the side the normal points to.
    #[inline]
    pub fn signed_distance(&self, pt: &Point<Real>) -> Real {
        self.normal.dot(&pt.coords) - self.distance
    }

    /// The point of this plane closest to the origin.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        Point::from(self.normal.into_inner() * self.distance)
    }

    /// Moves this plane by `shift`.
    ///
    /// Only the component of `shift` along the normal has an effect.
    #[inline]
    pub fn translate(&mut self, shift: &Vector<Real>) {
        self.distance += self.normal.dot(shift);
    }

    /// Returns a copy of this plane moved by `shift`.
    #[inline]
    #[must_use]
    pub fn translated(mut self, shift: &Vector<Real>) -> Self {
        self.translate(shift);
        self
    }

    /// Returns `true` if the normal and the distance are finite.
    pub fn is_finite(&self) -> bool {
        utils::is_finite_vector(&self.normal) && self.distance.is_finite()
    }
}

impl AbsDiffEq for Plane {
    type Epsilon = Real;

    fn default_epsilon() -> Real {
        DISTANCE_EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Real) -> bool {
        self.normal.abs_diff_eq(&other.normal, epsilon)
            && self.distance.abs_diff_eq(&other.distance, epsilon)
    }
}
