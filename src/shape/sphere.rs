//! Definition of the sphere shape.

use crate::math::{Point, Real, Vector, DISTANCE_EPSILON};
use crate::shape::ShapeError;
use crate::utils;

use approx::AbsDiffEq;

/// A sphere, i.e., the set of points at a distance smaller than `radius` from `center`.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
#[repr(C)]
pub struct Sphere {
    /// The center of the sphere.
    pub center: Point<Real>,
    /// The radius of the sphere. Expected to be non-negative.
    pub radius: Real,
}

impl Sphere {
    /// Creates a new sphere from its center and radius.
    #[inline]
    pub fn new(center: Point<Real>, radius: Real) -> Sphere {
        Sphere { center, radius }
    }

    /// Creates a new sphere, checking that the center and radius are finite and that
    /// the radius is non-negative.
    pub fn try_new(center: Point<Real>, radius: Real) -> Result<Sphere, ShapeError> {
        if !utils::is_finite_point(&center) || !radius.is_finite() {
            return Err(ShapeError::NonFinite);
        }

        if radius < 0.0 {
            return Err(ShapeError::NegativeRadius(radius));
        }

        Ok(Sphere::new(center, radius))
    }

    /// Moves the center of this sphere by `shift`.
    #[inline]
    pub fn translate(&mut self, shift: &Vector<Real>) {
        self.center += *shift;
    }

    /// Returns a copy of this sphere moved by `shift`.
    #[inline]
    #[must_use]
    pub fn translated(mut self, shift: &Vector<Real>) -> Self {
        self.translate(shift);
        self
    }

    /// Returns `true` if the center and radius are finite.
    pub fn is_finite(&self) -> bool {
        utils::is_finite_point(&self.center) && self.radius.is_finite()
    }
}

impl AbsDiffEq for Sphere {
    type Epsilon = Real;

    fn default_epsilon() -> Real {
        DISTANCE_EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Real) -> bool {
        self.center.abs_diff_eq(&other.center, epsilon)
            && self.radius.abs_diff_eq(&other.radius, epsilon)
    }
}
