//! Traits and structure needed to cast rays.

use crate::math::{Isometry, Point, Real, UnitVector, Vector, DEFAULT_EPSILON};
use crate::shape::ShapeError;
use crate::utils;
use na::Unit;

/// A Ray.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[repr(C)]
pub struct Ray {
    /// Starting point of the ray.
    pub origin: Point<Real>,
    /// Direction of the ray.
    ///
    /// Being a unit vector, the ray parameter `t` of [`Ray::point_at`] is a distance.
    pub dir: UnitVector<Real>,
}

impl Ray {
    /// Creates a new ray starting from `origin` and with the direction `dir`.
    pub fn new(origin: Point<Real>, dir: UnitVector<Real>) -> Ray {
        Ray { origin, dir }
    }

    /// Creates a new ray, normalizing `dir`.
    ///
    /// Fails if `dir` is (almost) zero, or if an input is not finite.
    pub fn try_new(origin: Point<Real>, dir: Vector<Real>) -> Result<Ray, ShapeError> {
        if !utils::is_finite_point(&origin) || !utils::is_finite_vector(&dir) {
            return Err(ShapeError::NonFinite);
        }

        let dir = Unit::try_new(dir, DEFAULT_EPSILON).ok_or(ShapeError::ZeroDirection)?;
        Ok(Ray::new(origin, dir))
    }

    /// Transforms this ray by the given isometry.
    #[inline]
    pub fn transform_by(&self, m: &Isometry<Real>) -> Self {
        Self::new(m * self.origin, m * self.dir)
    }

    /// Transforms this ray by the inverse of the given isometry.
    #[inline]
    pub fn inverse_transform_by(&self, m: &Isometry<Real>) -> Self {
        Self::new(
            m.inverse_transform_point(&self.origin),
            m.inverse_transform_unit_vector(&self.dir),
        )
    }

    /// Translates this ray by the given vector. Its direction is left unchanged.
    #[inline]
    pub fn translate_by(&self, v: Vector<Real>) -> Self {
        Self::new(self.origin + v, self.dir)
    }

    /// Computes the point at the given parameter on this ray.
    ///
    /// This is the same as `self.origin + self.dir * t`.
    #[inline]
    pub fn point_at(&self, t: Real) -> Point<Real> {
        self.origin + *self.dir * t
    }

    /// Returns `true` if the origin is finite and the direction has a unit length.
    pub fn is_valid(&self) -> bool {
        utils::is_finite_point(&self.origin)
            && utils::is_finite_vector(&self.dir)
            && (self.dir.norm_squared() - 1.0).abs() <= DEFAULT_EPSILON.sqrt()
    }
}

/// Structure containing the result of a successful ray cast.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct RayHit {
    /// The point where the ray hit the shape.
    pub position: Point<Real>,
    /// The normal of the shape at `position`, oriented against the ray direction.
    ///
    /// A ray entering a volume gets the outward normal of the surface, a ray leaving it gets
    /// the inward normal. A solid cast starting inside of a volume reports `-ray.dir`.
    pub normal: UnitVector<Real>,
    /// The distance traveled along the ray before the hit.
    pub distance: Real,
}

impl RayHit {
    /// Creates the hit record for a ray hitting a shape after traveling `distance`.
    #[inline]
    pub fn new(ray: &Ray, distance: Real, normal: UnitVector<Real>) -> RayHit {
        RayHit {
            position: ray.point_at(distance),
            normal,
            distance,
        }
    }
}

/// Traits of objects which can be tested for intersection with a ray.
pub trait RayCast {
    /// Computes the first hit between `self` and a ray, closer than `max_distance`.
    ///
    /// If `solid` is `true` and the ray starts inside of a volume, the hit is at the ray
    /// origin. Otherwise the ray exits the volume and the hit is the exit point. The flag has
    /// no effect on shapes without a volume.
    fn cast_ray(&self, ray: &Ray, max_distance: Real, solid: bool) -> Option<RayHit>;

    /// Tests whether a ray intersects this shape within `max_distance`.
    #[inline]
    fn intersects_ray(&self, ray: &Ray, max_distance: Real) -> bool {
        self.cast_ray(ray, max_distance, true).is_some()
    }
}
