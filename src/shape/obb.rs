//! Definition of the oriented box shape.

use crate::bounding_volume::Aabb;
use crate::math::{
    Isometry, Point, Real, Rotation, Translation, UnitVector, Vector, DEFAULT_EPSILON,
    DISTANCE_EPSILON,
};
use crate::shape::ShapeError;

use approx::AbsDiffEq;
use na::{Quaternion, Unit};

/// An oriented box: an [`Aabb`] rotated about its own center.
///
/// The box is stored as its unrotated, world-positioned AABB together with a rotation and the
/// cached inverse of that rotation. Every query follows the same pattern: bring the input into
/// the frame of the unrotated AABB with [`Obb::to_local_point`], operate on the AABB, and map
/// the result back with [`Obb::from_local_point`].
///
/// The fields are private so that the rotation and its inverse cannot get out of sync.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Obb {
    aabb: Aabb,
    rotation: Rotation<Real>,
    inv_rotation: Rotation<Real>,
}

impl Obb {
    /// Creates an oriented box from its unrotated AABB and a rotation about the AABB center.
    #[inline]
    pub fn new(aabb: Aabb, rotation: Rotation<Real>) -> Obb {
        Obb {
            aabb,
            rotation,
            inv_rotation: rotation.inverse(),
        }
    }

    /// Creates an oriented box, checking the AABB bounds and normalizing `rotation`.
    ///
    /// Fails if the AABB is invalid or if the quaternion cannot be normalized.
    pub fn try_new(aabb: Aabb, rotation: Quaternion<Real>) -> Result<Obb, ShapeError> {
        let aabb = Aabb::try_new(aabb.mins, aabb.maxs)?;

        if !rotation.coords.iter().all(|e| e.is_finite()) {
            return Err(ShapeError::NonFinite);
        }

        let rotation = Unit::try_new(rotation, DEFAULT_EPSILON).ok_or(ShapeError::NonUnitRotation)?;
        Ok(Obb::new(aabb, rotation))
    }

    /// Creates an oriented box from its center, half-extents along its local axes, and rotation.
    #[inline]
    pub fn from_half_extents(
        center: Point<Real>,
        half_extents: Vector<Real>,
        rotation: Rotation<Real>,
    ) -> Obb {
        Obb::new(Aabb::from_half_extents(center, half_extents), rotation)
    }

    /// The unrotated AABB of this box, positioned in world-space.
    #[inline]
    pub fn aabb(&self) -> &Aabb {
        &self.aabb
    }

    /// The unrotated AABB of this box, centered at the origin.
    #[inline]
    pub fn local_aabb(&self) -> Aabb {
        Aabb::from_half_extents(Point::origin(), self.half_extents())
    }

    /// The center of this box.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        self.aabb.center()
    }

    /// The half-extents of this box along its local axes.
    #[inline]
    pub fn half_extents(&self) -> Vector<Real> {
        self.aabb.half_extents()
    }

    /// The rotation of this box about its center.
    #[inline]
    pub fn rotation(&self) -> &Rotation<Real> {
        &self.rotation
    }

    /// The inverse of [`Obb::rotation`].
    #[inline]
    pub fn inverse_rotation(&self) -> &Rotation<Real> {
        &self.inv_rotation
    }

    /// Replaces the rotation of this box, updating its cached inverse.
    #[inline]
    pub fn set_rotation(&mut self, rotation: Rotation<Real>) {
        self.rotation = rotation;
        self.inv_rotation = rotation.inverse();
    }

    /// The rigid transformation mapping [`Obb::local_aabb`] to this box.
    #[inline]
    pub fn isometry(&self) -> Isometry<Real> {
        Isometry::from_parts(Translation::from(self.center().coords), self.rotation)
    }

    /// Maps a world-space point into the frame of the unrotated AABB.
    #[inline]
    pub fn to_local_point(&self, pt: &Point<Real>) -> Point<Real> {
        let center = self.center();
        center + self.inv_rotation * (pt - center)
    }

    /// Maps a point expressed in the frame of the unrotated AABB back to world-space.
    #[inline]
    pub fn from_local_point(&self, pt: &Point<Real>) -> Point<Real> {
        let center = self.center();
        center + self.rotation * (pt - center)
    }

    /// Rotates a world-space vector into the frame of the unrotated AABB.
    #[inline]
    pub fn to_local_vector(&self, v: &Vector<Real>) -> Vector<Real> {
        self.inv_rotation * v
    }

    /// Rotates a vector expressed in the frame of the unrotated AABB back to world-space.
    #[inline]
    pub fn from_local_vector(&self, v: &Vector<Real>) -> Vector<Real> {
        self.rotation * v
    }

    /// The eight world-space vertices of this box, numbered as in [`Aabb::vertices`].
    pub fn vertices(&self) -> [Point<Real>; 8] {
        self.aabb.vertices().map(|pt| self.from_local_point(&pt))
    }

    /// The three world-space unit axes of this box.
    pub fn axes(&self) -> [UnitVector<Real>; 3] {
        [
            self.rotation * Vector::x_axis(),
            self.rotation * Vector::y_axis(),
            self.rotation * Vector::z_axis(),
        ]
    }

    /// Projects every point of this box on an arbitrary axis.
    pub fn project_on_axis(&self, axis: &UnitVector<Real>) -> (Real, Real) {
        let local_axis = self.to_local_vector(axis);
        let shift = self.half_extents().dot(&local_axis.abs());
        let center = axis.dot(&self.center().coords);
        (center - shift, center + shift)
    }

    /// Moves this box by `shift`. The rotation is left unchanged.
    #[inline]
    pub fn translate(&mut self, shift: &Vector<Real>) {
        self.aabb.translate(shift);
    }

    /// Returns a copy of this box moved by `shift`.
    #[inline]
    #[must_use]
    pub fn translated(mut self, shift: &Vector<Real>) -> Self {
        self.translate(shift);
        self
    }

    /// Returns `true` if the box bounds and rotation are finite.
    pub fn is_finite(&self) -> bool {
        self.aabb.is_finite() && self.rotation.coords.iter().all(|e| e.is_finite())
    }
}

impl From<Aabb> for Obb {
    fn from(aabb: Aabb) -> Self {
        Obb::new(aabb, Rotation::identity())
    }
}

impl AbsDiffEq for Obb {
    type Epsilon = Real;

    fn default_epsilon() -> Real {
        DISTANCE_EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Real) -> bool {
        self.aabb.abs_diff_eq(&other.aabb, epsilon)
            && self.rotation.angle_to(&other.rotation) <= epsilon
    }
}
