//! Axis Aligned Bounding Box.

use crate::bounding_volume::BoundingVolume;
use crate::math::{Isometry, Point, Real, UnitVector, Vector, DIM, DISTANCE_EPSILON};
use crate::shape::ShapeError;
use crate::utils;

use approx::AbsDiffEq;
use na;

/// An Axis-Aligned Bounding Box (AABB).
///
/// An AABB is both a shape of its own (a solid box whose faces are parallel to the
/// coordinate axes) and the bounding volume returned by every
/// [`compute_bounding_box`](crate::shape::Shape::compute_bounding_box).
///
/// Each component of `mins` is expected to be smaller than or equal to the corresponding
/// component of `maxs`. [`Aabb::try_new`] checks it, [`Aabb::new`] does not.
///
/// # Example
///
/// ```rust
/// # #[cfg(feature = "f32")] {
/// use shapekit3d::bounding_volume::Aabb;
/// use shapekit3d::math::{Point, Vector};
///
/// let aabb = Aabb::new(Point::new(-1.0, -1.0, -1.0), Point::new(1.0, 1.0, 1.0));
///
/// assert_eq!(aabb.center(), Point::origin());
/// assert_eq!(aabb.extents(), Vector::new(2.0, 2.0, 2.0));
/// assert_eq!(aabb.half_extents().x, 1.0);
/// # }
/// ```
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
#[repr(C)]
pub struct Aabb {
    /// The point with minimum coordinates.
    pub mins: Point<Real>,
    /// The point with maximum coordinates.
    pub maxs: Point<Real>,
}

impl Aabb {
    /// The vertex indices of each edge of this `Aabb`.
    ///
    /// This gives, for each edge of this `Aabb`, the indices of its
    /// vertices when taken from the `self.vertices()` array.
    /// Here is how the vertices are numbered, assuming
    /// a right-handed coordinate system:
    ///
    /// ```text
    ///    y             3 - 2
    ///    |           7 − 6 |
    ///    ___ x       |   | 1  (the zero is below 3 and on the left of 1,
    ///   /            4 - 5     hidden by the 4-5-6-7 face.)
    ///  z
    /// ```
    pub const EDGES_VERTEX_IDS: [(usize, usize); 12] = [
        (0, 1),
        (1, 2),
        (3, 2),
        (0, 3),
        (4, 5),
        (5, 6),
        (7, 6),
        (4, 7),
        (0, 4),
        (1, 5),
        (2, 6),
        (3, 7),
    ];

    /// Creates a new AABB from its minimum and maximum corners.
    #[inline]
    pub fn new(mins: Point<Real>, maxs: Point<Real>) -> Aabb {
        Aabb { mins, maxs }
    }

    /// Creates a new AABB, checking that its corners are finite and correctly ordered.
    pub fn try_new(mins: Point<Real>, maxs: Point<Real>) -> Result<Aabb, ShapeError> {
        if !utils::is_finite_point(&mins) || !utils::is_finite_point(&maxs) {
            return Err(ShapeError::NonFinite);
        }

        for axis in 0..DIM {
            if mins[axis] > maxs[axis] {
                return Err(ShapeError::InvalidBounds { axis });
            }
        }

        Ok(Aabb::new(mins, maxs))
    }

    /// Creates an invalid AABB with `mins` components set to `Real::MAX` and `maxs`
    /// components set to `-Real::MAX`.
    ///
    /// This is often used as the initial values of some AABB merging algorithms.
    #[inline]
    pub fn new_invalid() -> Self {
        Self::new(
            Vector::repeat(Real::MAX).into(),
            Vector::repeat(-Real::MAX).into(),
        )
    }

    /// Creates a new AABB from its center and its half-extents.
    #[inline]
    pub fn from_half_extents(center: Point<Real>, half_extents: Vector<Real>) -> Self {
        Self::new(center - half_extents, center + half_extents)
    }

    /// Creates a new AABB from a set of points.
    ///
    /// Returns an invalid AABB (see [`Aabb::new_invalid`]) if `pts` is empty.
    pub fn from_points<'a, I>(pts: I) -> Self
    where
        I: IntoIterator<Item = &'a Point<Real>>,
    {
        super::aabb_utils::point_cloud_aabb(pts)
    }

    /// The center of this AABB.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        na::center(&self.mins, &self.maxs)
    }

    /// The half extents of this AABB.
    #[inline]
    pub fn half_extents(&self) -> Vector<Real> {
        (self.maxs - self.mins) * 0.5
    }

    /// The volume of this AABB.
    #[inline]
    pub fn volume(&self) -> Real {
        let extents = self.extents();
        extents.x * extents.y * extents.z
    }

    /// The extents of this AABB.
    #[inline]
    pub fn extents(&self) -> Vector<Real> {
        self.maxs - self.mins
    }

    /// Enlarges this AABB so it also contains the point `pt`.
    pub fn take_point(&mut self, pt: Point<Real>) {
        self.mins = self.mins.coords.inf(&pt.coords).into();
        self.maxs = self.maxs.coords.sup(&pt.coords).into();
    }

    /// Computes the AABB bounding `self` transformed by `m`.
    #[inline]
    pub fn transform_by(&self, m: &Isometry<Real>) -> Self {
        let center = m * self.center();
        let abs_rot = m.rotation.to_rotation_matrix().into_inner().abs();
        let ws_half_extents = abs_rot * self.half_extents();

        Aabb::new(center + (-ws_half_extents), center + ws_half_extents)
    }

    /// Moves this AABB by `shift`.
    #[inline]
    pub fn translate(&mut self, shift: &Vector<Real>) {
        self.mins += *shift;
        self.maxs += *shift;
    }

    /// Computes the AABB bounding `self` translated by `shift`.
    #[inline]
    #[must_use]
    pub fn translated(mut self, shift: &Vector<Real>) -> Self {
        self.translate(shift);
        self
    }

    /// Does this AABB contain a point, borders included?
    ///
    /// This test is exact. The [`PointQuery`](crate::query::PointQuery) implementation
    /// additionally accepts points within [`DISTANCE_EPSILON`] of the borders.
    #[inline]
    pub fn contains_local_point(&self, point: &Point<Real>) -> bool {
        for i in 0..DIM {
            if point[i] < self.mins[i] || point[i] > self.maxs[i] {
                return false;
            }
        }

        true
    }

    /// Computes the vertices of this AABB.
    ///
    /// The vertices are given in the following order, in a right-handed coordinate system:
    /// ```text
    ///    y             3 - 2
    ///    |           7 − 6 |
    ///    ___ x       |   | 1  (the zero is below 3 and on the left of 1,
    ///   /            4 - 5     hidden by the 4-5-6-7 face.)
    ///  z
    /// ```
    #[inline]
    pub fn vertices(&self) -> [Point<Real>; 8] {
        [
            Point::new(self.mins.x, self.mins.y, self.mins.z),
            Point::new(self.maxs.x, self.mins.y, self.mins.z),
            Point::new(self.maxs.x, self.maxs.y, self.mins.z),
            Point::new(self.mins.x, self.maxs.y, self.mins.z),
            Point::new(self.mins.x, self.mins.y, self.maxs.z),
            Point::new(self.maxs.x, self.mins.y, self.maxs.z),
            Point::new(self.maxs.x, self.maxs.y, self.maxs.z),
            Point::new(self.mins.x, self.maxs.y, self.maxs.z),
        ]
    }

    /// Projects every point of this AABB on an arbitrary axis.
    ///
    /// Returns the `(min, max)` interval covered by the projection.
    pub fn project_on_axis(&self, axis: &UnitVector<Real>) -> (Real, Real) {
        let shift = self.half_extents().dot(&axis.abs());
        let center = axis.dot(&self.center().coords);
        (center - shift, center + shift)
    }

    /// Returns `true` if both corners are finite.
    pub fn is_finite(&self) -> bool {
        utils::is_finite_point(&self.mins) && utils::is_finite_point(&self.maxs)
    }
}

impl BoundingVolume for Aabb {
    #[inline]
    fn center(&self) -> Point<Real> {
        self.center()
    }

    #[inline]
    fn intersects(&self, other: &Aabb) -> bool {
        na::partial_le(&self.mins, &other.maxs) && na::partial_ge(&self.maxs, &other.mins)
    }

    #[inline]
    fn contains(&self, other: &Aabb) -> bool {
        na::partial_le(&self.mins, &other.mins) && na::partial_ge(&self.maxs, &other.maxs)
    }

    #[inline]
    fn merge(&mut self, other: &Aabb) {
        self.mins = self.mins.inf(&other.mins);
        self.maxs = self.maxs.sup(&other.maxs);
    }

    #[inline]
    fn merged(&self, other: &Aabb) -> Aabb {
        Aabb {
            mins: self.mins.inf(&other.mins),
            maxs: self.maxs.sup(&other.maxs),
        }
    }

    #[inline]
    fn loosen(&mut self, amount: Real) {
        let amount = amount.max(0.0);
        self.mins += Vector::repeat(-amount);
        self.maxs += Vector::repeat(amount);
    }

    #[inline]
    fn loosened(&self, amount: Real) -> Aabb {
        let mut result = *self;
        result.loosen(amount);
        result
    }
}

impl AbsDiffEq for Aabb {
    type Epsilon = Real;

    fn default_epsilon() -> Real {
        DISTANCE_EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Real) -> bool {
        self.mins.abs_diff_eq(&other.mins, epsilon) && self.maxs.abs_diff_eq(&other.maxs, epsilon)
    }
}
