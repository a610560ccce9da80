use crate::math::{Point, Real, DISTANCE_EPSILON};
use na;

/// Description of the projection of a point on a shape.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct PointProjection {
    /// Whether or not the point to project was strictly inside of the shape's volume.
    ///
    /// Always `false` for shapes without a volume (lines, planes, triangles and quads).
    pub is_inside: bool,
    /// The projection result.
    pub point: Point<Real>,
}

impl PointProjection {
    /// Initializes a new `PointProjection`.
    pub fn new(is_inside: bool, point: Point<Real>) -> Self {
        PointProjection { is_inside, point }
    }

    /// Returns `true` if `Self::is_inside` is `true` or if the distance between the projected
    /// point and `original_point` is smaller than or equal to `max_dist`.
    pub fn is_inside_eps(&self, original_point: &Point<Real>, max_dist: Real) -> bool {
        self.is_inside || na::distance_squared(original_point, &self.point) <= max_dist * max_dist
    }
}

/// Trait of objects that can be tested for point inclusion and projection.
///
/// Every shape is expressed in world-space, so the points given to these methods are
/// world-space points too.
pub trait PointQuery {
    /// Projects a point on `self`.
    ///
    /// Solid shapes project their interior points onto themselves, except spheres which always
    /// project on their surface.
    fn project_point(&self, pt: &Point<Real>) -> PointProjection;

    /// Computes the minimal distance between a point and `self`.
    ///
    /// Returns zero for points inside of a solid shape.
    fn distance_to_point(&self, pt: &Point<Real>) -> Real {
        let proj = self.project_point(pt);

        if proj.is_inside {
            0.0
        } else {
            na::distance(pt, &proj.point)
        }
    }

    /// Tests if the given point is inside of `self`, or on its surface.
    ///
    /// Points closer than [`DISTANCE_EPSILON`] to the surface are considered on it.
    fn contains_point(&self, pt: &Point<Real>) -> bool {
        self.project_point(pt).is_inside_eps(pt, DISTANCE_EPSILON)
    }
}
