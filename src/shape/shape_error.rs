use crate::math::Real;

/// Error returned by the validating constructors of the shapes and of [`Ray`](crate::query::Ray).
///
/// The plain `new` constructors do not check their input. The `try_new` (and similar)
/// constructors reject input that would otherwise silently propagate NaNs through every
/// subsequent query.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq)]
pub enum ShapeError {
    /// A coordinate, radius, or distance is NaN or infinite.
    #[error("the shape has a non-finite coordinate.")]
    NonFinite,
    /// A sphere was given a negative radius.
    #[error("the sphere radius {0} is negative.")]
    NegativeRadius(Real),
    /// A plane normal does not have a unit length.
    #[error("the plane normal has a length of {0} instead of 1.")]
    NonUnitNormal(Real),
    /// A direction (ray direction, plane normal built from points) has a zero length.
    #[error("the direction vector has a zero length.")]
    ZeroDirection,
    /// The minimum corner of a box is greater than its maximum corner along `axis`.
    #[error("the box minimum is greater than its maximum along the axis {axis}.")]
    InvalidBounds {
        /// Index of the offending axis (0 for X, 1 for Y, 2 for Z).
        axis: usize,
    },
    /// A quaternion used as a rotation could not be normalized.
    #[error("the rotation quaternion cannot be normalized.")]
    NonUnitRotation,
}
