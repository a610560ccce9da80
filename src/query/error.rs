use core::fmt;

/// Error indicating that a geometric query cannot be answered for its input.
///
/// Every pair of shapes of the closed [`Shape`](crate::shape::Shape) set is supported, so this
/// error never depends on the shape kinds alone. It is returned by the fallible entry points
/// (like [`try_intersection_test`](crate::query::try_intersection_test) or
/// [`Shape::try_cast_ray`](crate::shape::Shape::try_cast_ray)) when a shape has a non-finite
/// coordinate, or when a ray direction does not have a unit length.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Unsupported;

impl fmt::Display for Unsupported {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad("query not supported for this input")
    }
}

impl core::error::Error for Unsupported {}
