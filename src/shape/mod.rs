//! Shapes supported by shapekit.

#[doc(inline)]
pub use crate::bounding_volume::Aabb;
pub use self::line::Line;
pub use self::obb::Obb;
pub use self::plane::Plane;
pub use self::quad::Quad;
#[doc(inline)]
pub use self::shape::{Shape, ShapeType};
pub use self::shape_error::ShapeError;
pub use self::sphere::Sphere;
pub use self::triangle::Triangle;

mod line;
mod obb;
mod plane;
mod quad;
mod shape;
mod shape_error;
mod sphere;
mod triangle;
