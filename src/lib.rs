/*!
shapekit
========

**shapekit** is a small 3-dimensional shape kernel written with the rust
programming language. It answers point containment, closest-point projection,
ray-casting and pairwise intersection queries for a closed set of primitives:
lines (segments), planes, spheres, triangles, quads, axis-aligned boxes and
oriented boxes.

Every shape is a plain `Copy` value expressed in world-space. The
[`shape::Shape`] enum groups them so that the full pairwise dispatch is an
exhaustive `match`.
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.

#[cfg(all(feature = "f32", feature = "f64"))]
core::compile_error!("The `f32` and `f64` features are mutually exclusive.");

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;
#[macro_use]
extern crate approx;
extern crate num_traits as num;

pub extern crate nalgebra as na;

pub mod bounding_volume;
pub mod query;
pub mod shape;
pub mod utils;

/// Compilation flags dependent aliases for mathematical types.
pub mod math {
    pub use na::{Isometry3, Matrix3, Point3, Translation3, UnitVector3, Vector3};
    use na::UnitQuaternion;

    /// The scalar type used throughout this crate.
    #[cfg(feature = "f64")]
    pub type Real = f64;

    /// The scalar type used throughout this crate.
    #[cfg(feature = "f32")]
    pub type Real = f32;

    /// The default tolerance used to guard normalizations and parallelism tests.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// Tolerance, in world units, of surface-inclusive membership and overlap tests.
    ///
    /// A point closer than this to a zero-thickness shape (line, plane, triangle, quad)
    /// is considered to lie on it, and two projection intervals closer than this along
    /// a separating axis are considered touching.
    pub const DISTANCE_EPSILON: Real = 1.0e-5;

    /// The dimension of the space.
    pub const DIM: usize = 3;

    /// The point type.
    pub use Point3 as Point;

    /// The vector type.
    pub use Vector3 as Vector;

    /// The unit vector type.
    pub use UnitVector3 as UnitVector;

    /// The matrix type.
    pub use Matrix3 as Matrix;

    /// The transformation matrix type.
    pub use Isometry3 as Isometry;

    /// The rotation type.
    pub type Rotation<N> = UnitQuaternion<N>;

    /// The translation type.
    pub use Translation3 as Translation;
}
