//! Various unsorted geometrical and logical operators.

pub use self::center::center;
pub use self::finite::{is_finite_point, is_finite_vector};
pub use self::point_in_triangle::is_point_in_triangle;

mod center;
mod finite;
mod point_in_triangle;
