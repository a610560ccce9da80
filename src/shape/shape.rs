use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector};
use crate::query::{self, PointProjection, PointQuery, Ray, RayCast, RayHit, Unsupported};
use crate::shape::{Line, Obb, Plane, Quad, Sphere, Triangle};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
/// Enum representing the type of a shape.
pub enum ShapeType {
    /// A line segment.
    Line = 0,
    /// An infinite plane.
    Plane,
    /// A sphere.
    Sphere,
    /// A triangle.
    Triangle,
    /// A planar convex quad.
    Quad,
    /// An axis-aligned box.
    Aabb,
    /// An oriented box.
    Obb,
}

/// Any of the shapes supported by this crate.
///
/// The set of shapes is closed: every query between two shapes is decided by an exhaustive
/// `match` over both variants.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum Shape {
    /// A line segment.
    Line(Line),
    /// An infinite plane.
    Plane(Plane),
    /// A sphere.
    Sphere(Sphere),
    /// A triangle.
    Triangle(Triangle),
    /// A planar convex quad.
    Quad(Quad),
    /// An axis-aligned box.
    Aabb(Aabb),
    /// An oriented box.
    Obb(Obb),
}

impl Shape {
    /// The type of this shape.
    pub fn shape_type(&self) -> ShapeType {
        match self {
            Shape::Line(_) => ShapeType::Line,
            Shape::Plane(_) => ShapeType::Plane,
            Shape::Sphere(_) => ShapeType::Sphere,
            Shape::Triangle(_) => ShapeType::Triangle,
            Shape::Quad(_) => ShapeType::Quad,
            Shape::Aabb(_) => ShapeType::Aabb,
            Shape::Obb(_) => ShapeType::Obb,
        }
    }

    /// Tests if `pt` is inside of this shape or on its surface.
    #[inline]
    pub fn contains(&self, pt: &Point<Real>) -> bool {
        self.contains_point(pt)
    }

    /// Tests if this shape intersects `other`.
    ///
    /// The test is symmetric: `a.intersects(&b) == b.intersects(&a)`.
    #[inline]
    pub fn intersects(&self, other: &Shape) -> bool {
        query::intersection_test(self, other)
    }

    /// Tests if this shape intersects `other`, failing if either shape is not finite.
    #[inline]
    pub fn try_intersects(&self, other: &Shape) -> Result<bool, Unsupported> {
        query::try_intersection_test(self, other)
    }

    /// The point of this shape closest to `pt`.
    ///
    /// Points inside of a box project onto themselves, whereas points inside of a sphere
    /// project on its surface.
    #[inline]
    pub fn compute_projection(&self, pt: &Point<Real>) -> Point<Real> {
        self.project_point(pt).point
    }

    /// The centroid of this shape.
    ///
    /// For a plane, this is its point closest to the origin.
    pub fn compute_centroid(&self) -> Point<Real> {
        match self {
            Shape::Line(s) => s.center(),
            Shape::Plane(s) => s.center(),
            Shape::Sphere(s) => s.center,
            Shape::Triangle(s) => s.center(),
            Shape::Quad(s) => s.center(),
            Shape::Aabb(s) => s.center(),
            Shape::Obb(s) => s.center(),
        }
    }

    /// The smallest axis-aligned box enclosing this shape.
    ///
    /// Planes have an unbounded box.
    pub fn compute_bounding_box(&self) -> Aabb {
        match self {
            Shape::Line(s) => s.aabb(),
            Shape::Plane(s) => s.aabb(),
            Shape::Sphere(s) => s.aabb(),
            Shape::Triangle(s) => s.aabb(),
            Shape::Quad(s) => s.aabb(),
            Shape::Aabb(s) => *s,
            Shape::Obb(s) => s.bounding_aabb(),
        }
    }

    /// Moves this shape by `shift`.
    pub fn translate(&mut self, shift: &Vector<Real>) {
        match self {
            Shape::Line(s) => s.translate(shift),
            Shape::Plane(s) => s.translate(shift),
            Shape::Sphere(s) => s.translate(shift),
            Shape::Triangle(s) => s.translate(shift),
            Shape::Quad(s) => s.translate(shift),
            Shape::Aabb(s) => s.translate(shift),
            Shape::Obb(s) => s.translate(shift),
        }
    }

    /// Returns a copy of this shape moved by `shift`.
    #[inline]
    #[must_use]
    pub fn translated(mut self, shift: &Vector<Real>) -> Self {
        self.translate(shift);
        self
    }

    /// Casts a ray on this shape, failing if the ray or the shape cannot be queried.
    ///
    /// Returns `Err(Unsupported)` if the ray origin is not finite, if its direction does not
    /// have a unit length, or if this shape is not finite.
    pub fn try_cast_ray(
        &self,
        ray: &Ray,
        max_distance: Real,
        solid: bool,
    ) -> Result<Option<RayHit>, Unsupported> {
        if !ray.is_valid() || !self.is_finite() || max_distance.is_nan() {
            return Err(Unsupported);
        }

        Ok(self.cast_ray(ray, max_distance, solid))
    }

    /// Returns `true` if every coordinate of this shape is finite.
    pub fn is_finite(&self) -> bool {
        match self {
            Shape::Line(s) => s.is_finite(),
            Shape::Plane(s) => s.is_finite(),
            Shape::Sphere(s) => s.is_finite(),
            Shape::Triangle(s) => s.is_finite(),
            Shape::Quad(s) => s.is_finite(),
            Shape::Aabb(s) => s.is_finite(),
            Shape::Obb(s) => s.is_finite(),
        }
    }
}

impl PointQuery for Shape {
    fn project_point(&self, pt: &Point<Real>) -> PointProjection {
        match self {
            Shape::Line(s) => s.project_point(pt),
            Shape::Plane(s) => s.project_point(pt),
            Shape::Sphere(s) => s.project_point(pt),
            Shape::Triangle(s) => s.project_point(pt),
            Shape::Quad(s) => s.project_point(pt),
            Shape::Aabb(s) => s.project_point(pt),
            Shape::Obb(s) => s.project_point(pt),
        }
    }

    fn distance_to_point(&self, pt: &Point<Real>) -> Real {
        match self {
            Shape::Line(s) => s.distance_to_point(pt),
            Shape::Plane(s) => s.distance_to_point(pt),
            Shape::Sphere(s) => s.distance_to_point(pt),
            Shape::Triangle(s) => s.distance_to_point(pt),
            Shape::Quad(s) => s.distance_to_point(pt),
            Shape::Aabb(s) => s.distance_to_point(pt),
            Shape::Obb(s) => s.distance_to_point(pt),
        }
    }
}

impl RayCast for Shape {
    fn cast_ray(&self, ray: &Ray, max_distance: Real, solid: bool) -> Option<RayHit> {
        match self {
            Shape::Line(s) => s.cast_ray(ray, max_distance, solid),
            Shape::Plane(s) => s.cast_ray(ray, max_distance, solid),
            Shape::Sphere(s) => s.cast_ray(ray, max_distance, solid),
            Shape::Triangle(s) => s.cast_ray(ray, max_distance, solid),
            Shape::Quad(s) => s.cast_ray(ray, max_distance, solid),
            Shape::Aabb(s) => s.cast_ray(ray, max_distance, solid),
            Shape::Obb(s) => s.cast_ray(ray, max_distance, solid),
        }
    }
}

macro_rules! impl_shape_conversions(
    ($($variant: ident),*) => {$(
        impl From<$variant> for Shape {
            #[inline]
            fn from(shape: $variant) -> Shape {
                Shape::$variant(shape)
            }
        }

        impl $variant {
            /// Tests if this shape intersects `other`.
            #[inline]
            pub fn intersects_shape(&self, other: &Shape) -> bool {
                query::intersection_test(&Shape::$variant(*self), other)
            }
        }
    )*}
);

impl_shape_conversions!(Line, Plane, Sphere, Triangle, Quad, Aabb, Obb);
