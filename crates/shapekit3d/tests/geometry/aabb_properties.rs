use shapekit3d::bounding_volume::Aabb;
use shapekit3d::math::{Point, Vector};
use shapekit3d::shape::Shape;

fn random_aabb(rng: &mut oorandom::Rand32) -> Aabb {
    let center = Point::from(Vector::from_fn(|_, _| rng.rand_float() * 20.0 - 10.0));
    let half_extents = Vector::from_fn(|_, _| rng.rand_float() * 5.0);
    Aabb::from_half_extents(center, half_extents)
}

#[test]
fn aabb_contains_its_centroid() {
    let mut rng = oorandom::Rand32::new(42);

    for _ in 0..1000 {
        let aabb = Shape::from(random_aabb(&mut rng));
        let centroid = aabb.compute_centroid();
        assert!(aabb.contains(&centroid), "{aabb:?} does not contain {centroid:?}");
    }
}

#[test]
fn aabb_projection_is_idempotent_inside() {
    let mut rng = oorandom::Rand32::new(7);

    for _ in 0..1000 {
        let aabb = random_aabb(&mut rng);
        let weights = Vector::from_fn(|_, _| rng.rand_float() * 0.98 + 0.01);
        let inside = aabb.mins + (aabb.maxs - aabb.mins).component_mul(&weights);
        let shape = Shape::from(aabb);

        assert!(shape.contains(&inside));
        assert_eq!(shape.compute_projection(&inside), inside);
    }
}

#[test]
fn aabb_projection_lands_on_the_box() {
    let mut rng = oorandom::Rand32::new(3);

    for _ in 0..1000 {
        let aabb = Shape::from(random_aabb(&mut rng));
        let pt = Point::from(Vector::from_fn(|_, _| rng.rand_float() * 60.0 - 30.0));
        let proj = aabb.compute_projection(&pt);

        assert!(aabb.contains(&proj));
        assert_relative_eq!(aabb.compute_projection(&proj), proj, epsilon = 1.0e-5);
    }
}

#[test]
fn bounding_box_encloses_shape_vertices() {
    let mut rng = oorandom::Rand32::new(11);

    for _ in 0..100 {
        let aabb = random_aabb(&mut rng);
        let bounds = Shape::from(aabb).compute_bounding_box();
        assert_eq!(bounds, aabb);
    }
}
