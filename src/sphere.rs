use nalgebra::Vector3;

use crate::{
    bounds::Aabb,
    hit::Hit,
    object::{Object, Part},
    ray::SMALL_T,
    Ray,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sphere {
    pub center: Vector3<f64>,
    pub radius: f64,
}

impl Sphere {
    pub fn new(center: Vector3<f64>, radius: f64) -> Self {
        debug_assert!(radius >= 0.0, "negative sphere radius {radius}");
        Self { center, radius }
    }
}

impl Object for Sphere {
    fn intersection(&self, ray: &Ray, _part: Part) -> Option<Hit<'_>> {
        let oc = ray.origin - self.center;
        let a = ray.direction.norm_squared();
        let b = 2.0 * ray.direction.dot(&oc);
        let c = oc.norm_squared() - self.radius * self.radius;
        let d = b * b - 4.0 * a * c;

        // A tangent ray (d == 0) counts as a miss.
        if d <= 0.0 {
            return None;
        }

        let sqrt_d = d.sqrt();
        let near = (-b - sqrt_d) / (2.0 * a);
        let far = (-b + sqrt_d) / (2.0 * a);

        // Origin outside: the near root. Origin inside: the far root.
        let t = if near > SMALL_T {
            near
        } else if far > SMALL_T {
            far
        } else {
            return None;
        };

        Some(Hit::new(self, t, 0))
    }

    fn normal(&self, point: &Vector3<f64>, _part: usize) -> Vector3<f64> {
        (point - self.center).normalize()
    }

    fn bounding_box(&self, _part: Part) -> Aabb {
        let r = Vector3::repeat(self.radius);
        Aabb::new(self.center - r, self.center + r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use rand::{rngs::StdRng, Rng, SeedableRng};

    #[test]
    fn near_side_hit_and_normal() {
        for r in [0.5, 1.0, 7.0] {
            let sphere = Sphere::new(Vector3::zeros(), r);
            let ray = Ray::new(Vector3::new(0.0, 0.0, -2.0 * r), Vector3::new(0.0, 0.0, 1.0));
            let hit = sphere.intersection(&ray, Part::All).unwrap();
            assert_relative_eq!(hit.dist, r);
            assert_abs_diff_eq!(hit.normal(&ray), Vector3::new(0.0, 0.0, -1.0), epsilon = 1e-12);
        }
    }

    #[test]
    fn ray_from_inside_hits_far_side() {
        let sphere = Sphere::new(Vector3::new(1.0, 0.0, 0.0), 2.0);
        let ray = Ray::new(Vector3::new(1.0, 0.0, 0.0), Vector3::new(0.0, 3.0, 0.0));
        let hit = sphere.intersection(&ray, Part::All).unwrap();
        // Exits at y = 2, which is t = 2/3 for a direction of length 3.
        assert_relative_eq!(hit.dist, 2.0 / 3.0);
        assert_relative_eq!(hit.point(&ray), Vector3::new(1.0, 2.0, 0.0));
    }

    #[test]
    fn ray_from_inside_off_center() {
        let sphere = Sphere::new(Vector3::zeros(), 1.0);
        let ray = Ray::new(Vector3::new(0.5, 0.0, 0.0), Vector3::new(1.0, 0.0, 0.0));
        let hit = sphere.intersection(&ray, Part::All).unwrap();
        assert_relative_eq!(hit.dist, 0.5);
    }

    #[test]
    fn sphere_behind_origin_misses() {
        let sphere = Sphere::new(Vector3::zeros(), 1.0);
        let ray = Ray::new(Vector3::new(0.0, 0.0, 5.0), Vector3::new(0.0, 0.0, 1.0));
        assert!(sphere.intersection(&ray, Part::All).is_none());
    }

    #[test]
    fn tangent_ray_misses() {
        let sphere = Sphere::new(Vector3::zeros(), 1.0);
        let ray = Ray::new(Vector3::new(1.0, -5.0, 0.0), Vector3::new(0.0, 1.0, 0.0));
        assert!(sphere.intersection(&ray, Part::All).is_none());
    }

    #[test]
    fn rays_with_nonpositive_discriminant_miss() {
        let mut rng = StdRng::seed_from_u64(7);
        let sphere = Sphere::new(Vector3::new(0.3, -0.2, 0.1), 1.5);
        for _ in 0..500 {
            let origin = Vector3::new(rng.gen_range(-10.0..10.0), rng.gen_range(-10.0..10.0), -20.0);
            let direction = Vector3::new(
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
                rng.gen_range(0.1..1.0),
            );
            let oc = origin - sphere.center;
            let b = 2.0 * direction.dot(&oc);
            let d = b * b
                - 4.0 * direction.norm_squared() * (oc.norm_squared() - sphere.radius * sphere.radius);
            let ray = Ray::new(origin, direction);
            if d <= 0.0 {
                assert!(sphere.intersection(&ray, Part::All).is_none());
            }
        }
    }

    #[test]
    fn bounding_box_is_center_plus_minus_radius() {
        let sphere = Sphere::new(Vector3::new(1.0, 2.0, 3.0), 0.5);
        let b = sphere.bounding_box(Part::All);
        assert_relative_eq!(b.min, Vector3::new(0.5, 1.5, 2.5));
        assert_relative_eq!(b.max, Vector3::new(1.5, 2.5, 3.5));
    }
}
