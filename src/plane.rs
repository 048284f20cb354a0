use nalgebra::Vector3;

use crate::{
    bounds::Aabb,
    hit::Hit,
    object::{Object, Part},
    ray::SMALL_T,
    Ray,
};

const PARALLEL_TOLERANCE: f64 = 1e-12;

/// An infinite plane through `point` with unit `normal`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Plane {
    pub point: Vector3<f64>,
    pub normal: Vector3<f64>,
}

impl Plane {
    /// The normal is normalized on construction.
    pub fn new(point: Vector3<f64>, normal: Vector3<f64>) -> Self {
        Self {
            point,
            normal: normal.normalize(),
        }
    }

    /// Ray parameter at which `ray` crosses the plane, if it does so in front
    /// of its origin.
    pub fn intersect_distance(&self, ray: &Ray) -> Option<f64> {
        let denom = self.normal.dot(&ray.direction);

        if denom.abs() < PARALLEL_TOLERANCE {
            return None;
        }

        let t = (self.point - ray.origin).dot(&self.normal) / denom;

        if t > SMALL_T {
            Some(t)
        } else {
            None
        }
    }
}

impl Object for Plane {
    fn intersection(&self, ray: &Ray, _part: Part) -> Option<Hit<'_>> {
        self.intersect_distance(ray).map(|t| Hit::new(self, t, 0))
    }

    fn normal(&self, _point: &Vector3<f64>, _part: usize) -> Vector3<f64> {
        self.normal
    }

    fn bounding_box(&self, _part: Part) -> Aabb {
        // Flat along an axis-aligned normal, unbounded everywhere else.
        let mut b = Aabb::infinite();
        for axis in 0..3 {
            if (self.normal[axis].abs() - 1.0).abs() < PARALLEL_TOLERANCE {
                b.min[axis] = self.point[axis];
                b.max[axis] = self.point[axis];
            }
        }
        b
    }
}
