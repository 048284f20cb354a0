use nalgebra::Vector3;

use crate::{object::Object, Ray};

/// Outcome of a successful intersection query.
///
/// A miss is represented by the absence of a `Hit` (`None`), so `dist` and
/// `part` are always meaningful. The struck object is borrowed, which ties a
/// hit's lifetime to the scene that produced it.
#[derive(Clone, Copy)]
pub struct Hit<'a> {
    pub object: &'a dyn Object,
    /// Ray parameter of the intersection.
    pub dist: f64,
    /// Sub-primitive that was struck, e.g. the triangle index of a mesh.
    pub part: usize,
}

impl<'a> Hit<'a> {
    pub fn new(object: &'a dyn Object, dist: f64, part: usize) -> Self {
        Self { object, dist, part }
    }

    pub fn point(&self, ray: &Ray) -> Vector3<f64> {
        ray.at(self.dist)
    }

    /// Surface normal of the struck part at the hit location.
    pub fn normal(&self, ray: &Ray) -> Vector3<f64> {
        self.object.normal(&self.point(ray), self.part)
    }
}

impl std::fmt::Debug for Hit<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Hit")
            .field("dist", &self.dist)
            .field("part", &self.part)
            .finish_non_exhaustive()
    }
}
