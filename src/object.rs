use nalgebra::Vector3;

use crate::{bounds::Aabb, hit::Hit, Ray};

/// Which sub-primitives of an object an intersection or bounding-box query
/// covers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Part {
    /// Every part; intersection returns the closest one struck.
    All,
    /// Only the part with this index.
    Index(usize),
}

/// Capability set shared by every intersectable primitive.
///
/// Implementations are immutable once built and are queried concurrently
/// from render threads.
pub trait Object: Send + Sync {
    /// Intersects `ray` with the selected part(s). Returns the nearest hit with
    /// a ray parameter greater than [`crate::ray::SMALL_T`].
    ///
    /// `Part::Index(i)` requires `i < self.number_parts()`; an out-of-range
    /// index panics.
    fn intersection(&self, ray: &Ray, part: Part) -> Option<Hit<'_>>;

    /// Unit normal of `part` at `point`.
    ///
    /// `part` must come from a hit on this object; an out-of-range index
    /// panics.
    fn normal(&self, point: &Vector3<f64>, part: usize) -> Vector3<f64>;

    /// Smallest axis-aligned box enclosing the selected part(s). Indices are
    /// checked as in [`Object::intersection`].
    fn bounding_box(&self, part: Part) -> Aabb;

    fn number_parts(&self) -> usize {
        1
    }
}
