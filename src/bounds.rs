use nalgebra::Vector3;

/// Axis-aligned bounding box.
///
/// An empty box has `min > max` on every axis so that the first
/// [`Aabb::include_point`] collapses it onto that point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub min: Vector3<f64>,
    pub max: Vector3<f64>,
}

impl Aabb {
    pub fn new(min: Vector3<f64>, max: Vector3<f64>) -> Self {
        Self { min, max }
    }

    pub fn empty() -> Self {
        Self {
            min: Vector3::repeat(f64::INFINITY),
            max: Vector3::repeat(f64::NEG_INFINITY),
        }
    }

    pub fn infinite() -> Self {
        Self {
            min: Vector3::repeat(f64::NEG_INFINITY),
            max: Vector3::repeat(f64::INFINITY),
        }
    }

    /// Smallest box containing all of `points`.
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Vector3<f64>>) -> Self {
        points.into_iter().fold(Self::empty(), |mut acc, p| {
            acc.include_point(p);
            acc
        })
    }

    pub fn include_point(&mut self, point: &Vector3<f64>) {
        self.min = self.min.inf(point);
        self.max = self.max.sup(point);
    }

    pub fn union(&self, other: &Aabb) -> Aabb {
        Aabb {
            min: self.min.inf(&other.min),
            max: self.max.sup(&other.max),
        }
    }

    pub fn is_empty(&self) -> bool {
        (0..3).any(|i| self.min[i] > self.max[i])
    }

    pub fn is_finite(&self) -> bool {
        !self.is_empty()
            && self.min.iter().all(|c| c.is_finite())
            && self.max.iter().all(|c| c.is_finite())
    }

    pub fn center(&self) -> Vector3<f64> {
        (self.min + self.max) / 2.0
    }

    pub fn diagonal(&self) -> Vector3<f64> {
        self.max - self.min
    }
}

impl Default for Aabb {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn include_point_grows_empty_box() {
        let mut b = Aabb::empty();
        assert!(b.is_empty());
        b.include_point(&Vector3::new(1.0, -2.0, 3.0));
        assert!(!b.is_empty());
        assert_eq!(b.min, b.max);
        b.include_point(&Vector3::new(-1.0, 2.0, 0.0));
        assert_relative_eq!(b.min, Vector3::new(-1.0, -2.0, 0.0));
        assert_relative_eq!(b.max, Vector3::new(1.0, 2.0, 3.0));
        assert_relative_eq!(b.center(), Vector3::new(0.0, 0.0, 1.5));
    }

    #[test]
    fn union_with_empty_is_identity() {
        let b = Aabb::new(Vector3::zeros(), Vector3::repeat(1.0));
        assert_eq!(b.union(&Aabb::empty()), b);
    }

    #[test]
    fn infinite_box_is_not_finite() {
        assert!(!Aabb::infinite().is_finite());
        assert!(!Aabb::empty().is_finite());
        assert!(Aabb::new(Vector3::zeros(), Vector3::zeros()).is_finite());
    }
}
