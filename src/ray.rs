use nalgebra::Vector3;

/// Ray parameters at or below this are treated as a miss so that rays leaving
/// a surface do not strike it again.
pub const SMALL_T: f64 = 1e-4;

/// A ray `origin + t * direction`. The direction is not required to be unit
/// length, so `t` is measured in multiples of it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vector3<f64>,
    pub direction: Vector3<f64>,
}

impl Ray {
    pub fn new(origin: Vector3<f64>, direction: Vector3<f64>) -> Self {
        Self { origin, direction }
    }

    pub fn at(&self, t: f64) -> Vector3<f64> {
        self.origin + t * self.direction
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn at_scales_unnormalized_direction() {
        let ray = Ray::new(Vector3::new(1.0, 0.0, 0.0), Vector3::new(0.0, 2.0, 0.0));
        assert_relative_eq!(ray.at(1.5), Vector3::new(1.0, 3.0, 0.0));
    }
}
