use std::f64::consts::PI;

use nalgebra::Vector3;

use crate::Color;

/// Distance at which a [`DirectionLight`] is placed along its direction.
const DIRECTION_LIGHT_DISTANCE: f64 = 1e6;

pub trait Light: Send + Sync {
    fn position(&self) -> Vector3<f64>;

    /// Light arriving at a point, given the vector from that point to the
    /// light.
    fn emitted_light(&self, vector_to_light: &Vector3<f64>) -> Color;
}

/// Isotropic point source with inverse-square falloff.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointLight {
    pub position: Vector3<f64>,
    pub color: Color,
    pub brightness: f64,
}

impl PointLight {
    pub fn new(position: Vector3<f64>, color: Color, brightness: f64) -> Self {
        Self {
            position,
            color,
            brightness,
        }
    }
}

impl Light for PointLight {
    fn position(&self) -> Vector3<f64> {
        self.position
    }

    fn emitted_light(&self, vector_to_light: &Vector3<f64>) -> Color {
        self.color * self.brightness / (4.0 * PI * vector_to_light.norm_squared())
    }
}

/// Light from an infinitely distant source, constant everywhere.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DirectionLight {
    /// Unit vector pointing towards the light.
    pub direction: Vector3<f64>,
    pub color: Color,
    pub brightness: f64,
}

impl DirectionLight {
    pub fn new(direction: Vector3<f64>, color: Color, brightness: f64) -> Self {
        Self {
            direction: direction.normalize(),
            color,
            brightness,
        }
    }
}

impl Light for DirectionLight {
    fn position(&self) -> Vector3<f64> {
        self.direction * DIRECTION_LIGHT_DISTANCE
    }

    fn emitted_light(&self, _vector_to_light: &Vector3<f64>) -> Color {
        self.color * self.brightness
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn point_light_falls_off_with_square_distance() {
        let light = PointLight::new(Vector3::zeros(), Vector3::new(1.0, 0.5, 0.0), 4.0 * PI);
        assert_relative_eq!(
            light.emitted_light(&Vector3::new(0.0, 2.0, 0.0)),
            Vector3::new(0.25, 0.125, 0.0)
        );
    }

    #[test]
    fn direction_light_is_constant() {
        let light = DirectionLight::new(Vector3::new(0.0, 3.0, 0.0), Vector3::repeat(1.0), 0.5);
        assert_relative_eq!(light.direction, Vector3::y());
        assert_relative_eq!(light.emitted_light(&Vector3::repeat(10.0)), Vector3::repeat(0.5));
        assert_relative_eq!(light.position(), Vector3::new(0.0, DIRECTION_LIGHT_DISTANCE, 0.0));
    }
}
