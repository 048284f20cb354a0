use nalgebra::Vector3;

use super::Shader;
use crate::{world::World, Color, Ray};

/// Constant color, unaffected by lights.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlatShader {
    pub color: Color,
}

impl FlatShader {
    pub fn new(color: Color) -> Self {
        Self { color }
    }
}

impl Shader for FlatShader {
    fn shade_surface(
        &self,
        _world: &World,
        _ray: &Ray,
        _point: &Vector3<f64>,
        _normal: &Vector3<f64>,
        _recursion_depth: u32,
    ) -> Color {
        self.color
    }
}
