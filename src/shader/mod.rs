//! Surface shading models.

mod flat;
mod phong;
mod reflective;

pub use flat::FlatShader;
pub use phong::PhongShader;
pub use reflective::ReflectiveShader;

use nalgebra::Vector3;

use crate::{world::World, Color, Ray};

pub trait Shader: Send + Sync {
    /// Color leaving `point` back along `ray`.
    ///
    /// `recursion_depth` counts how many secondary rays led here; shaders
    /// that cast further rays stop at [`World::recursion_depth_max`]. The
    /// result is not clamped.
    fn shade_surface(
        &self,
        world: &World,
        ray: &Ray,
        point: &Vector3<f64>,
        normal: &Vector3<f64>,
        recursion_depth: u32,
    ) -> Color;
}
