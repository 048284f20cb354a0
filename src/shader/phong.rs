use nalgebra::Vector3;

use super::Shader;
use crate::{world::World, Color, Ray};

/// Ambient, Lambertian diffuse and mirror-lobe specular terms, with per-light
/// shadow rays when the world enables them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhongShader {
    pub color_ambient: Color,
    pub color_diffuse: Color,
    pub color_specular: Color,
    pub specular_power: f64,
}

impl PhongShader {
    pub fn new(
        color_ambient: Color,
        color_diffuse: Color,
        color_specular: Color,
        specular_power: f64,
    ) -> Self {
        debug_assert!(specular_power > 0.0);
        Self {
            color_ambient,
            color_diffuse,
            color_specular,
            specular_power,
        }
    }

    pub fn ambient(&self, world: &World) -> Color {
        world
            .ambient_color
            .component_mul(&self.color_ambient)
            * world.ambient_intensity
    }

    /// Whether something lies between `point` and the light at `point + l`.
    ///
    /// The shadow ray has a unit direction so that hit distances, and the
    /// `SMALL_T` cutoff, are in world units however far away the light is.
    fn occluded(world: &World, point: &Vector3<f64>, l: &Vector3<f64>) -> bool {
        let distance = l.norm();
        let shadow_ray = Ray::new(*point, l / distance);
        world
            .closest_intersection(&shadow_ray)
            .is_some_and(|hit| hit.dist < distance)
    }
}

impl Shader for PhongShader {
    fn shade_surface(
        &self,
        world: &World,
        ray: &Ray,
        point: &Vector3<f64>,
        normal: &Vector3<f64>,
        _recursion_depth: u32,
    ) -> Color {
        let ambient = self.ambient(world);
        let mut diffuse = Color::zeros();
        let mut specular = Color::zeros();
        let view = -ray.direction.normalize();

        for light in world.lights() {
            let l = light.position() - point;

            if world.enable_shadows && Self::occluded(world, point, &l) {
                continue;
            }

            let light_color = light.emitted_light(&l);

            let diffuse_intensity = l.normalize().dot(normal).max(0.0);
            diffuse += diffuse_intensity * self.color_diffuse.component_mul(&light_color);

            let reflected = (normal * (2.0 * l.dot(normal)) - l).normalize();
            let specular_intensity = reflected.dot(&view).max(0.0).powf(self.specular_power);
            specular += specular_intensity * self.color_specular.component_mul(&light_color);
        }

        ambient + diffuse + specular
    }
}
