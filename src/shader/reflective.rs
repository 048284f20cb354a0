use nalgebra::Vector3;

use super::Shader;
use crate::{world::World, Color, Ray};

/// Blends another shader's color with the color seen in the mirror
/// direction.
pub struct ReflectiveShader {
    pub shader: Box<dyn Shader>,
    /// Weight of the reflected color, in `[0, 1]`.
    pub reflectivity: f64,
}

impl ReflectiveShader {
    pub fn new(shader: Box<dyn Shader>, reflectivity: f64) -> Self {
        Self {
            shader,
            reflectivity: reflectivity.clamp(0.0, 1.0),
        }
    }
}

impl Shader for ReflectiveShader {
    fn shade_surface(
        &self,
        world: &World,
        ray: &Ray,
        point: &Vector3<f64>,
        normal: &Vector3<f64>,
        recursion_depth: u32,
    ) -> Color {
        let base = self
            .shader
            .shade_surface(world, ray, point, normal, recursion_depth);

        if recursion_depth >= world.recursion_depth_max {
            return base;
        }

        let d = ray.direction.normalize();
        let reflected = Ray::new(*point, d - normal * (2.0 * d.dot(normal)));
        let reflected_color = world.cast_ray(&reflected, recursion_depth + 1);

        base * (1.0 - self.reflectivity) + reflected_color * self.reflectivity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{plane::Plane, shader::FlatShader};
    use approx::assert_relative_eq;

    /// Two facing mirrors at z = 0 and z = 1 with a gray base color.
    fn hall_of_mirrors(depth_max: u32) -> World {
        let mut world = World::new();
        world.recursion_depth_max = depth_max;
        world.background = Vector3::repeat(1.0);
        for (z, n) in [(0.0, 1.0), (1.0, -1.0)] {
            world.add_surface(
                Box::new(Plane::new(Vector3::new(0.0, 0.0, z), Vector3::new(0.0, 0.0, n))),
                Box::new(ReflectiveShader::new(
                    Box::new(FlatShader::new(Vector3::zeros())),
                    0.5,
                )),
            );
        }
        world
    }

    #[test]
    fn reflects_background() {
        let mut world = World::new();
        world.background = Vector3::new(0.0, 0.0, 1.0);
        let shader = ReflectiveShader::new(Box::new(FlatShader::new(Vector3::new(1.0, 0.0, 0.0))), 0.25);
        let ray = Ray::new(Vector3::new(-1.0, 0.0, 1.0), Vector3::new(1.0, 0.0, -1.0));
        let color = shader.shade_surface(&world, &ray, &Vector3::zeros(), &Vector3::z(), 0);
        assert_relative_eq!(color, Vector3::new(0.75, 0.0, 0.25));
    }

    #[test]
    fn recursion_stops_at_depth_limit() {
        let shader = ReflectiveShader::new(Box::new(FlatShader::new(Vector3::repeat(0.5))), 1.0);
        let world = hall_of_mirrors(2);
        let ray = Ray::new(Vector3::new(0.0, 0.0, 0.5), Vector3::new(0.0, 0.0, -1.0));
        let color = shader.shade_surface(&world, &ray, &Vector3::zeros(), &Vector3::z(), 2);
        assert_relative_eq!(color, Vector3::repeat(0.5));
    }

    #[test]
    fn trapped_ray_terminates() {
        // Never escapes the mirrors, so only the black base color remains.
        let world = hall_of_mirrors(3);
        let ray = Ray::new(Vector3::new(0.0, 0.0, 0.5), Vector3::new(0.0, 0.0, -1.0));
        assert_relative_eq!(world.cast_ray(&ray, 0), Vector3::zeros());

        let ray = Ray::new(Vector3::new(0.0, 0.0, 0.5), Vector3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(world.cast_ray(&ray, 0), Vector3::repeat(1.0));
    }
}
