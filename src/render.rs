use std::time::Instant;

use log::debug;
use rand::{rngs::StdRng, Rng, SeedableRng};
use rayon::prelude::*;

use crate::{
    camera::Camera,
    frame::{FrameBuffer, Rgba32},
    world::World,
    Color,
};

/// Renders `world` through `camera`, averaging `samples` jittered rays per
/// pixel. Rows are traced in parallel; each row seeds its own generator from
/// `seed`, so the image does not depend on thread scheduling.
pub fn render(world: &World, camera: &Camera, samples: usize, seed: u64) -> FrameBuffer {
    let mut frame = FrameBuffer::new(camera.image_width(), camera.image_height());
    let samples = samples.max(1);
    let start = Instant::now();

    frame.par_rows_mut().enumerate().for_each(|(y, row)| {
        let mut rng = StdRng::seed_from_u64(seed.wrapping_add(y as u64));
        for (x, pixel) in row.chunks_exact_mut(4).enumerate() {
            let color = if samples == 1 {
                world.cast_ray(&camera.cast(x, y, (0.5, 0.5)), 0)
            } else {
                (0..samples)
                    .map(|_| world.cast_ray(&camera.cast(x, y, (rng.gen(), rng.gen())), 0))
                    .fold(Color::zeros(), |acc, c| acc + c)
                    / samples as f64
            };
            let (r, g, b, a) = color.to_rgba32();
            pixel.copy_from_slice(&[r, g, b, a]);
        }
    });

    debug!(
        "rendered {}x{} at {} spp in {:.2}s",
        frame.width(),
        frame.height(),
        samples,
        start.elapsed().as_secs_f64()
    );
    frame
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{shader::FlatShader, sphere::Sphere};
    use nalgebra::Vector3;

    fn pixel(frame: &FrameBuffer, x: usize, y: usize) -> &[u8] {
        let start = (x + y * frame.width()) * 4;
        &frame.pixel_data()[start..start + 4]
    }

    fn scene() -> (World, Camera) {
        let mut world = World::new();
        world.background = Vector3::new(0.0, 0.0, 1.0);
        world.add_surface(
            Box::new(Sphere::new(Vector3::zeros(), 1.0)),
            Box::new(FlatShader::new(Vector3::new(1.0, 0.0, 0.0))),
        );
        let camera = Camera::look_at(
            Vector3::new(0.0, 0.0, 5.0),
            Vector3::zeros(),
            Vector3::y(),
            60.0,
            32,
            24,
        );
        (world, camera)
    }

    #[test]
    fn sphere_in_center_background_in_corner() {
        let (world, camera) = scene();
        let frame = render(&world, &camera, 1, 0);
        assert_eq!(pixel(&frame, 16, 12), &[255, 0, 0, 255]);
        assert_eq!(pixel(&frame, 0, 0), &[0, 0, 255, 255]);
    }

    #[test]
    fn supersampled_render_is_deterministic() {
        let (world, camera) = scene();
        let a = render(&world, &camera, 4, 9);
        let b = render(&world, &camera, 4, 9);
        assert_eq!(a.pixel_data(), b.pixel_data());
    }
}
