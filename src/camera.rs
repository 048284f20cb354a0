use nalgebra::Vector3;

use crate::Ray;

/// Pinhole camera with the image plane one unit in front of `center`.
#[derive(Clone, Debug)]
pub struct Camera {
    center: Vector3<f64>,
    image_width: usize,
    image_height: usize,
    pixel_delta_u: Vector3<f64>,
    pixel_delta_v: Vector3<f64>,
    /// Upper-left corner of pixel (0, 0).
    pixel_corner: Vector3<f64>,
}

impl Camera {
    pub fn look_at(
        center: Vector3<f64>,
        target: Vector3<f64>,
        up: Vector3<f64>,
        vertical_fov: f64,
        image_width: usize,
        image_height: usize,
    ) -> Self {
        let forward = (target - center).normalize();
        let right = forward.cross(&up).normalize();
        let true_up = right.cross(&forward);

        let viewport_height = 2.0 * (vertical_fov.to_radians() / 2.0).tan();
        let viewport_width = viewport_height * image_width as f64 / image_height as f64;
        let viewport_u = right * viewport_width;
        let viewport_v = -true_up * viewport_height;
        let pixel_delta_u = viewport_u / image_width as f64;
        let pixel_delta_v = viewport_v / image_height as f64;
        let pixel_corner = center + forward - viewport_u / 2.0 - viewport_v / 2.0;

        Self {
            center,
            image_width,
            image_height,
            pixel_delta_u,
            pixel_delta_v,
            pixel_corner,
        }
    }

    pub fn image_width(&self) -> usize {
        self.image_width
    }

    pub fn image_height(&self) -> usize {
        self.image_height
    }

    /// Ray through pixel `(x, y)`, offset inside the pixel by `jitter`
    /// (`(0.5, 0.5)` is the pixel center).
    pub fn cast(&self, x: usize, y: usize, jitter: (f64, f64)) -> Ray {
        let sample = self.pixel_corner
            + (x as f64 + jitter.0) * self.pixel_delta_u
            + (y as f64 + jitter.1) * self.pixel_delta_v;
        Ray::new(self.center, sample - self.center)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn camera() -> Camera {
        Camera::look_at(
            Vector3::new(0.0, 0.0, 5.0),
            Vector3::zeros(),
            Vector3::y(),
            90.0,
            101,
            51,
        )
    }

    #[test]
    fn center_pixel_looks_at_target() {
        let ray = camera().cast(50, 25, (0.5, 0.5));
        assert_relative_eq!(ray.origin, Vector3::new(0.0, 0.0, 5.0));
        assert_relative_eq!(ray.direction.normalize(), Vector3::new(0.0, 0.0, -1.0), epsilon = 1e-12);
    }

    #[test]
    fn image_axes_follow_right_and_down() {
        let camera = camera();
        let top_left = camera.cast(0, 0, (0.0, 0.0));
        // 90 degree vertical field of view: the top edge is 45 degrees up.
        assert_relative_eq!(top_left.direction.y, 1.0, epsilon = 1e-12);
        assert!(top_left.direction.x < 0.0);

        let bottom_right = camera.cast(100, 50, (1.0, 1.0));
        assert_relative_eq!(bottom_right.direction.y, -1.0, epsilon = 1e-12);
        assert_relative_eq!(bottom_right.direction.x, 101.0 / 51.0, epsilon = 1e-12);
    }
}
