use std::path::Path;

use image::RgbaImage;
use rayon::prelude::*;

use crate::error::{Error, Result};

pub trait Rgba32 {
    fn to_rgba32(&self) -> (u8, u8, u8, u8);
}

/// Shaded colors are unbounded; clamping happens only here.
impl Rgba32 for nalgebra::Vector3<f64> {
    fn to_rgba32(&self) -> (u8, u8, u8, u8) {
        let channel = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        (channel(self.x), channel(self.y), channel(self.z), u8::MAX)
    }
}

pub struct FrameBuffer {
    width: usize,
    height: usize,
    pixel_data: Box<[u8]>,
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixel_data: vec![0; width * height * 4].into_boxed_slice(),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixel_data(&self) -> &[u8] {
        &self.pixel_data
    }

    /// Rows of RGBA bytes, top to bottom, for filling the buffer in parallel.
    pub fn par_rows_mut(&mut self) -> impl IndexedParallelIterator<Item = &mut [u8]> {
        self.pixel_data.par_chunks_exact_mut(self.width * 4)
    }

    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let image = RgbaImage::from_raw(
            self.width as u32,
            self.height as u32,
            self.pixel_data.to_vec(),
        )
        .ok_or_else(|| Error::Io {
            path: path.to_path_buf(),
            source: std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                "frame buffer size does not match its dimensions",
            ),
        })?;
        image.save(path)?;
        Ok(())
    }
}
