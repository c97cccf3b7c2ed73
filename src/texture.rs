//! 2D textures sampled by interpolated UV coordinates.

use std::path::Path;

use crate::buffer::Buffer;
use crate::color::Color;
use crate::image_io::{self, CodecError};

/// A texture image for UV lookup during shading.
pub struct Texture {
    data: Buffer<Color>,
}

impl Texture {
    /// Wraps an existing color buffer.
    pub fn new(data: Buffer<Color>) -> Self {
        Self { data }
    }

    /// Loads a texture from an image file (PNG, JPG, etc.).
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, CodecError> {
        Ok(Self::new(image_io::load(path)?))
    }

    /// Samples the texture at UV coordinates using nearest-neighbor lookup.
    ///
    /// UVs outside [0, 1] repeat (`rem_euclid` handles negative values
    /// correctly, unlike `%`). (0, 0) is the bottom-left texel, matching
    /// the buffer's bottom-up row order.
    #[inline]
    pub fn sample(&self, u: f32, v: f32) -> Color {
        let u = u.rem_euclid(1.0);
        let v = v.rem_euclid(1.0);

        let x = ((u * self.data.width() as f32) as u32).min(self.data.width() - 1);
        let y = ((v * self.data.height() as f32) as u32).min(self.data.height() - 1);

        self.data.get(x, y)
    }

    pub fn width(&self) -> u32 {
        self.data.width()
    }

    pub fn height(&self) -> u32 {
        self.data.height()
    }
}
