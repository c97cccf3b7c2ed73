//! Image file I/O for color buffers.
//!
//! Thin wrapper over the `image` crate. Raster targets keep row 0 at the
//! bottom (+Y in NDC is up), while image files store rows top-down, so both
//! directions flip vertically; `save` followed by `load` is an identity.

use std::path::Path;

use crate::buffer::Buffer;
use crate::color::Color;

/// Errors crossing the image-file boundary.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("image codec error: {0}")]
    Codec(#[from] image::ImageError),
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Loads an RGBA8 color buffer from a PNG/JPG/BMP file.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Buffer<Color>, CodecError> {
    let path = path.as_ref();
    let img = image::open(path)?.to_rgba8();
    let (width, height) = img.dimensions();

    let mut buffer = Buffer::new(width, height, crate::color::BLACK);
    for (x, y, pixel) in img.enumerate_pixels() {
        let [r, g, b, a] = pixel.0;
        buffer.set(x, height - 1 - y, Color::new(r, g, b, a));
    }

    log::debug!("loaded {}x{} image from {}", width, height, path.display());
    Ok(buffer)
}

/// Saves a color buffer as a PNG file.
pub fn save<P: AsRef<Path>>(buffer: &Buffer<Color>, path: P) -> Result<(), CodecError> {
    let path = path.as_ref();
    let (width, height) = (buffer.width(), buffer.height());

    let mut img = image::RgbaImage::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let color = buffer.get(x, y);
            img.put_pixel(
                x,
                height - 1 - y,
                image::Rgba([color.r, color.g, color.b, color.a]),
            );
        }
    }
    img.save(path)?;

    log::debug!("saved {}x{} image to {}", width, height, path.display());
    Ok(())
}
