//! A CPU-only software triangle rasterizer.
//!
//! Meshes go through a model/view/projection vertex stage, get scan-
//! converted with a fill-rule-correct inside test and barycentric
//! interpolation, and land in caller-owned color/depth/normal/UV buffers
//! with Blinn-Phong lighting evaluated per vertex or per pixel. No GPU
//! anywhere.
//!
//! # Quick Start
//!
//! ```ignore
//! use softrast::prelude::*;
//!
//! let camera = Camera::new(Vec3::new(0.0, 0.0, 5.0), 60.0, 1.0);
//! let lights = [Light::directional(Vec3::new(0.0, -1.0, -1.0), Vec4::ONE)];
//! let uniforms = UniformBuffer::new(
//!     Mat4::IDENTITY,
//!     camera.view_projection(),
//!     camera.position(),
//!     &lights,
//! );
//!
//! let mut color = Buffer::new(512, 512, color::BLACK);
//! let mut depth = DepthBuffer::new(512, 512, FAR_DEPTH);
//! draw_mesh(
//!     &geometry::uv_sphere(1.0, 24, 48),
//!     &uniforms,
//!     &mut RenderTargets::new(&mut color).with_depth(&mut depth),
//! );
//! image_io::save(&color, "sphere.png")?;
//! ```

pub mod buffer;
pub mod camera;
pub mod color;
pub mod geometry;
pub mod image_io;
pub mod light;
pub mod mesh;
pub mod render;
pub mod texture;
pub mod transform;

// Re-export commonly needed types at crate root for convenience
pub use buffer::{Buffer, DepthBuffer};
pub use camera::Camera;
pub use color::Color;
pub use light::Light;
pub use mesh::{LoadError, Mesh, MeshError, Vertex};
pub use render::{draw_mesh, draw_triangle, LightingMode, RenderTargets, UniformBuffer, FAR_DEPTH};
pub use texture::Texture;
pub use transform::Transform;

/// Prelude module for convenient imports.
///
/// # Example
/// ```ignore
/// use softrast::prelude::*;
/// ```
pub mod prelude {
    pub use crate::buffer::{Buffer, DepthBuffer};
    pub use crate::camera::Camera;
    pub use crate::color::{self, Color};
    pub use crate::geometry;
    pub use crate::image_io;
    pub use crate::light::Light;
    pub use crate::mesh::{Mesh, Vertex};
    pub use crate::render::{
        compute_lighting, draw_mesh, draw_triangle, LightingMode, ProcessedVertex, RenderTargets,
        UniformBuffer, FAR_DEPTH,
    };
    pub use crate::texture::Texture;
    pub use crate::transform::Transform;

    // Math re-exports so callers don't need a separate glam import.
    pub use glam::{Mat3, Mat4, Quat, Vec2, Vec3, Vec4};
}
