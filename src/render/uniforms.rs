//! Per-draw-call uniform state.

use glam::{Mat4, Vec3};

use crate::light::Light;
use crate::texture::Texture;

/// Where the lighting model runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LightingMode {
    /// Lighting is evaluated once per vertex (Gouraud-style); the
    /// rasterizer interpolates the lit colors.
    Vertex,
    /// Lighting is evaluated per covered pixel (Phong-style) from the
    /// interpolated position and normal.
    #[default]
    Fragment,
}

/// Read-only snapshot of the state a draw call needs.
///
/// Built once per draw call and passed by reference through the pipeline;
/// nothing in the core mutates it. The lighting mode changes *where* the
/// lighting model is evaluated, never its formula.
pub struct UniformBuffer<'a> {
    /// Model (object-to-world) matrix.
    pub model: Mat4,
    /// Combined projection * view matrix.
    pub view_projection: Mat4,
    /// Camera position in world space, for the specular term.
    pub camera_position: Vec3,
    pub lights: &'a [Light],
    pub lighting: LightingMode,
    /// Optional texture; when bound, the fragment base color is the
    /// nearest-neighbor sample at the interpolated UV modulated by the
    /// interpolated vertex color.
    pub texture: Option<&'a Texture>,
}

impl<'a> UniformBuffer<'a> {
    pub fn new(
        model: Mat4,
        view_projection: Mat4,
        camera_position: Vec3,
        lights: &'a [Light],
    ) -> Self {
        Self {
            model,
            view_projection,
            camera_position,
            lights,
            lighting: LightingMode::default(),
            texture: None,
        }
    }

    pub fn with_lighting(mut self, lighting: LightingMode) -> Self {
        self.lighting = lighting;
        self
    }

    pub fn with_texture(mut self, texture: &'a Texture) -> Self {
        self.texture = Some(texture);
        self
    }
}
