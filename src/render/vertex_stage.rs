//! The vertex processing stage.

use glam::{Mat3, Vec2, Vec3, Vec4};

use crate::mesh::Vertex;

use super::shading::compute_lighting;
use super::uniforms::{LightingMode, UniformBuffer};

/// A vertex after the vertex stage, ready for rasterization.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProcessedVertex {
    /// Homogeneous clip-space position (before the perspective divide).
    pub clip_position: Vec4,
    pub world_position: Vec3,
    /// Unit-length world-space normal.
    pub world_normal: Vec3,
    /// The vertex color — pre-lit in vertex-lit mode, raw otherwise.
    pub color: Vec4,
    pub uv: Vec2,
}

/// Transforms one vertex into clip space.
///
/// `normal_matrix` is the inverse transpose of the model's upper 3x3,
/// computed once per draw call by [`draw_mesh`](super::draw_mesh) — without
/// it, non-uniform scale in the model matrix would skew the normals. In
/// vertex-lit mode the full lighting model runs here and the result
/// replaces the vertex color; the rasterizer then just interpolates.
pub fn process_vertex(
    vertex: &Vertex,
    uniforms: &UniformBuffer,
    normal_matrix: Mat3,
) -> ProcessedVertex {
    debug_assert!(
        vertex.normal.length_squared() > f32::EPSILON,
        "degenerate (near-zero) vertex normal"
    );

    let world_position = (uniforms.model * vertex.position.extend(1.0)).truncate();
    let clip_position = uniforms.view_projection * world_position.extend(1.0);
    let world_normal = (normal_matrix * vertex.normal).normalize();

    let color = match uniforms.lighting {
        LightingMode::Fragment => vertex.color,
        LightingMode::Vertex => compute_lighting(
            world_position,
            world_normal,
            vertex.color,
            uniforms.camera_position,
            uniforms.lights,
        ),
    };

    ProcessedVertex {
        clip_position,
        world_position,
        world_normal,
        color,
        uv: vertex.uv,
    }
}
