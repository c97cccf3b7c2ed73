//! Triangle scan conversion.
//!
//! This is the core of the renderer: clip-space triangles are perspective-
//! divided to NDC, a conservative bounding box is clamped to the view
//! square, and every candidate pixel runs a fill-rule-correct inside test
//! followed by barycentric interpolation, a depth test, and shading.
//!
//! # Winding and fill rule
//!
//! Counter-clockwise in NDC (y up) is front-facing: interior points of a
//! CCW triangle make all three edge functions positive. Pixels exactly on
//! an edge belong to the triangle only when that edge is "top-or-left", so
//! two triangles sharing an edge rasterize every shared-edge pixel exactly
//! once — no double-draw, no gap. A consequence of the one-sided test is
//! that clockwise (back-facing) triangles produce no coverage at all.
//!
//! # Known limitation
//!
//! There is no geometric clipping. Triangles outside the view square fall
//! away at the pixel loop, and a triangle with any vertex at or behind the
//! camera plane (`clip.w <= 0`) is dropped wholesale rather than split
//! against the near plane.

use glam::{IVec2, Vec2, Vec3, Vec4};

use crate::color::Color;
use crate::mesh::Mesh;
use crate::transform;

use super::shading::{shade_fragment, Fragment};
use super::targets::RenderTargets;
use super::uniforms::UniformBuffer;
use super::vertex_stage::{process_vertex, ProcessedVertex};

/// Barycentric denominators at or below this are treated as zero area.
const DEGENERATE_AREA_EPSILON: f32 = 1e-12;

/// Signed edge function for the directed edge `a -> b`, evaluated at `p`.
///
/// Positive when `p` lies on the interior side of the edge for a
/// counter-clockwise triangle, zero exactly on the edge.
#[inline]
fn edge_function(a: Vec2, b: Vec2, p: Vec2) -> f32 {
    (p.y - a.y) * (b.x - a.x) - (b.y - a.y) * (p.x - a.x)
}

/// Tie-break classification for pixels exactly on the edge `a -> b`.
///
/// Of the two directions a shared edge is traversed by its two adjacent
/// triangles, exactly one is top-or-left, so on-edge pixels are claimed by
/// exactly one triangle.
#[inline]
fn is_top_or_left(a: Vec2, b: Vec2) -> bool {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    dy < 0.0 || (dy == 0.0 && dx > 0.0)
}

#[inline]
fn edge_covers(a: Vec2, b: Vec2, p: Vec2) -> bool {
    let edge = edge_function(a, b, p);
    edge > 0.0 || (edge == 0.0 && is_top_or_left(a, b))
}

/// Rasterizes one clip-space triangle into the bound targets.
///
/// Pure per-triangle operation: no state survives the call. Degenerate
/// (zero-area) and behind-camera triangles are skipped without touching
/// the buffers.
pub fn draw_triangle(
    vertices: [ProcessedVertex; 3],
    uniforms: &UniformBuffer,
    targets: &mut RenderTargets,
) {
    targets.check_dimensions();

    // Perspective divide would turn w <= 0 into garbage coordinates; with
    // no near-plane clipping, drop the triangle instead.
    if vertices.iter().any(|v| v.clip_position.w <= f32::EPSILON) {
        return;
    }
    let ndc = vertices.map(|v| v.clip_position.truncate() / v.clip_position.w);

    let a = ndc[0].truncate();
    let b = ndc[1].truncate();
    let c = ndc[2].truncate();

    // Per-triangle pieces of the 2x2 barycentric solve. The denominator is
    // the squared doubled area, so it also guards zero-area triangles.
    let v0 = b - a;
    let v1 = c - a;
    let d00 = v0.dot(v0);
    let d01 = v0.dot(v1);
    let d11 = v1.dot(v1);
    let denom = d00 * d11 - d01 * d01;
    if denom.abs() <= DEGENERATE_AREA_EPSILON {
        return;
    }
    let inv_denom = 1.0 / denom;

    let bbox_min = a.min(b).min(c).clamp(Vec2::splat(-1.0), Vec2::splat(1.0));
    let bbox_max = a.max(b).max(c).clamp(Vec2::splat(-1.0), Vec2::splat(1.0));
    let min = targets.color.to_pixel_space(bbox_min.x, bbox_min.y);
    let max = targets.color.to_pixel_space(bbox_max.x, bbox_max.y);

    for y in min.y..=max.y {
        for x in min.x..=max.x {
            let point = targets.color.to_normalized_space(x as u32, y as u32);

            if !(edge_covers(a, b, point)
                && edge_covers(b, c, point)
                && edge_covers(c, a, point))
            {
                continue;
            }

            // Barycentric weights: u belongs to vertex 0, v to 1, w to 2.
            let v2 = point - a;
            let d20 = v2.dot(v0);
            let d21 = v2.dot(v1);
            let v = (d11 * d20 - d01 * d21) * inv_denom;
            let w = (d00 * d21 - d01 * d20) * inv_denom;
            let u = 1.0 - v - w;

            // NDC z interpolates linearly in screen space because the
            // perspective divide already applied to z.
            let depth = u * ndc[0].z + v * ndc[1].z + w * ndc[2].z;
            if let Some(depth_target) = targets.depth.as_deref_mut() {
                // Strictly less: the earliest-drawn triangle wins ties.
                if depth >= depth_target.get(x as u32, y as u32) {
                    continue;
                }
                depth_target.set(x as u32, y as u32, depth);
            }

            let world_position = u * vertices[0].world_position
                + v * vertices[1].world_position
                + w * vertices[2].world_position;
            let world_normal = (u * vertices[0].world_normal
                + v * vertices[1].world_normal
                + w * vertices[2].world_normal)
                .normalize_or_zero();
            let color = u * vertices[0].color + v * vertices[1].color + w * vertices[2].color;
            let uv = u * vertices[0].uv + v * vertices[1].uv + w * vertices[2].uv;

            let fragment = Fragment {
                world_position,
                world_normal,
                color,
                uv,
                pixel: IVec2::new(x, y),
            };
            let shaded = shade_fragment(&fragment, uniforms);
            targets.color.set(x as u32, y as u32, Color::from_vec4(shaded));

            if let Some(normal_target) = targets.normal.as_deref_mut() {
                let visualized = (world_normal * 0.5 + Vec3::splat(0.5)).extend(1.0);
                normal_target.set(x as u32, y as u32, Color::from_vec4(visualized));
            }
            if let Some(uv_target) = targets.uv.as_deref_mut() {
                let visualized = Vec4::new(uv.x, uv.y, 0.0, 1.0);
                uv_target.set(x as u32, y as u32, Color::from_vec4(visualized));
            }
        }
    }
}

/// Draws a whole mesh: vertex stage, then per-triangle rasterization.
///
/// The normal matrix is derived from the model matrix once per call and
/// shared by every vertex.
pub fn draw_mesh(mesh: &Mesh, uniforms: &UniformBuffer, targets: &mut RenderTargets) {
    let normal_matrix = transform::normal_matrix(uniforms.model);
    log::debug!("drawing {} triangles", mesh.triangle_count());

    for corners in mesh.triangles() {
        let processed = corners.map(|vertex| process_vertex(vertex, uniforms, normal_matrix));
        draw_triangle(processed, uniforms, targets);
    }
}
