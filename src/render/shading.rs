//! Blinn-Phong lighting evaluation.
//!
//! [`compute_lighting`] is a pure function over world-space inputs. The
//! vertex stage calls it once per vertex in vertex-lit mode and the
//! rasterizer calls it once per covered pixel in fragment-lit mode — same
//! formula either way, only the call site differs.

use glam::{IVec2, Vec2, Vec3, Vec4};

use crate::light::Light;

use super::uniforms::{LightingMode, UniformBuffer};

pub const AMBIENT_STRENGTH: f32 = 0.1;
pub const SPECULAR_STRENGTH: f32 = 0.7;
pub const SHININESS: f32 = 32.0;

/// Keeps the point/spot attenuation finite when a light sits exactly on
/// the shaded surface.
const DISTANCE_EPSILON: f32 = 1e-4;

/// A single covered pixel's interpolated attributes.
///
/// Built by the rasterizer's inner loop and consumed immediately.
#[derive(Clone, Copy, Debug)]
pub struct Fragment {
    pub world_position: Vec3,
    /// Renormalized after interpolation.
    pub world_normal: Vec3,
    pub color: Vec4,
    pub uv: Vec2,
    pub pixel: IVec2,
}

/// Accumulates ambient + diffuse + specular over every light and modulates
/// the base color.
///
/// Light directions point from the light toward the surface, so diffuse is
/// `max(dot(N, -L), 0)`. Specular uses the Blinn-Phong halfway vector with
/// a fixed exponent of [`SHININESS`]. Point and spot contributions fall off
/// with `intensity / (distance² + ε)`; the spot cone factor scales diffuse
/// and specular but not ambient. The result carries alpha 1.
pub fn compute_lighting(
    world_position: Vec3,
    world_normal: Vec3,
    base_color: Vec4,
    view_position: Vec3,
    lights: &[Light],
) -> Vec4 {
    let normal = world_normal.normalize_or_zero();
    let view_direction = (view_position - world_position).normalize_or_zero();

    let mut accumulated = Vec3::ZERO;
    for light in lights {
        accumulated += match *light {
            Light::Off => Vec3::ZERO,
            Light::Directional { direction, color } => {
                let diffuse = diffuse_term(normal, direction);
                let specular = specular_term(normal, direction, view_direction);
                (AMBIENT_STRENGTH + diffuse + specular) * color.truncate()
            }
            Light::Point {
                position,
                color,
                intensity,
            } => {
                let to_surface = world_position - position;
                let attenuation = intensity / (to_surface.length_squared() + DISTANCE_EPSILON);
                let direction = to_surface.normalize_or_zero();

                let diffuse = diffuse_term(normal, direction);
                let specular = specular_term(normal, direction, view_direction);
                (AMBIENT_STRENGTH + diffuse + specular) * attenuation * color.truncate()
            }
            Light::Spot {
                position,
                direction: axis,
                color,
                intensity,
                cut_off,
                outer_cut_off,
            } => {
                let to_surface = world_position - position;
                let attenuation = intensity / (to_surface.length_squared() + DISTANCE_EPSILON);
                let direction = to_surface.normalize_or_zero();

                let cone = cone_factor(direction.dot(axis), cut_off, outer_cut_off);
                let diffuse = diffuse_term(normal, direction);
                let specular = specular_term(normal, direction, view_direction);
                (AMBIENT_STRENGTH + (diffuse + specular) * cone) * attenuation * color.truncate()
            }
        };
    }

    let lit = accumulated.extend(1.0) * base_color;
    Vec4::new(lit.x, lit.y, lit.z, 1.0)
}

#[inline]
fn diffuse_term(normal: Vec3, light_direction: Vec3) -> f32 {
    normal.dot(-light_direction).max(0.0)
}

#[inline]
fn specular_term(normal: Vec3, light_direction: Vec3, view_direction: Vec3) -> f32 {
    let halfway = (view_direction - light_direction).normalize_or_zero();
    SPECULAR_STRENGTH * normal.dot(halfway).max(0.0).powf(SHININESS)
}

/// Smooth falloff between the spot's inner and outer cutoff cosines.
///
/// A degenerate cone (`inner == outer`) becomes a hard edge: 1 inside,
/// 0 outside, with no division.
#[inline]
fn cone_factor(cos_angle: f32, cut_off: f32, outer_cut_off: f32) -> f32 {
    let width = cut_off - outer_cut_off;
    if width <= f32::EPSILON {
        if cos_angle >= cut_off {
            1.0
        } else {
            0.0
        }
    } else {
        ((cos_angle - outer_cut_off) / width).clamp(0.0, 1.0)
    }
}

/// Computes a fragment's final color.
///
/// The base color is the interpolated vertex color, modulated by the
/// texture sample when a texture is bound. Fragment-lit mode then runs the
/// lighting model; vertex-lit mode keeps the interpolated (pre-lit) color.
pub(crate) fn shade_fragment(fragment: &Fragment, uniforms: &UniformBuffer) -> Vec4 {
    let base_color = match uniforms.texture {
        Some(texture) => texture.sample(fragment.uv.x, fragment.uv.y).to_vec4() * fragment.color,
        None => fragment.color,
    };

    match uniforms.lighting {
        LightingMode::Vertex => base_color,
        LightingMode::Fragment => compute_lighting(
            fragment.world_position,
            fragment.world_normal,
            base_color,
            uniforms.camera_position,
            uniforms.lights,
        ),
    }
}
