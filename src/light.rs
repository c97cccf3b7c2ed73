//! Light sources for the shading model.
//!
//! The light kinds form a closed set dispatched by `match` in the shading
//! stage. Directions are normalized at construction and spot cutoff angles
//! are stored as cosines, so the per-fragment math never re-derives either.

use glam::{Vec3, Vec4};

/// A light source.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Light {
    /// Placeholder that contributes nothing. Lets callers keep a
    /// fixed-size light list with unused slots.
    Off,
    /// Uniform illumination from a direction, like the sun. No falloff.
    Directional { direction: Vec3, color: Vec4 },
    /// Omnidirectional light with inverse-square distance falloff.
    Point {
        position: Vec3,
        color: Vec4,
        intensity: f32,
    },
    /// Point light restricted to a cone, with a smooth edge between the
    /// inner and outer cutoff angles.
    Spot {
        position: Vec3,
        /// Normalized cone axis, pointing away from the light.
        direction: Vec3,
        color: Vec4,
        intensity: f32,
        /// Cosine of the inner cutoff angle (full intensity inside).
        cut_off: f32,
        /// Cosine of the outer cutoff angle (zero intensity outside).
        outer_cut_off: f32,
    },
}

impl Light {
    /// Creates a directional light. The direction is the way the light
    /// points (not where it comes from) and is normalized automatically.
    pub fn directional(direction: Vec3, color: Vec4) -> Self {
        Self::Directional {
            direction: direction.normalize(),
            color,
        }
    }

    /// Creates a point light.
    pub fn point(position: Vec3, color: Vec4, intensity: f32) -> Self {
        Self::Point {
            position,
            color,
            intensity,
        }
    }

    /// Creates a spot light from cutoff angles in radians.
    pub fn spot(
        position: Vec3,
        direction: Vec3,
        color: Vec4,
        inner_angle: f32,
        outer_angle: f32,
        intensity: f32,
    ) -> Self {
        Self::Spot {
            position,
            direction: direction.normalize(),
            color,
            intensity,
            cut_off: inner_angle.cos(),
            outer_cut_off: outer_angle.cos(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn directional_normalizes_direction() {
        let light = Light::directional(Vec3::new(0.0, -2.0, 0.0), Vec4::ONE);
        match light {
            Light::Directional { direction, .. } => {
                assert_relative_eq!(direction.length(), 1.0, epsilon = 1e-6);
                assert_relative_eq!(direction.y, -1.0, epsilon = 1e-6);
            }
            _ => panic!("expected a directional light"),
        }
    }

    #[test]
    fn spot_stores_cutoff_cosines() {
        let light = Light::spot(
            Vec3::ZERO,
            Vec3::NEG_Z,
            Vec4::ONE,
            std::f32::consts::FRAC_PI_6,
            std::f32::consts::FRAC_PI_4,
            10.0,
        );
        match light {
            Light::Spot {
                cut_off,
                outer_cut_off,
                ..
            } => {
                assert_relative_eq!(cut_off, std::f32::consts::FRAC_PI_6.cos());
                assert_relative_eq!(outer_cut_off, std::f32::consts::FRAC_PI_4.cos());
                assert!(cut_off > outer_cut_off);
            }
            _ => panic!("expected a spot light"),
        }
    }
}
