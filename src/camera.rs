//! Perspective camera.
//!
//! # Coordinate System
//!
//! Right-handed, OpenGL-style:
//! - X: positive right
//! - Y: positive up
//! - Z: positive toward the viewer (the camera looks down -Z by default)
//!
//! Orientation is stored as yaw/pitch angles and the basis vectors are
//! derived on demand. The projection maps the view frustum to NDC with z in
//! [-1, 1]; after the perspective divide, smaller z is closer.

use glam::{Mat4, Vec3};

const WORLD_UP: Vec3 = Vec3::Y;

/// A perspective camera with position and yaw/pitch orientation.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    position: Vec3,
    /// Rotation around Y in radians. -90 degrees looks down -Z.
    yaw: f32,
    /// Rotation around X in radians, clamped to avoid gimbal flip.
    pitch: f32,
    fov_y: f32,
    aspect_ratio: f32,
    z_near: f32,
    z_far: f32,
}

impl Camera {
    /// Creates a camera at `position` looking down -Z.
    ///
    /// `fov_y_degrees` is the vertical field of view. The near/far view
    /// bounds default to 0.1 and 5000.
    pub fn new(position: Vec3, fov_y_degrees: f32, aspect_ratio: f32) -> Self {
        Self {
            position,
            yaw: -90.0_f32.to_radians(),
            pitch: 0.0,
            fov_y: fov_y_degrees.to_radians(),
            aspect_ratio,
            z_near: 0.1,
            z_far: 5000.0,
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    pub fn fov_y(&self) -> f32 {
        self.fov_y
    }

    pub fn set_fov_y_degrees(&mut self, fov_y_degrees: f32) {
        self.fov_y = fov_y_degrees.to_radians();
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.aspect_ratio
    }

    /// Updates the aspect ratio (typically on target resize).
    pub fn set_aspect_ratio(&mut self, aspect_ratio: f32) {
        self.aspect_ratio = aspect_ratio;
    }

    pub fn view_bounds(&self) -> (f32, f32) {
        (self.z_near, self.z_far)
    }

    pub fn set_view_bounds(&mut self, z_near: f32, z_far: f32) {
        self.z_near = z_near;
        self.z_far = z_far;
    }

    /// The normalized direction the camera is looking.
    pub fn forward(&self) -> Vec3 {
        Vec3::new(
            self.yaw.cos() * self.pitch.cos(),
            self.pitch.sin(),
            self.yaw.sin() * self.pitch.cos(),
        )
        .normalize()
    }

    pub fn right(&self) -> Vec3 {
        self.forward().cross(WORLD_UP).normalize()
    }

    pub fn up(&self) -> Vec3 {
        self.right().cross(self.forward()).normalize()
    }

    /// Rotates the camera by yaw and pitch deltas in radians. Pitch is
    /// clamped just short of straight up/down.
    pub fn rotate(&mut self, yaw_delta: f32, pitch_delta: f32) {
        const PITCH_LIMIT: f32 = 1.55334; // 89 degrees

        self.yaw = (self.yaw + yaw_delta).rem_euclid(std::f32::consts::TAU);
        self.pitch = (self.pitch + pitch_delta).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Points the camera at a world position.
    pub fn look_at(&mut self, target: Vec3) {
        let direction = target - self.position;
        let horizontal = Vec3::new(direction.x, 0.0, direction.z).length();
        if horizontal > f32::EPSILON {
            self.yaw = direction.z.atan2(direction.x);
        }
        if direction.length_squared() > f32::EPSILON {
            self.pitch = direction.y.atan2(horizontal);
        }
    }

    /// The view matrix.
    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.forward(), self.up())
    }

    /// The perspective projection matrix (GL convention, NDC z in [-1, 1]).
    pub fn projection(&self) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov_y, self.aspect_ratio, self.z_near, self.z_far)
    }

    /// The combined view-projection matrix consumed by the uniform buffer.
    pub fn view_projection(&self) -> Mat4 {
        self.projection() * self.view()
    }
}
