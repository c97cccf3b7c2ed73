//! Transform component producing model and normal matrices.
//!
//! A [`Transform`] is position + quaternion rotation + scale. It generates
//! the model matrix consumed by the uniform buffer and the normal matrix
//! the vertex stage needs when the scale is non-uniform.

use glam::{EulerRot, Mat3, Mat4, Quat, Vec3};

/// Computes the normal matrix of a model matrix: the inverse transpose of
/// its upper 3x3. Required to transform normals correctly when the model
/// matrix carries non-uniform scale.
///
/// # Panics
/// Panics if the model matrix is singular — a singular model collapses
/// geometry to zero volume and has no normal transform.
pub fn normal_matrix(model: Mat4) -> Mat3 {
    let linear = Mat3::from_mat4(model);
    let determinant = linear.determinant();
    assert!(
        determinant.abs() > f32::EPSILON,
        "singular model matrix (determinant {determinant}) has no normal matrix"
    );
    linear.inverse().transpose()
}

/// A 3D transform with position, rotation, and scale.
///
/// Mutating methods return `&mut Self` for chaining:
///
/// ```ignore
/// transform
///     .set_position(Vec3::new(5.0, 2.0, 0.0))
///     .set_euler_degrees(0.0, 45.0, 0.0)
///     .set_scale_uniform(2.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    position: Vec3,
    rotation: Quat,
    scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec3) -> &mut Self {
        self.position = position;
        self
    }

    pub fn translate(&mut self, delta: Vec3) -> &mut Self {
        self.position += delta;
        self
    }

    pub fn rotation(&self) -> Quat {
        self.rotation
    }

    pub fn set_rotation(&mut self, rotation: Quat) -> &mut Self {
        self.rotation = rotation;
        self
    }

    /// Sets the rotation from XYZ Euler angles in radians.
    pub fn set_euler_radians(&mut self, x: f32, y: f32, z: f32) -> &mut Self {
        self.rotation = Quat::from_euler(EulerRot::XYZ, x, y, z);
        self
    }

    /// Sets the rotation from XYZ Euler angles in degrees.
    pub fn set_euler_degrees(&mut self, x: f32, y: f32, z: f32) -> &mut Self {
        self.set_euler_radians(x.to_radians(), y.to_radians(), z.to_radians())
    }

    /// Applies an additional rotation on top of the current one.
    pub fn rotate(&mut self, delta: Quat) -> &mut Self {
        self.rotation = (delta * self.rotation).normalize();
        self
    }

    pub fn scale(&self) -> Vec3 {
        self.scale
    }

    pub fn set_scale(&mut self, scale: Vec3) -> &mut Self {
        self.scale = scale;
        self
    }

    pub fn set_scale_uniform(&mut self, s: f32) -> &mut Self {
        self.scale = Vec3::splat(s);
        self
    }

    /// Generates the model matrix: translation * rotation * scale.
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.position)
    }

    /// Generates the normal matrix for this transform.
    pub fn normal_matrix(&self) -> Mat3 {
        normal_matrix(self.matrix())
    }
}
