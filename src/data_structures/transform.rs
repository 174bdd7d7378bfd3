//! Per-draw model transform.
//!
//! A [`Transform`] is rebuilt for every draw call from a scale, three Euler
//! angles in degrees and a translation. Nothing is cached between frames.

use cgmath::{Deg, Matrix4, Vector3};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub scale: Vector3<f32>,
    /// Rotation around the x, y and z axis in degrees.
    pub rotation: Vector3<f32>,
    pub position: Vector3<f32>,
}

impl Transform {
    pub fn new(scale: Vector3<f32>, rotation: Vector3<f32>, position: Vector3<f32>) -> Self {
        Self {
            scale,
            rotation,
            position,
        }
    }

    /// Identity transform (no move, rotate, or scale).
    pub fn identity() -> Self {
        Self {
            scale: Vector3::new(1.0, 1.0, 1.0),
            rotation: Vector3::new(0.0, 0.0, 0.0),
            position: Vector3::new(0.0, 0.0, 0.0),
        }
    }

    pub fn with_scale(mut self, x: f32, y: f32, z: f32) -> Self {
        self.scale = Vector3::new(x, y, z);
        self
    }

    pub fn with_rotation(mut self, x_deg: f32, y_deg: f32, z_deg: f32) -> Self {
        self.rotation = Vector3::new(x_deg, y_deg, z_deg);
        self
    }

    pub fn with_position(mut self, x: f32, y: f32, z: f32) -> Self {
        self.position = Vector3::new(x, y, z);
        self
    }

    /// Model matrix `T * Rz * Ry * Rx * S`.
    ///
    /// Applied right to left, so the scale happens first and the x rotation
    /// before y and z. Changing the order changes the picture.
    pub fn to_matrix(&self) -> Matrix4<f32> {
        Matrix4::from_translation(self.position)
            * Matrix4::from_angle_z(Deg(self.rotation.z))
            * Matrix4::from_angle_y(Deg(self.rotation.y))
            * Matrix4::from_angle_x(Deg(self.rotation.x))
            * Matrix4::from_nonuniform_scale(self.scale.x, self.scale.y, self.scale.z)
    }

    pub fn to_raw(&self) -> [[f32; 4]; 4] {
        self.to_matrix().into()
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}
