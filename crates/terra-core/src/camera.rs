use glam::DVec3;
use tracing::warn;

use crate::algebra::{
    invert_rotor, make_rotation_rotor, make_translation_matrix, matrix_list_multiply,
    matrix_mul_vec, normalize, rotor_multiply, rotor_to_matrix, Bivector, Matrix, Rotor,
};
use crate::config::SceneConfig;
use crate::error::Result;

/// Free-flying camera: a position plus a rotor orientation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub position: DVec3,
    pub orientation: Rotor,
    pub move_step: f64,
}

impl Camera {
    pub fn new(position: DVec3, orientation: Rotor, move_step: f64) -> Self {
        Self {
            position,
            orientation,
            move_step,
        }
    }

    pub fn from_config(config: &SceneConfig) -> Self {
        Self::new(
            config.camera_position,
            make_rotation_rotor(config.camera_pitch, Bivector::YZ),
            config.camera_move_step,
        )
    }

    /// Rotate by a pointer drag of `(dx, dy)` in normalized screen units
    /// (positive y up). The drag length is the angle; the rotation plane is
    /// `(dy, -dx, 0)`. A zero-length drag does nothing.
    pub fn drag(&mut self, dx: f64, dy: f64) -> Result<()> {
        let length_sq = dx * dx + dy * dy;
        if length_sq.is_nan() || length_sq <= 0.0 {
            return Ok(());
        }
        let plane = normalize(Bivector::new(dy, -dx, 0.0))?;
        self.rotate(make_rotation_rotor(length_sq.sqrt(), plane))
    }

    /// Turn about the vertical axis.
    pub fn yaw(&mut self, radians: f64) -> Result<()> {
        self.rotate(make_rotation_rotor(radians, Bivector::ZX))
    }

    /// Apply `rotation` after the current orientation.
    pub fn rotate(&mut self, rotation: Rotor) -> Result<()> {
        self.orientation = rotor_multiply(rotation, self.orientation);
        if !self.orientation.is_unit() {
            warn!(
                norm_squared = self.orientation.norm_squared(),
                "camera rotor drifted from unit length, renormalizing"
            );
            self.orientation = self.orientation.normalized()?;
        }
        Ok(())
    }

    /// World-space direction the camera looks along.
    pub fn forward(&self) -> Result<DVec3> {
        self.to_world(DVec3::NEG_Z)
    }

    /// World-space direction to the camera's right.
    pub fn right(&self) -> Result<DVec3> {
        self.to_world(DVec3::X)
    }

    fn to_world(&self, view_dir: DVec3) -> Result<DVec3> {
        let inverse = rotor_to_matrix(invert_rotor(self.orientation)?);
        Ok(matrix_mul_vec(inverse, view_dir))
    }

    /// Move `forward_steps` along [`Camera::forward`] and `right_steps`
    /// along [`Camera::right`], each step being `move_step` long.
    pub fn move_by(&mut self, forward_steps: f64, right_steps: f64) -> Result<()> {
        let forward = self.forward()?;
        let right = self.right()?;
        self.position += forward * (forward_steps * self.move_step);
        self.position += right * (right_steps * self.move_step);
        Ok(())
    }

    /// World-to-view transform: translate the camera to the origin, then
    /// rotate.
    pub fn view_matrix(&self) -> Matrix {
        let p = self.position;
        matrix_list_multiply(&[
            rotor_to_matrix(self.orientation),
            make_translation_matrix(-p.x, -p.y, -p.z),
        ])
    }
}
