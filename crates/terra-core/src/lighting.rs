//! Point light orbiting the world and a sweeping spotlight.

use glam::{DVec3, Vec4};

use crate::algebra::{
    make_rotation_rotor, make_scale_matrix, make_translation_matrix, matrix_list_multiply,
    matrix_mul_vec, matrix_multiply, rotor_multiply, rotor_to_matrix, Bivector, Matrix, Rotor,
};
use crate::config::SceneConfig;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Light {
    pub position: DVec3,
    pub color: Vec4,
    /// When set, [`Light::update`] moves the light around its orbit.
    pub auto_move: bool,
    pub orbit_radius_x: f64,
    pub orbit_radius_z: f64,
}

impl Light {
    pub fn from_config(config: &SceneConfig) -> Self {
        let extents = config.world_extents();
        Self {
            position: config.light_position,
            color: config.light_color,
            auto_move: config.light_auto_move,
            orbit_radius_x: extents.x / 2.0,
            orbit_radius_z: extents.z / 2.0,
        }
    }

    /// Advance the orbit to `time_ms`. Height is left alone.
    pub fn update(&mut self, time_ms: f64) {
        if !self.auto_move {
            return;
        }
        let t = time_ms / 1000.0;
        self.position.x = self.orbit_radius_x * t.cos();
        self.position.z = self.orbit_radius_z * t.sin();
    }

    /// Place the light by hand. Stops the orbit.
    pub fn set_position(&mut self, position: DVec3) {
        self.auto_move = false;
        self.position = position;
    }

    /// Change only the height; the orbit keeps running.
    pub fn set_height(&mut self, y: f64) {
        self.position.y = y;
    }

    pub fn model_matrix(&self) -> Matrix {
        let p = self.position;
        matrix_multiply(
            make_translation_matrix(p.x, p.y, p.z),
            make_scale_matrix(2.0, 2.0, 2.0),
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spotlight {
    pub position: DVec3,
    pub color: Vec4,
    pub tilt: f64,
}

impl Spotlight {
    pub fn from_config(config: &SceneConfig) -> Self {
        Self {
            position: config.spotlight_position,
            color: config.spotlight_color,
            tilt: config.spotlight_tilt,
        }
    }

    /// Tilt about X, then sweep about Y at one radian per second.
    pub fn orientation(&self, time_ms: f64) -> Rotor {
        rotor_multiply(
            make_rotation_rotor(time_ms / 1000.0, Bivector::ZX),
            make_rotation_rotor(self.tilt, Bivector::YZ),
        )
    }

    /// Beam direction: +Z carried by the current orientation.
    pub fn direction(&self, time_ms: f64) -> DVec3 {
        matrix_mul_vec(rotor_to_matrix(self.orientation(time_ms)), DVec3::Z)
    }

    /// The spotlight housing: a cube stretched along its beam.
    pub fn model_matrix(&self, time_ms: f64) -> Matrix {
        let p = self.position;
        matrix_list_multiply(&[
            make_translation_matrix(p.x, p.y, p.z),
            rotor_to_matrix(self.orientation(time_ms)),
            make_scale_matrix(1.0, 1.0, 4.0),
        ])
    }
}
