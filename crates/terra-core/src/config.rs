use glam::{DVec3, Vec4};

/// Near/far/side planes of the perspective frustum.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrustumConfig {
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
    pub top: f64,
    pub near: f64,
    pub far: f64,
}

impl Default for FrustumConfig {
    fn default() -> Self {
        Self {
            left: -2.0,
            right: 2.0,
            bottom: -1.0,
            top: 1.0,
            near: 1.0,
            far: -1.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
    /// World extents in blocks.
    pub world_x_size: u32,
    pub world_y_size: u32,
    pub world_z_size: u32,
    pub camera_position: DVec3,
    /// Initial camera tilt about the X plane, in radians.
    pub camera_pitch: f64,
    /// Distance covered by one forward/strafe step.
    pub camera_move_step: f64,
    /// Radians per yaw key press.
    pub camera_yaw_step: f64,
    pub light_position: DVec3,
    pub light_color: Vec4,
    pub light_auto_move: bool,
    pub spotlight_position: DVec3,
    pub spotlight_color: Vec4,
    /// Fixed spotlight tilt about the X plane before the Y sweep.
    pub spotlight_tilt: f64,
    /// -1 means no water.
    pub water_level: i32,
    pub frustum: FrustumConfig,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            world_x_size: 32,
            world_y_size: 32,
            world_z_size: 32,
            camera_position: DVec3::new(0.0, 8.0, 10.0),
            camera_pitch: 0.5,
            camera_move_step: 0.5,
            camera_yaw_step: 0.1,
            light_position: DVec3::new(5.0, 3.0, 0.0),
            light_color: Vec4::new(1.0, 1.0, 0.0, 1.0),
            light_auto_move: true,
            spotlight_position: DVec3::new(0.0, 2.0, 0.0),
            spotlight_color: Vec4::new(0.5, 0.5, 1.0, 1.0),
            spotlight_tilt: 0.5,
            water_level: 2,
            frustum: FrustumConfig::default(),
        }
    }
}

impl SceneConfig {
    /// World extents as floats, for building transforms.
    pub fn world_extents(&self) -> DVec3 {
        DVec3::new(
            self.world_x_size as f64,
            self.world_y_size as f64,
            self.world_z_size as f64,
        )
    }
}
