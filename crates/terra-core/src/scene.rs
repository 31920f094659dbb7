//! Scene state and the transforms it produces each frame.

use glam::{DVec3, Vec4};
use tracing::debug;

use crate::algebra::{
    make_frustum_matrix, make_scale_matrix, make_translation_matrix, matrix_multiply, Matrix,
};
use crate::camera::Camera;
use crate::config::SceneConfig;
use crate::lighting::{Light, Spotlight};

/// Phase offsets of the four falling water drops, in milliseconds.
pub const WATER_DROP_OFFSETS_MS: [f64; 4] = [0.0, 250.0, 500.0, 750.0];

/// Corner signs `(x, z)` matching [`WATER_DROP_OFFSETS_MS`].
const WATER_DROP_CORNERS: [(f64, f64); 4] = [(1.0, 1.0), (-1.0, 1.0), (-1.0, -1.0), (1.0, -1.0)];

/// Water surface height in blocks, clamped to `[-1, max]`. -1 hides it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WaterLevel {
    level: i32,
    max: i32,
}

impl WaterLevel {
    pub fn new(level: i32, world_y_size: u32) -> Self {
        let max = i32::try_from(world_y_size)
            .unwrap_or(i32::MAX)
            .saturating_sub(1)
            .max(-1);
        Self {
            level: level.clamp(-1, max),
            max,
        }
    }

    pub fn level(&self) -> i32 {
        self.level
    }

    pub fn is_visible(&self) -> bool {
        self.level >= 0
    }

    pub fn raise(&mut self) {
        self.level = self.level.saturating_add(1).min(self.max);
    }

    pub fn lower(&mut self) {
        self.level = (self.level - 1).max(-1);
    }
}

/// Everything the renderer needs for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameTransforms {
    pub projection: Matrix,
    pub camera: Matrix,
    pub camera_position: DVec3,
    pub light_position: DVec3,
    pub light_color: Vec4,
    pub light_model: Matrix,
    pub spotlight_position: DVec3,
    pub spotlight_direction: DVec3,
    pub spotlight_color: Vec4,
    pub spotlight_model: Matrix,
    pub water_drops: [Matrix; 4],
    pub ground: Matrix,
    pub sky: Matrix,
}

pub struct Scene {
    pub config: SceneConfig,
    pub camera: Camera,
    pub light: Light,
    pub spotlight: Spotlight,
    pub water: WaterLevel,
}

impl Scene {
    pub fn new(config: SceneConfig) -> Self {
        debug!(
            x = config.world_x_size,
            y = config.world_y_size,
            z = config.world_z_size,
            "creating scene"
        );
        Self {
            camera: Camera::from_config(&config),
            light: Light::from_config(&config),
            spotlight: Spotlight::from_config(&config),
            water: WaterLevel::new(config.water_level, config.world_y_size),
            config,
        }
    }

    pub fn projection_matrix(&self) -> Matrix {
        let f = &self.config.frustum;
        make_frustum_matrix(f.left, f.right, f.bottom, f.top, f.near, f.far)
    }

    /// Advance time-driven state to `time_ms` and collect the frame's
    /// transforms.
    pub fn frame(&mut self, time_ms: f64) -> FrameTransforms {
        self.light.update(time_ms);

        FrameTransforms {
            projection: self.projection_matrix(),
            camera: self.camera.view_matrix(),
            camera_position: self.camera.position,
            light_position: self.light.position,
            light_color: self.light.color,
            light_model: self.light.model_matrix(),
            spotlight_position: self.spotlight.position,
            spotlight_direction: self.spotlight.direction(time_ms),
            spotlight_color: self.spotlight.color,
            spotlight_model: self.spotlight.model_matrix(time_ms),
            water_drops: self.water_drop_matrices(time_ms),
            ground: self.ground_matrix(),
            sky: self.sky_matrix(),
        }
    }

    /// Model matrix of the block at grid cell `(x, y, z)`. Blocks are two
    /// units wide and the grid is centred on the origin.
    pub fn block_matrix(&self, x: u32, y: u32, z: u32) -> Matrix {
        let e = self.config.world_extents();
        make_translation_matrix(
            (x as f64 * 2.0) - e.x,
            (y as f64 * 2.0) - e.y,
            (z as f64 * 2.0) - e.z,
        )
    }

    /// Water surface block at column `(x, z)`, sunk slightly below the grid.
    /// `None` while the water is hidden.
    pub fn water_block_matrix(&self, x: u32, z: u32) -> Option<Matrix> {
        if !self.water.is_visible() {
            return None;
        }
        let block = self.block_matrix(x, self.water.level() as u32, z);
        Some(matrix_multiply(make_translation_matrix(0.0, -0.4, 0.0), block))
    }

    /// Four spheres falling from `+H` to `-H` once per second, staggered by
    /// a quarter second, one above each corner of the world.
    pub fn water_drop_matrices(&self, time_ms: f64) -> [Matrix; 4] {
        let e = self.config.world_extents();
        let mut out = [Matrix::IDENTITY; 4];
        for ((m, offset), (sx, sz)) in out
            .iter_mut()
            .zip(WATER_DROP_OFFSETS_MS)
            .zip(WATER_DROP_CORNERS)
        {
            let phase = (time_ms + offset).rem_euclid(1000.0) / 1000.0;
            let y = (phase * -2.0 + 1.0) * e.y;
            *m = matrix_multiply(
                make_translation_matrix(sx * e.x / 2.0, y, sz * e.z / 2.0),
                make_scale_matrix(2.0, 2.0, 2.0),
            );
        }
        out
    }

    /// Thin slab just above the bottom of the world.
    pub fn ground_matrix(&self) -> Matrix {
        let e = self.config.world_extents();
        matrix_multiply(
            make_translation_matrix(0.0, -e.y + 0.2, 0.0),
            make_scale_matrix(e.x, 0.05, e.z),
        )
    }

    /// Sky box enclosing the whole world.
    pub fn sky_matrix(&self) -> Matrix {
        let e = self.config.world_extents();
        matrix_multiply(
            make_translation_matrix(0.0, -0.5, 0.0),
            make_scale_matrix(e.x, e.y, e.z),
        )
    }
}
