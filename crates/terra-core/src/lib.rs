//! Geometric core of the terrain and lighting visualizer.
//!
//! Rotor and matrix algebra, the static cube and sphere meshes, and the
//! scene state that turns both into per-frame transforms.
pub mod algebra;
pub mod camera;
pub mod config;
pub mod error;
pub mod lighting;
pub mod mesh;
pub mod scene;

pub use error::{AlgebraError, Result};
