//! Static geometry: a flat-shaded unit cube and a subdivided unit sphere.
//!
//! Both meshes are pure functions of nothing. The cached accessors build
//! each one once per process and hand out shared references afterwards.
pub mod cube;
pub mod sphere;

use std::sync::OnceLock;

use glam::{DVec2, DVec3};

use crate::error::Result;

pub use cube::build_cube;
pub use sphere::{build_sphere, icosahedron, subdivide, Face, SUBDIVISION_ROUNDS};

/// Interleaved vertex for GPU upload: 32 bytes.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GpuVertex {
    pub position: [f32; 3],
    pub tex_coord: [f32; 2],
    pub normal: [f32; 3],
}

/// Triangle list as three parallel per-vertex sequences.
///
/// Every three consecutive vertices form one triangle.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mesh {
    pub positions: Vec<DVec3>,
    pub tex_coords: Vec<DVec2>,
    pub normals: Vec<DVec3>,
}

/// One triangle's worth of vertex data, borrowed from a [`Mesh`].
#[derive(Clone, Copy, Debug)]
pub struct Triangle<'a> {
    pub positions: &'a [DVec3],
    pub tex_coords: &'a [DVec2],
    pub normals: &'a [DVec3],
}

impl Mesh {
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn triangles(&self) -> impl Iterator<Item = Triangle<'_>> {
        self.positions
            .chunks_exact(3)
            .zip(self.tex_coords.chunks_exact(3))
            .zip(self.normals.chunks_exact(3))
            .map(|((positions, tex_coords), normals)| Triangle {
                positions,
                tex_coords,
                normals,
            })
    }

    /// Positions as `x, y, z` floats per vertex.
    pub fn position_buffer(&self) -> Vec<f32> {
        self.positions
            .iter()
            .flat_map(|p| p.as_vec3().to_array())
            .collect()
    }

    /// Texture coordinates as `u, v` floats per vertex.
    pub fn tex_coord_buffer(&self) -> Vec<f32> {
        self.tex_coords
            .iter()
            .flat_map(|t| t.as_vec2().to_array())
            .collect()
    }

    /// Normals as `x, y, z` floats per vertex.
    pub fn normal_buffer(&self) -> Vec<f32> {
        self.normals
            .iter()
            .flat_map(|n| n.as_vec3().to_array())
            .collect()
    }

    pub fn interleaved(&self) -> Vec<GpuVertex> {
        self.positions
            .iter()
            .zip(&self.tex_coords)
            .zip(&self.normals)
            .map(|((p, t), n)| GpuVertex {
                position: p.as_vec3().to_array(),
                tex_coord: t.as_vec2().to_array(),
                normal: n.as_vec3().to_array(),
            })
            .collect()
    }
}

static CUBE: OnceLock<Mesh> = OnceLock::new();
static SPHERE: OnceLock<Mesh> = OnceLock::new();

/// Shared cube mesh, built on first use.
pub fn cube() -> Result<&'static Mesh> {
    cached(&CUBE, build_cube)
}

/// Shared sphere mesh, built on first use.
pub fn sphere() -> Result<&'static Mesh> {
    cached(&SPHERE, build_sphere)
}

fn cached(cell: &'static OnceLock<Mesh>, build: fn() -> Result<Mesh>) -> Result<&'static Mesh> {
    if let Some(mesh) = cell.get() {
        return Ok(mesh);
    }
    let mesh = build()?;
    // A concurrent caller may have won the race; both built identical data.
    Ok(cell.get_or_init(|| mesh))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gpu_vertex_is_32_bytes() {
        assert_eq!(std::mem::size_of::<GpuVertex>(), 32);
    }

    #[test]
    fn test_cached_meshes_are_shared() {
        let a = cube().unwrap();
        let b = cube().unwrap();
        assert!(std::ptr::eq(a, b));
        assert!(std::ptr::eq(sphere().unwrap(), sphere().unwrap()));
    }
}
