//! Unit sphere approximated by a twice-subdivided icosahedron.
//!
//! Each round splits every triangle into four and pushes the new edge
//! midpoints out onto the sphere. Since every vertex is on the unit sphere,
//! a vertex position is also its outward normal.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use glam::{DVec2, DVec3};
use tracing::{debug, trace};

use crate::algebra::normalize;
use crate::error::Result;

use super::Mesh;

/// Triangle as three positions.
pub type Face = [DVec3; 3];

/// 20 * 4^2 = 320 triangles.
pub const SUBDIVISION_ROUNDS: usize = 2;

const FACE_INDICES: [[usize; 3]; 20] = [
    [1, 0, 2],
    [2, 3, 1],
    [4, 3, 5],
    [6, 3, 4],
    [7, 0, 8],
    [9, 0, 7],
    [10, 4, 11],
    [11, 7, 10],
    [5, 2, 9],
    [9, 11, 5],
    [8, 1, 6],
    [6, 10, 8],
    [5, 3, 2],
    [1, 3, 6],
    [2, 0, 9],
    [8, 0, 1],
    [9, 7, 11],
    [10, 7, 8],
    [11, 4, 5],
    [6, 4, 10],
];

/// The 12 golden-ratio vertices, projected onto the unit sphere.
fn icosahedron_vertices() -> Result<[DVec3; 12]> {
    let phi = (1.0 + 5.0_f64.sqrt()) / 2.0;
    let a = 1.0 / 2.0;
    let b = 1.0 / (2.0 * phi);

    let raw = [
        DVec3::new(0.0, b, -a),
        DVec3::new(b, a, 0.0),
        DVec3::new(-b, a, 0.0),
        DVec3::new(0.0, b, a),
        DVec3::new(0.0, -b, a),
        DVec3::new(-a, 0.0, b),
        DVec3::new(a, 0.0, b),
        DVec3::new(0.0, -b, -a),
        DVec3::new(a, 0.0, -b),
        DVec3::new(-a, 0.0, -b),
        DVec3::new(b, -a, 0.0),
        DVec3::new(-b, -a, 0.0),
    ];

    let mut vertices = [DVec3::ZERO; 12];
    for (out, v) in vertices.iter_mut().zip(raw) {
        *out = normalize(v)?;
    }
    Ok(vertices)
}

/// The 20 base faces before any subdivision.
pub fn icosahedron() -> Result<Vec<Face>> {
    let vertices = icosahedron_vertices()?;
    Ok(FACE_INDICES
        .iter()
        .map(|[i, j, k]| [vertices[*i], vertices[*j], vertices[*k]])
        .collect())
}

fn midpoint(a: DVec3, b: DVec3) -> DVec3 {
    (a + b) / 2.0
}

/// (A, B, C) -> three corner triangles plus the centre triangle, every
/// vertex re-projected onto the unit sphere.
fn subdivide_face(face: &Face) -> Result<[Face; 4]> {
    let [a, b, c] = *face;
    let split = [
        [a, midpoint(a, b), midpoint(a, c)],
        [b, midpoint(b, a), midpoint(b, c)],
        [c, midpoint(c, a), midpoint(c, b)],
        [midpoint(a, b), midpoint(a, c), midpoint(b, c)],
    ];

    let mut out = [[DVec3::ZERO; 3]; 4];
    for (dst, src) in out.iter_mut().zip(split) {
        for (d, s) in dst.iter_mut().zip(src) {
            *d = normalize(s)?;
        }
    }
    Ok(out)
}

/// One subdivision round. Faces are independent, so the `parallel` feature
/// maps them on the rayon pool; output order is the same either way.
pub fn subdivide(faces: &[Face]) -> Result<Vec<Face>> {
    #[cfg(feature = "parallel")]
    let split: Vec<[Face; 4]> = faces
        .par_iter()
        .map(subdivide_face)
        .collect::<Result<Vec<_>>>()?;

    #[cfg(not(feature = "parallel"))]
    let split: Vec<[Face; 4]> = faces
        .iter()
        .map(subdivide_face)
        .collect::<Result<Vec<_>>>()?;

    Ok(split.into_iter().flatten().collect())
}

/// Build the 960-vertex sphere. Texture coordinates are zero-filled and
/// carry no meaning.
pub fn build_sphere() -> Result<Mesh> {
    let mut faces = icosahedron()?;
    for round in 0..SUBDIVISION_ROUNDS {
        faces = subdivide(&faces)?;
        trace!(round, faces = faces.len(), "subdivided sphere");
    }

    let positions: Vec<DVec3> = faces.iter().flatten().copied().collect();
    let mesh = Mesh {
        tex_coords: vec![DVec2::ZERO; positions.len()],
        normals: positions.clone(),
        positions,
    };

    debug!(
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        "built sphere mesh"
    );
    Ok(mesh)
}
