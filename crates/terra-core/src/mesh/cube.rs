//! Flat-shaded cube built by rotating one canonical face six times.

use std::f64::consts::TAU;

use glam::{DVec2, DVec3};
use tracing::debug;

use crate::algebra::{
    make_rotation_rotor, make_scale_matrix, make_translation_matrix, matrix_mul_vec,
    matrix_multiply, rotor_to_matrix_checked, Bivector, Rotor,
};
use crate::error::Result;

use super::Mesh;

/// Two triangles covering the unit square at z = 1. The x/y of each
/// vertex doubles as its texture coordinate.
pub const UNIT_FACE: [DVec3; 6] = [
    DVec3::new(0.0, 0.0, 1.0),
    DVec3::new(1.0, 1.0, 1.0),
    DVec3::new(1.0, 0.0, 1.0),
    DVec3::new(0.0, 0.0, 1.0),
    DVec3::new(0.0, 1.0, 1.0),
    DVec3::new(1.0, 1.0, 1.0),
];

/// Outward normal of the unrotated (front) face.
pub const FACE_NORMAL: DVec3 = DVec3::Z;

pub const VERTICES_PER_FACE: usize = UNIT_FACE.len();

/// Face orientations: front, bottom, back, top, right, left.
pub fn face_rotors() -> [Rotor; 6] {
    [
        make_rotation_rotor(TAU * 0.0, Bivector::YZ),
        make_rotation_rotor(TAU * (1.0 / 4.0), Bivector::YZ),
        make_rotation_rotor(TAU * (1.0 / 2.0), Bivector::YZ),
        make_rotation_rotor(TAU * (3.0 / 4.0), Bivector::YZ),
        make_rotation_rotor(TAU * (1.0 / 4.0), Bivector::ZX),
        make_rotation_rotor(TAU * (-1.0 / 4.0), Bivector::ZX),
    ]
}

/// Build the 36-vertex cube with half-extent 1 centred on the origin.
pub fn build_cube() -> Result<Mesh> {
    // unit square -> [-1, 1]^2 on the z = 1 plane
    let center = matrix_multiply(
        make_translation_matrix(-1.0, -1.0, 0.0),
        make_scale_matrix(2.0, 2.0, 1.0),
    );
    let face: Vec<DVec3> = UNIT_FACE
        .iter()
        .map(|v| matrix_mul_vec(center, *v))
        .collect();

    let rotors = face_rotors();
    let capacity = rotors.len() * VERTICES_PER_FACE;
    let mut mesh = Mesh {
        positions: Vec::with_capacity(capacity),
        tex_coords: Vec::with_capacity(capacity),
        normals: Vec::with_capacity(capacity),
    };

    for rotor in rotors {
        let rotation = rotor_to_matrix_checked(rotor)?;
        mesh.positions
            .extend(face.iter().map(|v| matrix_mul_vec(rotation, *v)));
        mesh.tex_coords
            .extend(UNIT_FACE.iter().map(|v| DVec2::new(v.x, v.y)));
        let normal = matrix_mul_vec(rotation, FACE_NORMAL);
        mesh.normals
            .extend(std::iter::repeat(normal).take(VERTICES_PER_FACE));
    }

    debug!(
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        "built cube mesh"
    );
    Ok(mesh)
}
