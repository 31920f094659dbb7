use glam::DVec3;
use terra_core::mesh::{self, build_cube, build_sphere, icosahedron, subdivide, SUBDIVISION_ROUNDS};

fn approx_axis(n: DVec3) -> Option<DVec3> {
    [
        DVec3::X,
        DVec3::NEG_X,
        DVec3::Y,
        DVec3::NEG_Y,
        DVec3::Z,
        DVec3::NEG_Z,
    ]
    .into_iter()
    .find(|axis| (n - *axis).length() < 1e-9)
}

#[test]
fn test_cube_has_36_vertices() {
    let cube = build_cube().unwrap();
    assert_eq!(cube.vertex_count(), 36);
    assert_eq!(cube.triangle_count(), 12);
    assert_eq!(cube.tex_coords.len(), 36);
    assert_eq!(cube.normals.len(), 36);
    assert_eq!(cube.position_buffer().len(), 36 * 3);
    assert_eq!(cube.tex_coord_buffer().len(), 36 * 2);
    assert_eq!(cube.normal_buffer().len(), 36 * 3);
}

#[test]
fn test_cube_normals_are_six_distinct_axes() {
    let cube = build_cube().unwrap();
    let mut seen: Vec<DVec3> = Vec::new();
    for face in cube.normals.chunks_exact(6) {
        let axis = approx_axis(face[0])
            .unwrap_or_else(|| panic!("cube normal {:?} is not an axis direction", face[0]));
        // flat shading: one normal for the whole face
        assert!(face.iter().all(|n| *n == face[0]));
        assert!(!seen.contains(&axis), "axis {:?} used by two faces", axis);
        seen.push(axis);
    }
    assert_eq!(seen.len(), 6);
}

#[test]
fn test_cube_face_order() {
    let cube = build_cube().unwrap();
    let expected = [
        DVec3::Z,
        DVec3::NEG_Y,
        DVec3::NEG_Z,
        DVec3::Y,
        DVec3::X,
        DVec3::NEG_X,
    ];
    for (face, axis) in cube.normals.chunks_exact(6).zip(expected) {
        assert!((face[0] - axis).length() < 1e-9, "{:?} != {:?}", face[0], axis);
    }
}

#[test]
fn test_cube_vertices_lie_on_their_face() {
    let cube = build_cube().unwrap();
    for (p, n) in cube.positions.iter().zip(&cube.normals) {
        assert!((p.dot(*n) - 1.0).abs() < 1e-9, "vertex {:?} not on face {:?}", p, n);
        assert!(p.abs().max_element() < 1.0 + 1e-9, "vertex {:?} outside cube", p);
    }
}

#[test]
fn test_cube_tex_coords_span_unit_square() {
    let cube = build_cube().unwrap();
    for t in &cube.tex_coords {
        assert!(t.x == 0.0 || t.x == 1.0);
        assert!(t.y == 0.0 || t.y == 1.0);
    }
    // every face reuses the canonical texture coordinates
    let first = &cube.tex_coords[..6];
    for face in cube.tex_coords.chunks_exact(6) {
        assert_eq!(face, first);
    }
}

#[test]
fn test_cube_winding_is_consistent() {
    let cube = build_cube().unwrap();
    let signs: Vec<f64> = cube
        .triangles()
        .map(|tri| {
            let p = tri.positions;
            (p[1] - p[0]).cross(p[2] - p[0]).dot(tri.normals[0]).signum()
        })
        .collect();
    assert_eq!(signs.len(), 12);
    assert!(signs.iter().all(|s| *s == signs[0]));
}

#[test]
fn test_icosahedron_base() {
    let faces = icosahedron().unwrap();
    assert_eq!(faces.len(), 20);
    let mut unique: Vec<DVec3> = Vec::new();
    for v in faces.iter().flatten() {
        assert!((v.length() - 1.0).abs() < 1e-12);
        if !unique.iter().any(|u| (*u - *v).length() < 1e-12) {
            unique.push(*v);
        }
    }
    assert_eq!(unique.len(), 12);
}

#[test]
fn test_subdivide_quadruples_faces() {
    let base = icosahedron().unwrap();
    let once = subdivide(&base).unwrap();
    assert_eq!(once.len(), 80);
    let twice = subdivide(&once).unwrap();
    assert_eq!(twice.len(), 320);
}

#[test]
fn test_sphere_has_320_triangles() {
    assert_eq!(SUBDIVISION_ROUNDS, 2);
    let sphere = build_sphere().unwrap();
    assert_eq!(sphere.triangle_count(), 320);
    assert_eq!(sphere.vertex_count(), 960);
    assert_eq!(sphere.position_buffer().len(), 960 * 3);
    assert_eq!(sphere.tex_coord_buffer().len(), 960 * 2);
}

#[test]
fn test_sphere_vertices_on_unit_sphere() {
    let sphere = build_sphere().unwrap();
    for p in &sphere.positions {
        assert!((p.length() - 1.0).abs() < 1e-9, "vertex {:?} has length {}", p, p.length());
    }
}

#[test]
fn test_sphere_normals_are_positions() {
    let sphere = build_sphere().unwrap();
    assert_eq!(sphere.normals, sphere.positions);
}

#[test]
fn test_sphere_has_no_degenerate_triangles() {
    let sphere = build_sphere().unwrap();
    for tri in sphere.triangles() {
        let p = tri.positions;
        let area = (p[1] - p[0]).cross(p[2] - p[0]).length() / 2.0;
        assert!(area > 1e-4, "degenerate sphere triangle {:?}", p);
    }
}

#[test]
fn test_generation_is_deterministic() {
    assert_eq!(build_cube().unwrap(), build_cube().unwrap());
    assert_eq!(build_sphere().unwrap(), build_sphere().unwrap());
    assert_eq!(mesh::cube().unwrap(), &build_cube().unwrap());
    assert_eq!(mesh::sphere().unwrap(), &build_sphere().unwrap());
}

#[test]
fn test_interleaved_matches_flat_buffers() {
    let cube = mesh::cube().unwrap();
    let interleaved = cube.interleaved();
    let positions = cube.position_buffer();
    let tex = cube.tex_coord_buffer();
    let normals = cube.normal_buffer();
    assert_eq!(interleaved.len(), 36);
    for (i, v) in interleaved.iter().enumerate() {
        assert_eq!(&v.position[..], &positions[i * 3..i * 3 + 3]);
        assert_eq!(&v.tex_coord[..], &tex[i * 2..i * 2 + 2]);
        assert_eq!(&v.normal[..], &normals[i * 3..i * 3 + 3]);
    }
    let bytes: &[u8] = bytemuck::cast_slice(&interleaved);
    assert_eq!(bytes.len(), 36 * 32);
}
