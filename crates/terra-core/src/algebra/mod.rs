//! Vectors, bivectors, rotors and 4x4 matrices.
//!
//! Every operation returns a fresh value; nothing here holds state.
pub mod matrix;
pub mod rotor;
pub mod vector;

pub use matrix::{
    make_frustum_matrix, make_scale_matrix, make_translation_matrix, matrix_list_multiply,
    matrix_mul_vec, matrix_multiply, Matrix, IDENTITY_MATRIX,
};
pub use rotor::{
    invert_rotor, make_rotation_rotor, rotor_multiply, rotor_to_matrix, rotor_to_matrix_checked,
    Rotor, UNIT_TOLERANCE,
};
pub use vector::{normalize, scaled_norm, Bivector, Magnitude, Vector};
