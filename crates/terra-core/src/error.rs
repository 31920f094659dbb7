use thiserror::Error;

/// Contract violations raised by the algebra core.
///
/// These only arise from degenerate inputs; every other operation is total.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum AlgebraError {
    #[error("cannot normalize a zero-magnitude vector or bivector")]
    ZeroMagnitude,
    #[error("cannot invert a rotor with zero norm")]
    ZeroNormRotor,
    #[error("rotor is not unit length (squared norm {norm_squared})")]
    NonUnitRotor { norm_squared: f64 },
}

pub type Result<T> = std::result::Result<T, AlgebraError>;
