use crate::circuit::CircuitError;

/// Crate-level error type
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("invalid circuit: {0}")]
    Circuit(#[from] CircuitError),

    #[error("amplitude vector length {0} is not a power of two")]
    NotPowerOfTwo(usize),

    #[error("cannot normalize a zero vector")]
    ZeroNorm,

    #[error("circuit has no measurement")]
    NoMeasurement,

    #[error("qubit count {0} is outside the supported range 1..={}", crate::dataset::MAX_QUBITS)]
    QubitCount(usize),

    #[error("fixed-point fraction bits {0} exceed 62")]
    FracBits(u32),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
