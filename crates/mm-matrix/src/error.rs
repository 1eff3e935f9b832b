use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatrixError {
    #[error("invalid size: a {n}x{n} matrix does not fit in memory")]
    InvalidSize { n: usize },
    #[error("dimension mismatch: cannot multiply [{a}x{a}] by [{b}x{b}]")]
    DimensionMismatch { a: usize, b: usize },
    #[error("row length mismatch: row of length {len} against [{dim}x{dim}] matrix")]
    RowLengthMismatch { len: usize, dim: usize },
    #[error("output row length mismatch: expected {expected}, got {got}")]
    OutputLengthMismatch { expected: usize, got: usize },
    #[error("matrix is not square: row {row} has length {got}, expected {expected}")]
    NotSquare {
        row: usize,
        expected: usize,
        got: usize,
    },
    #[error("data length mismatch: [{n}x{n}] matrix needs {expected} values, got {got}")]
    DataLength {
        n: usize,
        expected: usize,
        got: usize,
    },
    #[error("row {row} failed: {source}")]
    RowTask {
        row: usize,
        #[source]
        source: Box<MatrixError>,
    },
    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub type Result<T> = std::result::Result<T, MatrixError>;
