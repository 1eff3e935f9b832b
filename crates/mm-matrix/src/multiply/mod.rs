pub mod naive;
pub mod optimized;
pub mod row;

use std::fmt::Debug;

use crate::error::{MatrixError, Result};
use crate::matrix::Matrix;

pub use naive::NaiveMultiplier;
pub use optimized::OptimizedMultiplier;
pub use row::{multiply_row, multiply_row_into};

/// A matrix multiplication algorithm.
///
/// Implementations compute C = A × B for square A and B, where B may be
/// larger than A (only its leading `a.dim()`×`a.dim()` block is read). The
/// result is always a freshly allocated `a.dim()`×`a.dim()` matrix.
pub trait Multiplier: Send + Sync + Debug {
    /// Returns the name of this algorithm (e.g., "naive", "optimized").
    fn name(&self) -> &str;

    /// Computes the product of `a` and `b`.
    fn multiply(&self, a: &Matrix, b: &Matrix) -> Result<Matrix>;
}

/// Rejects a B that is too small to multiply against A.
pub(crate) fn check_dims(a: &Matrix, b: &Matrix) -> Result<()> {
    if b.dim() < a.dim() {
        return Err(MatrixError::DimensionMismatch {
            a: a.dim(),
            b: b.dim(),
        });
    }
    Ok(())
}
