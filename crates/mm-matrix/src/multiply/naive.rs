use crate::error::Result;
use crate::matrix::Matrix;
use crate::multiply::{check_dims, Multiplier};

/// Textbook triple-loop multiplication.
///
/// Loops run in i, j, k order with k innermost, so the inner loop walks down
/// a column of B: every step jumps a full row ahead in memory. This is the
/// slow, cache-hostile baseline.
#[derive(Debug, Clone, Default)]
pub struct NaiveMultiplier;

impl NaiveMultiplier {
    pub fn new() -> Self {
        NaiveMultiplier
    }
}

impl Multiplier for NaiveMultiplier {
    fn name(&self) -> &str {
        "naive"
    }

    fn multiply(&self, a: &Matrix, b: &Matrix) -> Result<Matrix> {
        check_dims(a, b)?;

        let n = a.dim();
        let stride = b.dim();
        let a = a.as_slice();
        let b = b.as_slice();

        let mut c = vec![0.0f64; Matrix::numel(n)?];
        for i in 0..n {
            for j in 0..n {
                for k in 0..n {
                    c[i * n + j] += a[i * n + k] * b[k * stride + j];
                }
            }
        }
        Matrix::from_vec(c, n)
    }
}
