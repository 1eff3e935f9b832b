use std::sync::Arc;

use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::error::{MatrixError, Result};
use crate::matrix::Matrix;
use crate::multiply::row::multiply_row_into;
use crate::multiply::{check_dims, Multiplier};

/// Row-parallel, cache-friendly multiplication.
///
/// Each row of A is handed to [`multiply_row_into`] as an independent rayon
/// task. A and B are shared read-only; every task owns exactly one disjoint
/// row of the output buffer, so no locking is involved. The call blocks
/// until all rows are done, and row `i` of the result is always the product
/// of row `i` of A with B, whatever order the tasks finish in.
#[derive(Debug, Clone, Default)]
pub struct OptimizedMultiplier {
    pool: Option<Arc<ThreadPool>>,
}

impl OptimizedMultiplier {
    /// Uses rayon's global pool, sized to the available parallelism.
    pub fn new() -> Self {
        OptimizedMultiplier { pool: None }
    }

    /// Runs row tasks on a dedicated pool of `threads` workers.
    pub fn with_threads(threads: usize) -> Result<Self> {
        let pool = ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("mm-row-{i}"))
            .build()?;
        Ok(OptimizedMultiplier {
            pool: Some(Arc::new(pool)),
        })
    }

    /// Number of worker threads row tasks are spread over.
    pub fn threads(&self) -> usize {
        match &self.pool {
            Some(pool) => pool.current_num_threads(),
            None => rayon::current_num_threads(),
        }
    }
}

/// Fans rows of `a` out across the current pool, writing row `i` of the
/// product into the `i`th `n`-wide chunk of `out`.
fn multiply_rows(a: &[f64], b: &Matrix, n: usize, out: &mut [f64]) -> Result<()> {
    out.par_chunks_mut(n)
        .zip(a.par_chunks(n))
        .enumerate()
        .try_for_each(|(row, (c_row, a_row))| {
            multiply_row_into(a_row, b, c_row).map_err(|e| MatrixError::RowTask {
                row,
                source: Box::new(e),
            })
        })
}

impl Multiplier for OptimizedMultiplier {
    fn name(&self) -> &str {
        "optimized"
    }

    fn multiply(&self, a: &Matrix, b: &Matrix) -> Result<Matrix> {
        check_dims(a, b)?;

        let n = a.dim();
        let mut c = vec![0.0f64; Matrix::numel(n)?];
        // par_chunks panics on a zero chunk size.
        if n == 0 {
            return Matrix::from_vec(c, n);
        }

        tracing::debug!(n, threads = self.threads(), "fanning out row tasks");
        match &self.pool {
            Some(pool) => pool.install(|| multiply_rows(a.as_slice(), b, n, &mut c))?,
            None => multiply_rows(a.as_slice(), b, n, &mut c)?,
        }
        Matrix::from_vec(c, n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::multiply::multiply_row;
    use crate::random::random_square_matrix;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_name() {
        assert_eq!(OptimizedMultiplier::new().name(), "optimized");
    }

    #[test]
    fn test_dedicated_pool_threads() {
        let mul = OptimizedMultiplier::with_threads(3).unwrap();
        assert_eq!(mul.threads(), 3);
    }

    #[test]
    fn test_rows_match_row_multiplier() {
        let mut rng = StdRng::seed_from_u64(77);
        let a = random_square_matrix(40, &mut rng).unwrap();
        let b = random_square_matrix(40, &mut rng).unwrap();
        let c = OptimizedMultiplier::with_threads(4)
            .unwrap()
            .multiply(&a, &b)
            .unwrap();
        for (i, a_row) in a.rows().enumerate() {
            assert_eq!(c.row(i), multiply_row(a_row, &b).unwrap().as_slice());
        }
    }

    #[test]
    fn test_many_rows_few_threads() {
        // Far more rows than workers. B is diagonal with distinct entries, so
        // the expected row i is just row i of A scaled column-wise, and a task
        // writing into the wrong slot shows up immediately.
        let n = 999;
        let mut rng = StdRng::seed_from_u64(999);
        let a = random_square_matrix(n, &mut rng).unwrap();
        let mut diag = vec![0.0; n * n];
        for j in 0..n {
            diag[j * n + j] = (j + 1) as f64;
        }
        let b = Matrix::from_vec(diag, n).unwrap();

        let c = OptimizedMultiplier::with_threads(4)
            .unwrap()
            .multiply(&a, &b)
            .unwrap();
        assert_eq!(c.dim(), n);
        for i in 0..n {
            for j in 0..n {
                assert_eq!(c[(i, j)], a[(i, j)] * (j + 1) as f64, "row {i}, col {j}");
            }
        }
    }

    #[test]
    fn test_row_failure_fails_whole_call() {
        let a = Matrix::identity(3).unwrap();
        let b = Matrix::identity(2).unwrap();
        let mut out = vec![0.0; 9];
        let err = multiply_rows(a.as_slice(), &b, 3, &mut out).unwrap_err();
        match err {
            MatrixError::RowTask { source, .. } => {
                assert!(matches!(*source, MatrixError::RowLengthMismatch { len: 3, dim: 2 }));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
