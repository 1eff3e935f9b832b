use rand::distributions::{Distribution, Standard};
use rand::Rng;

use crate::error::Result;
use crate::matrix::Matrix;

/// Returns an `n`×`n` matrix whose entries are independent samples from
/// the uniform distribution over `[0, 1)`.
///
/// The generator is borrowed mutably for the duration of the call, so it is
/// only ever driven from the calling thread. Pass a seeded `StdRng` for a
/// reproducible matrix.
pub fn random_square_matrix<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Result<Matrix> {
    let len = Matrix::numel(n)?;
    // `Standard` for f64 samples uniformly from the half-open interval [0, 1).
    let data: Vec<f64> = Standard.sample_iter(&mut *rng).take(len).collect();
    tracing::trace!(n, "generated random matrix");
    Matrix::from_vec(data, n)
}
