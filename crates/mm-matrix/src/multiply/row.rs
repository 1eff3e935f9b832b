use crate::error::{MatrixError, Result};
use crate::matrix::Matrix;

/// Computes the product of the row vector `a` and the matrix `b`.
///
/// Returns a vector `c` of length `a.len()` with `c[j] = Σ_k a[k] * b[k][j]`.
/// `b` must have at least `a.len()` rows and columns.
pub fn multiply_row(a: &[f64], b: &Matrix) -> Result<Vec<f64>> {
    let mut c = vec![0.0f64; a.len()];
    multiply_row_into(a, b, &mut c)?;
    Ok(c)
}

/// Accumulates the product of the row vector `a` and the matrix `b` into `out`.
///
/// Loops run k outer, j inner. For a fixed k the inner loop reads row k of
/// `b` front to back and writes `out` front to back, so both streams are
/// sequential in memory. Each `out[j]` still sums its terms in ascending k,
/// the same order as the naive i, j, k loop, so results are bit-identical to
/// it.
///
/// `out` must be zeroed by the caller and have length `a.len()`.
pub fn multiply_row_into(a: &[f64], b: &Matrix, out: &mut [f64]) -> Result<()> {
    let n = a.len();
    if b.dim() < n {
        return Err(MatrixError::RowLengthMismatch { len: n, dim: b.dim() });
    }
    if out.len() != n {
        return Err(MatrixError::OutputLengthMismatch {
            expected: n,
            got: out.len(),
        });
    }

    for (k, &a_k) in a.iter().enumerate() {
        let b_row = &b.row(k)[..n];
        for (c_j, &b_kj) in out.iter_mut().zip(b_row) {
            *c_j += a_k * b_kj;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn b2() -> Matrix {
        Matrix::from_rows(vec![vec![5.0, 6.0], vec![7.0, 8.0]]).unwrap()
    }

    #[test]
    fn test_row_times_matrix() {
        assert_eq!(multiply_row(&[1.0, 2.0], &b2()).unwrap(), vec![19.0, 22.0]);
        assert_eq!(multiply_row(&[3.0, 4.0], &b2()).unwrap(), vec![43.0, 50.0]);
    }

    #[test]
    fn test_empty_row() {
        assert!(multiply_row(&[], &b2()).unwrap().is_empty());
        let empty = Matrix::zeros(0).unwrap();
        assert!(multiply_row(&[], &empty).unwrap().is_empty());
    }

    #[test]
    fn test_row_longer_than_matrix() {
        let err = multiply_row(&[1.0, 2.0, 3.0], &b2()).unwrap_err();
        assert!(matches!(err, MatrixError::RowLengthMismatch { len: 3, dim: 2 }));
    }

    #[test]
    fn test_output_length_checked() {
        let mut out = vec![0.0; 3];
        let err = multiply_row_into(&[1.0, 2.0], &b2(), &mut out).unwrap_err();
        assert!(matches!(
            err,
            MatrixError::OutputLengthMismatch {
                expected: 2,
                got: 3
            }
        ));
    }

    #[test]
    fn test_into_accumulates() {
        let mut out = vec![1.0, 1.0];
        multiply_row_into(&[1.0, 2.0], &b2(), &mut out).unwrap();
        assert_eq!(out, vec![20.0, 23.0]);
    }

    #[test]
    fn test_short_row_reads_leading_block() {
        let b = Matrix::from_rows(vec![
            vec![2.0, 3.0, 9.0],
            vec![4.0, 5.0, 9.0],
            vec![9.0, 9.0, 9.0],
        ])
        .unwrap();
        assert_eq!(multiply_row(&[1.0, 1.0], &b).unwrap(), vec![6.0, 8.0]);
    }
}
