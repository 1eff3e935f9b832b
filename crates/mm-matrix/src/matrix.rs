use std::ops::Index;

use crate::error::{MatrixError, Result};

/// A dense N×N matrix of `f64` values.
///
/// Storage is a single contiguous row-major buffer, so each row occupies
/// `dim` consecutive elements and a column is spread across `dim` rows.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    data: Vec<f64>,
    dim: usize,
}

impl Matrix {
    /// Number of elements in an `n`×`n` matrix, or `InvalidSize` if it overflows.
    pub(crate) fn numel(n: usize) -> Result<usize> {
        n.checked_mul(n)
            .filter(|&len| len <= isize::MAX as usize / std::mem::size_of::<f64>())
            .ok_or(MatrixError::InvalidSize { n })
    }

    /// Create a zero-filled `n`×`n` matrix.
    pub fn zeros(n: usize) -> Result<Self> {
        let len = Self::numel(n)?;
        Ok(Matrix {
            data: vec![0.0; len],
            dim: n,
        })
    }

    /// Create the `n`×`n` identity matrix.
    pub fn identity(n: usize) -> Result<Self> {
        let mut m = Self::zeros(n)?;
        for i in 0..n {
            m.data[i * n + i] = 1.0;
        }
        Ok(m)
    }

    /// Build a matrix from row-major data of length `n * n`.
    pub fn from_vec(data: Vec<f64>, n: usize) -> Result<Self> {
        let len = Self::numel(n)?;
        if data.len() != len {
            return Err(MatrixError::DataLength {
                n,
                expected: len,
                got: data.len(),
            });
        }
        Ok(Matrix { data, dim: n })
    }

    /// Build a matrix from nested rows.
    ///
    /// Every row must have exactly as many entries as there are rows.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let n = rows.len();
        let mut data = Vec::with_capacity(Self::numel(n)?);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != n {
                return Err(MatrixError::NotSquare {
                    row: i,
                    expected: n,
                    got: row.len(),
                });
            }
            data.extend(row);
        }
        Ok(Matrix { data, dim: n })
    }

    /// Number of rows (and columns).
    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn is_empty(&self) -> bool {
        self.dim == 0
    }

    /// Returns row `i` as a contiguous slice.
    ///
    /// # Panics
    /// Panics if `i >= dim()`.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.dim..(i + 1) * self.dim]
    }

    /// Iterates over the rows in order.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[f64]> + '_ {
        // chunks_exact panics on a zero chunk size; an empty matrix has no rows anyway.
        self.data.chunks_exact(self.dim.max(1))
    }

    /// Returns the entry at (`i`, `j`), or `None` if out of range.
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        if i < self.dim && j < self.dim {
            Some(self.data[i * self.dim + j])
        } else {
            None
        }
    }

    /// Returns the underlying row-major data.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }

    /// Copies the matrix into nested rows.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.rows().map(<[f64]>::to_vec).collect()
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (i, j): (usize, usize)) -> &f64 {
        assert!(
            i < self.dim && j < self.dim,
            "index ({i}, {j}) out of range for {0}x{0} matrix",
            self.dim
        );
        &self.data[i * self.dim + j]
    }
}
