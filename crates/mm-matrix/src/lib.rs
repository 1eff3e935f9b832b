//! `mm-matrix` - Square matrices and two ways of multiplying them.
//!
//! This crate provides:
//! - A row-major `Matrix` of `f64`
//! - A uniform random matrix generator
//! - A `Multiplier` trait with a naive triple-loop implementation and a
//!   row-parallel, cache-friendly implementation built on rayon
//! - The row-vector-by-matrix kernel the optimized multiplier is built from

pub mod error;
pub mod matrix;
pub mod multiply;
pub mod random;

// Re-export primary types at the crate root for convenience.
pub use error::{MatrixError, Result};
pub use matrix::Matrix;
pub use multiply::{
    multiply_row, multiply_row_into, Multiplier, NaiveMultiplier, OptimizedMultiplier,
};
pub use random::random_square_matrix;
