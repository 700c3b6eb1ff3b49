use crate::engine::MatmulEngine;
use crate::error::{EngineError, Result};

/// A dense matrix of `i32` elements.
///
/// Holds contiguous, row-major data with (rows, cols) dimensions.
/// Multiplication is dispatched to a [`MatmulEngine`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    data: Vec<i32>,
    rows: usize,
    cols: usize,
}

impl Matrix {
    /// Create a matrix from row-major data.
    ///
    /// # Panics
    /// Panics if `data.len() != rows * cols`.
    pub fn new(data: Vec<i32>, rows: usize, cols: usize) -> Self {
        assert_eq!(
            data.len(),
            rows * cols,
            "data length {} does not match {}x{}",
            data.len(),
            rows,
            cols
        );
        Matrix { data, rows, cols }
    }

    /// Create a zero-filled matrix.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Matrix {
            data: vec![0; rows * cols],
            rows,
            cols,
        }
    }

    /// Create an n x n identity matrix.
    pub fn identity(n: usize) -> Self {
        let mut data = vec![0; n * n];
        for i in 0..n {
            data[i * n + i] = 1;
        }
        Matrix {
            data,
            rows: n,
            cols: n,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the underlying row-major data.
    pub fn data(&self) -> &[i32] {
        &self.data
    }

    /// Element at (row, col).
    ///
    /// # Panics
    /// Panics if the indices are out of bounds.
    pub fn get(&self, row: usize, col: usize) -> i32 {
        assert!(row < self.rows && col < self.cols, "index out of bounds");
        self.data[row * self.cols + col]
    }

    /// Matrix multiplication using the given engine.
    ///
    /// self is [m, k], other is [k, n], result is [m, n].
    pub fn matmul(&self, other: &Matrix, engine: &dyn MatmulEngine) -> Result<Matrix> {
        if self.cols != other.rows {
            return Err(EngineError::DimensionMismatch {
                m: self.rows,
                k: self.cols,
                k2: other.rows,
                n: other.cols,
            });
        }
        let data = engine.multiply(&self.data, &other.data, self.rows, self.cols, other.cols)?;
        Ok(Matrix::new(data, self.rows, other.cols))
    }
}
