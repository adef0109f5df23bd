//! The owned `Matrix` type and the primitive operations on it.
//!
//! Storage is a single row-major `Vec<f64>` with the shape carried alongside.
//! Element `(i, j)` lives at `i * cols + j`, the same layout the slice kernels
//! in [`naive_ijk`] and [`transpose`] work on.

pub mod diagonal;
pub mod elementwise;
pub mod naive_ijk;
pub mod transpose;

use std::fmt;
use std::ops::Index;

use crate::error::{MatrixError, Result};

/// A dense, row-major matrix of `f64`.
///
/// The shape is fixed at construction. Every operation in this crate takes
/// matrices by reference and returns a freshly allocated result.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl Matrix {
    /// Wrap a row-major buffer. Fails if `data.len() != rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self> {
        let expected = element_count(rows, cols)?;
        if data.len() != expected {
            return Err(MatrixError::invalid(
                "from_vec",
                format!(
                    "expected {}x{}={} elements, got {}",
                    rows,
                    cols,
                    expected,
                    data.len()
                ),
            ));
        }
        Ok(Self { data, rows, cols })
    }

    /// Build a matrix from a sequence of equally long rows.
    ///
    /// ```
    /// use densemat::Matrix;
    ///
    /// let m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
    /// assert_eq!(m.shape(), (2, 2));
    /// assert_eq!(m[(1, 0)], 3.0);
    /// ```
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self> {
        let cols = rows.first().map_or(0, |r| r.as_ref().len());
        let mut data = alloc(element_count(rows.len(), cols)?)?;
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(MatrixError::invalid(
                    "from_rows",
                    format!("row {} has {} elements, row 0 has {}", i, row.len(), cols),
                ));
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            data,
            rows: rows.len(),
            cols,
        })
    }

    /// A `rows × cols` matrix of zeros.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self> {
        let len = element_count(rows, cols)?;
        Ok(Self {
            data: alloc_zeroed(len)?,
            rows,
            cols,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// True when either dimension is zero.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.rows && col < self.cols {
            Some(self.data[row * self.cols + col])
        } else {
            None
        }
    }

    /// Row `i` as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `i >= rows`.
    pub fn row(&self, i: usize) -> &[f64] {
        assert!(i < self.rows, "row {} out of bounds for {} rows", i, self.rows);
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Deconstruct into `(data, (rows, cols))`.
    pub fn into_vec(self) -> (Vec<f64>, (usize, usize)) {
        (self.data, (self.rows, self.cols))
    }

    /// Elementwise comparison within an absolute tolerance. Shapes must match.
    pub fn approx_eq(&self, other: &Matrix, tol: f64) -> bool {
        self.shape() == other.shape()
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(a, b)| (a - b).abs() <= tol)
    }

    pub fn transpose(&self) -> Result<Matrix> {
        transpose::transpose_matrix(self)
    }

    pub fn trace(&self) -> Result<f64> {
        diagonal::trace(self)
    }

    pub fn determinant(&self) -> Result<f64> {
        crate::cofactor::determinant::determinant(self)
    }

    pub fn inverse(&self) -> Result<Matrix> {
        crate::cofactor::inverse::inverse(self)
    }

    pub(crate) fn from_parts(data: Vec<f64>, rows: usize, cols: usize) -> Self {
        debug_assert_eq!(data.len(), rows * cols);
        Self { data, rows, cols }
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    /// Indexing by `(row, col)`.
    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        assert!(
            row < self.rows && col < self.cols,
            "index ({}, {}) out of bounds for {}x{} matrix",
            row,
            col,
            self.rows,
            self.cols
        );
        &self.data[row * self.cols + col]
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.rows {
            write!(f, "[")?;
            for (j, v) in self.row(i).iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", v)?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}

/// `rows * cols`, treating overflow as an allocation failure.
pub(crate) fn element_count(rows: usize, cols: usize) -> Result<usize> {
    rows.checked_mul(cols)
        .ok_or(MatrixError::OutOfMemory { elements: usize::MAX })
}

/// Empty buffer with room for exactly `len` elements.
pub(crate) fn alloc(len: usize) -> Result<Vec<f64>> {
    let mut data = Vec::new();
    data.try_reserve_exact(len)
        .map_err(|_| MatrixError::OutOfMemory { elements: len })?;
    Ok(data)
}

pub(crate) fn alloc_zeroed(len: usize) -> Result<Vec<f64>> {
    let mut data = alloc(len)?;
    data.resize(len, 0.0);
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_vec_rejects_wrong_length() {
        let err = Matrix::from_vec(2, 3, vec![0.0; 5]).unwrap_err();
        assert!(matches!(err, MatrixError::InvalidArgument { op: "from_vec", .. }));
    }

    #[test]
    fn test_from_rows_rejects_ragged_rows() {
        let rows = vec![vec![1.0, 2.0], vec![3.0]];
        let err = Matrix::from_rows(&rows).unwrap_err();
        assert!(matches!(err, MatrixError::InvalidArgument { op: "from_rows", .. }));
    }

    #[test]
    fn test_from_rows_row_major_layout() {
        let m = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]).unwrap();
        assert_eq!(m.shape(), (2, 3));
        assert_eq!(m.as_slice(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(m.row(1), &[4.0, 5.0, 6.0]);
        assert_eq!(m.get(0, 2), Some(3.0));
        assert_eq!(m.get(2, 0), None);
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_zeros_reports_out_of_memory() {
        // 2^60 f64s overflows isize, so the reservation fails without touching memory.
        let err = Matrix::zeros(1 << 40, 1 << 20).unwrap_err();
        assert_eq!(err, MatrixError::OutOfMemory { elements: 1 << 60 });

        let err = Matrix::zeros(usize::MAX, 2).unwrap_err();
        assert!(matches!(err, MatrixError::OutOfMemory { .. }));
    }

    #[test]
    fn test_display() {
        let m = Matrix::from_rows(&[[1.0, 2.5], [-3.0, 4.0]]).unwrap();
        assert_eq!(m.to_string(), "[1, 2.5]\n[-3, 4]\n");
    }
}
