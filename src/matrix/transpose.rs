use super::{Matrix, alloc_zeroed};
use crate::error::{MatrixError, Result};

/// Transpose a row-major buffer: dst = src^T
///
/// Converts from row-major (rows × cols) to row-major (cols × rows).
/// After transpose, what was column j of src becomes row j of dst.
///
/// # Arguments
///
/// * `src` - Source matrix (rows × cols), row-major
/// * `dst` - Destination matrix (cols × rows), row-major
/// * `rows` - Number of rows in src
/// * `cols` - Number of columns in src
///
/// # Example
///
/// ```
/// use densemat::matrix::transpose::transpose;
///
/// let src = vec![1.0, 2.0, 3.0,   // 2×3 matrix
///                4.0, 5.0, 6.0];
/// let mut dst = vec![0.0; 6];      // will be 3×2
///
/// transpose(&src, &mut dst, 2, 3);
///
/// assert_eq!(dst, vec![1.0, 4.0,   // 3×2 matrix
///                      2.0, 5.0,
///                      3.0, 6.0]);
/// ```
pub fn transpose(src: &[f64], dst: &mut [f64], rows: usize, cols: usize) {
    for i in 0..rows {
        for j in 0..cols {
            dst[j * rows + i] = src[i * cols + j];
        }
    }
}

/// New `cols × rows` matrix with `result[j][i] = m[i][j]`.
///
/// Fails with `InvalidArgument` if either dimension is zero.
///
/// ```
/// use densemat::{Matrix, transpose};
///
/// let m = Matrix::from_rows(&[[1.0, 2.0, 3.0]]).unwrap();
/// let t = transpose(&m).unwrap();
/// assert_eq!(t.shape(), (3, 1));
/// assert_eq!(t.as_slice(), &[1.0, 2.0, 3.0]);
/// ```
pub fn transpose_matrix(m: &Matrix) -> Result<Matrix> {
    let (rows, cols) = m.shape();
    if rows == 0 || cols == 0 {
        return Err(MatrixError::invalid(
            "transpose",
            format!("dimensions must be positive, got {}x{}", rows, cols),
        ));
    }
    let mut dst = alloc_zeroed(rows * cols)?;
    transpose(m.as_slice(), &mut dst, rows, cols);
    Ok(Matrix::from_parts(dst, cols, rows))
}
