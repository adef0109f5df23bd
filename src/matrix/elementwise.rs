//! Elementwise add, subtract and scalar multiply.
//!
//! All three walk the row-major buffers in lockstep and write into a fresh
//! allocation; the inputs are never touched.

use super::{Matrix, alloc};
use crate::error::{MatrixError, Result};

/// `a + b`, element by element.
///
/// Shapes must match exactly. Two empty matrices of the same shape are accepted
/// and produce an empty result.
///
/// ```
/// use densemat::{Matrix, add};
///
/// let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
/// let b = Matrix::from_rows(&[[5.0, 6.0], [7.0, 8.0]]).unwrap();
/// assert_eq!(add(&a, &b).unwrap().as_slice(), &[6.0, 8.0, 10.0, 12.0]);
/// ```
pub fn add(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    zip_with("add", a, b, |x, y| x + y)
}

/// `a - b`, element by element. Same shape rules as [`add`].
pub fn subtract(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    zip_with("subtract", a, b, |x, y| x - y)
}

/// Every element multiplied by `scalar`.
///
/// Fails with `InvalidArgument` if either dimension is zero.
pub fn scalar_multiply(m: &Matrix, scalar: f64) -> Result<Matrix> {
    let (rows, cols) = m.shape();
    if rows == 0 || cols == 0 {
        return Err(MatrixError::invalid(
            "scalar_multiply",
            format!("dimensions must be positive, got {}x{}", rows, cols),
        ));
    }
    let mut data = alloc(m.as_slice().len())?;
    data.extend(m.as_slice().iter().map(|x| x * scalar));
    Ok(Matrix::from_parts(data, rows, cols))
}

fn zip_with<F>(op: &'static str, a: &Matrix, b: &Matrix, f: F) -> Result<Matrix>
where
    F: Fn(f64, f64) -> f64,
{
    if a.shape() != b.shape() {
        return Err(MatrixError::invalid(
            op,
            format!(
                "shapes differ: {}x{} vs {}x{}",
                a.rows(),
                a.cols(),
                b.rows(),
                b.cols()
            ),
        ));
    }
    let mut data = alloc(a.as_slice().len())?;
    data.extend(a.as_slice().iter().zip(b.as_slice()).map(|(&x, &y)| f(x, y)));
    Ok(Matrix::from_parts(data, a.rows(), a.cols()))
}
