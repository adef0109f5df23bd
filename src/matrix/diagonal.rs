//! Identity construction and trace.

use super::{Matrix, alloc_zeroed, element_count};
use crate::error::{MatrixError, Result};

/// The `n × n` identity matrix. `identity(0)` is the empty 0×0 matrix.
///
/// ```
/// use densemat::identity;
///
/// let i = identity(3).unwrap();
/// assert_eq!(i[(1, 1)], 1.0);
/// assert_eq!(i[(1, 2)], 0.0);
/// assert!(identity(0).unwrap().is_empty());
/// ```
pub fn identity(n: usize) -> Result<Matrix> {
    let mut data = alloc_zeroed(element_count(n, n)?)?;
    data.iter_mut().step_by(n + 1).for_each(|x| *x = 1.0);
    Ok(Matrix::from_parts(data, n, n))
}

/// Sum of the diagonal of a square matrix.
///
/// Fails with `InvalidArgument` on an empty or non-square matrix.
pub fn trace(m: &Matrix) -> Result<f64> {
    let (rows, cols) = m.shape();
    if rows < 1 {
        return Err(MatrixError::invalid("trace", "matrix has no rows"));
    }
    if rows != cols {
        return Err(MatrixError::invalid(
            "trace",
            format!("matrix must be square, got {}x{}", rows, cols),
        ));
    }
    Ok(m.as_slice().iter().step_by(cols + 1).sum())
}
