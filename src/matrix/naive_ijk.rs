use super::{Matrix, alloc_zeroed, element_count};
use crate::error::{MatrixError, Result};

/// Naive matrix multiplication using i-j-k loop order.
///
/// This is the textbook triple-loop implementation. Each output cell is
/// accumulated in increasing `p`, so results are reproducible bit for bit
/// against any other plain triple loop.
///
/// # Arguments
///
/// * `a` - Matrix A (m × k), row-major
/// * `b` - Matrix B (k × n), row-major
/// * `c` - Matrix C (m × n), row-major, accumulated into (C += A * B)
/// * `m` - Rows of A and C
/// * `n` - Columns of B and C
/// * `k` - Columns of A, rows of B
pub fn matmul_naive_ijk(a: &[f64], b: &[f64], c: &mut [f64], m: usize, n: usize, k: usize) {
    for i in 0..m {
        for j in 0..n {
            for p in 0..k {
                c[i * n + j] += a[i * k + p] * b[p * n + j];
            }
        }
    }
}

/// Matrix product `A * B`.
///
/// Fails with `DimensionMismatch` when `a.cols() != b.rows()`; that check runs
/// before anything is allocated. Fails with `InvalidArgument` when any
/// dimension is zero.
///
/// ```
/// use densemat::{Matrix, multiply};
///
/// let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
/// let b = Matrix::from_rows(&[[5.0, 6.0], [7.0, 8.0]]).unwrap();
/// let c = multiply(&a, &b).unwrap();
/// assert_eq!(c.as_slice(), &[19.0, 22.0, 43.0, 50.0]);
/// ```
pub fn multiply(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    let (m, k) = a.shape();
    let (k_b, n) = b.shape();
    if k != k_b {
        return Err(MatrixError::DimensionMismatch {
            lhs_cols: k,
            rhs_rows: k_b,
        });
    }
    if m == 0 || k == 0 || n == 0 {
        return Err(MatrixError::invalid(
            "multiply",
            format!("dimensions must be positive, got {}x{} * {}x{}", m, k, k_b, n),
        ));
    }

    let mut c = alloc_zeroed(element_count(m, n)?)?;
    matmul_naive_ijk(a.as_slice(), b.as_slice(), &mut c, m, n, k);
    Ok(Matrix::from_parts(c, m, n))
}
