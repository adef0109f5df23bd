use super::minor::{MinorStack, write_minor};
use crate::error::{MatrixError, Result};
use crate::matrix::Matrix;

/// Determinant by cofactor expansion along the first column.
///
/// 1×1 and 2×2 are closed form. Larger orders expand as
/// `Σ_i (-1)^i · m[i][0] · det(minor(m, i, 0))`, which costs O(n!) in the
/// order n. Fails with `InvalidArgument` on an empty or non-square matrix.
///
/// ```
/// use densemat::{Matrix, determinant};
///
/// let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
/// assert_eq!(determinant(&a).unwrap(), -2.0);
/// ```
pub fn determinant(m: &Matrix) -> Result<f64> {
    let n = check_square("determinant", m)?;
    log::trace!("determinant of {}x{} matrix", n, n);

    let mut stack = MinorStack::for_order(n)?;
    Ok(expand(m.as_slice(), n, stack.levels_mut()))
}

/// Determinant of the order-`n` row-major block `a`.
///
/// `scratch` must come from a [`MinorStack`] of order at least `n`, positioned
/// so that `scratch[0]` holds `(n-1)²` elements.
pub(crate) fn expand(a: &[f64], n: usize, scratch: &mut [Vec<f64>]) -> f64 {
    match n {
        1 => a[0],
        2 => a[0] * a[3] - a[1] * a[2],
        _ => {
            let (minor, deeper) = scratch.split_at_mut(1);
            let minor = &mut minor[0];

            let mut det = 0.0;
            let mut sign = 1.0;
            for i in 0..n {
                write_minor(a, n, n, i, 0, minor);
                let minor_det = expand(minor, n - 1, deeper);
                det += sign * a[i * n] * minor_det;
                sign = -sign;
            }
            det
        }
    }
}

/// Order of a non-empty square matrix.
pub(crate) fn check_square(op: &'static str, m: &Matrix) -> Result<usize> {
    let (rows, cols) = m.shape();
    if rows == 0 || cols == 0 {
        return Err(MatrixError::invalid(op, "matrix is empty"));
    }
    if rows != cols {
        return Err(MatrixError::invalid(
            op,
            format!("matrix must be square, got {}x{}", rows, cols),
        ));
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_matches_rule_of_sarrus() {
        #[rustfmt::skip]
        let a = [
            2.0, -3.0,  1.0,
            2.0,  0.0, -1.0,
            1.0,  4.0,  5.0,
        ];
        let sarrus = a[0] * a[4] * a[8] + a[1] * a[5] * a[6] + a[2] * a[3] * a[7]
            - a[2] * a[4] * a[6]
            - a[0] * a[5] * a[7]
            - a[1] * a[3] * a[8];

        let mut stack = MinorStack::for_order(3).unwrap();
        let det = expand(&a, 3, stack.levels_mut());
        assert_eq!(det, 49.0);
        assert_eq!(det, sarrus);
    }

    #[test]
    fn test_scratch_reuse_across_siblings() {
        // Every sibling overwrites the same level buffer; a stale value would
        // corrupt the 4×4 result.
        #[rustfmt::skip]
        let a = [
            1.0, 0.0, 2.0, -1.0,
            3.0, 0.0, 0.0,  5.0,
            2.0, 1.0, 4.0, -3.0,
            1.0, 0.0, 5.0,  0.0,
        ];
        let mut stack = MinorStack::for_order(4).unwrap();
        assert_eq!(expand(&a, 4, stack.levels_mut()), 30.0);
    }

    #[test]
    fn test_check_square() {
        let m = Matrix::zeros(2, 3).unwrap();
        assert!(matches!(
            check_square("determinant", &m),
            Err(MatrixError::InvalidArgument { op: "determinant", .. })
        ));
        let empty = Matrix::zeros(0, 0).unwrap();
        assert!(check_square("inverse", &empty).is_err());
        assert_eq!(check_square("inverse", &Matrix::zeros(3, 3).unwrap()), Ok(3));
    }
}
