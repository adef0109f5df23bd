use super::determinant::{check_square, expand};
use super::minor::{MinorStack, write_minor};
use crate::error::{MatrixError, Result};
use crate::matrix::{Matrix, alloc_zeroed, transpose::transpose_matrix};

/// Inverse via the adjugate: transpose of the cofactor matrix divided by the
/// determinant.
///
/// Fails with `InvalidArgument` on an empty or non-square matrix and with
/// `SingularMatrix` when the determinant is exactly `0.0`. There is no
/// tolerance: a nearly singular matrix is inverted, with whatever precision
/// loss that implies.
///
/// ```
/// use densemat::{Matrix, inverse};
///
/// let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
/// let inv = inverse(&a).unwrap();
/// assert_eq!(inv.as_slice(), &[-2.0, 1.0, 1.5, -0.5]);
/// ```
pub fn inverse(m: &Matrix) -> Result<Matrix> {
    let n = check_square("inverse", m)?;
    log::trace!("inverse of {}x{} matrix", n, n);

    let a = m.as_slice();
    let mut stack = MinorStack::for_order(n)?;
    let levels = stack.levels_mut();

    let det = expand(a, n, levels);
    if det == 0.0 {
        log::debug!("inverse rejected: {}x{} matrix is singular", n, n);
        return Err(MatrixError::SingularMatrix);
    }

    let mut cofactors = alloc_zeroed(n * n)?;
    if n == 1 {
        // The minor of a 1×1 matrix is empty, with determinant 1.
        cofactors[0] = 1.0 / det;
    } else {
        let (minor, deeper) = levels.split_at_mut(1);
        let minor = &mut minor[0];
        for i in 0..n {
            for j in 0..n {
                write_minor(a, n, n, i, j, minor);
                let minor_det = expand(minor, n - 1, deeper);
                let sign = if (i + j) % 2 == 0 { 1.0 } else { -1.0 };
                cofactors[i * n + j] = sign * minor_det / det;
            }
        }
    }

    transpose_matrix(&Matrix::from_parts(cofactors, n, n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inverse_1x1() {
        let m = Matrix::from_rows(&[[4.0]]).unwrap();
        assert_eq!(inverse(&m).unwrap().as_slice(), &[0.25]);
    }

    #[test]
    fn test_inverse_3x3_exact() {
        // det = 1, so the adjugate is the inverse and every entry is an integer.
        let m = Matrix::from_rows(&[[1.0, 2.0, 3.0], [0.0, 1.0, 4.0], [5.0, 6.0, 0.0]]).unwrap();
        let inv = inverse(&m).unwrap();
        let expected =
            Matrix::from_rows(&[[-24.0, 18.0, 5.0], [20.0, -15.0, -4.0], [-5.0, 4.0, 1.0]])
                .unwrap();
        assert_eq!(inv, expected);
    }

    #[test]
    fn test_singular_is_rejected() {
        let m = Matrix::from_rows(&[[1.0, 2.0], [2.0, 4.0]]).unwrap();
        assert_eq!(inverse(&m), Err(MatrixError::SingularMatrix));

        let zero = Matrix::from_rows(&[[0.0]]).unwrap();
        assert_eq!(inverse(&zero), Err(MatrixError::SingularMatrix));
    }
}
