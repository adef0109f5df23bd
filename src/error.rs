//! Error type shared by every matrix operation.

/// Errors returned by matrix construction and arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatrixError {
    /// Malformed input: empty where a non-empty matrix is required, a shape that
    /// disagrees with the data, non-square input to a square-only operation, or
    /// operands whose shapes must be equal but are not.
    #[error("invalid argument to {op}: {reason}")]
    InvalidArgument { op: &'static str, reason: String },

    /// Inner dimensions of a product disagree.
    #[error("dimension mismatch: left operand has {lhs_cols} columns, right operand has {rhs_rows} rows")]
    DimensionMismatch { lhs_cols: usize, rhs_rows: usize },

    /// Inverse requested on a matrix whose determinant is exactly zero.
    #[error("matrix is singular (determinant is 0)")]
    SingularMatrix,

    /// The result buffer could not be allocated.
    #[error("failed to allocate a matrix of {elements} elements")]
    OutOfMemory { elements: usize },
}

impl MatrixError {
    pub(crate) fn invalid(op: &'static str, reason: impl Into<String>) -> Self {
        MatrixError::InvalidArgument {
            op,
            reason: reason.into(),
        }
    }
}

/// Result type for matrix operations.
pub type Result<T> = std::result::Result<T, MatrixError>;
