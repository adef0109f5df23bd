//! Dense `f64` matrix arithmetic, built from scratch.
//!
//! A small set of linear-algebra primitives for callers who don't want a full
//! numerical library: elementwise add/subtract, scalar multiply, transpose,
//! multiply, identity, trace, and the cofactor-based determinant and inverse.
//!
//! ## Usage
//!
//! ```
//! use densemat::{Matrix, add, determinant, inverse, multiply};
//!
//! let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
//! let b = Matrix::from_rows(&[[5.0, 6.0], [7.0, 8.0]]).unwrap();
//!
//! assert_eq!(add(&a, &b).unwrap().as_slice(), &[6.0, 8.0, 10.0, 12.0]);
//! assert_eq!(multiply(&a, &b).unwrap().as_slice(), &[19.0, 22.0, 43.0, 50.0]);
//! assert_eq!(determinant(&a).unwrap(), -2.0);
//! assert_eq!(inverse(&a).unwrap().as_slice(), &[-2.0, 1.0, 1.5, -0.5]);
//! ```
//!
//! Every operation borrows its inputs and returns a new matrix or a
//! [`MatrixError`]. Nothing is cached between calls.
//!
//! ## What's inside
//!
//! - Row-major `Matrix` with one allocation per matrix
//! - Naive i-j-k multiply with deterministic accumulation order
//! - Determinant by cofactor expansion along column 0, O(n!)
//! - Inverse via the adjugate, with exact-zero singularity check

pub mod cofactor;
pub mod error;
pub mod matrix;

pub use cofactor::determinant::determinant;
pub use cofactor::inverse::inverse;
pub use error::{MatrixError, Result};
pub use matrix::Matrix;
pub use matrix::diagonal::{identity, trace};
pub use matrix::elementwise::{add, scalar_multiply, subtract};
pub use matrix::naive_ijk::{matmul_naive_ijk, multiply};
pub use matrix::transpose::transpose_matrix as transpose;
