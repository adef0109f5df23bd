//! Cofactor expansion: minors, determinant and inverse.
//!
//! Both determinant and inverse recurse over minors. Instead of allocating a
//! fresh minor for every term, a `MinorStack` holds one buffer per
//! recursion level and every sibling call at that level reuses it. Peak memory
//! is the sum of those buffers, allocated once per public call.

pub mod determinant;
pub mod inverse;
pub(crate) mod minor;
