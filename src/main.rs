//! Timing runner for the cofactor-based determinant and inverse.
//!
//! Usage: `densemat [MAX_ORDER]` (default 8). Set `RUST_LOG=trace` to see
//! per-call logging from the library.

use densemat::{Matrix, MatrixError, determinant, identity, inverse, multiply};
use std::process::ExitCode;
use std::time::Instant;

const DEFAULT_MAX_ORDER: usize = 8;

fn main() -> ExitCode {
    env_logger::init();

    let max_order = match std::env::args().nth(1) {
        None => DEFAULT_MAX_ORDER,
        Some(arg) => match arg.parse::<usize>() {
            Ok(n) if n >= 1 => n,
            _ => {
                eprintln!("expected a positive matrix order, got {:?}", arg);
                return ExitCode::FAILURE;
            }
        },
    };

    match run(max_order) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(max_order: usize) -> Result<(), MatrixError> {
    println!("=== Cofactor Expansion Timing ===\n");
    println!(
        "{:<8} {:>14} {:>14} {:>16}",
        "Order", "det (ms)", "inverse (ms)", "max |A·A⁻¹ - I|"
    );
    println!("{}", "-".repeat(56));

    for n in 1..=max_order {
        let a = diagonally_dominant(n)?;

        let start = Instant::now();
        let det = determinant(&a)?;
        let det_ms = start.elapsed().as_secs_f64() * 1000.0;

        let start = Instant::now();
        let inv = inverse(&a)?;
        let inv_ms = start.elapsed().as_secs_f64() * 1000.0;

        let residual = max_abs_diff(&multiply(&a, &inv)?, &identity(n)?);
        log::debug!("order {} determinant {}", n, det);

        println!(
            "{:<8} {:>14.4} {:>14.4} {:>16.3e}",
            n, det_ms, inv_ms, residual
        );
    }

    println!("\nDeterminant and inverse grow as O(n!) in the order n.");
    Ok(())
}

/// A well-conditioned test matrix: small off-diagonal entries, `n` on the diagonal.
fn diagonally_dominant(n: usize) -> Result<Matrix, MatrixError> {
    let data: Vec<f64> = (0..n * n)
        .map(|idx| {
            let (i, j) = (idx / n, idx % n);
            if i == j {
                n as f64
            } else {
                ((i * 7 + j * 3) % 5) as f64 / 10.0
            }
        })
        .collect();
    Matrix::from_vec(n, n, data)
}

fn max_abs_diff(a: &Matrix, b: &Matrix) -> f64 {
    a.as_slice()
        .iter()
        .zip(b.as_slice())
        .map(|(x, y)| (x - y).abs())
        .fold(0.0, f64::max)
}
