//! Timing harness: generate inputs once, time each variant, print.
//!
//! Purely observational — the harness records elapsed nanoseconds per
//! variant and makes no claim about which one should win.

use std::io;
use std::time::Instant;

use rand::Rng;

use crate::config::Config;
use crate::generate::generate_random_matrix;
use crate::matrix::naive::multiply_naive;
use crate::matrix::transpose::multiply_transpose;
use crate::matrix::{write_matrix, Matrix};

/// Time a single multiplication, returning the product and elapsed
/// nanoseconds from monotonic-clock snapshots taken immediately around
/// the call.
fn timed<F>(a: &Matrix, b: &Matrix, multiply: F) -> (Matrix, u128)
where
    F: Fn(&Matrix, &Matrix) -> Matrix,
{
    let start = Instant::now();
    let result = multiply(a, b);
    (result, start.elapsed().as_nanos())
}

/// Run the full benchmark: generate A and B, multiply with both variants,
/// and write the report to `out`.
///
/// The report format is fixed (golden-output compatible): each matrix
/// section in order — `Matrix A:`, `Matrix B:`, the two `Matrix C`
/// sections — with an `Elapsed time` line and blank line after each
/// product.
pub fn run<R: Rng, W: io::Write>(config: &Config, rng: &mut R, out: &mut W) -> io::Result<()> {
    let n = config.matrix_size;

    let a = generate_random_matrix(n, rng);
    writeln!(out, "Matrix A:")?;
    write_matrix(out, &a)?;

    let b = generate_random_matrix(n, rng);
    writeln!(out, "Matrix B:")?;
    write_matrix(out, &b)?;

    let (c_naive, naive_ns) = timed(&a, &b, multiply_naive);
    tracing::debug!(n, elapsed_ns = naive_ns, "basic multiplication done");
    writeln!(out, "Matrix C - Basic Calculation:")?;
    write_matrix(out, &c_naive)?;
    writeln!(out, "Elapsed time - Basic Calc: {naive_ns} ns")?;
    writeln!(out)?;

    let (c_transpose, transpose_ns) = timed(&a, &b, multiply_transpose);
    tracing::debug!(n, elapsed_ns = transpose_ns, "transpose multiplication done");
    writeln!(out, "Matrix C - Transpose Calculation:")?;
    write_matrix(out, &c_transpose)?;
    writeln!(out, "Elapsed time - Transpose Calc: {transpose_ns} ns")?;
    writeln!(out)
}
