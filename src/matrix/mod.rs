//! Matrix representation and formatting.
//!
//! Matrices are square, row-major, and stored as a vector of row vectors.
//! The multipliers never mutate their inputs; every product is a freshly
//! allocated matrix.

pub mod naive;
pub mod transpose;

use std::io;

/// A square N×N integer matrix: N rows of N elements each.
pub type Matrix = Vec<Vec<i64>>;

/// Write a matrix in the benchmark's report format.
///
/// Each row prints as `[v0\tv1\t...\t]` — a tab after every value,
/// including the last, before the closing bracket. The rows are followed
/// by a `NxN` dimension line and a blank line:
///
/// ```text
/// [1	2	]
/// [3	4	]
/// 2x2
///
/// ```
///
/// Golden-output tests downstream diff this byte for byte, so the
/// trailing tab and trailing blank line are load-bearing.
pub fn write_matrix<W: io::Write>(out: &mut W, matrix: &Matrix) -> io::Result<()> {
    let n = matrix.len();
    for row in matrix {
        write!(out, "[")?;
        for value in row {
            write!(out, "{value}\t")?;
        }
        writeln!(out, "]")?;
    }
    writeln!(out, "{n}x{n}")?;
    writeln!(out)
}
