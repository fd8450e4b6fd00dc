use crate::matrix::Matrix;

/// Naive matrix multiplication using i-j-k loop order.
///
/// This is the textbook triple-loop implementation: each output cell
/// accumulates `a[i][k] * b[k][j]` over k. It's slow because the innermost
/// loop reads B column-wise, touching a different row of B on every
/// iteration.
///
/// Use this as the correctness baseline.
///
/// # Panics
///
/// Panics if the column count of `a` doesn't match the row count of `b`.
pub fn multiply_naive(a: &Matrix, b: &Matrix) -> Matrix {
    assert_eq!(
        a[0].len(),
        b.len(),
        "dimension mismatch: A has {} columns but B has {} rows",
        a[0].len(),
        b.len()
    );
    let n = a[0].len();

    let mut result = vec![vec![0i64; n]; n];
    for i in 0..n {
        for j in 0..n {
            for k in 0..n {
                result[i][j] += a[i][k] * b[k][j];
            }
        }
    }
    result
}
