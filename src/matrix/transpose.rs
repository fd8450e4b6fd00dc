use crate::matrix::Matrix;

/// Transpose a matrix: rows become columns.
///
/// Produces a fresh matrix `t` with `t[j][k] == m[k][j]`.
///
/// # Example
///
/// ```
/// use matbench::transpose;
///
/// let m = vec![vec![1, 2], vec![3, 4]];
/// assert_eq!(transpose(&m), vec![vec![1, 3], vec![2, 4]]);
/// ```
pub fn transpose(matrix: &Matrix) -> Matrix {
    let rows = matrix.len();
    let cols = matrix[0].len();

    let mut result = vec![vec![0i64; rows]; cols];
    for i in 0..rows {
        for j in 0..cols {
            result[j][i] = matrix[i][j];
        }
    }
    result
}

/// Matrix multiplication through a pre-transposed right operand.
///
/// Same contract and same result as [`multiply_naive`], computed
/// differently: B is transposed up front, so each output cell becomes a
/// dot product of row i of A and row j of B^T. The inner reduction then
/// reads both operands row-major, which is kinder to the cache than the
/// naive variant's column-wise walk of B.
///
/// All arithmetic is integer, so the two variants agree exactly despite
/// summing in different orders.
///
/// [`multiply_naive`]: crate::matrix::naive::multiply_naive
///
/// # Panics
///
/// Panics if the column count of `a` doesn't match the row count of `b`.
pub fn multiply_transpose(a: &Matrix, b: &Matrix) -> Matrix {
    assert_eq!(
        a[0].len(),
        b.len(),
        "dimension mismatch: A has {} columns but B has {} rows",
        a[0].len(),
        b.len()
    );
    let n = a[0].len();

    let b_t = transpose(b);
    (0..n)
        .map(|i| {
            (0..n)
                .map(|j| (0..n).map(|k| a[i][k] * b_t[j][k]).sum())
                .collect()
        })
        .collect()
}
