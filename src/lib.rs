//! Square matrix multiplication benchmark, built to compare loop orders.
//!
//! Two implementations of the same N×N integer product:
//!
//! - **Naive**: the textbook i-j-k triple loop. The inner loop walks B
//!   column-wise, so every iteration is a potential cache miss.
//! - **Transpose**: materialize B^T first, then compute every output cell
//!   as a dot product of two rows. Both operands are now read row-major.
//!
//! Both produce identical results (integer arithmetic, same sum of
//! products), so the only interesting difference is wall time, which the
//! [`harness`] measures and prints.
//!
//! ## Usage
//!
//! ```
//! use matbench::{multiply_naive, multiply_transpose};
//!
//! let a = vec![vec![1, 2], vec![3, 4]];
//! let b = vec![vec![5, 6], vec![7, 8]];
//!
//! let c = multiply_naive(&a, &b);
//! assert_eq!(c, multiply_transpose(&a, &b));
//! assert_eq!(c, vec![vec![19, 22], vec![43, 50]]);
//! ```
//!
//! The binary reads `MATRIX_SIZE` from the environment, generates two
//! random matrices and prints each product with its elapsed nanoseconds.

pub mod config;
pub mod generate;
pub mod harness;
pub mod matrix;

pub use config::Config;
pub use generate::generate_random_matrix;
pub use matrix::naive::multiply_naive;
pub use matrix::transpose::{multiply_transpose, transpose};
pub use matrix::Matrix;
