//! __matsolve__ solves square linear systems $Ax = b$ where the matrix
//! carries a caller-declared storage-format hint.  The hint selects a
//! structure-specific backend, so a banded or triangular system is solved by
//! a specialized elimination instead of general dense factorization:
//!
//! * `general` — dense LU with partial pivoting,
//! * `banded` — band extents are detected and the matrix is packed into
//!   compact band storage before an elimination that works on the band alone,
//! * `triangular` — the orientation (lower/upper) is classified and the
//!   system is solved by substitution.
//!
//! The format is a promise about structure, not a checked property of the
//! data; see [`solver::MatrixHandle`] for the exact contract.
//!
//! ```
//! use matsolve::algebra::Matrix;
//! use matsolve::solver::{solve, MatrixFormat, MatrixHandle};
//!
//! let A = Matrix::from(&[
//!     [4.0, 1.0, 0.0], //
//!     [1.0, 4.0, 1.0], //
//!     [0.0, 1.0, 4.0],
//! ]);
//! let a = MatrixHandle::new(A, Some(MatrixFormat::Banded));
//! let x = solve(&a, &[1.0, 2.0, 3.0]).unwrap();
//! # assert!(x.len() == 3);
//! ```

//Rust hates greek characters
#![allow(confusable_idents)]

pub mod algebra;
pub mod solver;
