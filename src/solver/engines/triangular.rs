#![allow(non_snake_case)]

use super::{FactorizationError, SolveEngine};
use crate::algebra::{FloatT, Matrix, MatrixTriangle, ShapedMatrix};

/// Forward / backward substitution for triangular systems.
///
/// The orientation decides which triangle of `A` is read; entries in the
/// opposite triangle are never inspected.
pub(crate) struct TriangularEngine<T> {
    A: Matrix<T>,
    uplo: MatrixTriangle,
    pivot_min: T,
}

impl<T> TriangularEngine<T>
where
    T: FloatT,
{
    pub fn new(A: Matrix<T>, uplo: MatrixTriangle, pivot_min: T) -> Self {
        assert!(A.is_square());
        Self { A, uplo, pivot_min }
    }

    fn diagonal(&self, k: usize) -> Result<T, FactorizationError> {
        let d = self.A[(k, k)];
        if d.abs() <= self.pivot_min {
            return Err(FactorizationError::ZeroPivot);
        }
        Ok(d)
    }
}

impl<T> SolveEngine<T> for TriangularEngine<T>
where
    T: FloatT,
{
    fn solve_in_place(&mut self, b: &mut [T]) -> Result<(), FactorizationError> {
        let n = self.A.nrows();
        assert_eq!(b.len(), n);

        // substitution runs columnwise so the access is contiguous
        match self.uplo {
            MatrixTriangle::Tril => {
                for c in 0..n {
                    b[c] /= self.diagonal(c)?;
                    let bc = b[c];
                    for (r, &l) in self.A.col_slice(c).iter().enumerate().skip(c + 1) {
                        b[r] -= l * bc;
                    }
                }
            }
            MatrixTriangle::Triu => {
                for c in (0..n).rev() {
                    b[c] /= self.diagonal(c)?;
                    let bc = b[c];
                    for (r, &u) in self.A.col_slice(c)[..c].iter().enumerate() {
                        b[r] -= u * bc;
                    }
                }
            }
        }

        Ok(())
    }
}
