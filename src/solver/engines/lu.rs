#![allow(non_snake_case)]

use super::{FactorizationError, SolveEngine};
use crate::algebra::{FloatT, Matrix, ShapedMatrix};

/// Dense LU factorization with partial pivoting.
///
/// Factors are computed once at construction; the unit lower triangular
/// factor is stored below the diagonal of `LU` and the upper factor on and
/// above it.
pub(crate) struct DenseLUEngine<T> {
    /// combined factors
    LU: Matrix<T>,
    /// row interchanged with row k at elimination step k
    piv: Vec<usize>,
}

impl<T> DenseLUEngine<T>
where
    T: FloatT,
{
    pub fn factor(A: &Matrix<T>, pivot_min: T) -> Result<Self, FactorizationError> {
        assert!(A.is_square());
        let n = A.nrows();
        let mut LU = A.clone();
        let mut piv = vec![0; n];

        for k in 0..n {
            // largest magnitude entry in the remainder of column k
            let mut pmax = LU[(k, k)].abs();
            let mut prow = k;
            for r in (k + 1)..n {
                let v = LU[(r, k)].abs();
                if v > pmax {
                    pmax = v;
                    prow = r;
                }
            }
            if pmax < pivot_min {
                return Err(FactorizationError::Singular);
            }

            piv[k] = prow;
            if prow != k {
                LU.swap_rows(k, prow);
            }

            let pivot = LU[(k, k)];
            for r in (k + 1)..n {
                LU[(r, k)] /= pivot;
                let m = LU[(r, k)];
                for c in (k + 1)..n {
                    let u = LU[(k, c)];
                    LU[(r, c)] -= m * u;
                }
            }
        }

        Ok(Self { LU, piv })
    }
}

impl<T> SolveEngine<T> for DenseLUEngine<T>
where
    T: FloatT,
{
    fn solve_in_place(&mut self, b: &mut [T]) -> Result<(), FactorizationError> {
        let n = self.LU.nrows();
        assert_eq!(b.len(), n);

        // replay the row interchanges on the right-hand side
        for (k, &p) in self.piv.iter().enumerate() {
            if p != k {
                b.swap(k, p);
            }
        }

        // forward substitution with the unit lower factor
        for c in 0..n {
            let bc = b[c];
            for (r, &l) in self.LU.col_slice(c).iter().enumerate().skip(c + 1) {
                b[r] -= l * bc;
            }
        }

        // back substitution with the upper factor
        for c in (0..n).rev() {
            b[c] /= self.LU[(c, c)];
            let bc = b[c];
            for (r, &u) in self.LU.col_slice(c)[..c].iter().enumerate() {
                b[r] -= u * bc;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebra::VectorMath;

    #[test]
    fn test_lu_solve() {
        // row interchanges required at both elimination steps
        let A = Matrix::from(&[
            [2., 1., 1.], //
            [4., 3., 3.], //
            [8., 7., 9.],
        ]);

        let mut eng = DenseLUEngine::<f64>::factor(&A, 1e-30).unwrap();
        let mut x = vec![4., 10., 24.];
        eng.solve_in_place(&mut x).unwrap();

        assert!(x.norm_inf_diff(&[1., 1., 1.]) < 1e-14);
    }

    #[test]
    fn test_lu_singular() {
        let A = Matrix::from(&[
            [1., 0., 2.], //
            [2., 0., 1.], //
            [3., 0., 3.],
        ]);

        assert!(matches!(
            DenseLUEngine::<f64>::factor(&A, 1e-30),
            Err(FactorizationError::Singular)
        ));
    }
}
