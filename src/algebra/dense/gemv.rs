#![allow(non_snake_case)]

use crate::algebra::{FloatT, Matrix, ShapedMatrix, VectorMath};
use std::iter::zip;

/// Matrix-vector product for matrices of [`FloatT`](crate::algebra::FloatT)
pub trait MultiplyGEMV {
    type T;
    /// BLAS-like general matrix-vector multiply.  Produces `y = αA*x + βy`
    fn gemv(&self, x: &[Self::T], y: &mut [Self::T], α: Self::T, β: Self::T);
}

impl<T> MultiplyGEMV for Matrix<T>
where
    T: FloatT,
{
    type T = T;
    fn gemv(&self, x: &[T], y: &mut [T], α: T, β: T) {
        let (m, n) = self.size();
        assert!(n == x.len() && m == y.len());

        y.scale(β);

        // accumulate columnwise to keep the access contiguous
        for (col, &xj) in zip(0..n, x) {
            let αxj = α * xj;
            for (yi, &v) in zip(&mut *y, self.col_slice(col)) {
                *yi += αxj * v;
            }
        }
    }
}

#[test]
fn test_gemv() {
    let (m, n) = (2, 3);
    let a = vec![1.0, 4.0, 2.0, 5.0, 3.0, 6.0];
    let A = Matrix::new_from_slice((m, n), &a);

    let x = vec![1., 2., 3.];
    let mut y = vec![-1., -2.];
    A.gemv(&x, &mut y, 2.0, 3.0);
    assert!(y == [25.0, 58.0]);
}
