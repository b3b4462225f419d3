use crate::algebra::{FloatT, Matrix, MatrixTriangle};

impl<T> Matrix<T>
where
    T: FloatT,
{
    /// true if the strictly lower triangle holds no nonzero entries
    pub fn is_triu(&self) -> bool {
        for c in 0..self.n {
            for &v in &self.col_slice(c)[(c + 1).min(self.m)..] {
                if v != T::zero() {
                    return false;
                }
            }
        }
        true
    }

    /// Orientation of a matrix declared triangular.
    ///
    /// Returns [`Tril`](MatrixTriangle::Tril) if the matrix equals its own
    /// lower-triangular projection to within `tol`, i.e. every strictly
    /// upper entry has magnitude at most `tol`.  Otherwise returns
    /// [`Triu`](MatrixTriangle::Triu) unconditionally: the strictly lower
    /// triangle is never inspected, so a matrix of neither shape is still
    /// reported as upper triangular.
    pub fn triangle_orientation(&self, tol: T) -> MatrixTriangle {
        for c in 1..self.n {
            for &v in &self.col_slice(c)[..c.min(self.m)] {
                if v.abs() > tol {
                    return MatrixTriangle::Triu;
                }
            }
        }
        MatrixTriangle::Tril
    }
}
