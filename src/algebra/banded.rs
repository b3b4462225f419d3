#![allow(non_snake_case)]

use crate::algebra::{FloatT, Matrix, ShapedMatrix};

/// Square banded matrix in compact band storage.
///
/// `packed` has `kl + ku + 1` rows and `n` columns.  Row 0 holds the highest
/// super-diagonal and row `kl + ku` the lowest sub-diagonal, with
///
/// ```text
/// packed[(ku + r - c, c)] = A[(r, c)]    for max(0, c-ku) <= r <= min(n-1, c+kl)
/// ```
///
/// and zeros in the unused corner cells.  This is the standard layout
/// consumed by banded elimination routines.
#[derive(Debug, Clone, PartialEq)]
pub struct BandedMatrix<T = f64> {
    /// number of nonzero sub-diagonals below the main diagonal
    pub kl: usize,
    /// number of nonzero super-diagonals above the main diagonal
    pub ku: usize,
    /// compact band storage, `(kl + ku + 1) x n`
    pub packed: Matrix<T>,
}

impl<T> BandedMatrix<T>
where
    T: FloatT,
{
    /// Detects the band extents of a square matrix and packs it into
    /// compact storage.
    ///
    /// Detection probes only the corner cells of each candidate band
    /// offset, sweeping from the far corners of the matrix toward the
    /// diagonal on both sides; the first offset with a nonzero corner
    /// cell fixes the bandwidth.  The caller must guarantee that `A` is
    /// genuinely banded, with every nonzero diagonal contiguous to the
    /// main diagonal.  For inputs without that property the detected
    /// extents are unspecified.
    ///
    /// # Panics
    /// Panics if `A` is not square.
    pub fn from_dense(A: &Matrix<T>) -> Self {
        assert!(A.is_square());
        let n = A.nrows();

        let kl = lower_bandwidth(A);
        let ku = upper_bandwidth(A);

        let mut packed = Matrix::<T>::zeros((kl + ku + 1, n));
        for c in 0..n {
            let first = c.saturating_sub(ku);
            let last = usize::min(n - 1, c + kl);
            for r in first..=last {
                packed[(ku + r - c, c)] = A[(r, c)];
            }
        }

        Self { kl, ku, packed }
    }

    /// `(kl, ku)` band extents
    pub fn bandwidths(&self) -> (usize, usize) {
        (self.kl, self.ku)
    }

    /// dimension of the (square) matrix held in packed form
    pub fn order(&self) -> usize {
        self.packed.ncols()
    }
}

// The candidate offset i covers the sub-diagonal at distance n-i from the
// main diagonal; its i cells are (n-i+j, j) for j in 0..i.  Sweeping i
// upward visits diagonals from the bottom-left corner inward, so the first
// nonzero cell fixes the lower bandwidth.  An all-zero sweep means the band
// is the main diagonal alone.
fn lower_bandwidth<T: FloatT>(A: &Matrix<T>) -> usize {
    let n = A.nrows();
    for i in 1..n {
        for j in 0..i {
            if A[(n - i + j, j)] != T::zero() {
                return n - i;
            }
        }
    }
    0
}

// mirror of lower_bandwidth over the super-diagonals
fn upper_bandwidth<T: FloatT>(A: &Matrix<T>) -> usize {
    let n = A.nrows();
    for i in 1..n {
        for j in 0..i {
            if A[(j, n - i + j)] != T::zero() {
                return n - i;
            }
        }
    }
    0
}
