#![allow(non_snake_case)]

use super::{FactorizationError, SolveEngine};
use crate::algebra::{BandedMatrix, FloatT};

/// Gaussian elimination over compact band storage.
///
/// Elimination runs without row interchanges, so it cannot fill in outside
/// the band and the packed layout is preserved throughout.  A pivot at or
/// below the configured threshold is reported as an error rather than
/// recovered by pivoting.
pub(crate) struct BandedEngine<T> {
    band: BandedMatrix<T>,
    pivot_min: T,
}

impl<T> BandedEngine<T>
where
    T: FloatT,
{
    pub fn new(band: BandedMatrix<T>, pivot_min: T) -> Self {
        Self { band, pivot_min }
    }
}

impl<T> SolveEngine<T> for BandedEngine<T>
where
    T: FloatT,
{
    fn solve_in_place(&mut self, b: &mut [T]) -> Result<(), FactorizationError> {
        let (kl, ku) = self.band.bandwidths();
        let n = self.band.order();
        assert_eq!(b.len(), n);

        // eliminate on a working copy so the engine can be reused
        let mut W = self.band.packed.clone();

        // entry (r, c) of the full matrix lives at W[(ku + r - c, c)]
        for k in 0..n {
            let pivot = W[(ku, k)];
            if pivot.abs() <= self.pivot_min {
                return Err(FactorizationError::ZeroPivot);
            }

            let rlast = usize::min(n - 1, k + kl);
            let clast = usize::min(n - 1, k + ku);
            for r in (k + 1)..=rlast {
                let m = W[(ku + r - k, k)] / pivot;
                for c in (k + 1)..=clast {
                    let u = W[(ku + k - c, c)];
                    W[(ku + r - c, c)] -= m * u;
                }
                b[r] -= m * b[k];
            }
        }

        // back substitution on the eliminated band
        for k in (0..n).rev() {
            let clast = usize::min(n - 1, k + ku);
            let mut s = b[k];
            for c in (k + 1)..=clast {
                s -= W[(ku + k - c, c)] * b[c];
            }
            b[k] = s / W[(ku, k)];
        }

        Ok(())
    }
}
