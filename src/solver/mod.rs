#![allow(non_snake_case)]

//! Format-tagged matrix handles and the structured solve entry points.
//!
//! A [`MatrixHandle`] pairs dense matrix data with a [`MatrixFormat`] hint.
//! [`solve`] reads the hint and routes the system to the matching backend:
//! the general path factors the matrix with partially pivoted LU, the
//! banded path first detects band extents and packs the matrix into
//! compact band storage, and the triangular path first classifies the
//! orientation and then substitutes.  All derived structure (band extents,
//! orientation, factors) is computed per call and discarded; nothing is
//! cached on the handle, so handles can be shared freely across threads.

use crate::algebra::{BandedMatrix, FloatT, ShapedMatrix};
use thiserror::Error;

pub(crate) mod engines;
mod format;
mod handle;
mod settings;

pub use engines::FactorizationError;
pub use format::{FormatError, MatrixFormat};
pub use handle::MatrixHandle;
pub use settings::{SolveSettings, SolveSettingsBuilder};

use engines::{BandedEngine, DenseLUEngine, SolveEngine, StructuredEngine, TriangularEngine};

/// Error type returned by [`solve`] and [`solve_with`].
#[derive(Error, Debug)]
pub enum SolveError {
    /// the matrix is not square
    #[error("matrix must be square, got {m}x{n}")]
    NotSquare {
        /// number of rows
        m: usize,
        /// number of columns
        n: usize,
    },
    /// the right-hand side length does not match the matrix order
    #[error("right-hand side has length {got}, expected {expected}")]
    RhsLength {
        /// the matrix order
        expected: usize,
        /// the supplied length
        got: usize,
    },
    /// failure reported by the backend solver, propagated unmodified
    #[error(transparent)]
    Factorization(#[from] FactorizationError),
}

/// Solves `A x = b` with the backend selected by the handle's format,
/// using default [`SolveSettings`].
pub fn solve<T>(a: &MatrixHandle<T>, b: &[T]) -> Result<Vec<T>, SolveError>
where
    T: FloatT,
{
    solve_with(a, b, &SolveSettings::default())
}

/// As [`solve`], with explicit settings.
///
/// Returns a freshly allocated solution vector; `b` is not modified.
pub fn solve_with<T>(
    a: &MatrixHandle<T>,
    b: &[T],
    settings: &SolveSettings<T>,
) -> Result<Vec<T>, SolveError>
where
    T: FloatT,
{
    let A = a.data();
    if !A.is_square() {
        return Err(SolveError::NotSquare {
            m: A.nrows(),
            n: A.ncols(),
        });
    }
    if b.len() != A.nrows() {
        return Err(SolveError::RhsLength {
            expected: A.nrows(),
            got: b.len(),
        });
    }

    let mut engine = make_engine(a, settings)?;
    let mut x = b.to_vec();
    engine.solve_in_place(&mut x)?;
    Ok(x)
}

// Engine selection is an exhaustive match over the closed format set, so
// a format without a backend cannot compile.
fn make_engine<T>(
    a: &MatrixHandle<T>,
    settings: &SolveSettings<T>,
) -> Result<StructuredEngine<T>, FactorizationError>
where
    T: FloatT,
{
    let A = a.data();
    let engine = match a.format() {
        MatrixFormat::General => DenseLUEngine::factor(A, settings.pivot_min)?.into(),
        MatrixFormat::Banded => {
            BandedEngine::new(BandedMatrix::from_dense(A), settings.pivot_min).into()
        }
        MatrixFormat::Triangular => {
            let uplo = A.triangle_orientation(settings.triangle_tol);
            TriangularEngine::new(A.clone(), uplo, settings.pivot_min).into()
        }
    };
    Ok(engine)
}

//configure tests of internals
#[cfg(test)]
mod tests;
