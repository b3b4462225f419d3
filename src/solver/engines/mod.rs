use crate::algebra::FloatT;
use enum_dispatch::*;
use thiserror::Error;

mod banded;
pub(crate) use banded::*;
mod lu;
pub(crate) use lu::*;
mod triangular;
pub(crate) use triangular::*;

/// Error type returned by the structured backend solvers.
#[derive(Error, Debug)]
pub enum FactorizationError {
    /// Pivoted elimination found no pivot of usable magnitude
    #[error("matrix is singular or nearly singular")]
    Singular,
    /// Unpivoted elimination or substitution hit a zero pivot
    #[error("matrix factorization produced a zero pivot")]
    ZeroPivot,
}

// Every backend consumes the right-hand side in place, overwriting it
// with the solution.
#[enum_dispatch]
pub(crate) trait SolveEngine<T>
where
    T: FloatT,
{
    fn solve_in_place(&mut self, b: &mut [T]) -> Result<(), FactorizationError>;
}

// The closed set of backends.  Engine selection in the dispatcher is an
// exhaustive match over MatrixFormat, so a format without a backend here
// cannot compile.
#[enum_dispatch(SolveEngine<T>)]
pub(crate) enum StructuredEngine<T>
where
    T: FloatT,
{
    DenseLU(DenseLUEngine<T>),
    Banded(BandedEngine<T>),
    Triangular(TriangularEngine<T>),
}
