//! Matrix and vector types, plus the structural analysis (band extents,
//! triangular orientation) consumed by the [solver](crate::solver).

mod banded;
pub use banded::*;
mod dense;
pub use dense::*;
mod floats;
pub use floats::*;
mod matrix_traits;
pub use matrix_traits::*;
mod matrix_types;
pub use matrix_types::*;
mod vecmath;
pub use vecmath::*;

//configure tests of internals
#[cfg(test)]
mod tests;
