use crate::algebra::{AsFloatT, FloatT};
use derive_builder::Builder;

/// Numeric thresholds used by [`solve_with`](crate::solver::solve_with).
///
/// ```
/// use matsolve::solver::SolveSettingsBuilder;
///
/// let settings = SolveSettingsBuilder::<f64>::default()
///     .triangle_tol(1e-12)
///     .build()
///     .unwrap();
/// # assert!(settings.triangle_tol == 1e-12);
/// ```
#[derive(Builder, Debug, Clone)]
pub struct SolveSettings<T: FloatT> {
    /// smallest pivot magnitude the backend eliminations accept before
    /// reporting the system as singular
    #[builder(default = "(1e-30).as_T()")]
    pub pivot_min: T,

    /// tolerance applied entrywise when classifying the orientation of a
    /// matrix declared triangular
    #[builder(default = "T::epsilon()")]
    pub triangle_tol: T,
}

impl<T> Default for SolveSettings<T>
where
    T: FloatT,
{
    fn default() -> SolveSettings<T> {
        SolveSettingsBuilder::<T>::default().build().unwrap()
    }
}
