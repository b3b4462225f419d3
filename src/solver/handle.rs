use super::{FormatError, MatrixFormat};
use crate::algebra::{FloatT, Matrix};

/// A dense matrix paired with its storage-format hint.
///
/// Handles are immutable: the format is fixed at construction and the data
/// is exposed by reference only.  Construction does not verify that the
/// data structurally matches the declared format; the structured backends
/// trust the hint at solve time (see
/// [`BandedMatrix::from_dense`](crate::algebra::BandedMatrix::from_dense)
/// for the banded precondition).
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixHandle<T = f64> {
    data: Matrix<T>,
    format: MatrixFormat,
}

impl<T> MatrixHandle<T>
where
    T: FloatT,
{
    /// Creates a handle with an explicit format.
    ///
    /// `None` means [`General`](MatrixFormat::General).
    pub fn new(data: Matrix<T>, format: Option<MatrixFormat>) -> Self {
        Self {
            data,
            format: format.unwrap_or_default(),
        }
    }

    /// Creates a handle from an optional string format tag, e.g. one read
    /// from configuration.  Fails on tags outside the recognized set.
    pub fn with_tag(data: Matrix<T>, tag: Option<&str>) -> Result<Self, FormatError> {
        let format = MatrixFormat::normalize(tag)?;
        Ok(Self { data, format })
    }

    /// The wrapped matrix.
    pub fn data(&self) -> &Matrix<T> {
        &self.data
    }

    /// The declared storage format.
    pub fn format(&self) -> MatrixFormat {
        self.format
    }
}
