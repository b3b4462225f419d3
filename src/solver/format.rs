use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error type returned by matrix format validation.
#[derive(Error, Debug)]
pub enum FormatError {
    /// The supplied tag is not in the recognized format set
    #[error("unknown matrix format {0:?}")]
    UnknownFormat(String),
}

/// Storage-format hint attached to a [`MatrixHandle`](crate::solver::MatrixHandle).
///
/// The format selects the backend used by [`solve`](crate::solver::solve).
/// It is a promise about the structure of the data, not a checked property
/// of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatrixFormat {
    /// dense matrix with no special structure
    #[default]
    General,
    /// matrix with nonzeros confined to a contiguous diagonal band
    Banded,
    /// lower or upper triangular matrix
    Triangular,
}

impl MatrixFormat {
    /// Canonicalizes an optional format tag.
    ///
    /// An absent tag means [`General`](MatrixFormat::General); a present
    /// tag outside the recognized set fails.
    pub fn normalize(tag: Option<&str>) -> Result<Self, FormatError> {
        match tag {
            None => Ok(MatrixFormat::General),
            Some(t) => t.parse(),
        }
    }

    /// The canonical tag for this format.
    pub fn as_str(&self) -> &'static str {
        match self {
            MatrixFormat::General => "general",
            MatrixFormat::Banded => "banded",
            MatrixFormat::Triangular => "triangular",
        }
    }
}

impl FromStr for MatrixFormat {
    type Err = FormatError;
    fn from_str(s: &str) -> Result<Self, FormatError> {
        match s {
            "general" => Ok(MatrixFormat::General),
            "banded" => Ok(MatrixFormat::Banded),
            "triangular" => Ok(MatrixFormat::Triangular),
            _ => Err(FormatError::UnknownFormat(s.into())),
        }
    }
}

impl fmt::Display for MatrixFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
