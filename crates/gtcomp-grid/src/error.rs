//! Error types for buffer construction and element access.

use std::fmt;

/// Errors arising from building or indexing a field buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// The backing storage does not hold exactly `product(shape)` elements.
    LengthMismatch {
        /// The declared shape.
        shape: Vec<usize>,
        /// Number of elements actually supplied.
        len: usize,
    },
    /// A multi-dimensional index is outside the buffer.
    IndexOutOfBounds {
        /// The offending index.
        index: Vec<usize>,
        /// The buffer's shape.
        shape: Vec<usize>,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { shape, len } => {
                let expected: usize = shape.iter().product();
                write!(
                    f,
                    "shape {shape:?} needs {expected} elements, got {len}"
                )
            }
            Self::IndexOutOfBounds { index, shape } => {
                write!(f, "index {index:?} out of bounds for shape {shape:?}")
            }
        }
    }
}

impl std::error::Error for GridError {}
