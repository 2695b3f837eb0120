//! ComputationError -> Python exception mapping.

use gtcomp_core::ComputationError;
use gtcomp_grid::GridError;
use pyo3::exceptions::{PyIndexError, PyValueError};
use pyo3::PyErr;

pyo3::create_exception!(
    gtcomputation,
    InvalidDomainError,
    PyValueError,
    "The declared domain has an empty interior."
);
pyo3::create_exception!(
    gtcomputation,
    ShapeMismatchError,
    PyValueError,
    "A buffer's rank or shape is incompatible with the operation."
);
pyo3::create_exception!(
    gtcomputation,
    OutOfBoundsError,
    PyIndexError,
    "An addressed window does not fit inside its buffer."
);

/// Raise the exception class matching the error kind.
pub(crate) fn to_py_err(err: ComputationError) -> PyErr {
    let msg = err.to_string();
    match err {
        ComputationError::InvalidDomain { .. } => InvalidDomainError::new_err(msg),
        ComputationError::ShapeMismatch { .. } => ShapeMismatchError::new_err(msg),
        ComputationError::OutOfBounds { .. } => OutOfBoundsError::new_err(msg),
    }
}

/// A numpy array whose element count disagrees with its shape.
pub(crate) fn grid_to_py_err(err: GridError) -> PyErr {
    ShapeMismatchError::new_err(err.to_string())
}
