//! numpy array <-> field buffer adapters.
//!
//! Outputs must be C-contiguous so they can be written in place through
//! a [`FieldMut`]. Inputs of any layout are accepted; non-C-contiguous
//! inputs are gathered into a row-major copy first, as are inputs that
//! share memory with the output.

use crate::error::{grid_to_py_err, OutOfBoundsError, ShapeMismatchError};
use gtcomp_core::{Origin3, RANK};
use gtcomp_grid::{Field, FieldMut, FieldRef};
use numpy::{
    BorrowError, PyArrayDyn, PyArrayMethods, PyReadonlyArrayDyn, PyReadwriteArrayDyn,
    PyUntypedArrayMethods,
};
use pyo3::exceptions::PyValueError;
use pyo3::{Bound, PyErr, PyResult};

/// A read-only view of a numpy input, borrowed when possible.
pub(crate) enum InputBuffer<'a> {
    Borrowed(FieldRef<'a, f64>),
    Gathered(Field<f64>),
}

impl<'a> InputBuffer<'a> {
    pub(crate) fn new(array: &'a PyReadonlyArrayDyn<'_, f64>) -> PyResult<Self> {
        let shape = array.shape().to_vec();
        if array.is_c_contiguous() {
            let data = array
                .as_slice()
                .map_err(|e| PyValueError::new_err(e.to_string()))?;
            return FieldRef::new(&shape, data)
                .map(Self::Borrowed)
                .map_err(grid_to_py_err);
        }
        let data: Vec<f64> = array.as_array().iter().copied().collect();
        Field::from_vec(&shape, data)
            .map(Self::Gathered)
            .map_err(grid_to_py_err)
    }

    /// Row-major copy of `array`, taken without holding a borrow on it.
    pub(crate) fn snapshot(array: &Bound<'_, PyArrayDyn<f64>>) -> PyResult<Self> {
        let shape = array.shape().to_vec();
        let data: Vec<f64> = array.to_owned_array().iter().copied().collect();
        Field::from_vec(&shape, data)
            .map(Self::Gathered)
            .map_err(grid_to_py_err)
    }
}

/// A numpy borrow conflict, reported as `ValueError`.
pub(crate) fn borrow_to_py_err(e: BorrowError) -> PyErr {
    PyValueError::new_err(e.to_string())
}

/// Wrap a writeable, C-contiguous numpy array as a [`FieldMut`].
pub(crate) fn output_buffer<'a>(
    array: &'a mut PyReadwriteArrayDyn<'_, f64>,
) -> PyResult<FieldMut<'a, f64>> {
    if !array.is_c_contiguous() {
        return Err(PyValueError::new_err(
            "output array must be C-contiguous to be written in place",
        ));
    }
    let shape = array.shape().to_vec();
    let data = array
        .as_slice_mut()
        .map_err(|e| PyValueError::new_err(e.to_string()))?;
    FieldMut::new(&shape, data).map_err(grid_to_py_err)
}

/// Convert an optional Python origin sequence, defaulting to zero.
pub(crate) fn parse_origin(origin: Option<Vec<i64>>, name: &str) -> PyResult<Origin3> {
    let Some(origin) = origin else {
        return Ok(Origin3::ZERO);
    };
    if origin.len() != RANK {
        return Err(ShapeMismatchError::new_err(format!(
            "{name} must have {RANK} components, got {}",
            origin.len()
        )));
    }
    let mut out = [0usize; RANK];
    for (axis, &v) in origin.iter().enumerate() {
        out[axis] = usize::try_from(v).map_err(|_| {
            OutOfBoundsError::new_err(format!("{name} {origin:?} has a negative component"))
        })?;
    }
    Ok(Origin3(out))
}
