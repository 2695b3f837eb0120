//! GTComputation Python class and the `copy` function.

use crate::buffers::{borrow_to_py_err, output_buffer, parse_origin, InputBuffer};
use crate::error::to_py_err;
use gtcomp_engine::{Computation, ComputationConfig, RunOrigins};
use gtcomp_grid::FieldMut;
use numpy::{PyArrayDyn, PyArrayMethods, PyReadonlyArrayDyn, PyReadwriteArrayDyn};
use pyo3::prelude::*;

/// A stencil computation over a fixed domain shape and halo width.
///
/// Args:
///     shape: Three positive integers, the domain extent along (x, y, z).
///     halo: Halo width on x and y.
///
/// Raises:
///     InvalidDomainError: if the interior would be empty.
#[pyclass(name = "GTComputation", frozen)]
pub(crate) struct GTComputation {
    inner: Computation,
}

#[pymethods]
impl GTComputation {
    #[new]
    fn new(shape: Vec<i64>, halo: i64) -> PyResult<Self> {
        let inner = ComputationConfig::from_signed(&shape, halo)
            .and_then(Computation::from_config)
            .map_err(to_py_err)?;
        Ok(Self { inner })
    }

    /// Domain extent as an (x, y, z) tuple.
    #[getter]
    fn shape(&self) -> (usize, usize, usize) {
        let [x, y, z] = self.inner.shape().as_array();
        (x, y, z)
    }

    /// Halo width on x and y.
    #[getter]
    fn halo(&self) -> usize {
        self.inner.halo()
    }

    /// Apply the stencil, writing the interior of `f_out` in place.
    ///
    /// `f_out` and `f_in` may be the same array, or views sharing one
    /// base array; the input is then read as it was before the call.
    ///
    /// Args:
    ///     f_out: Writeable, C-contiguous float64 array of rank 3.
    ///     f_in: Float64 array of rank 3.
    ///     f_out_origin: Where the domain begins in `f_out`. Default (0, 0, 0).
    ///     f_in_origin: Where the domain begins in `f_in`. Default (0, 0, 0).
    ///
    /// Raises:
    ///     ShapeMismatchError: if a buffer is not rank 3.
    ///     OutOfBoundsError: if an addressed window leaves its buffer.
    #[pyo3(signature = (f_out, f_in, f_out_origin=None, f_in_origin=None))]
    fn run<'py>(
        &self,
        f_out: &Bound<'py, PyArrayDyn<f64>>,
        f_in: &Bound<'py, PyArrayDyn<f64>>,
        f_out_origin: Option<Vec<i64>>,
        f_in_origin: Option<Vec<i64>>,
    ) -> PyResult<()> {
        let origins = RunOrigins {
            output: parse_origin(f_out_origin, "f_out_origin")?,
            input: parse_origin(f_in_origin, "f_in_origin")?,
        };

        if f_out.as_ptr() == f_in.as_ptr() {
            let mut shared = f_out.try_readwrite().map_err(borrow_to_py_err)?;
            let mut field = output_buffer(&mut shared)?;
            return self
                .inner
                .run_in_place(&mut field, origins)
                .map_err(to_py_err);
        }

        let f_in_view = f_in.try_readonly().map_err(borrow_to_py_err)?;
        if let Ok(mut f_out) = f_out.try_readwrite() {
            let input = InputBuffer::new(&f_in_view)?;
            let mut output = output_buffer(&mut f_out)?;
            return run_buffers(&self.inner, &mut output, &input, origins);
        }

        // The two views overlap inside one base array.
        drop(f_in_view);
        let input = InputBuffer::snapshot(f_in)?;
        let mut f_out = f_out.try_readwrite().map_err(borrow_to_py_err)?;
        let mut output = output_buffer(&mut f_out)?;
        run_buffers(&self.inner, &mut output, &input, origins)
    }

    fn __repr__(&self) -> String {
        format!(
            "GTComputation(shape={}, halo={})",
            self.inner.shape(),
            self.inner.halo()
        )
    }
}

fn run_buffers(
    comp: &Computation,
    output: &mut FieldMut<'_, f64>,
    input: &InputBuffer<'_>,
    origins: RunOrigins,
) -> PyResult<()> {
    let result = match input {
        InputBuffer::Borrowed(field) => comp.run_with_origins(output, field, origins),
        InputBuffer::Gathered(field) => comp.run_with_origins(output, field, origins),
    };
    result.map_err(to_py_err)
}

/// Copy every element of `f_in` into `f_out` (identical shapes).
///
/// Raises:
///     ShapeMismatchError: if the shapes differ.
#[pyfunction]
pub(crate) fn copy(
    f_in: PyReadonlyArrayDyn<'_, f64>,
    mut f_out: PyReadwriteArrayDyn<'_, f64>,
) -> PyResult<()> {
    let input = InputBuffer::new(&f_in)?;
    let mut output = output_buffer(&mut f_out)?;
    let result = match &input {
        InputBuffer::Borrowed(field) => gtcomp_engine::copy(field, &mut output),
        InputBuffer::Gathered(field) => gtcomp_engine::copy(field, &mut output),
    };
    result.map_err(to_py_err)
}
