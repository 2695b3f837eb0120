//! Python bindings for gtcomp.
//!
//! The native extension is named `gtcomputation`. It exposes the
//! `GTComputation` descriptor, the module-level `copy` function and one
//! exception class per error kind. Buffers are float64 numpy arrays;
//! outputs are written in place.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use pyo3::prelude::*;

mod buffers;
mod computation;
mod error;

/// The native `gtcomputation` extension module.
#[pymodule]
fn gtcomputation(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<computation::GTComputation>()?;
    m.add_function(wrap_pyfunction!(computation::copy, m)?)?;

    let py = m.py();
    m.add("InvalidDomainError", py.get_type::<error::InvalidDomainError>())?;
    m.add("ShapeMismatchError", py.get_type::<error::ShapeMismatchError>())?;
    m.add("OutOfBoundsError", py.get_type::<error::OutOfBoundsError>())?;
    Ok(())
}
