//! Full-buffer copy.

use gtcomp_core::{BufferRole, ComputationError, Element};
use gtcomp_grid::{FieldRead, FieldWrite};
use tracing::debug;

/// Copy every element of `f_in` into `f_out`.
///
/// No origin, no halo: the two buffers must have identical shapes, of
/// any rank.
///
/// # Errors
///
/// [`ComputationError::ShapeMismatch`] if the shapes differ. `f_out` is
/// not written in that case.
pub fn copy<T, I, O>(f_in: &I, f_out: &mut O) -> Result<(), ComputationError>
where
    T: Element,
    I: FieldRead<T> + ?Sized,
    O: FieldWrite<T> + ?Sized,
{
    if f_in.shape() != f_out.shape() {
        return Err(ComputationError::ShapeMismatch {
            role: BufferRole::Output,
            expected: format!("{:?} (the input shape)", f_in.shape()),
            actual: f_out.shape().to_vec(),
        });
    }
    debug!(elements = f_in.data().len(), "copying full buffer");
    f_out.data_mut().copy_from_slice(f_in.data());
    Ok(())
}
