//! Buffer access traits.

use gtcomp_core::Element;

/// Read-only access to a dense row-major buffer.
///
/// Implemented by owned and borrowed buffers so the engine can read
/// from either without copying. `data().len()` should equal the product
/// of `shape()`; windows reject buffers where it does not.
pub trait FieldRead<T: Element> {
    /// Per-axis extent of the buffer. The length is the buffer's rank.
    fn shape(&self) -> &[usize];

    /// The buffer contents in row-major order.
    fn data(&self) -> &[T];

    /// Number of axes.
    fn rank(&self) -> usize {
        self.shape().len()
    }
}

/// Mutable access to a dense row-major buffer.
pub trait FieldWrite<T: Element>: FieldRead<T> {
    /// The buffer contents in row-major order, writable.
    fn data_mut(&mut self) -> &mut [T];
}
