//! Row-major index arithmetic shared by buffers and windows.

use smallvec::SmallVec;

/// Row-major strides for `shape`: the last axis has stride 1.
pub fn row_major_strides(shape: &[usize]) -> SmallVec<[usize; 4]> {
    let mut strides: SmallVec<[usize; 4]> = SmallVec::from_elem(1, shape.len());
    for axis in (0..shape.len().saturating_sub(1)).rev() {
        strides[axis] = strides[axis + 1] * shape[axis + 1];
    }
    strides
}

/// Flat offset of `index` in a row-major buffer of `shape`.
///
/// Returns `None` if the ranks differ or any component is out of range.
pub fn flat_index(shape: &[usize], index: &[usize]) -> Option<usize> {
    if shape.len() != index.len() {
        return None;
    }
    let mut flat = 0usize;
    for (&len, &i) in shape.iter().zip(index) {
        if i >= len {
            return None;
        }
        flat = flat * len + i;
    }
    Some(flat)
}
