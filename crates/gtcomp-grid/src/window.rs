//! Bounds-checked rank-3 windows into row-major buffers.
//!
//! A window addresses the box `[origin, origin + extent)` of a buffer.
//! Construction validates rank and bounds once and precomputes the flat
//! offset of the window's first cell; every later access is the affine
//! map `base + i * sx + j * sy + k`. Because z has stride 1, each
//! `(i, j)` pair addresses a contiguous run of `extent[2]` cells.

use crate::traits::{FieldRead, FieldWrite};
use gtcomp_core::{BufferRole, ComputationError, Element, Extent3, Origin3, RANK};

/// Validated placement of a window: base offset and strides.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Placement {
    origin: Origin3,
    extent: Extent3,
    base: usize,
    strides: [usize; RANK],
}

/// Reject storage whose length disagrees with the declared shape.
fn check_storage(shape: &[usize], len: usize, role: BufferRole) -> Result<(), ComputationError> {
    let cells = shape.iter().try_fold(1usize, |acc, &d| acc.checked_mul(d));
    if cells != Some(len) {
        return Err(ComputationError::ShapeMismatch {
            role,
            expected: format!("a shape covering its {len} stored elements"),
            actual: shape.to_vec(),
        });
    }
    Ok(())
}

impl Placement {
    fn resolve(
        shape: &[usize],
        role: BufferRole,
        origin: Origin3,
        extent: Extent3,
    ) -> Result<Self, ComputationError> {
        if shape.len() != RANK {
            return Err(ComputationError::ShapeMismatch {
                role,
                expected: format!("rank {RANK}"),
                actual: shape.to_vec(),
            });
        }
        let end = origin
            .window_end(extent)
            .ok_or_else(|| ComputationError::out_of_bounds(role, origin, extent, shape))?;
        if (0..RANK).any(|axis| end[axis] > shape[axis]) {
            return Err(ComputationError::out_of_bounds(role, origin, extent, shape));
        }
        let strides = [shape[1] * shape[2], shape[2], 1];
        let base = (0..RANK).map(|axis| origin[axis] * strides[axis]).sum();
        Ok(Self {
            origin,
            extent,
            base,
            strides,
        })
    }

    /// Placement of a sub-box starting at `start` relative to this window.
    ///
    /// `start` may be negative; the sub-box only has to fit in the
    /// underlying buffer, not in this window.
    fn shifted(
        &self,
        shape: &[usize],
        role: BufferRole,
        start: [isize; RANK],
        extent: Extent3,
    ) -> Result<Self, ComputationError> {
        let mut origin = [0usize; RANK];
        for axis in 0..RANK {
            let abs = self.origin[axis] as i64 + start[axis] as i64;
            if abs < 0 {
                let mut abs_start = [0i64; RANK];
                for a in 0..RANK {
                    abs_start[a] = self.origin[a] as i64 + start[a] as i64;
                }
                return Err(ComputationError::OutOfBounds {
                    role,
                    start: abs_start,
                    extent,
                    buffer_shape: shape.to_vec(),
                });
            }
            origin[axis] = abs as usize;
        }
        Self::resolve(shape, role, Origin3(origin), extent)
    }

    /// Returns `true` if the boxes of `self` and `other` share a cell.
    fn overlaps(&self, other: &Self) -> bool {
        if self.extent.is_empty() || other.extent.is_empty() {
            return false;
        }
        (0..RANK).all(|axis| {
            self.origin[axis] < other.origin[axis] + other.extent[axis]
                && other.origin[axis] < self.origin[axis] + self.extent[axis]
        })
    }

    #[inline]
    fn offset(&self, local: [usize; RANK]) -> usize {
        self.base + local[0] * self.strides[0] + local[1] * self.strides[1] + local[2]
    }

    #[inline]
    fn row_range(&self, i: usize, j: usize) -> std::ops::Range<usize> {
        let start = self.offset([i, j, 0]);
        start..start + self.extent[2]
    }
}

/// A read-only rank-3 window into a buffer.
#[derive(Clone, Copy, Debug)]
pub struct Window3<'a, T> {
    data: &'a [T],
    shape: [usize; RANK],
    role: BufferRole,
    placement: Placement,
}

impl<'a, T: Element> Window3<'a, T> {
    /// Address `[origin, origin + extent)` of `field`.
    ///
    /// `role` only labels errors.
    ///
    /// # Errors
    ///
    /// - [`ComputationError::ShapeMismatch`] if `field` is not rank 3 or
    ///   its storage length disagrees with its shape.
    /// - [`ComputationError::OutOfBounds`] if the window does not fit.
    pub fn new<F: FieldRead<T> + ?Sized>(
        field: &'a F,
        role: BufferRole,
        origin: Origin3,
        extent: Extent3,
    ) -> Result<Self, ComputationError> {
        let shape = field.shape();
        check_storage(shape, field.data().len(), role)?;
        let placement = Placement::resolve(shape, role, origin, extent)?;
        Ok(Self {
            data: field.data(),
            shape: [shape[0], shape[1], shape[2]],
            role,
            placement,
        })
    }

    /// A sub-window of `extent` cells starting at `start` relative to
    /// this window's origin. Negative components reach before the origin.
    ///
    /// # Errors
    ///
    /// [`ComputationError::OutOfBounds`] if the sub-window leaves the buffer.
    pub fn shifted(&self, start: [isize; RANK], extent: Extent3) -> Result<Self, ComputationError> {
        let placement = self.placement.shifted(&self.shape, self.role, start, extent)?;
        Ok(Self {
            placement,
            ..*self
        })
    }

    /// Buffer coordinates of this window's first cell.
    pub fn origin(&self) -> Origin3 {
        self.placement.origin
    }

    /// Extent of this window.
    pub fn extent(&self) -> Extent3 {
        self.placement.extent
    }

    /// Flat buffer offset of a window-local index.
    ///
    /// The caller guarantees `local < extent` on every axis.
    pub fn offset(&self, local: [usize; RANK]) -> usize {
        self.placement.offset(local)
    }

    /// Element at a window-local index, or `None` outside the window.
    pub fn get(&self, local: [usize; RANK]) -> Option<&'a T> {
        if (0..RANK).any(|axis| local[axis] >= self.placement.extent[axis]) {
            return None;
        }
        Some(&self.data[self.placement.offset(local)])
    }

    /// The contiguous z-run at window-local `(i, j)`.
    ///
    /// # Panics
    ///
    /// If `i` or `j` is outside the window.
    pub fn row(&self, i: usize, j: usize) -> &'a [T] {
        assert!(
            i < self.placement.extent[0] && j < self.placement.extent[1],
            "row ({i}, {j}) outside window extent {}",
            self.placement.extent
        );
        &self.data[self.placement.row_range(i, j)]
    }
}

/// A writable rank-3 window into a buffer.
#[derive(Debug)]
pub struct Window3Mut<'a, T> {
    data: &'a mut [T],
    shape: [usize; RANK],
    role: BufferRole,
    placement: Placement,
}

impl<'a, T: Element> Window3Mut<'a, T> {
    /// Address `[origin, origin + extent)` of `field` for writing.
    ///
    /// # Errors
    ///
    /// - [`ComputationError::ShapeMismatch`] if `field` is not rank 3 or
    ///   its storage length disagrees with its shape.
    /// - [`ComputationError::OutOfBounds`] if the window does not fit.
    pub fn new<F: FieldWrite<T> + ?Sized>(
        field: &'a mut F,
        role: BufferRole,
        origin: Origin3,
        extent: Extent3,
    ) -> Result<Self, ComputationError> {
        let shape = field.shape();
        check_storage(shape, field.data().len(), role)?;
        let placement = Placement::resolve(shape, role, origin, extent)?;
        let shape = [shape[0], shape[1], shape[2]];
        Ok(Self {
            data: field.data_mut(),
            shape,
            role,
            placement,
        })
    }

    /// Narrow this window to a sub-box, consuming it.
    ///
    /// # Errors
    ///
    /// [`ComputationError::OutOfBounds`] if the sub-window leaves the buffer.
    pub fn into_shifted(
        self,
        start: [isize; RANK],
        extent: Extent3,
    ) -> Result<Self, ComputationError> {
        let placement = self.placement.shifted(&self.shape, self.role, start, extent)?;
        Ok(Self { placement, ..self })
    }

    /// Buffer coordinates of this window's first cell.
    pub fn origin(&self) -> Origin3 {
        self.placement.origin
    }

    /// Extent of this window.
    pub fn extent(&self) -> Extent3 {
        self.placement.extent
    }

    /// Element at a window-local index, or `None` outside the window.
    pub fn get(&self, local: [usize; RANK]) -> Option<&T> {
        if (0..RANK).any(|axis| local[axis] >= self.placement.extent[axis]) {
            return None;
        }
        Some(&self.data[self.placement.offset(local)])
    }

    /// The contiguous z-run at window-local `(i, j)`, writable.
    ///
    /// # Panics
    ///
    /// If `i` or `j` is outside the window.
    pub fn row_mut(&mut self, i: usize, j: usize) -> &mut [T] {
        assert!(
            i < self.placement.extent[0] && j < self.placement.extent[1],
            "row ({i}, {j}) outside window extent {}",
            self.placement.extent
        );
        let range = self.placement.row_range(i, j);
        &mut self.data[range]
    }
}

/// A read window and a write window of the same extent over one buffer.
///
/// The windows may overlap. [`copy_rows`](Self::copy_rows) reads every
/// source cell before any overlapping destination cell is written.
#[derive(Debug)]
pub struct SharedWindows3<'a, T> {
    data: &'a mut [T],
    shape: [usize; RANK],
    src: Placement,
    dst: Placement,
}

impl<'a, T: Element> SharedWindows3<'a, T> {
    /// Address `[src_origin, src_origin + extent)` for reading and
    /// `[dst_origin, dst_origin + extent)` for writing, both in `field`.
    ///
    /// Errors on the read window are labelled [`BufferRole::Input`],
    /// errors on the write window [`BufferRole::Output`].
    ///
    /// # Errors
    ///
    /// - [`ComputationError::ShapeMismatch`] if `field` is not rank 3 or
    ///   its storage length disagrees with its shape.
    /// - [`ComputationError::OutOfBounds`] if either window does not fit.
    pub fn new<F: FieldWrite<T> + ?Sized>(
        field: &'a mut F,
        src_origin: Origin3,
        dst_origin: Origin3,
        extent: Extent3,
    ) -> Result<Self, ComputationError> {
        let shape = field.shape();
        check_storage(shape, field.data().len(), BufferRole::Input)?;
        let src = Placement::resolve(shape, BufferRole::Input, src_origin, extent)?;
        let dst = Placement::resolve(shape, BufferRole::Output, dst_origin, extent)?;
        let shape = [shape[0], shape[1], shape[2]];
        Ok(Self {
            data: field.data_mut(),
            shape,
            src,
            dst,
        })
    }

    /// Narrow both windows to sub-boxes of `extent`, starting at
    /// `src_start` and `dst_start` relative to their current origins.
    ///
    /// # Errors
    ///
    /// [`ComputationError::OutOfBounds`] if either sub-window leaves the buffer.
    pub fn into_shifted(
        self,
        src_start: [isize; RANK],
        dst_start: [isize; RANK],
        extent: Extent3,
    ) -> Result<Self, ComputationError> {
        let src = self
            .src
            .shifted(&self.shape, BufferRole::Input, src_start, extent)?;
        let dst = self
            .dst
            .shifted(&self.shape, BufferRole::Output, dst_start, extent)?;
        Ok(Self { src, dst, ..self })
    }

    /// Buffer coordinates of the read window's first cell.
    pub fn src_origin(&self) -> Origin3 {
        self.src.origin
    }

    /// Buffer coordinates of the write window's first cell.
    pub fn dst_origin(&self) -> Origin3 {
        self.dst.origin
    }

    /// Extent shared by both windows.
    pub fn extent(&self) -> Extent3 {
        self.dst.extent
    }

    /// Returns `true` if the read and write windows share a cell.
    pub fn overlaps(&self) -> bool {
        self.src.overlaps(&self.dst)
    }

    /// Copy the read window into the write window, one z-run at a time.
    ///
    /// Overlapping windows are copied through a snapshot of the read
    /// window, so every destination cell receives a pre-copy value.
    pub fn copy_rows(mut self) {
        let extent = self.dst.extent;
        if !self.overlaps() {
            for i in 0..extent[0] {
                for j in 0..extent[1] {
                    let dst = self.dst.row_range(i, j).start;
                    self.data.copy_within(self.src.row_range(i, j), dst);
                }
            }
            return;
        }
        let mut snapshot = Vec::with_capacity(extent.cell_count());
        for i in 0..extent[0] {
            for j in 0..extent[1] {
                snapshot.extend_from_slice(&self.data[self.src.row_range(i, j)]);
            }
        }
        for (n, row) in snapshot.chunks_exact(extent[2]).enumerate() {
            let (i, j) = (n / extent[1], n % extent[1]);
            self.data[self.dst.row_range(i, j)].copy_from_slice(row);
        }
    }
}
