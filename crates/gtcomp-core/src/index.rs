//! Strongly-typed index triples for 3-D domains.
//!
//! A computation is declared over an [`Extent3`] and replayed against
//! buffers at an [`Origin3`]. Both are plain `[usize; 3]` wrappers so the
//! two roles cannot be swapped by accident at a call site.

use std::fmt;
use std::ops::Index;

/// Rank of every computational domain.
pub const RANK: usize = 3;

/// Axis index of x (slowest-varying in row-major storage).
pub const AXIS_X: usize = 0;

/// Axis index of y.
pub const AXIS_Y: usize = 1;

/// Axis index of z (fastest-varying in row-major storage).
pub const AXIS_Z: usize = 2;

/// Per-axis extent of a 3-D domain, in cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Extent3(pub [usize; RANK]);

impl Extent3 {
    /// Create an extent from its three axis lengths.
    pub const fn new(x: usize, y: usize, z: usize) -> Self {
        Self([x, y, z])
    }

    /// Total number of cells covered by this extent.
    pub fn cell_count(&self) -> usize {
        self.0.iter().product()
    }

    /// Returns `true` if any axis has zero length.
    pub fn is_empty(&self) -> bool {
        self.0.contains(&0)
    }

    /// The axis lengths as an array.
    pub const fn as_array(&self) -> [usize; RANK] {
        self.0
    }
}

impl Index<usize> for Extent3 {
    type Output = usize;

    fn index(&self, axis: usize) -> &usize {
        &self.0[axis]
    }
}

impl From<[usize; RANK]> for Extent3 {
    fn from(v: [usize; RANK]) -> Self {
        Self(v)
    }
}

impl fmt::Display for Extent3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.0[0], self.0[1], self.0[2])
    }
}

/// Offset at which a logical domain begins inside a larger buffer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Origin3(pub [usize; RANK]);

impl Origin3 {
    /// The zero origin: the domain starts at the first cell of the buffer.
    pub const ZERO: Self = Self([0; RANK]);

    /// Create an origin from its three axis offsets.
    pub const fn new(x: usize, y: usize, z: usize) -> Self {
        Self([x, y, z])
    }

    /// One-past-the-end corner of the window `[self, self + extent)`.
    ///
    /// Returns `None` if any axis overflows `usize`.
    pub fn window_end(&self, extent: Extent3) -> Option<[usize; RANK]> {
        let mut end = [0; RANK];
        for axis in 0..RANK {
            end[axis] = self.0[axis].checked_add(extent.0[axis])?;
        }
        Some(end)
    }

    /// The axis offsets as an array.
    pub const fn as_array(&self) -> [usize; RANK] {
        self.0
    }
}

impl Index<usize> for Origin3 {
    type Output = usize;

    fn index(&self, axis: usize) -> &usize {
        &self.0[axis]
    }
}

impl From<[usize; RANK]> for Origin3 {
    fn from(v: [usize; RANK]) -> Self {
        Self(v)
    }
}

impl fmt::Display for Origin3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.0[0], self.0[1], self.0[2])
    }
}
