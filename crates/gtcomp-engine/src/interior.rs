//! Interior bounds of a haloed domain.

use gtcomp_core::{Extent3, RANK};

/// Offset of the cell read for each written cell, in domain-local
/// coordinates: one back along x, one back along y, same z.
pub const SHIFT: [isize; RANK] = [-1, -1, 0];

/// Half-open box `[start, stop)` of domain-local cells that a run writes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InteriorBounds {
    /// First interior cell: `(halo, halo, 0)`.
    pub start: [usize; RANK],
    /// One past the last interior cell: `(sx - halo, sy - halo, sz)`.
    pub stop: [usize; RANK],
}

impl InteriorBounds {
    /// Interior of `shape` with `halo` cells excluded on each side of x and y.
    ///
    /// The caller guarantees `shape[0] > 2 * halo` and `shape[1] > 2 * halo`.
    pub(crate) fn new(shape: Extent3, halo: usize) -> Self {
        Self {
            start: [halo, halo, 0],
            stop: [shape[0] - halo, shape[1] - halo, shape[2]],
        }
    }

    /// Per-axis size of the interior.
    pub fn extent(&self) -> Extent3 {
        Extent3([
            self.stop[0] - self.start[0],
            self.stop[1] - self.start[1],
            self.stop[2] - self.start[2],
        ])
    }

    /// Number of interior cells.
    pub fn cell_count(&self) -> usize {
        self.extent().cell_count()
    }

    /// Returns `true` if the domain-local `index` lies in the interior.
    pub fn contains(&self, index: [usize; RANK]) -> bool {
        (0..RANK).all(|axis| index[axis] >= self.start[axis] && index[axis] < self.stop[axis])
    }

    /// `start` as signed offsets, for addressing the written sub-box.
    pub fn write_start(&self) -> [isize; RANK] {
        self.start.map(|v| v as isize)
    }

    /// `start + SHIFT`, for addressing the read sub-box.
    pub fn read_start(&self) -> [isize; RANK] {
        let mut out = self.write_start();
        for (o, s) in out.iter_mut().zip(SHIFT) {
            *o += s;
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_for_halo_one() {
        let b = InteriorBounds::new(Extent3::new(10, 20, 30), 1);
        assert_eq!(b.start, [1, 1, 0]);
        assert_eq!(b.stop, [9, 19, 30]);
        assert_eq!(b.extent(), Extent3::new(8, 18, 30));
        assert_eq!(b.cell_count(), 8 * 18 * 30);
    }

    #[test]
    fn contains_excludes_halo_faces() {
        let b = InteriorBounds::new(Extent3::new(5, 3, 8), 1);
        assert!(b.contains([1, 1, 0]));
        assert!(b.contains([3, 1, 7]));
        assert!(!b.contains([0, 1, 0]));
        assert!(!b.contains([4, 1, 0]));
        assert!(!b.contains([2, 0, 0]));
        assert!(!b.contains([2, 2, 0]));
        assert!(!b.contains([2, 1, 8]));
    }

    #[test]
    fn read_start_applies_shift() {
        let b = InteriorBounds::new(Extent3::new(10, 20, 30), 1);
        assert_eq!(b.write_start(), [1, 1, 0]);
        assert_eq!(b.read_start(), [0, 0, 0]);

        let b = InteriorBounds::new(Extent3::new(10, 20, 30), 0);
        assert_eq!(b.read_start(), [-1, -1, 0]);
    }
}
