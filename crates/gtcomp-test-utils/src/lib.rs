//! Test utilities for gtcomp development.
//!
//! Provides buffer fixtures ([`numbered`], [`random_field`]) and
//! box-comparison assertions used to check interior writes and halo
//! preservation.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{numbered, random_field, Ordering};

use gtcomp_core::{Element, Extent3, RANK};
use gtcomp_grid::Field;

/// Iterate every index of the box `[start, start + extent)` in row-major order.
pub fn box_indices(start: [usize; RANK], extent: Extent3) -> impl Iterator<Item = [usize; RANK]> {
    let [ex, ey, ez] = extent.as_array();
    (0..ex).flat_map(move |i| {
        (0..ey).flat_map(move |j| {
            (0..ez).map(move |k| [start[0] + i, start[1] + j, start[2] + k])
        })
    })
}

/// Assert that box `extent` at `a_start` in `a` equals the same-sized
/// box at `b_start` in `b`.
///
/// Panics with the first differing cell.
pub fn assert_box_eq<T: Element>(
    a: &Field<T>,
    a_start: [usize; RANK],
    b: &Field<T>,
    b_start: [usize; RANK],
    extent: Extent3,
) {
    for (ia, ib) in box_indices(a_start, extent).zip(box_indices(b_start, extent)) {
        let va = a.get(&ia);
        let vb = b.get(&ib);
        assert!(va.is_some(), "index {ia:?} outside first buffer");
        assert_eq!(va, vb, "cell {ia:?} differs from {ib:?}");
    }
}

/// Assert that every cell of `after` outside the half-open box
/// `[start, stop)` equals the same cell of `before`.
pub fn assert_unchanged_outside<T: Element>(
    after: &Field<T>,
    before: &Field<T>,
    start: [usize; RANK],
    stop: [usize; RANK],
) {
    let shape = gtcomp_grid::FieldRead::shape(after);
    assert_eq!(shape, gtcomp_grid::FieldRead::shape(before), "shape changed");
    let whole = Extent3([shape[0], shape[1], shape[2]]);
    for idx in box_indices([0; RANK], whole) {
        let inside = (0..RANK).all(|axis| idx[axis] >= start[axis] && idx[axis] < stop[axis]);
        if !inside {
            assert_eq!(
                after.get(&idx),
                before.get(&idx),
                "cell {idx:?} outside [{start:?}, {stop:?}) was modified"
            );
        }
    }
}
