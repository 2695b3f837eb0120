//! Runs whose input and output windows live in one buffer.
//!
//! Every in-place run must match a two-buffer run that reads from a
//! snapshot of the buffer taken before the call.

use gtcomp_core::{BufferRole, ComputationError, Extent3, Origin3};
use gtcomp_engine::{Computation, RunOrigins};
use gtcomp_test_utils::{numbered, random_field, Ordering};

fn check_in_place(buffer: [usize; 3], domain: [usize; 3], origin_in: [usize; 3], origin_out: [usize; 3]) {
    let comp = Computation::new(Extent3(domain), 1).unwrap();
    let origins = RunOrigins {
        output: Origin3(origin_out),
        input: Origin3(origin_in),
    };
    let mut shared = numbered(&buffer, Ordering::Ascending);
    let snapshot = shared.clone();
    let mut expected = shared.clone();
    comp.run_with_origins(&mut expected, &snapshot, origins).unwrap();

    comp.run_in_place(&mut shared, origins).unwrap();
    assert_eq!(shared, expected, "in ({origin_in:?}) out ({origin_out:?})");
}

#[test]
fn disjoint_regions_of_one_buffer() {
    check_in_place([10, 20, 30], [5, 6, 7], [0, 0, 0], [5, 10, 20]);
    check_in_place([10, 20, 30], [5, 6, 7], [5, 14, 23], [0, 2, 4]);
}

#[test]
fn overlapping_regions_of_one_buffer() {
    check_in_place([10, 20, 30], [5, 6, 7], [3, 4, 5], [4, 5, 5]);
    check_in_place([10, 20, 30], [5, 6, 7], [4, 5, 5], [3, 4, 5]);
    check_in_place([10, 20, 30], [10, 20, 30], [0, 0, 0], [0, 0, 0]);
}

#[test]
fn same_origin_shifts_interior_diagonally() {
    let comp = Computation::new(Extent3::new(6, 6, 4), 1).unwrap();
    let mut shared = random_field(&[6, 6, 4], 7);
    let before = shared.clone();

    comp.run_in_place(&mut shared, RunOrigins::default()).unwrap();

    for i in 1..5 {
        for j in 1..5 {
            for k in 0..4 {
                assert_eq!(shared.get(&[i, j, k]), before.get(&[i - 1, j - 1, k]));
            }
        }
    }
    assert_eq!(shared.get(&[0, 3, 2]), before.get(&[0, 3, 2]));
    assert_eq!(shared.get(&[5, 5, 3]), before.get(&[5, 5, 3]));
}

#[test]
fn input_window_past_end_writes_nothing() {
    let comp = Computation::new(Extent3::new(5, 6, 7), 1).unwrap();
    let mut shared = numbered(&[10, 20, 30], Ordering::Descending);
    let before = shared.clone();

    let err = comp
        .run_in_place(
            &mut shared,
            RunOrigins {
                output: Origin3::ZERO,
                input: Origin3::new(0, 0, 24),
            },
        )
        .unwrap_err();
    assert!(matches!(
        err,
        ComputationError::OutOfBounds {
            role: BufferRole::Input,
            ..
        }
    ));
    assert_eq!(shared, before);
}
