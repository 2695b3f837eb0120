//! Reusable buffer fixtures.
//!
//! - [`numbered`] — every cell holds its row-major position, ascending
//!   or descending. Distinct values make misplaced copies visible.
//! - [`random_field`] — deterministic pseudo-random values from a seed.

use gtcomp_grid::Field;
use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Value order of a [`numbered`] buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ordering {
    /// `0, 1, ..., n - 1`.
    Ascending,
    /// `n, n - 1, ..., 1`.
    Descending,
}

/// A buffer of `shape` whose row-major cells count up from 0 or down from n.
pub fn numbered(shape: &[usize], order: Ordering) -> Field<f64> {
    let n: usize = shape.iter().product();
    let data = match order {
        Ordering::Ascending => (0..n).map(|v| v as f64).collect(),
        Ordering::Descending => (1..=n).rev().map(|v| v as f64).collect(),
    };
    Field::from_vec(shape, data).expect("numbered fixture length matches shape")
}

/// A buffer of `shape` filled with uniform values in `[0, 1)` from `seed`.
pub fn random_field(shape: &[usize], seed: u64) -> Field<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    Field::from_fn(shape, |_| unit_f64(&mut rng))
}

/// 53 random mantissa bits scaled to `[0, 1)`.
fn unit_f64(rng: &mut ChaCha8Rng) -> f64 {
    (rng.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascending_counts_from_zero() {
        let f = numbered(&[2, 3, 4], Ordering::Ascending);
        assert_eq!(f.as_slice()[0], 0.0);
        assert_eq!(f.as_slice()[23], 23.0);
        assert_eq!(f.get(&[1, 0, 0]), Some(&12.0));
    }

    #[test]
    fn descending_counts_down_from_size() {
        let f = numbered(&[2, 3, 4], Ordering::Descending);
        assert_eq!(f.as_slice()[0], 24.0);
        assert_eq!(f.as_slice()[23], 1.0);
    }

    #[test]
    fn random_field_is_deterministic() {
        let a = random_field(&[3, 3, 3], 42);
        let b = random_field(&[3, 3, 3], 42);
        let c = random_field(&[3, 3, 3], 43);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(a.as_slice().iter().all(|&v| (0.0..1.0).contains(&v)));
    }
}
