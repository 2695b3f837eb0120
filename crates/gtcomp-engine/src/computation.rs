//! The [`Computation`] descriptor.

use crate::config::ComputationConfig;
use crate::interior::InteriorBounds;
use gtcomp_core::{ComputationError, Extent3};

/// A validated domain shape and halo width.
///
/// Holds no buffers and never changes after construction, so one
/// descriptor may drive any number of runs, including concurrent runs
/// against disjoint buffers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Computation {
    pub(crate) shape: Extent3,
    pub(crate) halo: usize,
    pub(crate) interior: InteriorBounds,
}

impl Computation {
    /// Declare a computation over `shape` with `halo` cells excluded on
    /// each side of x and y.
    ///
    /// # Errors
    ///
    /// [`ComputationError::InvalidDomain`] if the interior would be empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use gtcomp_core::Extent3;
    /// use gtcomp_engine::Computation;
    ///
    /// let comp = Computation::new(Extent3::new(10, 20, 30), 1).unwrap();
    /// assert_eq!(comp.interior().cell_count(), 8 * 18 * 30);
    ///
    /// assert!(Computation::new(Extent3::new(2, 5, 8), 1).is_err());
    /// ```
    pub fn new(shape: Extent3, halo: usize) -> Result<Self, ComputationError> {
        Self::from_config(ComputationConfig { shape, halo })
    }

    /// Build a computation from a [`ComputationConfig`].
    ///
    /// # Errors
    ///
    /// [`ComputationError::InvalidDomain`] if the config fails validation.
    pub fn from_config(config: ComputationConfig) -> Result<Self, ComputationError> {
        config.validate()?;
        Ok(Self {
            shape: config.shape,
            halo: config.halo,
            interior: InteriorBounds::new(config.shape, config.halo),
        })
    }

    /// Logical extent of the domain.
    pub fn shape(&self) -> Extent3 {
        self.shape
    }

    /// Halo width on x and y.
    pub fn halo(&self) -> usize {
        self.halo
    }

    /// Domain-local cells written by a run.
    pub fn interior(&self) -> InteriorBounds {
        self.interior
    }

    /// Number of domain cells a run leaves untouched.
    pub fn halo_cell_count(&self) -> usize {
        self.shape.cell_count() - self.interior.cell_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_round_trip() {
        let comp = Computation::new(Extent3::new(5, 6, 7), 1).unwrap();
        assert_eq!(comp.shape(), Extent3::new(5, 6, 7));
        assert_eq!(comp.halo(), 1);
    }

    #[test]
    fn halo_cell_count_is_complement() {
        let comp = Computation::new(Extent3::new(3, 5, 8), 1).unwrap();
        // Interior is 1 x 3 x 8.
        assert_eq!(comp.interior().cell_count(), 24);
        assert_eq!(comp.halo_cell_count(), 3 * 5 * 8 - 24);
    }

    #[test]
    fn rejects_empty_interior() {
        let err = Computation::new(Extent3::new(2, 5, 8), 1).unwrap_err();
        assert!(matches!(err, ComputationError::InvalidDomain { .. }));
    }

    #[test]
    fn from_config_matches_new() {
        let config = ComputationConfig::new(Extent3::new(10, 20, 30));
        assert_eq!(
            Computation::from_config(config).unwrap(),
            Computation::new(Extent3::new(10, 20, 30), 1).unwrap()
        );
    }

    #[test]
    fn descriptor_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Computation>();
    }
}
