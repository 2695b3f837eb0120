//! Computation configuration and validation.
//!
//! [`ComputationConfig`] is the builder input for a
//! [`Computation`](crate::Computation). [`validate()`](ComputationConfig::validate)
//! checks that the declared domain has a non-empty interior; the
//! descriptor constructors call it before accepting the config.

use gtcomp_core::{ComputationError, Extent3, AXIS_X, AXIS_Y, AXIS_Z, RANK};

/// Shape and halo of a computational domain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComputationConfig {
    /// Logical extent of the domain along (x, y, z).
    pub shape: Extent3,
    /// Halo width on x and y. z never has a halo.
    pub halo: usize,
}

impl ComputationConfig {
    /// Halo width used when none is given.
    pub const DEFAULT_HALO: usize = 1;

    /// Create a config for `shape` with the default halo width.
    pub fn new(shape: Extent3) -> Self {
        Self {
            shape,
            halo: Self::DEFAULT_HALO,
        }
    }

    /// Replace the halo width.
    pub fn with_halo(mut self, halo: usize) -> Self {
        self.halo = halo;
        self
    }

    /// Build a config from untyped integers, as received from a binding.
    ///
    /// Only checks what the types cannot express; call
    /// [`validate()`](Self::validate) for the interior check.
    ///
    /// # Errors
    ///
    /// [`ComputationError::InvalidDomain`] if `shape` does not have three
    /// axes, or if `halo` or any extent is negative.
    pub fn from_signed(shape: &[i64], halo: i64) -> Result<Self, ComputationError> {
        let invalid = |reason: String| ComputationError::InvalidDomain {
            shape: shape.to_vec(),
            halo,
            reason,
        };
        if shape.len() != RANK {
            return Err(invalid(format!(
                "shape must have {RANK} axes, got {}",
                shape.len()
            )));
        }
        let halo_width =
            usize::try_from(halo).map_err(|_| invalid("halo must be non-negative".into()))?;
        let mut extent = [0usize; RANK];
        for (axis, &v) in shape.iter().enumerate() {
            extent[axis] =
                usize::try_from(v).map_err(|_| invalid(format!("extent {v} is negative")))?;
        }
        Ok(Self {
            shape: Extent3(extent),
            halo: halo_width,
        })
    }

    /// Check that the domain interior is non-empty.
    ///
    /// # Errors
    ///
    /// Returns [`ComputationError::InvalidDomain`] if:
    /// - the x or y extent is not strictly greater than `2 * halo`
    /// - the z extent is zero
    pub fn validate(&self) -> Result<(), ComputationError> {
        let band = self.halo.checked_mul(2).ok_or_else(|| {
            ComputationError::invalid_domain(self.shape, self.halo, "halo width overflows")
        })?;
        for (axis, name) in [(AXIS_X, "x"), (AXIS_Y, "y")] {
            if self.shape[axis] <= band {
                return Err(ComputationError::invalid_domain(
                    self.shape,
                    self.halo,
                    format!(
                        "{name} extent {} must exceed twice the halo ({band})",
                        self.shape[axis]
                    ),
                ));
            }
        }
        if self.shape[AXIS_Z] == 0 {
            return Err(ComputationError::invalid_domain(
                self.shape,
                self.halo,
                "z extent must be at least 1",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_halo_is_one() {
        let config = ComputationConfig::new(Extent3::new(10, 20, 30));
        assert_eq!(config.halo, 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn x_equal_to_twice_halo_is_rejected() {
        let config = ComputationConfig::new(Extent3::new(2, 5, 8));
        let err = config.validate().unwrap_err();
        match err {
            ComputationError::InvalidDomain { shape, halo, reason } => {
                assert_eq!(shape, vec![2, 5, 8]);
                assert_eq!(halo, 1);
                assert!(reason.starts_with("x extent 2"), "got: {reason}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn y_equal_to_twice_halo_is_rejected() {
        let config = ComputationConfig::new(Extent3::new(5, 2, 8));
        assert!(matches!(
            config.validate(),
            Err(ComputationError::InvalidDomain { .. })
        ));
    }

    #[test]
    fn z_is_not_haloed() {
        assert!(ComputationConfig::new(Extent3::new(3, 3, 1)).validate().is_ok());
        assert!(ComputationConfig::new(Extent3::new(3, 3, 0)).validate().is_err());
    }

    #[test]
    fn wider_halo_needs_wider_domain() {
        let config = ComputationConfig::new(Extent3::new(4, 10, 2)).with_halo(2);
        assert!(config.validate().is_err());
        let config = ComputationConfig::new(Extent3::new(5, 10, 2)).with_halo(2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_halo_only_needs_nonempty_axes() {
        assert!(ComputationConfig::new(Extent3::new(1, 1, 1))
            .with_halo(0)
            .validate()
            .is_ok());
        assert!(ComputationConfig::new(Extent3::new(0, 1, 1))
            .with_halo(0)
            .validate()
            .is_err());
    }

    #[test]
    fn from_signed_rejects_negative_halo() {
        let err = ComputationConfig::from_signed(&[10, 20, 30], -1).unwrap_err();
        match err {
            ComputationError::InvalidDomain { shape, halo, .. } => {
                assert_eq!(shape, vec![10, 20, 30]);
                assert_eq!(halo, -1);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn from_signed_rejects_bad_shapes() {
        assert!(ComputationConfig::from_signed(&[10, 20], 1).is_err());
        assert!(ComputationConfig::from_signed(&[10, 20, 30, 1], 1).is_err());
        assert!(ComputationConfig::from_signed(&[10, -20, 30], 1).is_err());
    }

    #[test]
    fn from_signed_defers_interior_check() {
        let config = ComputationConfig::from_signed(&[2, 5, 8], 1).unwrap();
        assert_eq!(config.shape, Extent3::new(2, 5, 8));
        assert!(config.validate().is_err());
    }

    #[test]
    fn overflowing_halo_is_rejected() {
        let config = ComputationConfig::new(Extent3::new(10, 10, 10)).with_halo(usize::MAX);
        assert!(config.validate().is_err());
    }
}
