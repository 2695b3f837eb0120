//! Error types for descriptor construction and stencil execution.
//!
//! Every error is detected before any cell of the output buffer is
//! written. A caller that receives an `Err` can assume its buffers are
//! exactly as they were before the call.

use crate::index::{Extent3, Origin3};
use std::error::Error;
use std::fmt;

/// Which buffer of a `run` or `copy` call an error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BufferRole {
    /// The buffer being read (`f_in`).
    Input,
    /// The buffer being written (`f_out`).
    Output,
}

impl fmt::Display for BufferRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Input => write!(f, "input"),
            Self::Output => write!(f, "output"),
        }
    }
}

/// Errors from constructing a computation or executing it against buffers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ComputationError {
    /// The declared domain has an empty (or negative) interior.
    InvalidDomain {
        /// The requested domain shape, as given by the caller.
        shape: Vec<i64>,
        /// The requested halo width, as given by the caller.
        halo: i64,
        /// What went wrong.
        reason: String,
    },
    /// A buffer's rank or shape is incompatible with the operation.
    ShapeMismatch {
        /// Which buffer is at fault.
        role: BufferRole,
        /// Human-readable description of the expected shape.
        expected: String,
        /// The buffer's actual shape.
        actual: Vec<usize>,
    },
    /// An addressed window does not fit inside its buffer.
    OutOfBounds {
        /// Which buffer is at fault.
        role: BufferRole,
        /// First cell of the addressed window, per axis. May be negative
        /// when the read footprint reaches before the buffer start.
        start: [i64; 3],
        /// Extent of the addressed window.
        extent: Extent3,
        /// The buffer's actual shape.
        buffer_shape: Vec<usize>,
    },
}

impl ComputationError {
    /// Build an [`InvalidDomain`](Self::InvalidDomain) error from an
    /// already-typed extent.
    pub fn invalid_domain(shape: Extent3, halo: usize, reason: impl Into<String>) -> Self {
        Self::InvalidDomain {
            shape: shape.0.iter().map(|&v| v as i64).collect(),
            halo: halo as i64,
            reason: reason.into(),
        }
    }

    /// Build an [`OutOfBounds`](Self::OutOfBounds) error for a window
    /// starting at a non-negative origin.
    pub fn out_of_bounds(
        role: BufferRole,
        origin: Origin3,
        extent: Extent3,
        buffer_shape: &[usize],
    ) -> Self {
        Self::OutOfBounds {
            role,
            start: origin.0.map(|v| v as i64),
            extent,
            buffer_shape: buffer_shape.to_vec(),
        }
    }
}

impl fmt::Display for ComputationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDomain {
                shape,
                halo,
                reason,
            } => {
                write!(f, "invalid domain {shape:?} with halo {halo}: {reason}")
            }
            Self::ShapeMismatch {
                role,
                expected,
                actual,
            } => {
                write!(f, "{role} buffer shape {actual:?} does not match: expected {expected}")
            }
            Self::OutOfBounds {
                role,
                start,
                extent,
                buffer_shape,
            } => {
                write!(
                    f,
                    "{role} window starting at {start:?} with extent {extent} \
                     exceeds buffer shape {buffer_shape:?}"
                )
            }
        }
    }
}

impl Error for ComputationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_invalid_domain() {
        let err = ComputationError::invalid_domain(Extent3::new(2, 5, 8), 1, "empty interior on x");
        assert_eq!(
            err.to_string(),
            "invalid domain [2, 5, 8] with halo 1: empty interior on x"
        );
    }

    #[test]
    fn display_shape_mismatch_names_role() {
        let err = ComputationError::ShapeMismatch {
            role: BufferRole::Output,
            expected: "rank 3".into(),
            actual: vec![4, 4],
        };
        let msg = err.to_string();
        assert!(msg.starts_with("output buffer"), "got: {msg}");
        assert!(msg.contains("rank 3"));
    }

    #[test]
    fn display_out_of_bounds() {
        let err = ComputationError::out_of_bounds(
            BufferRole::Input,
            Origin3::new(7, 15, 23),
            Extent3::new(5, 6, 7),
            &[10, 20, 30],
        );
        assert_eq!(
            err.to_string(),
            "input window starting at [7, 15, 23] with extent (5, 6, 7) \
             exceeds buffer shape [10, 20, 30]"
        );
    }
}
