//! Core types for the gtcomp stencil framework.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the index triples that address a 3-D computational domain, the
//! [`Element`] scalar bound shared by every buffer, and the
//! [`ComputationError`] type returned by every fallible operation.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod element;
pub mod error;
pub mod index;

pub use element::Element;
pub use error::{BufferRole, ComputationError};
pub use index::{Extent3, Origin3, AXIS_X, AXIS_Y, AXIS_Z, RANK};
