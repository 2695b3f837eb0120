//! Field storage for gtcomp stencil computations.
//!
//! This crate defines the [`FieldRead`] / [`FieldWrite`] buffer traits,
//! an owned row-major [`Field`], borrowed [`FieldRef`] / [`FieldMut`]
//! wrappers over caller-owned slices, and the bounds-checked rank-3
//! windows ([`Window3`], [`Window3Mut`], [`SharedWindows3`]) through
//! which the engine reads and writes.
//!
//! # Layout
//!
//! All buffers are dense and row-major (C order): the last axis varies
//! fastest. A window precomputes its base offset and strides once, so
//! each cell access is a single affine map with no per-element slicing.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod field;
pub mod layout;
pub mod traits;
pub mod window;

pub use error::GridError;
pub use field::{Field, FieldMut, FieldRef, Shape};
pub use layout::{flat_index, row_major_strides};
pub use traits::{FieldRead, FieldWrite};
pub use window::{SharedWindows3, Window3, Window3Mut};
