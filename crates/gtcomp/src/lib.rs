//! gtcomp: halo-aware 3-D stencil computations.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all gtcomp sub-crates. For most users, adding `gtcomp` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use gtcomp::prelude::*;
//!
//! // Ascending input, constant output.
//! let f_in = Field::from_fn(&[10, 20, 30], |idx| (idx[0] * 600 + idx[1] * 30 + idx[2]) as f64);
//! let mut f_out = Field::new(&[10, 20, 30], -1.0);
//!
//! // A 5x6x7 domain with a one-cell halo, replayed at shifted origins.
//! let comp = Computation::new(Extent3::new(5, 6, 7), 1).unwrap();
//! comp.run_with_origins(
//!     &mut f_out,
//!     &f_in,
//!     RunOrigins { output: Origin3::new(5, 4, 3), input: Origin3::new(3, 4, 5) },
//! )
//! .unwrap();
//!
//! // First interior cell reads the input one back along x and y.
//! assert_eq!(f_out.get(&[6, 5, 3]), f_in.get(&[3, 4, 5]));
//! // The halo band is untouched.
//! assert_eq!(f_out.get(&[5, 4, 3]), Some(&-1.0));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `gtcomp-core` | Index triples, `Element`, errors |
//! | [`grid`] | `gtcomp-grid` | Buffers, buffer traits, rank-3 windows |
//! | [`engine`] | `gtcomp-engine` | `Computation`, `run`, `copy` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Index triples, the element bound, and error types.
pub mod types {
    pub use gtcomp_core::*;
}

/// Field buffers and bounds-checked windows.
pub mod grid {
    pub use gtcomp_grid::*;
}

/// Computation descriptors and execution.
pub mod engine {
    pub use gtcomp_engine::*;
}

/// Commonly used types, re-exported for glob import.
pub mod prelude {
    pub use gtcomp_core::{BufferRole, ComputationError, Element, Extent3, Origin3};
    pub use gtcomp_engine::{copy, Computation, ComputationConfig, InteriorBounds, RunOrigins};
    pub use gtcomp_grid::{Field, FieldMut, FieldRead, FieldRef, FieldWrite};
}
