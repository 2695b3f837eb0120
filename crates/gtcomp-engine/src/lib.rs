//! Stencil execution engine for gtcomp.
//!
//! A [`Computation`] declares a 3-D domain shape and a halo width once.
//! It is then replayed with [`Computation::run`] or
//! [`Computation::run_with_origins`] against any number of buffer pairs,
//! each addressed at its own origin. Every run writes the diagonal-shift
//! update over the domain interior and leaves the halo band of the
//! output untouched.
//!
//! [`copy`] is the plain full-buffer copy used as a baseline.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod computation;
pub mod config;
pub mod copy;
pub mod interior;
pub mod run;

pub use computation::Computation;
pub use config::ComputationConfig;
pub use copy::copy;
pub use interior::{InteriorBounds, SHIFT};
pub use run::RunOrigins;
