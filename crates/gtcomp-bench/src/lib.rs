//! Benchmark profiles for gtcomp.
//!
//! - [`reference_profile`]: 64x64x64 domain, halo 1, run over the whole buffer
//! - [`subdomain_profile`]: 32x32x32 domain replayed at shifted origins
//!   inside a 64x64x64 buffer

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use gtcomp_core::{ComputationError, Extent3, Origin3};
use gtcomp_engine::{Computation, RunOrigins};

/// Buffer shape shared by every profile.
pub const BUFFER_SHAPE: [usize; 3] = [64, 64, 64];

/// Whole-buffer computation with halo 1.
pub fn reference_profile() -> Result<Computation, ComputationError> {
    Computation::new(Extent3(BUFFER_SHAPE), 1)
}

/// A half-size computation and a set of input/output origin pairs
/// that keep every window inside [`BUFFER_SHAPE`].
pub fn subdomain_profile() -> Result<(Computation, Vec<RunOrigins>), ComputationError> {
    let comp = Computation::new(Extent3::new(32, 32, 32), 1)?;
    let origins = [0usize, 8, 16, 32]
        .iter()
        .map(|&o| RunOrigins {
            output: Origin3::new(o, o, o),
            input: Origin3::new(32 - o, o, 32 - o),
        })
        .collect();
    Ok((comp, origins))
}
