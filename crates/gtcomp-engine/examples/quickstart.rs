//! Declare one computation and replay it against two windows of a buffer.
//!
//! Run with `RUST_LOG=debug cargo run -p gtcomp-engine --example quickstart`
//! to see the engine's run diagnostics.

use gtcomp_core::{Extent3, Origin3};
use gtcomp_engine::{Computation, RunOrigins};
use gtcomp_grid::Field;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let domain = [10, 20, 30];
    let f_in = Field::from_fn(&domain, |idx| (idx[0] * 10_000 + idx[1] * 100 + idx[2]) as f64);
    let mut f_out = Field::new(&domain, -1.0);

    let comp = Computation::new(Extent3::new(5, 6, 7), 1)?;
    println!(
        "domain {} halo {}: {} interior cells, {} halo cells",
        comp.shape(),
        comp.halo(),
        comp.interior().cell_count(),
        comp.halo_cell_count()
    );

    comp.run_with_origins(
        &mut f_out,
        &f_in,
        RunOrigins {
            output: Origin3::new(5, 4, 3),
            input: Origin3::new(3, 4, 5),
        },
    )?;
    comp.run_with_origins(&mut f_out, &f_in, RunOrigins::uniform(Origin3::ZERO))?;

    let written = f_out.as_slice().iter().filter(|&&v| v >= 0.0).count();
    println!("cells written: {written}");
    println!(
        "f_out[6, 5, 3] = {:?} (read from f_in[3, 4, 5])",
        f_out.get(&[6, 5, 3])
    );

    // A window that runs off the end of the buffer is rejected up front.
    let err = comp
        .run_with_origins(&mut f_out, &f_in, RunOrigins::uniform(Origin3::new(6, 0, 0)))
        .unwrap_err();
    println!("rejected: {err}");
    Ok(())
}
