//! Execution of a [`Computation`] against buffer pairs.
//!
//! A run has two phases. First both windows are resolved: rank, the
//! full `[origin, origin + shape)` window of each buffer, and the read
//! footprint of the interior (shifted by [`SHIFT`](crate::SHIFT)) are
//! checked. Only then is the interior written, row by row along z.
//! Any error therefore leaves the output buffer exactly as it was.
//!
//! [`Computation::run_in_place`] reads and writes windows of a single
//! buffer, which may overlap.

use crate::computation::Computation;
use gtcomp_core::{BufferRole, ComputationError, Element, Origin3};
use gtcomp_grid::{FieldRead, FieldWrite, SharedWindows3, Window3, Window3Mut};
use tracing::debug;

/// Where the domain begins inside each buffer of a run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunOrigins {
    /// Origin of the domain in the output buffer.
    pub output: Origin3,
    /// Origin of the domain in the input buffer.
    pub input: Origin3,
}

impl RunOrigins {
    /// Both buffers addressed at the same origin.
    pub fn uniform(origin: Origin3) -> Self {
        Self {
            output: origin,
            input: origin,
        }
    }
}

impl Computation {
    /// Run with both buffers addressed from their first cell.
    ///
    /// Equivalent to [`run_with_origins`](Self::run_with_origins) with
    /// [`RunOrigins::default()`].
    ///
    /// # Errors
    ///
    /// See [`run_with_origins`](Self::run_with_origins).
    pub fn run<T, O, I>(&self, f_out: &mut O, f_in: &I) -> Result<(), ComputationError>
    where
        T: Element,
        O: FieldWrite<T> + ?Sized,
        I: FieldRead<T> + ?Sized,
    {
        self.run_with_origins(f_out, f_in, RunOrigins::default())
    }

    /// Write the diagonal-shift update over the domain interior.
    ///
    /// For every interior local index `(i, j, k)`:
    /// `f_out[out + (i, j, k)] = f_in[in + (i - 1, j - 1, k)]`.
    /// Halo cells of the output window and everything outside it are
    /// left untouched. `f_in` is never written.
    ///
    /// # Errors
    ///
    /// - [`ComputationError::ShapeMismatch`] if either buffer is not rank 3.
    /// - [`ComputationError::OutOfBounds`] if either addressed window, or
    ///   the input read footprint, does not fit inside its buffer.
    ///
    /// No cell is written when an error is returned.
    pub fn run_with_origins<T, O, I>(
        &self,
        f_out: &mut O,
        f_in: &I,
        origins: RunOrigins,
    ) -> Result<(), ComputationError>
    where
        T: Element,
        O: FieldWrite<T> + ?Sized,
        I: FieldRead<T> + ?Sized,
    {
        let extent = self.interior.extent();
        let src = Window3::new(f_in, BufferRole::Input, origins.input, self.shape)?
            .shifted(self.interior.read_start(), extent)?;
        let dst = Window3Mut::new(f_out, BufferRole::Output, origins.output, self.shape)?
            .into_shifted(self.interior.write_start(), extent)?;

        debug!(
            shape = %self.shape,
            halo = self.halo,
            output_origin = %origins.output,
            input_origin = %origins.input,
            cells = extent.cell_count(),
            "running diagonal-shift stencil"
        );

        apply(dst, src);
        Ok(())
    }

    /// Run with input and output windows in the same buffer.
    ///
    /// The domain is read at `origins.input` and written at
    /// `origins.output`, both inside `field`. The windows may overlap;
    /// every written cell receives the value its source cell held before
    /// the run. Only the interior of the output window is written.
    ///
    /// # Errors
    ///
    /// As [`run_with_origins`](Self::run_with_origins), with input-window
    /// errors labelled [`BufferRole::Input`] and output-window errors
    /// [`BufferRole::Output`]. No cell is written when an error is returned.
    pub fn run_in_place<T, F>(
        &self,
        field: &mut F,
        origins: RunOrigins,
    ) -> Result<(), ComputationError>
    where
        T: Element,
        F: FieldWrite<T> + ?Sized,
    {
        let extent = self.interior.extent();
        let windows = SharedWindows3::new(field, origins.input, origins.output, self.shape)?
            .into_shifted(self.interior.read_start(), self.interior.write_start(), extent)?;

        debug!(
            shape = %self.shape,
            halo = self.halo,
            output_origin = %origins.output,
            input_origin = %origins.input,
            cells = extent.cell_count(),
            overlapping = windows.overlaps(),
            "running diagonal-shift stencil in place"
        );

        windows.copy_rows();
        Ok(())
    }
}

/// Copy `src` into `dst` one contiguous z-run at a time.
///
/// Both windows have the same extent.
fn apply<T: Element>(mut dst: Window3Mut<'_, T>, src: Window3<'_, T>) {
    let extent = dst.extent();
    for i in 0..extent[0] {
        for j in 0..extent[1] {
            dst.row_mut(i, j).copy_from_slice(src.row(i, j));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gtcomp_core::Extent3;
    use gtcomp_grid::Field;

    fn numbered(shape: &[usize]) -> Field<f64> {
        let n: usize = shape.iter().product();
        Field::from_vec(shape, (0..n).map(|v| v as f64).collect()).unwrap()
    }

    #[test]
    fn writes_shifted_interior() {
        let comp = Computation::new(Extent3::new(4, 4, 2), 1).unwrap();
        let f_in = numbered(&[4, 4, 2]);
        let mut f_out = Field::new(&[4, 4, 2], -1.0);

        comp.run(&mut f_out, &f_in).unwrap();

        for i in 0..4 {
            for j in 0..4 {
                for k in 0..2 {
                    let got = *f_out.get(&[i, j, k]).unwrap();
                    if (1..3).contains(&i) && (1..3).contains(&j) {
                        assert_eq!(got, *f_in.get(&[i - 1, j - 1, k]).unwrap());
                    } else {
                        assert_eq!(got, -1.0, "halo cell ({i},{j},{k}) was written");
                    }
                }
            }
        }
    }

    #[test]
    fn input_is_not_modified() {
        let comp = Computation::new(Extent3::new(5, 5, 3), 1).unwrap();
        let f_in = numbered(&[5, 5, 3]);
        let before = f_in.clone();
        let mut f_out = Field::new(&[5, 5, 3], 0.0);
        comp.run(&mut f_out, &f_in).unwrap();
        assert_eq!(f_in, before);
    }

    #[test]
    fn rank_mismatch_is_reported_per_role() {
        let comp = Computation::new(Extent3::new(3, 3, 1), 1).unwrap();
        let flat = Field::new(&[3, 3], 0.0f64);
        let cube = Field::new(&[3, 3, 1], 0.0f64);

        let mut out = cube.clone();
        let err = comp.run(&mut out, &flat).unwrap_err();
        assert!(matches!(
            err,
            ComputationError::ShapeMismatch {
                role: BufferRole::Input,
                ..
            }
        ));

        let mut out = flat.clone();
        let err = comp.run(&mut out, &cube).unwrap_err();
        assert!(matches!(
            err,
            ComputationError::ShapeMismatch {
                role: BufferRole::Output,
                ..
            }
        ));
    }

    #[test]
    fn out_of_bounds_output_writes_nothing() {
        let comp = Computation::new(Extent3::new(5, 6, 7), 1).unwrap();
        let f_in = numbered(&[10, 20, 30]);
        let mut f_out = Field::new(&[10, 20, 30], 0.5);
        let before = f_out.clone();

        let err = comp
            .run_with_origins(
                &mut f_out,
                &f_in,
                RunOrigins {
                    output: Origin3::new(6, 0, 0),
                    input: Origin3::ZERO,
                },
            )
            .unwrap_err();
        assert!(matches!(
            err,
            ComputationError::OutOfBounds {
                role: BufferRole::Output,
                ..
            }
        ));
        assert_eq!(f_out, before);
    }

    #[test]
    fn zero_halo_reads_before_input_origin() {
        let comp = Computation::new(Extent3::new(3, 3, 3), 0).unwrap();
        let f_in = numbered(&[4, 4, 3]);
        let mut f_out = Field::new(&[4, 4, 3], 0.0);

        let err = comp.run(&mut f_out, &f_in).unwrap_err();
        assert!(matches!(
            err,
            ComputationError::OutOfBounds {
                role: BufferRole::Input,
                start: [-1, -1, 0],
                ..
            }
        ));

        comp.run_with_origins(
            &mut f_out,
            &f_in,
            RunOrigins {
                output: Origin3::ZERO,
                input: Origin3::new(1, 1, 0),
            },
        )
        .unwrap();
        // With no halo every domain cell is written from its diagonal neighbour.
        assert_eq!(f_out.get(&[0, 0, 2]), f_in.get(&[0, 0, 2]));
        assert_eq!(f_out.get(&[2, 2, 1]), f_in.get(&[2, 2, 1]));
    }

    #[test]
    fn uniform_origins() {
        let o = Origin3::new(1, 2, 3);
        assert_eq!(
            RunOrigins::uniform(o),
            RunOrigins {
                output: o,
                input: o
            }
        );
    }

    #[test]
    fn in_place_disjoint_matches_two_buffer_run() {
        let comp = Computation::new(Extent3::new(4, 4, 3), 1).unwrap();
        let mut shared = numbered(&[8, 4, 3]);
        let origins = RunOrigins {
            output: Origin3::new(4, 0, 0),
            input: Origin3::ZERO,
        };

        let f_in = shared.clone();
        let mut expected = shared.clone();
        comp.run_with_origins(&mut expected, &f_in, origins).unwrap();

        comp.run_in_place(&mut shared, origins).unwrap();
        assert_eq!(shared, expected);
    }

    #[test]
    fn in_place_overlap_reads_pre_run_values() {
        let comp = Computation::new(Extent3::new(5, 5, 2), 1).unwrap();
        let mut shared = numbered(&[5, 5, 2]);
        let before = shared.clone();

        comp.run_in_place(&mut shared, RunOrigins::default()).unwrap();

        let mut expected = before.clone();
        comp.run(&mut expected, &before).unwrap();
        assert_eq!(shared, expected);
    }

    #[test]
    fn in_place_out_of_bounds_writes_nothing() {
        let comp = Computation::new(Extent3::new(4, 4, 4), 1).unwrap();
        let mut shared = numbered(&[6, 6, 4]);
        let before = shared.clone();

        let err = comp
            .run_in_place(
                &mut shared,
                RunOrigins {
                    output: Origin3::new(3, 0, 0),
                    input: Origin3::ZERO,
                },
            )
            .unwrap_err();
        assert!(matches!(
            err,
            ComputationError::OutOfBounds {
                role: BufferRole::Output,
                ..
            }
        ));
        assert_eq!(shared, before);
    }
}
