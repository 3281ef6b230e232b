//! A rayon-backed stand-in for a real device. Grounded in the checkerboard
//! phase-tile scheduling pattern used for independent, same-phase work
//! units elsewhere in the retrieved corpus (`scheduling/blitter.rs`'s
//! `phase_tiles.par_iter().for_each(...)`): tiles in one wave have no data
//! dependency on each other, so they are evaluated with `rayon`'s
//! `par_iter`.

use rayon::prelude::*;

use super::{Accelerator, TileJob};
use crate::error::DeviceError;
use crate::kernel::apply_tile_antidiagonal;

/// Evaluates every tile of a wave concurrently on the host thread pool,
/// one intra-tile anti-diagonal sweep per tile (spec §4.1, "Parallel
/// realization").
#[derive(Debug, Default)]
pub struct ThreadPoolAccelerator;

impl ThreadPoolAccelerator {
    pub fn new() -> Self {
        Self
    }
}

impl Accelerator for ThreadPoolAccelerator {
    fn run_wave(&self, jobs: Vec<TileJob<'_>>) -> Result<(), DeviceError> {
        jobs.into_par_iter()
            .try_for_each(|job| {
                apply_tile_antidiagonal(job.base, job.latest, job.ver, job.hor)
                    .map_err(|_| DeviceError::KernelEnqueueFailed { wave: 0 })
            })
    }
}
