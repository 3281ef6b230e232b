//! The seam where a real data-parallel backend plugs in (spec §6).
//!
//! Device enumeration, context/queue lifecycle, and kernel-source
//! templating are external per the spec's scope; this module only defines
//! the trait the wavefront scheduler dispatches through, plus the one
//! concrete implementation this crate ships (`ThreadPoolAccelerator`).

pub mod threadpool;

pub use threadpool::ThreadPoolAccelerator;

use crate::error::DeviceError;
use crate::primitives::{Symbol, Weight};

/// One tile's borrowed inputs and in-place boundary outputs, handed to an
/// accelerator for a single wave.
pub struct TileJob<'a> {
    pub base: &'a [Symbol],
    pub latest: &'a [Symbol],
    pub ver: &'a mut [Weight],
    pub hor: &'a mut [Weight],
}

/// A pluggable data-parallel backend. The wavefront scheduler calls
/// `run_wave` once per wave with the jobs of every tile active in that
/// wave; implementations must evaluate each job per the tile contract
/// (spec §4.1) and return only once every job in the wave has completed,
/// matching the original's `clFinish` barrier between waves.
pub trait Accelerator: Send + Sync {
    fn run_wave(&self, jobs: Vec<TileJob<'_>>) -> Result<(), DeviceError>;
}
