//! The CPU tile evaluator (spec §4.2): the host-side handler for arbitrary
//! rectangles, used both as the no-accelerator fallback and for the
//! fusion driver's remainder strips.

use crate::error::LcsError;
use crate::kernel::apply_tile_row_major;
use crate::primitives::{Symbol, Weight};

/// Evaluates one rectangular region on the host. Unlike the tile kernel
/// this places no upper bound on `base`/`latest` length — it is the
/// fallback path used whenever a region is too small to be worth handing
/// to an accelerator, or when no accelerator is available at all.
pub fn cpu_tile_eval(
    base: &[Symbol],
    latest: &[Symbol],
    ver: &mut [Weight],
    hor: &mut [Weight],
) -> Result<(), LcsError> {
    apply_tile_row_major(base, latest, ver, hor)
}
