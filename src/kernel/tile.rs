//! The tile contract (spec §4.1): given left/top boundary weights and two
//! input slices, fill in the right/bottom boundary weights in place.
//!
//! Grounded in `CpuLCS_MinMax` (`original_source/cpp/MegaLCSLib/OpenCL/
//! Mega.Cpu.cpp`): on a match the corner weight is `min(left, top) + 1`,
//! otherwise `max(left, top)`. This is the unconstrained variant — it does
//! not assume `verWeights[0] == horWeights[0]` the way the constrained
//! `CpuLCS_RollLeftTop` variant does (see DESIGN.md).

use crate::error::LcsError;
use crate::primitives::{Symbol, Weight};

fn validate(base: &[Symbol], latest: &[Symbol], ver: &[Weight], hor: &[Weight]) -> Result<(), LcsError> {
    if base.is_empty() {
        return Err(LcsError::EmptyBase);
    }
    if latest.is_empty() {
        return Err(LcsError::EmptyLatest);
    }
    if ver.is_empty() {
        return Err(LcsError::EmptyVerWeights);
    }
    if hor.is_empty() {
        return Err(LcsError::EmptyHorWeights);
    }
    if base.len() != ver.len() {
        return Err(LcsError::BaseWeightLengthMismatch {
            base_len: base.len(),
            ver_len: ver.len(),
        });
    }
    if latest.len() != hor.len() {
        return Err(LcsError::LatestWeightLengthMismatch {
            latest_len: latest.len(),
            hor_len: hor.len(),
        });
    }
    Ok(())
}

#[inline]
fn corner(left: Weight, top: Weight, matched: bool) -> Weight {
    if matched {
        left.min(top) + 1
    } else {
        left.max(top)
    }
}

/// Row-major tile evaluation: walks rows of `base` outer, columns of
/// `latest` inner, using `ver[b]` as the rolling "left" register across a
/// row the same way the reference implementation does.
pub(crate) fn apply_tile_row_major(
    base: &[Symbol],
    latest: &[Symbol],
    ver: &mut [Weight],
    hor: &mut [Weight],
) -> Result<(), LcsError> {
    validate(base, latest, ver, hor)?;

    for (b, &base_sym) in base.iter().enumerate() {
        let mut left = ver[b];
        for (l, &latest_sym) in latest.iter().enumerate() {
            let top = hor[l];
            let weight = corner(left, top, base_sym == latest_sym);
            hor[l] = weight;
            left = weight;
        }
        ver[b] = left;
    }
    Ok(())
}

/// Intra-tile wavefront evaluation: cells on the same anti-diagonal
/// `b + l = d` depend only on cells from diagonal `d - 1`, so they can be
/// computed in any order — or concurrently, on an accelerator — before
/// crossing a barrier to the next diagonal. No two cells on one diagonal
/// share a row or a column, so writing `ver[b]`/`hor[l]` in place never
/// aliases within a diagonal.
pub(crate) fn apply_tile_antidiagonal(
    base: &[Symbol],
    latest: &[Symbol],
    ver: &mut [Weight],
    hor: &mut [Weight],
) -> Result<(), LcsError> {
    validate(base, latest, ver, hor)?;

    let rows = base.len();
    let cols = latest.len();
    let total_diagonals = rows + cols - 1;

    for d in 0..total_diagonals {
        let b_min = d.saturating_sub(cols - 1);
        let b_max = d.min(rows - 1);
        for b in b_min..=b_max {
            let l = d - b;
            let left = ver[b];
            let top = hor[l];
            let weight = corner(left, top, base[b] == latest[l]);
            hor[l] = weight;
            ver[b] = weight;
        }
    }
    Ok(())
}
