//! The fusion driver (spec §4.4), grounded in `MegaLCS_Fusion`
//! (`original_source/cpp/MegaLCSLib/OpenCL/Mega.Fusion.cpp`): decomposes
//! an arbitrary `m x n` region into a regular interior grid (LT) plus up
//! to three remainder strips (RT, LB, RB), offloads LT to the wavefront
//! scheduler, and evaluates the remainders on the CPU.

use rayon::join;

use crate::accelerator::Accelerator;
use crate::config::{FusionConfig, TileSize};
use crate::cpu::cpu_tile_eval;
use crate::error::LcsError;
use crate::primitives::{BoundaryWeights, Symbol, Weight};
use crate::wavefront::host_lcs_wavefront;

/// Result of running the fusion driver over one region.
pub struct FusionOutcome {
    pub boundaries: BoundaryWeights,
    /// `true` when the whole region was small enough (or no accelerator
    /// was available) that it was evaluated directly on the CPU, without
    /// ever engaging the wavefront scheduler.
    pub used_cpu_only: bool,
}

impl FusionOutcome {
    pub fn lcs_len(&self) -> Weight {
        self.boundaries.corner_weight()
    }
}

/// Evaluates `base x latest` starting from zero boundaries, decomposing
/// into LT/RT/LB/RB as needed.
pub fn mega_lcs_fusion(
    base: &[Symbol],
    latest: &[Symbol],
    tile_size: TileSize,
    accelerator: Option<&dyn Accelerator>,
    config: &FusionConfig,
) -> Result<FusionOutcome, LcsError> {
    if base.is_empty() {
        return Err(LcsError::EmptyBase);
    }
    if latest.is_empty() {
        return Err(LcsError::EmptyLatest);
    }

    let step = tile_size.get();
    let boundaries = BoundaryWeights::zeroed(base.len(), latest.len());

    // Too small to be worth tiling, or no accelerator offered: evaluate
    // the whole region directly on the host, matching the original's
    // early-out for `len <= step || device == null`.
    if base.len() <= step || latest.len() <= step || accelerator.is_none() {
        let (mut ver, mut hor) = boundaries.into_parts();
        cpu_tile_eval(base, latest, &mut ver, &mut hor)?;
        return Ok(FusionOutcome {
            boundaries: BoundaryWeights::new(ver, hor),
            used_cpu_only: true,
        });
    }

    let base_slice_count = base.len() / step;
    let latest_slice_count = latest.len() / step;
    let base_lt_size = base_slice_count * step;
    let latest_lt_size = latest_slice_count * step;
    let base_remainder = base.len() - base_lt_size;
    let latest_remainder = latest.len() - latest_lt_size;

    let (mut ver, mut hor) = boundaries.into_parts();

    {
        let (lt_base, _) = base.split_at(base_lt_size);
        let (lt_latest, _) = latest.split_at(latest_lt_size);
        let (lt_ver, _) = ver.split_at_mut(base_lt_size);
        let (lt_hor, _) = hor.split_at_mut(latest_lt_size);
        host_lcs_wavefront(
            lt_base,
            lt_latest,
            lt_ver,
            lt_hor,
            tile_size,
            accelerator,
            config,
        )?;
    }

    // RT depends only on LT's right edge (rows 0..base_lt_size); LB
    // depends only on LT's bottom edge (cols 0..latest_lt_size). Neither
    // touches the other's slice of the boundary buffers, so they run
    // concurrently.
    let rt_top: Vec<Weight> = hor[latest_lt_size..].to_vec();
    let lb_left: Vec<Weight> = ver[base_lt_size..].to_vec();
    let mut rt_ver: Vec<Weight> = ver[..base_lt_size].to_vec();
    let mut lb_hor: Vec<Weight> = hor[..latest_lt_size].to_vec();

    let run_rt = |rt_ver: &mut [Weight], rt_hor: &mut [Weight]| -> Result<(), LcsError> {
        if latest_remainder == 0 {
            return Ok(());
        }
        let rt_base = &base[..base_lt_size];
        let rt_latest = &latest[latest_lt_size..];
        cpu_tile_eval(rt_base, rt_latest, rt_ver, rt_hor)?;
        Ok(())
    };
    let run_lb = |lb_ver: &mut [Weight], lb_hor: &mut [Weight]| -> Result<(), LcsError> {
        if base_remainder == 0 {
            return Ok(());
        }
        let lb_base = &base[base_lt_size..];
        cpu_tile_eval(lb_base, &latest[..latest_lt_size], lb_ver, lb_hor)?;
        Ok(())
    };

    let mut rt_hor = rt_top;
    let mut lb_ver = lb_left;

    let (rt_result, lb_result) = join(
        || run_rt(&mut rt_ver, &mut rt_hor),
        || run_lb(&mut lb_ver, &mut lb_hor),
    );
    rt_result?;
    lb_result?;

    if base_remainder > 0 && latest_remainder > 0 {
        let rb_base = &base[base_lt_size..];
        let rb_latest = &latest[latest_lt_size..];
        let mut rb_ver = lb_ver[..].to_vec();
        let mut rb_hor = rt_hor[..].to_vec();
        cpu_tile_eval(rb_base, rb_latest, &mut rb_ver, &mut rb_hor)?;
        ver[base_lt_size..].copy_from_slice(&rb_ver);
        hor[latest_lt_size..].copy_from_slice(&rb_hor);
        ver[..base_lt_size].copy_from_slice(&rt_ver);
        hor[..latest_lt_size].copy_from_slice(&lb_hor);
    } else if latest_remainder > 0 {
        // No bottom remainder: RT already holds the final right edge for
        // rows 0..base_lt_size, and LT's bottom edge is final for cols
        // 0..latest_lt_size.
        ver[..base_lt_size].copy_from_slice(&rt_ver);
        hor[latest_lt_size..].copy_from_slice(&rt_hor);
    } else if base_remainder > 0 {
        ver[base_lt_size..].copy_from_slice(&lb_ver);
        hor[..latest_lt_size].copy_from_slice(&lb_hor);
    }

    Ok(FusionOutcome {
        boundaries: BoundaryWeights::new(ver, hor),
        used_cpu_only: false,
    })
}
