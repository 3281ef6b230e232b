//! The host-side wavefront scheduler (spec §4.3), grounded in
//! `HostLCS_WaveFront` (`original_source/cpp/MegaLCSLib/OpenCL/
//! Mega.Host.cpp`): a region that is an exact multiple of the tile size is
//! partitioned into a `Bs x Ls` grid of tiles, and tiles on the same
//! anti-diagonal `i + j = wave` are dispatched together, one wave at a
//! time, with a barrier between waves.

use tracing::debug;

use crate::accelerator::{Accelerator, TileJob};
use crate::config::{FusionConfig, TileSize};
use crate::cpu::cpu_tile_eval;
use crate::error::LcsError;
use crate::primitives::{Symbol, Weight};

fn require_multiple(axis: &'static str, value: usize, tile_size: usize) -> Result<usize, LcsError> {
    if tile_size == 0 || value % tile_size != 0 {
        return Err(LcsError::NotMultipleOfTileSize {
            axis,
            value,
            tile_size,
        });
    }
    Ok(value / tile_size)
}

/// Evaluates a `base.len() x latest.len()` region, both dimensions an
/// exact multiple of `tile_size`, dispatching each wave's tiles to
/// `accelerator` when present or to the CPU evaluator sequentially
/// otherwise.
pub fn host_lcs_wavefront(
    base: &[Symbol],
    latest: &[Symbol],
    ver: &mut [Weight],
    hor: &mut [Weight],
    tile_size: TileSize,
    accelerator: Option<&dyn Accelerator>,
    config: &FusionConfig,
) -> Result<(), LcsError> {
    if base.is_empty() {
        return Err(LcsError::EmptyBase);
    }
    if latest.is_empty() {
        return Err(LcsError::EmptyLatest);
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

    let s = tile_size.get();
    let base_slice_count = require_multiple("base", base.len(), s)?;
    let latest_slice_count = require_multiple("latest", latest.len(), s)?;

    let base_chunks: Vec<&[Symbol]> = base.chunks(s).collect();
    let latest_chunks: Vec<&[Symbol]> = latest.chunks(s).collect();

    let total_waves = base_slice_count + latest_slice_count - 1;

    for wave in 0..total_waves {
        let latest_id_min = wave.saturating_sub(base_slice_count - 1);
        let latest_id_max = wave.min(latest_slice_count - 1);
        if latest_id_min > latest_id_max {
            continue;
        }

        let active: Vec<(usize, usize)> = (latest_id_min..=latest_id_max)
            .map(|j| (wave - j, j))
            .collect();

        let mut ver_wave_chunks: Vec<Option<&mut [Weight]>> =
            ver.chunks_mut(s).map(Some).collect();
        let mut hor_wave_chunks: Vec<Option<&mut [Weight]>> =
            hor.chunks_mut(s).map(Some).collect();

        let mut jobs = Vec::with_capacity(active.len());
        for &(i, j) in &active {
            let ver_slice = ver_wave_chunks[i]
                .take()
                .expect("each row block appears at most once per wave");
            let hor_slice = hor_wave_chunks[j]
                .take()
                .expect("each column block appears at most once per wave");
            jobs.push(TileJob {
                base: base_chunks[i],
                latest: latest_chunks[j],
                ver: ver_slice,
                hor: hor_slice,
            });
        }

        match accelerator {
            Some(device) => device.run_wave(jobs)?,
            None => {
                for job in jobs {
                    cpu_tile_eval(job.base, job.latest, job.ver, job.hor)?;
                }
            }
        }

        if config.debug {
            debug!(wave, ver = ?ver, hor = ?hor, "wavefront: boundary snapshot after wave");
        }
    }

    Ok(())
}
