//! A parallel tiled-wavefront engine for the length of the longest common
//! subsequence (LCS) of two integer sequences.
//!
//! The core computation never materializes a full DP matrix: boundary
//! weight vectors flow edge-to-edge through a grid of tiles, with regular
//! interior tiles dispatched to a pluggable [`Accelerator`] a wave at a
//! time and edge remainders evaluated on the host. See [`mega_lcs_len`]
//! and [`mega_lcs_fusion`] for the entry points.

pub mod accelerator;
pub mod config;
pub mod cpu;
pub mod error;
pub mod fusion;
pub(crate) mod kernel;
pub mod primitives;
pub mod utils;
pub mod wavefront;

pub use accelerator::{Accelerator, ThreadPoolAccelerator, TileJob};
pub use config::{FusionConfig, TileSize};
pub use error::{DeviceError, LcsError, LcsResult};
pub use fusion::{mega_lcs_fusion, FusionOutcome};
pub use primitives::{BoundaryWeights, Symbol, Weight};

use std::thread::available_parallelism;

/// Computes the LCS length of `base` and `latest` using the default tile
/// size, picking a [`ThreadPoolAccelerator`] when the host exposes more
/// than one hardware thread and falling back to a pure CPU evaluation
/// otherwise — the in-process analogue of the original's GPU-device
/// discovery step.
pub fn mega_lcs_len(base: &[Symbol], latest: &[Symbol]) -> LcsResult<Weight> {
    mega_lcs_len_with_tile_size(base, latest, TileSize::default())
}

/// As [`mega_lcs_len`], but with an explicit tile size.
pub fn mega_lcs_len_with_tile_size(
    base: &[Symbol],
    latest: &[Symbol],
    tile_size: TileSize,
) -> LcsResult<Weight> {
    let config = FusionConfig::default();
    let has_parallelism = available_parallelism().map(|n| n.get() > 1).unwrap_or(false);

    let outcome = if has_parallelism {
        let accelerator = ThreadPoolAccelerator::new();
        mega_lcs_fusion(base, latest, tile_size, Some(&accelerator), &config)?
    } else {
        mega_lcs_fusion(base, latest, tile_size, None, &config)?
    };

    Ok(outcome.lcs_len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_base_is_a_precondition_violation() {
        assert_eq!(mega_lcs_len(&[], &[1]), Err(LcsError::EmptyBase));
    }

    #[test]
    fn empty_latest_is_a_precondition_violation() {
        assert_eq!(mega_lcs_len(&[1], &[]), Err(LcsError::EmptyLatest));
    }

    #[test]
    fn identical_sequences_have_lcs_length_equal_to_their_length() {
        let seq: Vec<Symbol> = (0..300).map(|i| i % 11).collect();
        assert_eq!(mega_lcs_len(&seq, &seq).unwrap(), seq.len() as Weight);
    }

    #[test]
    fn disjoint_alphabets_have_lcs_length_zero() {
        let base: Vec<Symbol> = vec![1; 50];
        let latest: Vec<Symbol> = vec![2; 50];
        assert_eq!(mega_lcs_len(&base, &latest).unwrap(), 0);
    }

    #[test]
    fn out_of_range_tile_size_is_rejected() {
        let err = TileSize::new(257);
        assert_eq!(err, Err(LcsError::TileSizeOutOfRange(257)));
    }
}
