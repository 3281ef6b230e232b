//! Error types for the tiled LCS engine.
//!
//! Mirrors the taxonomy of the C++ original (`Mega.h`): precondition
//! violations raised by the tile kernel / CPU evaluator, and device
//! failures raised by the accelerator backend. Neither is ever retried.

use thiserror::Error;

/// Errors raised by the tile kernel, the CPU evaluator, and the fusion
/// driver.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LcsError {
    /// `base` was empty.
    #[error("base sequence is empty")]
    EmptyBase,

    /// `latest` was empty.
    #[error("latest sequence is empty")]
    EmptyLatest,

    /// `verWeights` was empty.
    #[error("verWeights boundary is empty")]
    EmptyVerWeights,

    /// `horWeights` was empty.
    #[error("horWeights boundary is empty")]
    EmptyHorWeights,

    /// `|base| != |verWeights|`.
    #[error("base has length {base_len} but verWeights has length {ver_len}")]
    BaseWeightLengthMismatch { base_len: usize, ver_len: usize },

    /// `|latest| != |horWeights|`.
    #[error("latest has length {latest_len} but horWeights has length {hor_len}")]
    LatestWeightLengthMismatch { latest_len: usize, hor_len: usize },

    /// Tile size `S` fell outside `[1, 256]`.
    #[error("tile size {0} is out of range [1, 256]")]
    TileSizeOutOfRange(usize),

    /// A region handed to the wavefront scheduler was not an exact multiple
    /// of the tile size along the named axis.
    #[error("{axis} dimension {value} is not a multiple of tile size {tile_size}")]
    NotMultipleOfTileSize {
        axis: &'static str,
        value: usize,
        tile_size: usize,
    },

    /// The accelerator failed; see [`DeviceError`] for the cause.
    #[error("device failure: {0}")]
    Device(#[from] DeviceError),
}

/// Causes of accelerator failure (spec §7). Always fatal for the current
/// call; the driver does not retry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeviceError {
    /// Context creation failed.
    #[error("failed to create device context")]
    ContextCreationFailed,

    /// Command-queue creation failed.
    #[error("failed to create command queue")]
    QueueCreationFailed,

    /// Program build failed; `build_log` carries the compiler diagnostics.
    #[error("program build failed: {build_log}")]
    ProgramBuildFailed { build_log: String },

    /// Kernel object creation failed.
    #[error("failed to create kernel")]
    KernelCreationFailed,

    /// A device buffer could not be allocated.
    #[error("failed to allocate device buffer")]
    AllocationFailed,

    /// Enqueuing a kernel for one wave failed.
    #[error("failed to enqueue kernel for wave {wave}")]
    KernelEnqueueFailed { wave: usize },

    /// Reading the boundary buffers back from the device failed.
    #[error("failed to read back boundary buffers")]
    ReadbackFailed,
}

/// Result alias used throughout the crate.
pub type LcsResult<T> = Result<T, LcsError>;
