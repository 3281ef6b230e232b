pub mod boundary;

pub use boundary::BoundaryWeights;

/// An interned alphabet element from `base`/`latest`.
pub type Symbol = i32;

/// A boundary-vector entry. Wider than `Symbol` so that stitched regions
/// seeded with an arbitrary non-negative constant (spec §3.2 invariant 6)
/// have headroom without the caller reasoning about overflow.
pub type Weight = i64;
