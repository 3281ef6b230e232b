pub(crate) mod tile;

pub(crate) use tile::{apply_tile_antidiagonal, apply_tile_row_major};
