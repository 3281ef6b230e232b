//! Property tests for the quantified invariants of the tiled LCS engine.

mod common;

use common::classical_lcs_len;
use mega_lcs::{mega_lcs_len_with_tile_size, Symbol, TileSize};
use proptest::prelude::*;

fn small_sequence(max_len: usize, alphabet: i32) -> impl Strategy<Value = Vec<Symbol>> {
    prop::collection::vec(0..alphabet, 1..=max_len)
}

proptest! {
    #[test]
    fn correctness_matches_reference_dp(
        base in small_sequence(40, 6),
        latest in small_sequence(40, 6),
    ) {
        let got = mega_lcs_len_with_tile_size(&base, &latest, TileSize::new(4).unwrap()).unwrap();
        let want = classical_lcs_len(&base, &latest);
        prop_assert_eq!(got, want);
    }

    #[test]
    fn result_is_bounded_by_the_shorter_sequence(
        base in small_sequence(40, 6),
        latest in small_sequence(40, 6),
    ) {
        let got = mega_lcs_len_with_tile_size(&base, &latest, TileSize::new(4).unwrap()).unwrap();
        prop_assert!(got <= base.len() as i64);
        prop_assert!(got <= latest.len() as i64);
    }

    #[test]
    fn result_is_symmetric(
        base in small_sequence(40, 6),
        latest in small_sequence(40, 6),
    ) {
        let forward = mega_lcs_len_with_tile_size(&base, &latest, TileSize::new(4).unwrap()).unwrap();
        let backward = mega_lcs_len_with_tile_size(&latest, &base, TileSize::new(4).unwrap()).unwrap();
        prop_assert_eq!(forward, backward);
    }

    #[test]
    fn result_is_invariant_to_tile_size(
        base in small_sequence(60, 5),
        latest in small_sequence(60, 5),
    ) {
        let baseline = mega_lcs_len_with_tile_size(&base, &latest, TileSize::new(1).unwrap()).unwrap();
        for step in [2usize, 3, 8, 16] {
            let got = mega_lcs_len_with_tile_size(&base, &latest, TileSize::new(step).unwrap()).unwrap();
            prop_assert_eq!(got, baseline);
        }
    }

    #[test]
    fn appending_a_shared_suffix_never_decreases_the_result(
        base in small_sequence(30, 5),
        latest in small_sequence(30, 5),
        suffix_symbol in 0..5,
    ) {
        let without = mega_lcs_len_with_tile_size(&base, &latest, TileSize::new(4).unwrap()).unwrap();

        let mut base_ext = base.clone();
        base_ext.push(suffix_symbol);
        let mut latest_ext = latest.clone();
        latest_ext.push(suffix_symbol);

        let with = mega_lcs_len_with_tile_size(&base_ext, &latest_ext, TileSize::new(4).unwrap()).unwrap();
        prop_assert!(with >= without);
    }
}
