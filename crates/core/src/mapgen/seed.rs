//! Seed mixing and bounded random draws for level generation.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::Rng;

use crate::types::Cell;

/// Level seed for the `session_index`-th start of a run. Distinct sessions of the
/// same run get unrelated layouts; the same pair always gets the same layout.
pub fn derive_level_seed(run_seed: u64, session_index: u64) -> u64 {
    let mut mixed = run_seed ^ 0x9E37_79B9_7F4A_7C15;
    mixed ^= session_index.wrapping_mul(0xBF58_476D_1CE4_E5B9);
    mixed ^= mixed >> 30;
    mixed = mixed.wrapping_mul(0xBF58_476D_1CE4_E5B9);
    mixed ^= mixed >> 27;
    mixed = mixed.wrapping_mul(0x94D0_49BB_1331_11EB);
    mixed ^ (mixed >> 31)
}

/// Uniform draw from `min..=max`.
pub(super) fn random_in(rng: &mut ChaCha8Rng, min_value: i32, max_value: i32) -> i32 {
    debug_assert!(min_value <= max_value);
    let range_size = (i64::from(max_value) - i64::from(min_value) + 1) as u64;
    min_value + (rng.next_u64() % range_size) as i32
}

pub(super) fn random_cell(
    rng: &mut ChaCha8Rng,
    (min_col, max_col): (i32, i32),
    (min_row, max_row): (i32, i32),
) -> Cell {
    let col = random_in(rng, min_col, max_col);
    let row = random_in(rng, min_row, max_row);
    Cell::new(col, row)
}

#[cfg(test)]
mod tests {
    use rand_chacha::rand_core::SeedableRng;

    use super::*;

    #[test]
    fn random_in_stays_inside_requested_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(12_345);
        for _ in 0..500 {
            let value = random_in(&mut rng, 3, 5);
            assert!((3..=5).contains(&value));
        }
    }

    #[test]
    fn random_in_with_single_value_range_is_constant() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..20 {
            assert_eq!(random_in(&mut rng, 4, 4), 4);
        }
    }

    #[test]
    fn level_seed_changes_when_inputs_change() {
        let baseline = derive_level_seed(99, 2);
        assert_ne!(baseline, derive_level_seed(98, 2));
        assert_ne!(baseline, derive_level_seed(99, 3));
        assert_eq!(baseline, derive_level_seed(99, 2));
    }
}
